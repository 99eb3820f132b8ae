// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::class::CharClass;

/// Reasons a configuration cannot produce a random string.
///
/// None of these are transient: the configuration has to change before
/// `build` can succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Restriction requires {class} characters, however no {class} char list has been set")]
    EmptyPool { class: CharClass },

    #[error(
        "The minimum length of the random string is {required} based on the restrictions selected, got {actual}"
    )]
    LengthTooSmall { required: usize, actual: usize },

    #[error("Cannot generate {length} characters with every character class disabled")]
    NoClassEnabled { length: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_names_class() {
        let error = ValidationError::EmptyPool {
            class: CharClass::Specials,
        };
        assert_eq!(
            error.to_string(),
            "Restriction requires special characters, however no special char list has been set"
        );
    }

    #[test]
    fn length_too_small_reports_both_lengths() {
        let error = ValidationError::LengthTooSmall {
            required: 4,
            actual: 3,
        };
        let message = error.to_string();
        assert!(message.contains("is 4"));
        assert!(message.contains("got 3"));
    }

    #[test]
    fn invalid_config_wraps_validation_error() {
        let error: ConfigError = ValidationError::NoClassEnabled { length: 5 }.into();
        assert!(matches!(
            error,
            ConfigError::Invalid(ValidationError::NoClassEnabled { length: 5 })
        ));
        assert!(error.to_string().starts_with("Invalid configuration: "));
    }
}

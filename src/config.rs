// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::class::CharClass;
use crate::error::ConfigError;
use crate::generator::RandomString;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ClassConfig {
    enabled: Option<bool>,
    pool: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Config {
    length: usize,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default)]
    capitals: ClassConfig,
    #[serde(default)]
    lowercase: ClassConfig,
    #[serde(default)]
    digits: ClassConfig,
    #[serde(default)]
    specials: ClassConfig,
}

impl Config {
    fn class(&self, class: CharClass) -> &ClassConfig {
        match class {
            CharClass::Capitals => &self.capitals,
            CharClass::Lowercase => &self.lowercase,
            CharClass::Digits => &self.digits,
            CharClass::Specials => &self.specials,
        }
    }

    fn into_random_string(self) -> RandomString {
        let mut random_string = RandomString::new(self.length);
        random_string
            .set_prefix(self.prefix.as_str())
            .set_suffix(self.suffix.as_str());

        for class in CharClass::ALL {
            let ClassConfig { enabled, pool } = self.class(class);
            if let Some(enabled) = enabled {
                random_string.enable(class, *enabled);
            }
            if let Some(pool) = pool {
                random_string.set_pool(class, pool.chars());
            }
        }

        random_string
    }
}

/// Parses a YAML configuration. Omitted classes keep their defaults.
pub fn from_yaml_str(yaml: &str) -> Result<RandomString, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    let random_string = config.into_random_string();
    random_string.validate()?;
    Ok(random_string)
}

pub fn read_config(config_path: impl AsRef<Path>) -> Result<RandomString, ConfigError> {
    let config_path = config_path.as_ref();
    debug!("Reading config at: {}", config_path.display());

    let config_data = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    from_yaml_str(&config_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn length_only_keeps_defaults() {
        let random_string = from_yaml_str("length: 10").unwrap();
        assert_eq!(random_string, RandomString::new(10));
    }

    #[test]
    fn class_section_overrides_given_fields() {
        let random_string = from_yaml_str(
            r#"
length: 6
prefix: "svc-"
digits:
  pool: "01"
specials:
  enabled: false
"#,
        )
        .unwrap();

        assert_eq!(random_string.prefix(), "svc-");
        assert_eq!(random_string.suffix(), "");
        assert_eq!(random_string.pool(CharClass::Digits), &['0', '1']);
        assert!(random_string.is_enabled(CharClass::Digits));
        assert!(!random_string.is_enabled(CharClass::Specials));
        assert_eq!(
            random_string.pool(CharClass::Specials).iter().collect::<String>(),
            CharClass::Specials.default_pool()
        );
    }

    #[test]
    fn missing_length() {
        let error = from_yaml_str("prefix: abc").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(error.to_string().contains("missing field `length`"));
    }

    #[test]
    fn unknown_field() {
        let error = from_yaml_str("length: 8\nposfix: x").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn loaded_configuration_is_validated() {
        let error = from_yaml_str("length: 8\ncapitals:\n  pool: \"\"").unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid(ValidationError::EmptyPool {
                class: CharClass::Capitals
            })
        ));
    }

    #[test]
    fn read_config_invalid_file() {
        let error = read_config("tests/resources/config/non_existing.yml").unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error
            .to_string()
            .starts_with("Failed to read configuration file 'tests/resources/config/non_existing.yml':"));
    }

    #[test]
    fn read_config_email() {
        let random_string = read_config("tests/resources/config/email.yml").unwrap();
        assert_eq!(random_string.length(), 8);
        assert_eq!(random_string.suffix(), "@email.com");
        assert_eq!(
            random_string.enabled_classes().collect::<Vec<_>>(),
            vec![CharClass::Lowercase]
        );
    }
}

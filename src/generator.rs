// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::class::{CharClass, ClassPool};
use crate::error::ValidationError;

/// Criteria for creating a random string: `[prefix][random core][suffix]`.
///
/// The core is `length` characters long and contains at least one character
/// of every enabled class. The configuration is never mutated by [`build`],
/// so it can be reused (and shared between threads) for any number of calls.
///
/// [`build`]: RandomString::build
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomString {
    length: usize,
    classes: [ClassPool; 4],
    prefix: String,
    suffix: String,
}

impl RandomString {
    /// All classes enabled with their default pools, no prefix or suffix.
    pub fn new(length: usize) -> Self {
        RandomString {
            length,
            classes: CharClass::ALL.map(ClassPool::with_defaults),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        self.classes[class.index()].enabled
    }

    pub fn pool(&self, class: CharClass) -> &[char] {
        &self.classes[class.index()].pool
    }

    pub fn set_length(&mut self, length: usize) -> &mut Self {
        self.length = length;
        self
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.suffix = suffix.into();
        self
    }

    /// Whether the core must contain at least one character of `class`.
    /// A disabled class contributes nothing to the core.
    pub fn enable(&mut self, class: CharClass, flag: bool) -> &mut Self {
        self.classes[class.index()].enabled = flag;
        self
    }

    /// Replaces the candidate characters of `class`.
    pub fn set_pool<I>(&mut self, class: CharClass, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        self.classes[class.index()].pool = chars.into_iter().collect();
        self
    }

    pub fn enable_capitals(&mut self, flag: bool) -> &mut Self {
        self.enable(CharClass::Capitals, flag)
    }

    pub fn enable_lowercase(&mut self, flag: bool) -> &mut Self {
        self.enable(CharClass::Lowercase, flag)
    }

    pub fn enable_digits(&mut self, flag: bool) -> &mut Self {
        self.enable(CharClass::Digits, flag)
    }

    pub fn enable_specials(&mut self, flag: bool) -> &mut Self {
        self.enable(CharClass::Specials, flag)
    }

    pub fn set_capitals_pool<I: IntoIterator<Item = char>>(&mut self, chars: I) -> &mut Self {
        self.set_pool(CharClass::Capitals, chars)
    }

    pub fn set_lowercase_pool<I: IntoIterator<Item = char>>(&mut self, chars: I) -> &mut Self {
        self.set_pool(CharClass::Lowercase, chars)
    }

    pub fn set_digits_pool<I: IntoIterator<Item = char>>(&mut self, chars: I) -> &mut Self {
        self.set_pool(CharClass::Digits, chars)
    }

    pub fn set_specials_pool<I: IntoIterator<Item = char>>(&mut self, chars: I) -> &mut Self {
        self.set_pool(CharClass::Specials, chars)
    }

    /// Enabled classes in sampling order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Minimum `length`: one guaranteed character per enabled class.
    pub fn required_length(&self) -> usize {
        self.enabled_classes().count()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(class) = self
            .enabled_classes()
            .find(|class| self.pool(*class).is_empty())
        {
            debug!("Rejecting configuration: {class} class enabled with an empty pool");
            return Err(ValidationError::EmptyPool { class });
        }

        let required = self.required_length();
        if self.length < required {
            debug!(
                "Rejecting configuration: length {} is below the required {}",
                self.length, required
            );
            return Err(ValidationError::LengthTooSmall {
                required,
                actual: self.length,
            });
        }

        if required == 0 && self.length > 0 {
            debug!("Rejecting configuration: no character class enabled");
            return Err(ValidationError::NoClassEnabled {
                length: self.length,
            });
        }

        Ok(())
    }

    /// Generates a random string using the thread-local random generator.
    pub fn build(&self) -> Result<String, ValidationError> {
        self.build_with_rng(&mut rand::rng())
    }

    /// Generates a random string drawing from `rng`.
    ///
    /// Nothing is generated if the configuration is invalid.
    pub fn build_with_rng<R>(&self, rng: &mut R) -> Result<String, ValidationError>
    where
        R: Rng + ?Sized,
    {
        self.validate()?;

        trace!(
            "Generating random string of length {} from classes {:?}",
            self.length,
            self.enabled_classes().collect::<Vec<_>>()
        );

        let required: Vec<&ClassPool> = self.classes.iter().filter(|c| c.is_required()).collect();
        let available: Vec<char> = required
            .iter()
            .flat_map(|class| class.pool.iter().copied())
            .collect();

        let mut core: Vec<char> = Vec::with_capacity(self.length);
        core.extend(required.iter().map(|class| pick(&class.pool, rng)));
        while core.len() < self.length {
            core.push(pick(&available, rng));
        }

        core.shuffle(rng);

        let mut random_string =
            String::with_capacity(self.prefix.len() + self.length + self.suffix.len());
        random_string.push_str(&self.prefix);
        random_string.extend(core);
        random_string.push_str(&self.suffix);

        Ok(random_string)
    }
}

// Callers guarantee a non-empty pool.
fn pick<R: Rng + ?Sized>(pool: &[char], rng: &mut R) -> char {
    pool[rng.random_range(0..pool.len())]
}

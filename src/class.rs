// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;

pub const DEFAULT_CAPITALS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DEFAULT_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DEFAULT_DIGITS: &str = "0123456789";
pub const DEFAULT_SPECIALS: &str = "^$*.[]{}()?-!@#%&/,><:;|_~=+";

/// A class of characters the generated string may be required to contain.
///
/// The declaration order is the order in which classes are validated and
/// sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Capitals,
    Lowercase,
    Digits,
    Specials,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Capitals,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Specials,
    ];

    pub fn default_pool(self) -> &'static str {
        match self {
            CharClass::Capitals => DEFAULT_CAPITALS,
            CharClass::Lowercase => DEFAULT_LOWERCASE,
            CharClass::Digits => DEFAULT_DIGITS,
            CharClass::Specials => DEFAULT_SPECIALS,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            CharClass::Capitals => 0,
            CharClass::Lowercase => 1,
            CharClass::Digits => 2,
            CharClass::Specials => 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Capitals => "capital",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digit",
            CharClass::Specials => "special",
        };
        f.write_str(name)
    }
}

/// Enable flag and candidate characters of a single class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ClassPool {
    pub(crate) enabled: bool,
    pub(crate) pool: Vec<char>,
}

impl ClassPool {
    pub(crate) fn with_defaults(class: CharClass) -> Self {
        ClassPool {
            enabled: true,
            pool: class.default_pool().chars().collect(),
        }
    }

    /// Enabled and something to draw from.
    pub(crate) fn is_required(&self) -> bool {
        self.enabled && !self.pool.is_empty()
    }
}

// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! randstring - Random strings with guaranteed character classes.
//!
//! Every generated string contains at least one character of each enabled
//! class (capitals, lowercase, digits, specials) and can be wrapped in a fixed
//! prefix and suffix.
//!
//! ```
//! use randstring::RandomString;
//!
//! let mut rs = RandomString::new(8);
//! rs.enable_capitals(false)
//!     .enable_specials(false)
//!     .enable_digits(false)
//!     .set_suffix("@email.com");
//!
//! for _ in 0..6 {
//!     let address = rs.build().unwrap();
//!     assert!(address.ends_with("@email.com"));
//! }
//! ```

mod class;
pub mod config;
mod error;
mod generator;

pub use class::{CharClass, DEFAULT_CAPITALS, DEFAULT_DIGITS, DEFAULT_LOWERCASE, DEFAULT_SPECIALS};
pub use error::{ConfigError, ValidationError};
pub use generator::RandomString;

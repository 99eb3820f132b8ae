// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use randstring::{CharClass, RandomString};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Configuration with every class but `class` disabled.
#[allow(dead_code)]
pub(crate) fn only(class: CharClass, chars: &str) -> RandomString {
    let mut random_string = RandomString::new(8);
    for other in CharClass::ALL {
        random_string.enable(other, other == class);
    }
    random_string.set_pool(class, chars.chars());
    random_string
}

pub(crate) fn contains_any(value: &str, pool: &[char]) -> bool {
    value.chars().any(|c| pool.contains(&c))
}

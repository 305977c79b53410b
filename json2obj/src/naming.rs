//! Identifier conventions shared by every target language.

use heck::{ToLowerCamelCase, ToUpperCamelCase};
use std::collections::HashSet;

/// Prefix for identifiers that would otherwise be empty or start with a digit.
const IDENT_PREFIX: &str = "Field";

/// Convert a JSON key to an `UpperCamelCase` type or accessor name.
/// Splits on any non-alphanumeric character and on case boundaries.
/// Examples: `"addr"` -> `"Addr"`, `"home_address"` -> `"HomeAddress"`, `"2fa"` -> `"Field2fa"`
#[must_use]
pub fn capitalize(key: &str) -> String {
    guard_leading_digit(key.to_upper_camel_case(), IDENT_PREFIX)
}

/// Convert a JSON key to a `lowerCamelCase` member name.
/// Examples: `"first_name"` -> `"firstName"`, `"ID"` -> `"id"`, `"2fa"` -> `"field2fa"`
#[must_use]
pub fn lower_camel(key: &str) -> String {
    guard_leading_digit(key.to_lower_camel_case(), "field")
}

fn guard_leading_digit(ident: String, prefix: &str) -> String {
    match ident.chars().next() {
        None => prefix.to_string(),
        Some(first) if first.is_ascii_digit() => format!("{prefix}{ident}"),
        Some(_) => ident,
    }
}

/// Hands out names that are unique within one scope.
///
/// The first claim of a name gets it unchanged; later claims get the smallest
/// free numeric suffix starting at 2 (`Addr`, `Addr2`, `Addr3`, ...).
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    /// Mark `name` as taken without handing it out.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    /// Claim `base`, or the first free suffixed variant of it.
    pub fn claim(&mut self, base: &str) -> String {
        if self.taken.insert(base.to_string()) {
            return base.to_string();
        }
        let mut suffix: usize = 2;
        loop {
            let candidate: String = format!("{base}{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

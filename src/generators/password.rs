// src/generators/password.rs
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::RequiredChars;

// Character classes are pinned here rather than taken from any platform
// character table, so generated passwords behave the same everywhere.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be selected")]
    NoClassSelected,

    #[error("The number of required characters ({required}) exceeds the desired length ({length})")]
    RequiredExceedsLength { required: usize, length: usize },
}

fn pick(set: &[u8], rng: &mut impl rand::Rng) -> char {
    set[rng.gen_range(0..set.len())] as char
}

/// Generate a password with the simple policy.
///
/// The result always contains at least one uppercase letter, one digit and
/// one special character; the rest is drawn uniformly from all four classes
/// and the whole sequence is shuffled. Callers enforce `length >= 4`.
pub fn generate_simple(length: usize) -> String {
    let mut rng = rand::thread_rng();

    let mut password = vec![
        pick(UPPERCASE, &mut rng),
        pick(DIGITS, &mut rng),
        pick(SPECIAL, &mut rng),
    ];

    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();
    while password.len() < length {
        password.push(pick(&all, &mut rng));
    }

    password.shuffle(&mut rng);
    password.into_iter().collect()
}

/// Generate a password from a caller-selected subset of character classes.
///
/// Exactly one character from each enabled class is guaranteed present; the
/// remaining positions are drawn uniformly from the union of the enabled
/// classes. Rejects requests where no class is enabled, or where the
/// per-class guarantees alone would not fit into `length`.
pub fn generate_selective(
    length: usize,
    include_uppercase: bool,
    include_lowercase: bool,
    include_digits: bool,
    include_special: bool,
) -> Result<String, GeneratorError> {
    let mut enabled: Vec<&[u8]> = Vec::new();
    if include_uppercase {
        enabled.push(UPPERCASE);
    }
    if include_lowercase {
        enabled.push(LOWERCASE);
    }
    if include_digits {
        enabled.push(DIGITS);
    }
    if include_special {
        enabled.push(SPECIAL);
    }

    if enabled.is_empty() {
        return Err(GeneratorError::NoClassSelected);
    }
    if enabled.len() > length {
        return Err(GeneratorError::RequiredExceedsLength {
            required: enabled.len(),
            length,
        });
    }

    let mut rng = rand::thread_rng();

    let mut password: Vec<char> = enabled.iter().map(|set| pick(set, &mut rng)).collect();

    let union: Vec<u8> = enabled.concat();
    while password.len() < length {
        password.push(pick(&union, &mut rng));
    }

    password.shuffle(&mut rng);
    Ok(password.into_iter().collect())
}

/// Generate a password that contains a set of literal required characters.
///
/// Every character listed in `required` appears in the output by value and
/// with multiplicity; the remaining positions are drawn uniformly from
/// letters, digits and special characters. Empty per-class strings are
/// treated as "no requirement". Required characters are taken literally and
/// are not checked against their class.
pub fn generate_required(length: usize, required: &RequiredChars) -> Result<String, GeneratorError> {
    let total = required.total();
    if total > length {
        return Err(GeneratorError::RequiredExceedsLength {
            required: total,
            length,
        });
    }

    let mut password: Vec<char> = required.chars().collect();

    let mut rng = rand::thread_rng();

    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();
    while password.len() < length {
        password.push(pick(&all, &mut rng));
    }

    password.shuffle(&mut rng);
    Ok(password.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_special(c: char) -> bool {
        SPECIAL.contains(&(c as u8))
    }

    #[test]
    fn simple_meets_class_guarantees() {
        for length in [4, 8, 16, 64] {
            let password = generate_simple(length);
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(is_special));
        }
    }

    #[test]
    fn selective_rejects_empty_selection() {
        let err = generate_selective(8, false, false, false, false).unwrap_err();
        assert_eq!(err, GeneratorError::NoClassSelected);
    }

    #[test]
    fn selective_only_uses_enabled_classes() {
        // Repeated runs so a lucky draw can't hide a class leak.
        for _ in 0..50 {
            let password = generate_selective(8, true, false, true, false).unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(!password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(!password.chars().any(is_special));
        }
    }

    #[test]
    fn selective_rejects_length_below_enabled_count() {
        let err = generate_selective(3, true, true, true, true).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::RequiredExceedsLength {
                required: 4,
                length: 3
            }
        );
    }

    #[test]
    fn required_contains_all_literals() {
        let required = RequiredChars {
            uppercase: "AB".to_string(),
            digits: "5".to_string(),
            ..Default::default()
        };

        for _ in 0..20 {
            let password = generate_required(10, &required).unwrap();
            assert_eq!(password.len(), 10);
            assert!(password.contains('A'));
            assert!(password.contains('B'));
            assert!(password.contains('5'));
        }
    }

    #[test]
    fn required_keeps_multiplicity() {
        let required = RequiredChars {
            lowercase: "aaa".to_string(),
            ..Default::default()
        };

        let password = generate_required(6, &required).unwrap();
        assert!(password.chars().filter(|&c| c == 'a').count() >= 3);
    }

    #[test]
    fn required_rejects_overflowing_requirements() {
        let required = RequiredChars {
            uppercase: "ABCDEF".to_string(),
            lowercase: "ghijkl".to_string(),
            ..Default::default()
        };

        let err = generate_required(10, &required).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::RequiredExceedsLength {
                required: 12,
                length: 10
            }
        );
    }

    #[test]
    fn required_with_empty_strings_acts_unconstrained() {
        let password = generate_required(12, &RequiredChars::default()).unwrap();
        assert_eq!(password.len(), 12);
    }

    #[test]
    fn repeated_calls_each_satisfy_constraints() {
        // Outputs may differ between calls; the guarantees must not.
        for _ in 0..10 {
            let password = generate_simple(12);
            assert_eq!(password.len(), 12);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(is_special));
        }
    }
}

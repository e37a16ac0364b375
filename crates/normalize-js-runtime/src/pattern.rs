//! Regular-expression literal translation.
//!
//! Flags map onto `regex` builder options:
//!
//! | flag | effect                                   |
//! |------|------------------------------------------|
//! | `g`  | dropped; callers loop over matches       |
//! | `i`  | case-insensitive                         |
//! | `m`  | `^`/`$` match at line boundaries         |
//! | `s`  | `.` matches `\n`                         |
//!
//! `y` (sticky), `u` (full unicode), and anything else is rejected outright.

use crate::config::PatternConfig;
use crate::error::RuntimeError;
use regex::{Regex, RegexBuilder};

/// A compiled regular-expression literal.
pub type CompiledPattern = Regex;

/// Compile `/pattern/flags` with default limits.
pub fn compile_pattern(pattern: &str, flags: &str) -> Result<CompiledPattern, RuntimeError> {
    compile_pattern_with(pattern, flags, &PatternConfig::default())
}

/// Compile `/pattern/flags` with the given limits.
pub fn compile_pattern_with(
    pattern: &str,
    flags: &str,
    config: &PatternConfig,
) -> Result<CompiledPattern, RuntimeError> {
    let mut builder = RegexBuilder::new(pattern);
    builder
        .size_limit(config.size_limit)
        .nest_limit(config.nest_limit);

    for flag in flags.chars() {
        match flag {
            'g' => {}
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            other => {
                tracing::debug!(pattern, flags, flag = %other, "rejected regex flag");
                return Err(RuntimeError::UnsupportedFlag { flag: other });
            }
        }
    }

    let regex = builder.build()?;
    tracing::debug!(pattern, flags, "compiled regex literal");
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let re = compile_pattern("hello", "").unwrap();
        assert!(re.is_match("hello world"));
        assert!(!re.is_match("goodbye"));
    }

    #[test]
    fn test_case_insensitive() {
        let re = compile_pattern("hello", "i").unwrap();
        assert!(re.is_match("HELLO"));
        assert!(re.is_match("HeLLo"));
    }

    #[test]
    fn test_multiline() {
        let re = compile_pattern("^second", "m").unwrap();
        assert!(re.is_match("first\nsecond"));
        assert!(!compile_pattern("^second", "").unwrap().is_match("first\nsecond"));
    }

    #[test]
    fn test_dot_matches_newline() {
        assert!(compile_pattern("a.b", "s").unwrap().is_match("a\nb"));
        assert!(!compile_pattern("a.b", "").unwrap().is_match("a\nb"));
    }

    #[test]
    fn test_global_flag_is_dropped() {
        let re = compile_pattern("t", "g").unwrap();
        assert_eq!(re.find_iter("test").count(), 2);
        let re = compile_pattern("hello", "gi").unwrap();
        assert!(re.is_match("HELLO"));
    }

    #[test]
    fn test_unsupported_flags() {
        for flags in ["y", "u", "gy", "iu", "d", "x"] {
            let err = compile_pattern("a", flags).unwrap_err();
            assert!(
                matches!(err, RuntimeError::UnsupportedFlag { .. }),
                "{flags:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sticky_error_names_flag() {
        let err = compile_pattern("a", "y").unwrap_err();
        assert_eq!(err.to_string(), "regex flag 'y' is not supported");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = compile_pattern("(unclosed", "").unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidPattern(_)));
    }

    #[test]
    fn test_nest_limit_from_config() {
        let config = PatternConfig {
            nest_limit: 2,
            ..PatternConfig::default()
        };
        assert!(compile_pattern_with("((((a))))", "", &config).is_err());
        assert!(compile_pattern_with("a", "", &config).is_ok());
    }
}

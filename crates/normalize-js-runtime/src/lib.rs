//! Runtime semantics for code translated from JavaScript.
//!
//! Surface-level translation maps syntax; this crate supplies the semantics
//! that syntax cannot carry. Translated code replaces every operator whose
//! meaning differs between the languages with a call here:
//!
//! | Source construct                  | Entry point                              |
//! |-----------------------------------|------------------------------------------|
//! | `if`, `&&`, `\|\|` tests          | [`is_truthy`]                            |
//! | `+ - * / %` (and `+=` etc.)       | [`add`] [`sub`] [`mul`] [`div`] [`rem`]  |
//! | `===`, `!==`                      | [`strict_equal`], [`strict_not_equal`]   |
//! | `==`, `!=`                        | [`loose_equal`], [`loose_not_equal`]     |
//! | `typeof`                          | [`type_of`]                              |
//! | `delete`                          | [`delete_property`]                      |
//! | `for…in`                          | [`enumerate_keys`]                       |
//! | `/re/flags`                       | [`compile_pattern`]                      |
//! | unary `+`                         | [`to_number`]                            |
//! | `Math.round`                      | [`round`]                                |
//! | `String.charCodeAt`, `.substring` | [`char_code_at`], [`substring`]          |
//! | `Array.pop`                       | [`array_pop`]                            |
//! | `Date.now`                        | [`now`]                                  |
//! | `console.log`                     | [`write_line`], [`Console`]              |
//! | `throw` / `catch`                 | [`ThrownValue`], [`throw`]               |
//!
//! # Example
//!
//! ```
//! use normalize_js_runtime::{Value, add, is_truthy, strict_equal};
//!
//! let sum = add(&Value::from("5"), &Value::from(2));
//! assert_eq!(sum.as_str(), Some("52"));
//! assert!(is_truthy(&Value::array([])));
//! assert!(!strict_equal(&Value::object(), &Value::object()));
//! ```
//!
//! # Signed zero
//!
//! `-0` and `+0` are not distinguished anywhere: they compare equal, both
//! print as `0`, and a zero divisor's sign is ignored.
//!
//! # Lone surrogates
//!
//! String positions count UTF-16 code units, but strings are stored as
//! UTF-8. A [`substring`] or string index that splits a surrogate pair
//! yields U+FFFD in place of the lone half, so its [`char_code_at`] is
//! `65533` rather than the surrogate's own code.

pub mod arith;
pub mod coerce;
pub mod config;
pub mod enumerate;
pub mod equality;
pub mod error;
pub mod host;
pub mod json;
pub mod pattern;
pub mod reflect;
pub mod value;

// Re-exports: value model
pub use value::{ArrayRef, Function, MAX_ARRAY_INDEX, ObjectRef, UNDEFINED, Undefined, Value};

// Re-exports: operators
pub use arith::{add, div, mul, rem, sub};
pub use coerce::{is_truthy, number_to_string, to_display_string, to_number};
pub use enumerate::{ForInKeys, enumerate_keys};
pub use equality::{loose_equal, loose_not_equal, strict_equal, strict_not_equal};
pub use reflect::{delete_property, type_of};

// Re-exports: patterns and host helpers
pub use host::{Console, array_pop, char_code_at, format_line, now, round, substring, write_line};
pub use pattern::{CompiledPattern, compile_pattern, compile_pattern_with};

// Re-exports: errors and configuration
pub use config::{ConsoleConfig, OutputStream, PatternConfig, RuntimeConfig};
pub use error::{RuntimeError, ThrownValue, throw};

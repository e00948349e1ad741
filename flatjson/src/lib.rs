// SPDX-License-Identifier: Apache-2.0

//! A single-pass JSON decoder that produces dynamic [`Value`] trees.
//!
//! The decoder walks the input once, left to right, and tracks nesting on
//! an explicit frame stack instead of the native call stack, so arbitrarily
//! deep documents are bounded only by heap memory.
//!
//! ```
//! use flatjson::{decode, Value};
//!
//! let value = decode(r#"{"enabled": true, "retries": 3}"#).unwrap();
//! assert_eq!(value.as_object().unwrap()["retries"].as_i64(), Some(3));
//! ```

mod chars;

mod decoder;
pub use decoder::{
    decode, decode_as_array, decode_as_bool, decode_as_number, decode_as_object, decode_as_string,
};

mod number;
pub use number::Number;

mod parse_error;
pub use parse_error::{Breadcrumb, ErrorKind, PathSegment, SyntaxError};

mod value;
pub use value::{Value, ValueKind};

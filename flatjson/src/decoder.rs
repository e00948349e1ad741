// SPDX-License-Identifier: Apache-2.0

//! The decoding state machine.
//!
//! One forward pass over the input: each byte is classified under the
//! current [`Mode`], containers are materialized the moment their opening
//! delimiter is seen, and nesting is tracked on an explicit stack of
//! [`ParseFrame`]s so the native call stack stays flat no matter how deep
//! the document goes.

use std::collections::HashMap;

use log::trace;

use crate::chars;
use crate::number::{self, Number};
use crate::parse_error::{Breadcrumb, ErrorKind, PathSegment, SyntaxError};
use crate::value::{Value, ValueKind};

/// Decodes a JSON text into a [`Value`] tree.
///
/// The input must hold exactly one JSON value, optionally surrounded by
/// whitespace. Anything else fails with a [`SyntaxError`] carrying the
/// offending character, its byte index, and the path of enclosing slots.
///
/// # Example
/// ```
/// use flatjson::{decode, Value};
///
/// let value = decode(" 42 ").unwrap();
/// assert_eq!(value, Value::from(42));
/// ```
pub fn decode(text: &str) -> Result<Value, SyntaxError> {
    Decoder::new(text).run()
}

/// Decodes a JSON text whose root must be an object.
///
/// # Example
/// ```
/// let map = flatjson::decode_as_object(r#"{"a": 1}"#).unwrap();
/// assert_eq!(map["a"].as_i64(), Some(1));
/// ```
pub fn decode_as_object(text: &str) -> Result<HashMap<String, Value>, SyntaxError> {
    match decode(text)? {
        Value::Object(map) => Ok(map),
        other => Err(SyntaxError::type_mismatch(ValueKind::Object, other.kind())),
    }
}

/// Decodes a JSON text whose root must be an array.
pub fn decode_as_array(text: &str) -> Result<Vec<Value>, SyntaxError> {
    match decode(text)? {
        Value::Array(items) => Ok(items),
        other => Err(SyntaxError::type_mismatch(ValueKind::Array, other.kind())),
    }
}

/// Decodes a JSON text whose root must be a bare string literal.
pub fn decode_as_string(text: &str) -> Result<String, SyntaxError> {
    match decode(text)? {
        Value::String(s) => Ok(s),
        other => Err(SyntaxError::type_mismatch(ValueKind::String, other.kind())),
    }
}

/// Decodes a JSON text whose root must be a number.
pub fn decode_as_number(text: &str) -> Result<Number, SyntaxError> {
    match decode(text)? {
        Value::Number(num) => Ok(num),
        other => Err(SyntaxError::type_mismatch(ValueKind::Number, other.kind())),
    }
}

/// Decodes a JSON text whose root must be a boolean constant.
pub fn decode_as_bool(text: &str) -> Result<bool, SyntaxError> {
    match decode(text)? {
        Value::Bool(val) => Ok(val),
        other => Err(SyntaxError::type_mismatch(ValueKind::Bool, other.kind())),
    }
}

/// The scanner's current lexical expectation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    ObjectBody,
    ArrayBody,
    PropertyName,
    ValueDispatch,
    StringLiteral,
    NumberLiteral,
    ConstantLiteral,
}

/// A partially built container, matched exhaustively at each attach site.
#[derive(Debug)]
enum Container {
    Object(HashMap<String, Value>),
    Array(Vec<Value>),
}

impl Container {
    fn kind(&self) -> ValueKind {
        match self {
            Container::Object(_) => ValueKind::Object,
            Container::Array(_) => ValueKind::Array,
        }
    }

    fn body_mode(&self) -> Mode {
        match self {
            Container::Object(_) => Mode::ObjectBody,
            Container::Array(_) => Mode::ArrayBody,
        }
    }

    fn len(&self) -> usize {
        match self {
            Container::Object(map) => map.len(),
            Container::Array(items) => items.len(),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Container::Object(map) => Value::Object(map),
            Container::Array(items) => Value::Array(items),
        }
    }
}

/// Saved context for one enclosing container, resumed when the nested
/// value closes.
#[derive(Debug)]
struct ParseFrame {
    /// The slot in `container` the nested value will attach to; `None`
    /// for array elements.
    name: Option<String>,
    container: Container,
}

struct Decoder<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Start of the span being scanned in string/number/constant modes.
    field_start: usize,
    mode: Mode,
    frames: Vec<ParseFrame>,
    /// The container currently being filled; `None` while the root is a
    /// bare scalar.
    current: Option<Container>,
    /// Property name waiting for its value inside an object.
    pending_name: Option<String>,
    expecting_comma: bool,
    expecting_colon: bool,
}

impl<'a> Decoder<'a> {
    fn new(text: &'a str) -> Self {
        Decoder {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            field_start: 0,
            mode: Mode::ValueDispatch,
            frames: Vec::new(),
            current: None,
            pending_name: None,
            expecting_comma: false,
            expecting_colon: false,
        }
    }

    fn run(mut self) -> Result<Value, SyntaxError> {
        self.skip_whitespace();
        if self.pos >= self.bytes.len() {
            return Err(self.error(
                ErrorKind::EmptyInput,
                "provided string did not contain a value",
            ));
        }
        trace!("decoding {} bytes", self.bytes.len());
        self.dispatch_root()?;

        while self.pos < self.bytes.len() {
            let root = match self.mode {
                Mode::PropertyName => {
                    self.scan_property_name()?;
                    None
                }
                Mode::StringLiteral => self.scan_string_value()?,
                Mode::NumberLiteral => self.scan_number()?,
                Mode::ConstantLiteral => self.scan_constant()?,
                Mode::ValueDispatch => {
                    self.step_value_dispatch()?;
                    None
                }
                Mode::ObjectBody => self.step_object_body()?,
                Mode::ArrayBody => self.step_array_body()?,
            };
            if let Some(root) = root {
                return self.finish(root);
            }
        }

        Err(self.error(
            ErrorKind::UnterminatedInput,
            "root value wasn't terminated correctly (missing ']' or '}'?)",
        ))
    }

    /// Classifies the first significant character of the input.
    fn dispatch_root(&mut self) -> Result<(), SyntaxError> {
        match self.bytes[self.pos] {
            b'{' => self.open_container(Container::Object(HashMap::new())),
            b'[' => self.open_container(Container::Array(Vec::new())),
            b'"' => {
                self.mode = Mode::StringLiteral;
                self.field_start = self.pos + 1;
                self.pos += 1;
            }
            c if chars::is_letter(c) => {
                self.mode = Mode::ConstantLiteral;
                self.field_start = self.pos;
            }
            c if chars::is_number_start(c) => {
                self.mode = Mode::NumberLiteral;
                self.field_start = self.pos;
            }
            _ => {
                return Err(self.error(
                    ErrorKind::UnexpectedRootCharacter,
                    "unexpected character instead of root value",
                ))
            }
        }
        Ok(())
    }

    /// Installs a fresh container as current, saving the enclosing one
    /// (when there is one) on the frame stack.
    fn open_container(&mut self, fresh: Container) {
        if let Some(parent) = self.current.take() {
            trace!(
                "push {} frame at depth {}",
                parent.kind(),
                self.frames.len()
            );
            self.frames.push(ParseFrame {
                name: self.pending_name.take(),
                container: parent,
            });
        }
        self.mode = fresh.body_mode();
        self.current = Some(fresh);
        self.expecting_comma = false;
        self.pos += 1;
    }

    /// Pops the enclosing frame and attaches the finished container to it.
    /// With no frame left, the finished container is the root result.
    fn close_container(&mut self) -> Result<Option<Value>, SyntaxError> {
        self.pos += 1;
        let Some(finished) = self.current.take() else {
            return Ok(None);
        };
        trace!(
            "close {} with {} entries at depth {}",
            finished.kind(),
            finished.len(),
            self.frames.len()
        );
        match self.frames.pop() {
            Some(frame) => {
                self.pending_name = frame.name;
                self.current = Some(frame.container);
                self.attach(finished.into_value());
                Ok(None)
            }
            None => Ok(Some(finished.into_value())),
        }
    }

    /// Attaches a completed value to the current container, or hands it
    /// back as the root result when no container is open.
    fn attach(&mut self, value: Value) -> Option<Value> {
        match self.current.as_mut() {
            None => Some(value),
            Some(Container::Object(map)) => {
                // the property-name scan always runs before a value lands
                // in an object
                let name = self.pending_name.take().unwrap_or_default();
                map.insert(name, value);
                self.mode = Mode::ObjectBody;
                self.expecting_comma = true;
                None
            }
            Some(Container::Array(items)) => {
                items.push(value);
                self.mode = Mode::ArrayBody;
                self.expecting_comma = true;
                None
            }
        }
    }

    /// Finds the closing quote of the span starting at `field_start`: the
    /// next `"` not preceded by an odd run of backslashes.
    fn scan_string_end(&self) -> Result<usize, SyntaxError> {
        let mut i = self.field_start;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2, // the escaped character is opaque content
                b'"' => return Ok(i),
                _ => i += 1,
            }
        }
        Err(self.error(ErrorKind::UnterminatedInput, "string literal was never closed"))
    }

    fn scan_property_name(&mut self) -> Result<(), SyntaxError> {
        let close = self.scan_string_end()?;
        self.pending_name = Some(self.text[self.field_start..close].to_string());
        self.pos = close + 1;
        self.expecting_colon = true;
        self.mode = Mode::ValueDispatch;
        Ok(())
    }

    fn scan_string_value(&mut self) -> Result<Option<Value>, SyntaxError> {
        let close = self.scan_string_end()?;
        let value = Value::String(self.text[self.field_start..close].to_string());
        self.pos = close + 1;
        Ok(self.attach(value))
    }

    fn scan_number(&mut self) -> Result<Option<Value>, SyntaxError> {
        let mut i = self.field_start;
        let mut float_like = false;
        while i < self.bytes.len() && chars::is_number_part(self.bytes[i]) {
            if matches!(self.bytes[i], b'.' | b'e' | b'E') {
                float_like = true;
            }
            i += 1;
        }
        let raw = &self.text[self.field_start..i];
        let Some(num) = number::parse_literal(raw, float_like) else {
            return Err(self.error(
                ErrorKind::MalformedNumber,
                format!("\"{raw}\" expected to be a number, but wasn't"),
            ));
        };
        self.pos = i;
        Ok(self.attach(Value::Number(num)))
    }

    fn scan_constant(&mut self) -> Result<Option<Value>, SyntaxError> {
        let mut i = self.field_start;
        while i < self.bytes.len() && chars::is_letter(self.bytes[i]) {
            i += 1;
        }
        let raw = &self.text[self.field_start..i];
        let value = match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" => Value::Null,
            _ => {
                return Err(self.error(
                    ErrorKind::InvalidConstant,
                    format!("\"{raw}\" is not a valid constant. Missing quotes?"),
                ))
            }
        };
        self.pos = i;
        Ok(self.attach(value))
    }

    /// Consumes the colon owed after a property name, then classifies the
    /// value that follows it.
    fn step_value_dispatch(&mut self) -> Result<(), SyntaxError> {
        self.skip_whitespace();
        if self.pos >= self.bytes.len() {
            return Ok(());
        }
        let c = self.bytes[self.pos];
        if c == b':' {
            if !self.expecting_colon {
                return Err(self.error(
                    ErrorKind::DuplicateColon,
                    "property name was followed by more than one colon",
                ));
            }
            self.expecting_colon = false;
            self.pos += 1;
            return Ok(());
        }
        if self.expecting_colon {
            return Err(self.error(
                ErrorKind::MissingColon,
                "property name wasn't followed by a colon",
            ));
        }
        match c {
            b'"' => {
                self.mode = Mode::StringLiteral;
                self.field_start = self.pos + 1;
                self.pos += 1;
            }
            b'{' => self.open_container(Container::Object(HashMap::new())),
            b'[' => self.open_container(Container::Array(Vec::new())),
            c if chars::is_letter(c) => {
                self.mode = Mode::ConstantLiteral;
                self.field_start = self.pos;
            }
            c if chars::is_number_start(c) => {
                self.mode = Mode::NumberLiteral;
                self.field_start = self.pos;
            }
            _ => {
                return Err(self.error(
                    ErrorKind::UnexpectedObjectCharacter,
                    "unexpected character instead of object value",
                ))
            }
        }
        Ok(())
    }

    fn step_object_body(&mut self) -> Result<Option<Value>, SyntaxError> {
        self.skip_whitespace();
        if self.pos >= self.bytes.len() {
            return Ok(None);
        }
        match self.bytes[self.pos] {
            b',' => {
                if !self.expecting_comma {
                    return Err(
                        self.error(ErrorKind::DuplicateComma, "followed by too many commas")
                    );
                }
                self.expecting_comma = false;
                self.pos += 1;
            }
            b'"' => {
                if self.expecting_comma {
                    return Err(self.error(
                        ErrorKind::MissingComma,
                        "property wasn't preceded by a comma",
                    ));
                }
                self.mode = Mode::PropertyName;
                self.field_start = self.pos + 1;
                self.pos += 1;
            }
            b'}' => {
                if !self.expecting_comma && !self.current_is_empty() {
                    return Err(self.error(
                        ErrorKind::DuplicateComma,
                        "object closed right after a comma",
                    ));
                }
                return self.close_container();
            }
            _ => {
                return Err(self.error(
                    ErrorKind::UnexpectedObjectCharacter,
                    "unexpected character where a property name is expected. Missing quotes?",
                ))
            }
        }
        Ok(None)
    }

    fn step_array_body(&mut self) -> Result<Option<Value>, SyntaxError> {
        self.skip_whitespace();
        if self.pos >= self.bytes.len() {
            return Ok(None);
        }
        let c = self.bytes[self.pos];
        if self.expecting_comma && !matches!(c, b',' | b']' | b'}') {
            return Err(self.error(
                ErrorKind::MissingComma,
                "array element wasn't preceded by a comma",
            ));
        }
        match c {
            b',' => {
                if !self.expecting_comma {
                    return Err(
                        self.error(ErrorKind::DuplicateComma, "preceded by too many commas")
                    );
                }
                self.expecting_comma = false;
                self.pos += 1;
            }
            b'"' => {
                self.mode = Mode::StringLiteral;
                self.field_start = self.pos + 1;
                self.pos += 1;
            }
            b'{' => self.open_container(Container::Object(HashMap::new())),
            b'[' => self.open_container(Container::Array(Vec::new())),
            b']' => {
                if !self.expecting_comma && !self.current_is_empty() {
                    return Err(self.error(
                        ErrorKind::DuplicateComma,
                        "array closed right after a comma",
                    ));
                }
                return self.close_container();
            }
            c if chars::is_letter(c) => {
                self.mode = Mode::ConstantLiteral;
                self.field_start = self.pos;
            }
            c if chars::is_number_start(c) => {
                self.mode = Mode::NumberLiteral;
                self.field_start = self.pos;
            }
            _ => {
                return Err(self.error(
                    ErrorKind::UnexpectedArrayCharacter,
                    "unexpected character instead of array value",
                ))
            }
        }
        Ok(None)
    }

    /// Everything after the root value must be whitespace.
    fn finish(mut self, root: Value) -> Result<Value, SyntaxError> {
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            return Err(self.error(
                ErrorKind::TrailingContent,
                "unexpected content after the root value",
            ));
        }
        Ok(root)
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && chars::is_whitespace(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    fn current_is_empty(&self) -> bool {
        self.current.as_ref().map_or(true, |c| c.len() == 0)
    }

    fn error(&self, kind: ErrorKind, message: impl Into<String>) -> SyntaxError {
        let character = self
            .text
            .get(self.pos..)
            .and_then(|rest| rest.chars().next());
        SyntaxError::new(kind, message.into(), character, self.pos, self.breadcrumb())
    }

    /// Path of enclosing slots from the root to the current position.
    fn breadcrumb(&self) -> Breadcrumb {
        let mut path = Breadcrumb::new();
        for frame in &self.frames {
            match &frame.name {
                Some(key) => path.push(PathSegment::Key(key.clone())),
                None => path.push(PathSegment::Index(frame.container.len())),
            }
        }
        match &self.current {
            Some(Container::Object(_)) => {
                if let Some(key) = &self.pending_name {
                    path.push(PathSegment::Key(key.clone()));
                }
            }
            Some(Container::Array(items)) => path.push(PathSegment::Index(items.len())),
            None => {}
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn scalar_roots() {
        assert_eq!(decode(" 42 "), Ok(Value::from(42)));
        assert_eq!(decode("-3.642"), Ok(Value::from(-3.642)));
        assert_eq!(decode("true"), Ok(Value::Bool(true)));
        assert_eq!(decode("false"), Ok(Value::Bool(false)));
        assert_eq!(decode("null"), Ok(Value::Null));
        assert_eq!(decode("\"hi\""), Ok(Value::from("hi")));
    }

    #[test]
    fn integer_and_float_kinds_are_distinct() {
        assert_eq!(decode("2"), Ok(Value::Number(Number::Int(2))));
        assert_eq!(decode("2.0"), Ok(Value::Number(Number::Float(2.0))));
        assert_eq!(decode("2e1"), Ok(Value::Number(Number::Float(20.0))));
        assert_ne!(decode("2"), decode("2.0"));
    }

    #[test]
    fn empty_containers() {
        assert_eq!(decode("{}"), Ok(Value::Object(HashMap::new())));
        assert_eq!(decode("[]"), Ok(Value::Array(vec![])));
        assert_eq!(decode(" [ ] "), Ok(Value::Array(vec![])));
    }

    #[test]
    fn nested_mixed_document() {
        let value = decode(r#"{"a":true,"b":[1,2.5,"x"],"c":null}"#).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["a"], Value::Bool(true));
        assert_eq!(
            map["b"],
            Value::Array(vec![Value::from(1), Value::from(2.5), Value::from("x")])
        );
        assert_eq!(map["c"], Value::Null);
    }

    #[test]
    fn duplicate_keys_are_last_write_wins() {
        let value = decode(r#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(value.as_object().unwrap()["a"], Value::from(2));
    }

    #[test]
    fn string_escapes_are_kept_verbatim() {
        let value = decode(r#""a\nb\"c""#).unwrap();
        assert_eq!(value.as_str(), Some(r#"a\nb\"c"#));
    }

    #[test]
    fn escaped_backslash_before_closing_quote() {
        let value = decode(r#""trailing\\""#).unwrap();
        assert_eq!(value.as_str(), Some(r#"trailing\\"#));
    }

    #[test]
    fn whitespace_tolerated_between_tokens() {
        let value = decode(" { \"a\" :\t1 ,\n\"b\" : [ true , null ] } ").unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["a"], Value::from(1));
        assert_eq!(map["b"], Value::Array(vec![Value::Bool(true), Value::Null]));
    }

    #[test]
    fn trailing_comma_in_array_points_at_bracket() {
        let err = decode("[1,]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateComma);
        assert_eq!(err.position(), 3);
        assert_eq!(err.character(), Some(']'));
    }

    #[test]
    fn trailing_comma_in_object() {
        let err = decode(r#"{"a": 1,}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateComma);
        assert_eq!(err.character(), Some('}'));
    }

    #[test]
    fn missing_colon() {
        let err = decode(r#"{"a" "b"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingColon);
        assert_eq!(err.path().to_string(), "root.a");
    }

    #[test]
    fn duplicate_colon() {
        let err = decode(r#"{"a":: 1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateColon);
    }

    #[test]
    fn invalid_constant_at_root() {
        let err = decode("truefoo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConstant);
        assert!(err.message().contains("truefoo"));
        assert!(err.message().contains("Missing quotes?"));
    }

    #[test]
    fn invalid_constant_inside_container_keeps_the_hint() {
        let err = decode(r#"{"a": truth}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConstant);
        assert!(err.message().contains("Missing quotes?"));
        assert_eq!(err.path().to_string(), "root.a");
    }

    #[test]
    fn unterminated_string() {
        let err = decode("\"unterminated").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnterminatedInput);
    }

    #[test]
    fn unterminated_containers() {
        for input in ["{", "[", r#"{"a": [1, 2"#, r#"{"a":"#] {
            let err = decode(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnterminatedInput, "input: {input}");
        }
    }

    #[test]
    fn two_root_values_are_trailing_content() {
        let err = decode("123 456").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingContent);
        assert_eq!(err.position(), 4);
        assert_eq!(err.character(), Some('4'));
    }

    #[test]
    fn trailing_content_after_container() {
        let err = decode("{} x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingContent);
    }

    #[test]
    fn breadcrumb_points_into_nested_array() {
        let err = decode(r#"{"a":true,"b":[1,2.5,x]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConstant);
        assert_eq!(err.path().to_string(), "root.b[2]");
    }

    #[test]
    fn breadcrumb_through_nested_objects() {
        let err = decode(r#"{"outer": {"inner": [0, {"leaf": }]}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedObjectCharacter);
        assert_eq!(err.path().to_string(), "root.outer.inner[1].leaf");
    }

    #[test]
    fn malformed_numbers() {
        for input in ["-", "1-2", "1.2.3", "[1e]"] {
            let err = decode(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedNumber, "input: {input}");
        }
    }

    #[test]
    fn comma_errors_in_containers() {
        assert_eq!(
            decode("[,1]").unwrap_err().kind(),
            ErrorKind::DuplicateComma
        );
        assert_eq!(
            decode(r#"{"a":1,,"b":2}"#).unwrap_err().kind(),
            ErrorKind::DuplicateComma
        );
        assert_eq!(decode("[1 2]").unwrap_err().kind(), ErrorKind::MissingComma);
        assert_eq!(
            decode(r#"{"a":1 "b":2}"#).unwrap_err().kind(),
            ErrorKind::MissingComma
        );
    }

    #[test]
    fn mismatched_close_delimiters() {
        assert_eq!(
            decode("[1}").unwrap_err().kind(),
            ErrorKind::UnexpectedArrayCharacter
        );
        assert_eq!(
            decode(r#"{"a":1]"#).unwrap_err().kind(),
            ErrorKind::UnexpectedObjectCharacter
        );
    }

    #[test]
    fn root_classification_failures() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(decode(input).unwrap_err().kind(), ErrorKind::EmptyInput);
        }
        for input in [":", "+1", "é", "}"] {
            assert_eq!(
                decode(input).unwrap_err().kind(),
                ErrorKind::UnexpectedRootCharacter,
                "input: {input}"
            );
        }
    }

    #[test]
    fn unquoted_property_name() {
        let err = decode("{a: 1}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedObjectCharacter);
        assert!(err.message().contains("Missing quotes?"));
    }

    #[test]
    fn typed_entry_points_accept_matching_roots() {
        assert_eq!(decode_as_object(r#"{"a":1}"#).unwrap()["a"], Value::from(1));
        assert_eq!(decode_as_array("[1]").unwrap(), vec![Value::from(1)]);
        assert_eq!(decode_as_string("\"s\"").unwrap(), "s");
        assert_eq!(decode_as_number("8").unwrap(), Number::Int(8));
        assert!(decode_as_bool("true").unwrap());
    }

    #[test]
    fn typed_entry_points_reject_wrong_roots() {
        assert_eq!(
            decode_as_object("[1]").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            decode_as_array("{}").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            decode_as_string("3").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            decode_as_number("null").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            decode_as_bool("\"true\"").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn typed_entry_points_propagate_syntax_errors() {
        assert_eq!(
            decode_as_object("{").unwrap_err().kind(),
            ErrorKind::UnterminatedInput
        );
    }
}

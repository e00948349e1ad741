// SPDX-License-Identifier: Apache-2.0

use crate::ValueKind;

/// Classification of decode failures.
///
/// Every failure aborts the whole decode; there are no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input contained nothing but whitespace.
    EmptyInput,
    /// The first significant character could not start any JSON value.
    UnexpectedRootCharacter,
    /// A character inside an object body that fits no production there.
    UnexpectedObjectCharacter,
    /// A character inside an array body that fits no production there.
    UnexpectedArrayCharacter,
    /// A comma with no value before it, including trailing commas.
    DuplicateComma,
    /// Two values inside a container with no comma between them.
    MissingComma,
    /// A property name not followed by a colon.
    MissingColon,
    /// A property name followed by more than one colon.
    DuplicateColon,
    /// A number span the chosen numeric kind could not represent.
    MalformedNumber,
    /// A letter sequence other than `true`, `false`, or `null`.
    InvalidConstant,
    /// Input ended with open containers or inside a string literal.
    UnterminatedInput,
    /// Non-whitespace content after the root value closed.
    TrailingContent,
    /// A typed entry point was handed a root of the wrong kind.
    TypeMismatch,
}

/// One step of the path from the root to the failure position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object slot, named by its property.
    Key(String),
    /// Array slot, at the index the failing element would have occupied.
    Index(usize),
}

/// Root-to-failure chain of enclosing container slots.
///
/// Renders in a JSON-pointer-like style: `root.foo[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb(Vec<PathSegment>);

impl Breadcrumb {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl core::fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("root")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A located decode failure: what went wrong, on which character, where in
/// the input, and under which enclosing slots.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    kind: ErrorKind,
    character: Option<char>,
    position: usize,
    path: Breadcrumb,
    message: String,
}

impl SyntaxError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: String,
        character: Option<char>,
        position: usize,
        path: Breadcrumb,
    ) -> Self {
        SyntaxError {
            kind,
            character,
            position,
            path,
            message,
        }
    }

    pub(crate) fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        SyntaxError {
            kind: ErrorKind::TypeMismatch,
            character: None,
            position: 0,
            path: Breadcrumb::new(),
            message: format!("expected {expected} at the root, found {actual}"),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending character, when the failure points at one.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Byte index of the failure in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Enclosing container slots from the root to the failure.
    pub fn path(&self) -> &Breadcrumb {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl core::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at index {}", self.message, self.position)?;
        if let Some(ch) = self.character {
            write!(f, " (found {ch:?})")?;
        }
        if !self.path.is_empty() {
            write!(f, " in {}", self.path)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

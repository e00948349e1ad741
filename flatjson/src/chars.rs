// SPDX-License-Identifier: Apache-2.0

//! Byte classification predicates used inline by the decoder.

pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// First byte of a number literal: a digit or a leading minus.
pub fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-'
}

/// Any byte that may appear inside a number literal. Validity of the whole
/// span is decided by the numeric parse, not here.
pub fn is_number_part(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
}

//! Text decoding for the two ID3v2.3 string encodings.
//!
//! Encoding `0x00` is ISO-8859-1: one byte per code point, terminated by a
//! single zero byte. Encoding `0x01` is UTF-16 in 2-byte units with an
//! optional byte order mark, terminated by a zero-zero pair that starts on a
//! unit boundary counted from the start of the field.

use ::encoding::all::{ISO_8859_1, UTF_16BE, UTF_16LE};
use ::encoding::{DecoderTrap, Encoding};

use crate::tools::view::ByteView;
use crate::types::TextEncoding;

/// Offset of the first terminator at or after `offset`, or `view.len()` if
/// the field runs to the end of the view unterminated.
pub fn find_terminator(view: &ByteView, offset: usize, encoding: TextEncoding) -> usize {
    let data = view.as_slice();
    if offset >= data.len() {
        return data.len();
    }
    match encoding {
        TextEncoding::Latin1 => data[offset..]
            .iter()
            .position(|&b| b == 0x00)
            .map_or(data.len(), |i| offset + i),
        TextEncoding::Utf16 => data[offset..]
            .chunks_exact(2)
            .position(|unit| unit == [0x00, 0x00])
            .map_or(data.len(), |i| offset + 2 * i),
    }
}

pub fn decode(input: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 => decode_iso_8859_1(input),
        TextEncoding::Utf16 => decode_utf16(input),
    }
}

/// Decodes a field that runs to the end of the frame body. Terminators
/// written after the value are dropped.
pub fn decode_trimmed(input: &[u8], encoding: TextEncoding) -> String {
    decode(input, encoding).trim_end_matches('\0').to_string()
}

/// Reads a terminated string starting at `offset`.
///
/// Returns the decoded value and the offset just past the terminator. A
/// missing terminator is not an error: the rest of the view becomes the
/// value and nothing is skipped.
pub fn read_terminated_string(
    view: &ByteView,
    offset: usize,
    encoding: TextEncoding,
) -> (String, usize) {
    let data = view.as_slice();
    let start = offset.min(data.len());
    let end = find_terminator(view, start, encoding);
    let value = decode(&data[start..end], encoding);
    if end < data.len() {
        (value, end + encoding.terminator_width())
    } else {
        (value, end)
    }
}

pub fn decode_iso_8859_1(input: &[u8]) -> String {
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or_default()
}

pub fn decode_utf16(input: &[u8]) -> String {
    match input {
        [0xFF, 0xFE, rest @ ..] => UTF_16LE.decode(rest, DecoderTrap::Replace),
        [0xFE, 0xFF, rest @ ..] => UTF_16BE.decode(rest, DecoderTrap::Replace),
        // in case of no BOM, assume big endian
        _ => UTF_16BE.decode(input, DecoderTrap::Replace),
    }
    .unwrap_or_default()
}

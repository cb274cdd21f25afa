//! Read-only ID3v2.3 tag reader.
//!
//! `read_tag` takes a buffer that starts (at some offset) with an ID3v2 tag
//! and returns the tag header plus every frame, in file order, with its body
//! decoded into a typed [`Content`] where the frame family is supported.
//! Unknown or undecodable frames are kept as raw bytes so one bad frame never
//! costs the rest of the tag.
//!
//! `tag_span` only looks at the header, for callers that just want to skip
//! over a tag in an MPEG stream.

#[macro_use]
extern crate lazy_static;

mod types;
pub use crate::types::*;

pub mod id3v2;
pub mod tools;


pub use crate::id3v2::read_tag;
pub use crate::id3v2::read_tag_with;
pub use crate::id3v2::tag_span;
pub use crate::tools::view::ByteView;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("ID3v2 header not found")]
    NotATag,
    #[error("ID3v2.{major} is not supported")]
    UnsupportedVersion { major: u8 },
    #[error("tag too short: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("read of {len} bytes at offset {offset} is out of range ({available} available)")]
    OutOfRange {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("unsupported text encoding: {0:#04x}")]
    UnsupportedEncoding(u8),
    #[error("counter of {width} bytes does not fit in 64 bits")]
    CounterOverflow { width: usize },
    #[error("tag size {size} exceeds the limit of {limit} bytes")]
    TagTooLarge { size: u32, limit: u32 },
}

use crc::crc32::checksum_ieee;
use log::warn;

use crate::tools::is_synch_safe;
use crate::tools::view::ByteView;
use crate::types::{ReadOptions, Tag};
use crate::Error;

pub mod content;
pub mod get;
pub mod read;
pub(crate) mod regex;
pub mod tools;

use self::read::HEADER_LEN;

/// Reads the ID3v2.3 tag starting at `offset` with default options.
pub fn read_tag(data: &[u8], offset: usize) -> Result<Tag, Error> {
    read_tag_with(data, offset, &ReadOptions::default())
}

/// Reads the ID3v2.3 tag starting at `offset`.
///
/// Only a missing tag, an unsupported version, a header that doesn't fit
/// the buffer or a tag over `max_tag_size` fail the read. Problems inside the
/// frame area end up on the `Tag` (`truncated`) or on single frames
/// (`Frame::truncated`, `Frame::error`).
pub fn read_tag_with(data: &[u8], offset: usize, options: &ReadOptions) -> Result<Tag, Error> {
    let view = ByteView::new(data);
    let mut header = read::header(&view, offset)?;

    if header.major_version != 3 {
        return Err(Error::UnsupportedVersion {
            major: header.major_version,
        });
    }
    if let Some(limit) = options.max_tag_size {
        if header.size > limit {
            return Err(Error::TagTooLarge {
                size: header.size,
                limit,
            });
        }
    }

    // everything after the 10 byte header, cut at the end of the buffer
    let body_start = offset + HEADER_LEN;
    let available = view.remaining(body_start);
    let truncated = header.size as usize > available;
    if truncated {
        warn!(
            "event=tag_read status=truncated declared={} available={}",
            header.size, available
        );
    }
    let body = view.slice(body_start, (header.size as usize).min(available))?;

    let resynchronized;
    let body = if header.flags.unsynchronization && options.resynchronize {
        resynchronized = tools::undo_unsynch(body);
        let body = ByteView::new(&resynchronized);
        // the extended header is unsynchronized along with the frames
        if header.extended_header.is_some() {
            header.extended_header = Some(read::extended_header(&body, 0)?);
        }
        body
    } else {
        body
    };

    let frames_start = header
        .extended_header
        .as_ref()
        .map_or(0, |x| x.consumed())
        .min(body.len());
    let frames_view = body.slice(frames_start, body.len() - frames_start)?;

    let crc_valid = match header.extended_header.as_ref().and_then(|x| x.crc32) {
        Some(expected) if options.verify_crc => {
            // CRC covers the frames, not the padding
            let padding = header
                .extended_header
                .as_ref()
                .map_or(0, |x| x.padding_size as usize);
            let covered = frames_view.len().saturating_sub(padding);
            let actual = checksum_ieee(&frames_view.as_slice()[..covered]);
            if actual != expected {
                warn!(
                    "event=tag_read status=crc_mismatch expected={:08X} actual={:08X}",
                    expected, actual
                );
            }
            Some(actual == expected)
        }
        _ => None,
    };

    Ok(Tag {
        frames: get::frames(&frames_view),
        header,
        truncated,
        crc_valid,
    })
}

/// Total byte span of the tag at `offset` (header, extended header, frames,
/// padding and footer), or `None` when there's no plausible tag header there.
///
/// Only the fixed header is looked at.
pub fn tag_span(data: &[u8], offset: usize) -> Option<usize> {
    let view = ByteView::new(data);
    let raw = view.bytes(offset, HEADER_LEN).ok()?;
    if !is_synch_safe(&raw[6..10]) {
        return None;
    }
    read::fixed_header(&view, offset)
        .ok()
        .map(|h| h.total_size())
}

#[cfg(test)]
mod tests;

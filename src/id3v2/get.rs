use log::{debug, warn};

use crate::id3v2::content;
use crate::id3v2::read::{self, FRAME_HEADER_LEN};
use crate::tools::view::ByteView;
use crate::types::{Content, Frame, FrameHeader};
use crate::Error;

/// Scans the frame directory. `view` covers exactly the bytes between the
/// end of the (extended) header and the end of the tag.
///
/// The scan stops quietly at padding, when less than a frame header is left,
/// or at an invalid frame id; whatever was read up to there is returned.
pub fn frames(view: &ByteView) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut pos = 0;

    loop {
        if view.remaining(pos) < FRAME_HEADER_LEN {
            debug!(
                "event=frame_scan status=halt reason=end offset={} frames={}",
                pos,
                frames.len()
            );
            break;
        }

        // padding
        if let Ok(0x00) = view.read_u8(pos) {
            debug!(
                "event=frame_scan status=halt reason=padding offset={} frames={}",
                pos,
                frames.len()
            );
            break;
        }

        let header = match read::frame_header(view, pos) {
            Ok(Some(h)) => h,
            Ok(None) | Err(_) => {
                warn!(
                    "event=frame_scan status=halt reason=invalid_frame_id offset={} frames={}",
                    pos,
                    frames.len()
                );
                break;
            }
        };

        let body_start = pos + FRAME_HEADER_LEN;
        let available = view.remaining(body_start);
        let truncated = header.size as usize > available;
        let body_len = (header.size as usize).min(available);
        if truncated {
            warn!(
                "event=frame_scan status=truncated id={} declared={} available={}",
                header.id, header.size, available
            );
        }

        let body = view.bytes(body_start, body_len).unwrap_or_default();
        frames.push(frame(header, body, truncated));

        pos = body_start + body_len;
    }

    frames
}

/// Turns one frame body into a `Frame`. Decode failures stay inside the frame.
pub fn frame(header: FrameHeader, body: &[u8], truncated: bool) -> Frame {
    let flags = header.flags;

    // data appended to the header, in flag order
    let mut extra = 0;
    if flags.compression {
        extra += 4; // decompressed size
    }
    if flags.encryption {
        extra += 1; // method
    }
    let group_id = if flags.grouping_identity {
        let id = body.get(extra).copied();
        extra += 1;
        id
    } else {
        None
    };

    let decoded = if flags.compression || flags.encryption {
        // can't look inside, keep the body as is
        Ok(Content::Raw(body.to_vec()))
    } else if flags.grouping_identity && group_id.is_none() {
        Err(Error::Truncated {
            needed: extra,
            actual: body.len(),
        })
    } else {
        content::decode(&header.id, body.get(extra..).unwrap_or_default())
    };

    let (content, error) = match decoded {
        Ok(c) => {
            debug!(
                "event=frame_decode status=ok id={} size={} raw={}",
                header.id,
                header.size,
                c.is_raw()
            );
            (c, None)
        }
        Err(e) => {
            warn!(
                "event=frame_decode status=degraded id={} size={} error=\"{}\"",
                header.id,
                body.len(),
                e
            );
            (Content::Raw(body.to_vec()), Some(e))
        }
    };

    Frame {
        header,
        content,
        group_id,
        truncated,
        error,
    }
}

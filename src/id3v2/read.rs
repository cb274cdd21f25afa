use log::debug;

use crate::id3v2::tools::decode_frame_id;
use crate::tools::view::ByteView;
use crate::types::{ExtendedHeader, FrameFlags, FrameHeader, TagFlags, TagHeader};
use crate::Error;

pub const HEADER_LEN: usize = 10;
pub const FRAME_HEADER_LEN: usize = 10;

const MAGIC: &[u8; 3] = b"ID3";

// extended header flag: CRC data present
const EXT_FLAG_CRC: u16 = 0x8000;

/// Reads the fixed 10 byte header at `offset`, plus the extended header when
/// the tag is v2.3 and flags one.
pub fn header(view: &ByteView, offset: usize) -> Result<TagHeader, Error> {
    let mut header = fixed_header(view, offset)?;
    if header.major_version == 3 && header.flags.extended_header {
        header.extended_header = Some(extended_header(view, offset + HEADER_LEN)?);
    }
    Ok(header)
}

/// Reads only the fixed 10 byte header at `offset`.
pub fn fixed_header(view: &ByteView, offset: usize) -> Result<TagHeader, Error> {
    // ID3v2/file identifier      "ID3"
    let available = view.remaining(offset);
    let magic = view
        .bytes(offset, available.min(MAGIC.len()))
        .unwrap_or_default();
    if !MAGIC.starts_with(magic) {
        return Err(Error::NotATag);
    }
    if available < HEADER_LEN {
        return Err(Error::Truncated {
            needed: HEADER_LEN,
            actual: available,
        });
    }

    // ID3v2 version              $0X 00
    let major_version = view.read_u8(offset + 3)?;
    let revision = view.read_u8(offset + 4)?;
    if major_version < 2 || major_version > 4 {
        return Err(Error::UnsupportedVersion {
            major: major_version,
        });
    }

    // ID3v2 flags                %abcd0000
    let flags = view.read_u8(offset + 5)?;
    let flags = TagFlags {
        unsynchronization: flags & 0b1000_0000 != 0,
        extended_header: flags & 0b0100_0000 != 0,
        experimental: flags & 0b0010_0000 != 0,
        footer: major_version >= 4 && flags & 0b0001_0000 != 0,
    };

    // ID3v2 size             4 * %0xxxxxxx
    let size = view.read_synchsafe_u32(offset + 6)?;

    debug!(
        "event=tag_header status=ok version=2.{}.{} size={} unsynch={} extended={}",
        major_version, revision, size, flags.unsynchronization, flags.extended_header
    );

    Ok(TagHeader {
        major_version,
        revision,
        flags,
        size,
        extended_header: None,
    })
}

/// v2.3 extended header:
///
/// ```text
/// Extended header size   $xx xx xx xx
/// Extended Flags         $xx xx
/// Size of padding        $xx xx xx xx
/// Total frame CRC        $xx xx xx xx  (only with the CRC flag)
/// ```
pub fn extended_header(view: &ByteView, offset: usize) -> Result<ExtendedHeader, Error> {
    let truncated = |needed: usize| Error::Truncated {
        needed,
        actual: view.remaining(offset),
    };

    let size = view.read_synchsafe_u32(offset).map_err(|_| truncated(10))?;
    let flags = view.read_u16_be(offset + 4).map_err(|_| truncated(10))?;
    let padding_size = view.read_u32_be(offset + 6).map_err(|_| truncated(10))?;
    let crc32 = if flags & EXT_FLAG_CRC != 0 {
        Some(view.read_u32_be(offset + 10).map_err(|_| truncated(14))?)
    } else {
        None
    };

    Ok(ExtendedHeader {
        size,
        flags,
        padding_size,
        crc32,
    })
}

impl ExtendedHeader {
    /// Bytes the extended header occupies, size field included.
    pub fn consumed(&self) -> usize {
        let fields = if self.crc32.is_some() { 14 } else { 10 };
        (4 + self.size as usize).max(fields)
    }
}

/// Reads a v2.3 frame header. `None` means the id isn't a valid frame id.
///
/// ```text
/// Frame ID      $xx xx xx xx  (four characters)
/// Size          $xx xx xx xx
/// Flags         $xx xx
/// ```
pub fn frame_header(view: &ByteView, offset: usize) -> Result<Option<FrameHeader>, Error> {
    let id = match decode_frame_id(view.bytes(offset, 4)?) {
        Some(id) => id,
        None => return Ok(None),
    };
    let size = view.read_u32_be(offset + 4)?;

    // %abc00000 %ijk00000
    let status = view.read_u8(offset + 8)?;
    let format = view.read_u8(offset + 9)?;

    Ok(Some(FrameHeader {
        id,
        size,
        flags: FrameFlags {
            tag_alter_preservation: status & 0b1000_0000 != 0,
            file_alter_preservation: status & 0b0100_0000 != 0,
            read_only: status & 0b0010_0000 != 0,

            compression: format & 0b1000_0000 != 0,
            encryption: format & 0b0100_0000 != 0,
            grouping_identity: format & 0b0010_0000 != 0,
        },
    }))
}

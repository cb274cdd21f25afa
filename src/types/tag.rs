use crate::id3v2::regex::parse_position;
use crate::types::{Comment, Content, Picture, PictureType};
use crate::Error;

/// A decoded ID3v2.3 tag.
#[derive(PartialEq, Debug, Clone)]
pub struct Tag {
    pub header: TagHeader,
    /// Frames in file order, duplicates included.
    pub frames: Vec<Frame>,
    /// The declared tag size ran past the end of the buffer.
    pub truncated: bool,
    /// Outcome of the extended header CRC check, when there was one to check.
    pub crc_valid: Option<bool>,
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct TagHeader {
    pub major_version: u8,
    pub revision: u8,
    pub flags: TagFlags,
    /// Bytes following the 10 byte header: extended header, frames and padding.
    pub size: u32,
    pub extended_header: Option<ExtendedHeader>,
}

impl TagHeader {
    /// Header, extended header, frames, padding and (v2.4) footer.
    pub fn total_size(&self) -> usize {
        let footer = if self.major_version >= 4 && self.flags.footer {
            10
        } else {
            0
        };
        10 + self.size as usize + footer
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct TagFlags {
    pub unsynchronization: bool,
    pub extended_header: bool,
    pub experimental: bool,
    // only defined for v2.4
    pub footer: bool,
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct ExtendedHeader {
    /// Declared size, excluding the size field itself.
    pub size: u32,
    pub flags: u16,
    pub padding_size: u32,
    pub crc32: Option<u32>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct Frame {
    pub header: FrameHeader,
    pub content: Content,
    pub group_id: Option<u8>,
    /// The body was cut short by the end of the tag.
    pub truncated: bool,
    /// Why the content fell back to `Content::Raw`.
    pub error: Option<Error>,
}

impl Frame {
    pub fn id(&self) -> &str {
        &self.header.id
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct FrameHeader {
    pub id: String,
    /// Declared body size, before any clamping.
    pub size: u32,
    pub flags: FrameFlags,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct FrameFlags {
    pub tag_alter_preservation: bool,
    pub file_alter_preservation: bool,
    pub read_only: bool,
    pub compression: bool,
    pub encryption: bool,
    pub grouping_identity: bool,
}

impl Tag {
    pub fn frames_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Frame> + 'a {
        self.frames.iter().filter(move |f| f.header.id == id)
    }

    /// First text-information frame with this id.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.frames.iter().find_map(|f| match &f.content {
            Content::Text(t) if f.header.id == id => Some(t.value.as_str()),
            _ => None,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.text("TIT2")
    }

    pub fn artist(&self) -> Option<&str> {
        self.text("TPE1")
    }

    pub fn album(&self) -> Option<&str> {
        self.text("TALB")
    }

    pub fn album_artist(&self) -> Option<&str> {
        self.text("TPE2")
    }

    pub fn composer(&self) -> Option<&str> {
        self.text("TCOM")
    }

    pub fn grouping(&self) -> Option<&str> {
        self.text("TIT1")
    }

    pub fn genre(&self) -> Option<&str> {
        self.text("TCON")
    }

    pub fn year(&self) -> Option<&str> {
        self.text("TYER")
    }

    /// `TRCK` as (number, total).
    pub fn track(&self) -> (Option<u32>, Option<u32>) {
        self.text("TRCK").map_or((None, None), parse_position)
    }

    /// `TPOS` as (number, total).
    pub fn disc(&self) -> (Option<u32>, Option<u32>) {
        self.text("TPOS").map_or((None, None), parse_position)
    }

    // only the plain comment, the one without a description
    pub fn comment(&self) -> Option<&Comment> {
        self.frames.iter().find_map(|f| match &f.content {
            Content::Comment(c) if c.description.is_empty() => Some(c),
            _ => None,
        })
    }

    /// `TXXX` value by description.
    pub fn user_text(&self, description: &str) -> Option<&str> {
        self.frames.iter().find_map(|f| match &f.content {
            Content::ExtendedText(t) if t.description == description => Some(t.value.as_str()),
            _ => None,
        })
    }

    pub fn pictures(&self) -> impl Iterator<Item = &Picture> {
        self.frames.iter().filter_map(|f| match &f.content {
            Content::Picture(p) => Some(p),
            _ => None,
        })
    }

    /// A front cover if there is one, otherwise the first picture.
    pub fn front_cover(&self) -> Option<&Picture> {
        self.pictures()
            .find(|p| p.kind() == PictureType::FrontCover)
            .or_else(|| self.pictures().next())
    }
}

use std::fmt;

use crc::crc32::checksum_ieee;

use crate::types::TextEncoding;

/// `APIC` body.
#[derive(PartialEq, Eq, Clone)]
pub struct Picture {
    pub encoding: TextEncoding,
    pub mime_type: String,
    pub picture_type: u8,
    pub description: String,
    pub data: Vec<u8>,
}

impl Picture {
    pub fn kind(&self) -> PictureType {
        PictureType::from(self.picture_type)
    }

    pub fn crc32(&self) -> u32 {
        checksum_ieee(&self.data)
    }

    // w    h   bpp
    pub fn dimensions(&self) -> Option<(u32, u32, u8)> {
        let v = &self.data;
        if v.starts_with(&[0xFF, 0xD8]) {
            let mut pos = 2;

            while pos + 8 < v.len() {
                // find SOFX
                if v[pos] == 0xFF && v[pos + 1] & 0xF0 == 0xC0 {
                    // [FF CX] [XX XX] [XX] [XX XX] [XX XX]
                    // SOF id   size   bpp   height  width
                    return Some((
                        u16::from_be_bytes([v[pos + 7], v[pos + 8]]) as u32,
                        u16::from_be_bytes([v[pos + 5], v[pos + 6]]) as u32,
                        v[pos + 4],
                    ));
                }
                pos += 2 + u16::from_be_bytes([v[pos + 2], v[pos + 3]]) as usize;
            }

            None
        } else if v.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) && v.len() >= 25
        {
            Some((
                u32::from_be_bytes([v[16], v[17], v[18], v[19]]),
                u32::from_be_bytes([v[20], v[21], v[22], v[23]]),
                v[24],
            ))
        } else {
            None
        }
    }
}

// image bytes get summarized, never dumped
impl fmt::Debug for Picture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let res = self.dimensions().unwrap_or((0, 0, 0));
        write!(
            f,
            "Picture {{ {:?} {:?} {:?} \"{}\" 0x{:X} ({} bytes, {}x{}, {}bpp) }}",
            self.kind(),
            self.encoding,
            self.mime_type,
            self.description,
            self.crc32(),
            self.data.len(),
            res.0,
            res.1,
            res.2
        )
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PictureType {
    Other,
    FileIcon,
    OtherFileIcon,
    FrontCover,
    BackCover,
    Leaflet,
    Media,
    LeadArtist,
    Artist,
    Conductor,
    Band,
    Composer,
    Lyricist,
    RecordingLocation,
    DuringRecording,
    DuringPerformance,
    ScreenCapture,
    BrightColoredFish,
    Illustration,
    BandLogo,
    PublisherLogo,
    Undefined(u8),
}

impl From<u8> for PictureType {
    fn from(b: u8) -> Self {
        match b {
            0x00 => PictureType::Other,
            0x01 => PictureType::FileIcon,
            0x02 => PictureType::OtherFileIcon,
            0x03 => PictureType::FrontCover,
            0x04 => PictureType::BackCover,
            0x05 => PictureType::Leaflet,
            0x06 => PictureType::Media,
            0x07 => PictureType::LeadArtist,
            0x08 => PictureType::Artist,
            0x09 => PictureType::Conductor,
            0x0A => PictureType::Band,
            0x0B => PictureType::Composer,
            0x0C => PictureType::Lyricist,
            0x0D => PictureType::RecordingLocation,
            0x0E => PictureType::DuringRecording,
            0x0F => PictureType::DuringPerformance,
            0x10 => PictureType::ScreenCapture,
            0x11 => PictureType::BrightColoredFish,
            0x12 => PictureType::Illustration,
            0x13 => PictureType::BandLogo,
            0x14 => PictureType::PublisherLogo,
            x => PictureType::Undefined(x),
        }
    }
}

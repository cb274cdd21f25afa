use std::convert::TryFrom;

use crate::types::Picture;
use crate::Error;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TextEncoding {
    /// `$00`, ISO-8859-1
    Latin1,
    /// `$01`, UTF-16 with optional BOM
    Utf16,
}

impl TextEncoding {
    pub fn terminator_width(self) -> usize {
        match self {
            TextEncoding::Latin1 => 1,
            TextEncoding::Utf16 => 2,
        }
    }
}

impl TryFrom<u8> for TextEncoding {
    type Error = Error;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b {
            0x00 => Ok(TextEncoding::Latin1),
            0x01 => Ok(TextEncoding::Utf16),
            x => Err(Error::UnsupportedEncoding(x)),
        }
    }
}

/// Decoded body of a frame, one variant per frame family.
#[derive(PartialEq, Debug, Clone)]
pub enum Content {
    /// `T***` except `TXXX`
    Text(Text),
    /// `TXXX`
    ExtendedText(ExtendedText),
    /// `W***` except `WXXX`
    Link(Link),
    /// `WXXX`
    ExtendedLink(ExtendedLink),
    /// `COMM`
    Comment(Comment),
    /// `USLT`, laid out exactly like a comment
    Lyrics(Comment),
    /// `USER`
    TermsOfUse(TermsOfUse),
    /// `IPLS`
    InvolvedPeople(InvolvedPeople),
    /// `UFID`
    UniqueFileId(UniqueFileId),
    /// `PRIV`
    Private(Private),
    /// `PCNT`
    PlayCounter(PlayCounter),
    /// `POPM`
    Popularimeter(Popularimeter),
    /// `APIC`
    Picture(Picture),
    /// Untouched frame body, for frames that aren't decoded or failed to decode.
    Raw(Vec<u8>),
}

impl Content {
    pub fn is_raw(&self) -> bool {
        match self {
            Content::Raw(_) => true,
            _ => false,
        }
    }

    /// The main string value for the text and link families.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Content::Text(x) => Some(&x.value),
            Content::ExtendedText(x) => Some(&x.value),
            Content::Link(x) => Some(&x.value),
            Content::ExtendedLink(x) => Some(&x.value),
            Content::Comment(x) | Content::Lyrics(x) => Some(&x.text),
            Content::TermsOfUse(x) => Some(&x.text),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Text {
    pub encoding: TextEncoding,
    pub value: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ExtendedText {
    pub encoding: TextEncoding,
    pub description: String,
    pub value: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Link {
    pub value: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ExtendedLink {
    pub encoding: TextEncoding,
    pub description: String,
    // always ISO-8859-1, whatever the encoding byte says
    pub value: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Comment {
    pub encoding: TextEncoding,
    pub language: String,
    pub description: String,
    pub text: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TermsOfUse {
    pub encoding: TextEncoding,
    pub language: String,
    pub text: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct InvolvedPeople {
    pub encoding: TextEncoding,
    pub values: Vec<String>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct UniqueFileId {
    pub owner_identifier: String,
    pub identifier: Vec<u8>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Private {
    pub owner_identifier: String,
    pub private_data: Vec<u8>,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct PlayCounter {
    pub counter: u64,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Popularimeter {
    pub email: String,
    pub rating: u8,
    pub counter: u64,
}

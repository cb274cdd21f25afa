//! Frame body decoding.
//!
//! Each supported frame family has its own decode function; `decoder_for`
//! picks one from a fixed id table, falling back to the `T`/`W` prefix rules
//! and finally to an opaque copy of the body. Decoders never panic on short
//! bodies: every read goes through `ByteView` and a failed read surfaces as an
//! `Error` the caller turns into a raw frame.

use std::collections::HashMap;
use std::convert::TryFrom;

use crate::tools::decode_int_be_u64;
use crate::tools::encoding::{decode_iso_8859_1, decode_trimmed, read_terminated_string};
use crate::tools::view::ByteView;
use crate::types::*;
use crate::Error;

pub type Decoder = fn(&ByteView) -> Result<Content, Error>;

// recognized, but kept as raw bytes
const RAW_FRAMES: [&str; 17] = [
    "AENC", "COMR", "ENCR", "EQUA", "ETCO", "GEOB", "GRID", "LINK", "MCDI", "MLLT", "OWNE",
    "POSS", "RBUF", "RVAD", "RVRB", "SYLT", "SYTC",
];

lazy_static! {
    static ref DECODERS: HashMap<&'static str, Decoder> = {
        let mut m: HashMap<&'static str, Decoder> = HashMap::new();
        m.insert("TXXX", extended_text);
        m.insert("WXXX", extended_link);
        m.insert("COMM", comment);
        m.insert("USLT", lyrics);
        m.insert("USER", terms_of_use);
        m.insert("IPLS", involved_people);
        m.insert("UFID", unique_file_id);
        m.insert("PRIV", private);
        m.insert("PCNT", play_counter);
        m.insert("POPM", popularimeter);
        m.insert("APIC", picture);
        for id in RAW_FRAMES.iter() {
            m.insert(*id, raw);
        }
        m
    };
}

pub fn decoder_for(id: &str) -> Decoder {
    if let Some(d) = DECODERS.get(id) {
        return *d;
    }
    match id.as_bytes().first() {
        Some(b'T') => text,
        Some(b'W') => link,
        _ => raw,
    }
}

pub fn decode(id: &str, body: &[u8]) -> Result<Content, Error> {
    decoder_for(id)(&ByteView::new(body))
}

fn encoding_at(v: &ByteView, offset: usize) -> Result<TextEncoding, Error> {
    TextEncoding::try_from(v.read_u8(offset)?)
}

// up to three bytes, whatever is there
fn language_at(v: &ByteView, offset: usize) -> (String, usize) {
    let start = offset.min(v.len());
    let end = (offset + 3).min(v.len());
    (decode_iso_8859_1(&v.as_slice()[start..end]), end)
}

fn rest<'a>(v: &ByteView<'a>, offset: usize) -> &'a [u8] {
    v.tail(offset).unwrap_or_default()
}

// <Header for 'Text information frame', ID: "T000" - "TZZZ", excluding "TXXX">
// Text encoding    $xx
// Information      <text string according to encoding>
pub fn text(v: &ByteView) -> Result<Content, Error> {
    let encoding = encoding_at(v, 0)?;
    let (value, _) = read_terminated_string(v, 1, encoding);
    Ok(Content::Text(Text { encoding, value }))
}

// Text encoding    $xx
// Description      <text string according to encoding> $00 (00)
// Value            <text string according to encoding>
pub fn extended_text(v: &ByteView) -> Result<Content, Error> {
    let encoding = encoding_at(v, 0)?;
    let (description, next) = read_terminated_string(v, 1, encoding);
    Ok(Content::ExtendedText(ExtendedText {
        encoding,
        description,
        value: decode_trimmed(rest(v, next), encoding),
    }))
}

// URL              <text string>
pub fn link(v: &ByteView) -> Result<Content, Error> {
    Ok(Content::Link(Link {
        value: decode_trimmed(v.as_slice(), TextEncoding::Latin1),
    }))
}

// Text encoding    $xx
// Description      <text string according to encoding> $00 (00)
// URL              <text string>
pub fn extended_link(v: &ByteView) -> Result<Content, Error> {
    let encoding = encoding_at(v, 0)?;
    let (description, next) = read_terminated_string(v, 1, encoding);
    // the URL is ISO-8859-1 no matter what the encoding byte says
    Ok(Content::ExtendedLink(ExtendedLink {
        encoding,
        description,
        value: decode_trimmed(rest(v, next), TextEncoding::Latin1),
    }))
}

// Text encoding          $xx
// Language               $xx xx xx
// Content descriptor     <text string according to encoding> $00 (00)
// The actual text        <full text string according to encoding>
fn comment_body(v: &ByteView) -> Result<Comment, Error> {
    let encoding = encoding_at(v, 0)?;
    let (language, next) = language_at(v, 1);
    let (description, next) = read_terminated_string(v, next, encoding);
    Ok(Comment {
        encoding,
        language,
        description,
        text: decode_trimmed(rest(v, next), encoding),
    })
}

pub fn comment(v: &ByteView) -> Result<Content, Error> {
    comment_body(v).map(Content::Comment)
}

pub fn lyrics(v: &ByteView) -> Result<Content, Error> {
    comment_body(v).map(Content::Lyrics)
}

// Text encoding    $xx
// Language         $xx xx xx
// The actual text  <text string according to encoding>
pub fn terms_of_use(v: &ByteView) -> Result<Content, Error> {
    let encoding = encoding_at(v, 0)?;
    let (language, next) = language_at(v, 1);
    Ok(Content::TermsOfUse(TermsOfUse {
        encoding,
        language,
        text: decode_trimmed(rest(v, next), encoding),
    }))
}

// Text encoding    $xx
// People list strings    <text strings according to encoding>
pub fn involved_people(v: &ByteView) -> Result<Content, Error> {
    let encoding = encoding_at(v, 0)?;
    let mut values = Vec::new();
    let mut offset = 1;
    while offset < v.len() {
        let (value, next) = read_terminated_string(v, offset, encoding);
        values.push(value);
        offset = next;
    }
    Ok(Content::InvolvedPeople(InvolvedPeople { encoding, values }))
}

// Owner identifier    <text string> $00
// Identifier    <up to 64 bytes binary data>
pub fn unique_file_id(v: &ByteView) -> Result<Content, Error> {
    let (owner_identifier, next) = read_terminated_string(v, 0, TextEncoding::Latin1);
    Ok(Content::UniqueFileId(UniqueFileId {
        owner_identifier,
        identifier: rest(v, next).to_vec(),
    }))
}

// Owner identifier    <text string> $00
// The private data    <binary data>
pub fn private(v: &ByteView) -> Result<Content, Error> {
    let (owner_identifier, next) = read_terminated_string(v, 0, TextEncoding::Latin1);
    Ok(Content::Private(Private {
        owner_identifier,
        private_data: rest(v, next).to_vec(),
    }))
}

// Counter    $xx xx xx xx (xx ...)
pub fn play_counter(v: &ByteView) -> Result<Content, Error> {
    if v.is_empty() {
        return Err(Error::Truncated {
            needed: 1,
            actual: 0,
        });
    }
    Ok(Content::PlayCounter(PlayCounter {
        counter: decode_int_be_u64(v.as_slice())?,
    }))
}

// Email to user   <text string> $00
// Rating          $xx
// Counter         $xx xx xx xx (xx ...)
pub fn popularimeter(v: &ByteView) -> Result<Content, Error> {
    let (email, next) = read_terminated_string(v, 0, TextEncoding::Latin1);
    let rating = v.read_u8(next)?;
    Ok(Content::Popularimeter(Popularimeter {
        email,
        rating,
        counter: decode_int_be_u64(rest(v, next + 1))?,
    }))
}

// Text encoding   $xx
// MIME type       <text string> $00
// Picture type    $xx
// Description     <text string according to encoding> $00 (00)
// Picture data    <binary data>
pub fn picture(v: &ByteView) -> Result<Content, Error> {
    let encoding = encoding_at(v, 0)?;
    let (mime_type, next) = read_terminated_string(v, 1, TextEncoding::Latin1);
    let picture_type = v.read_u8(next)?;
    let (description, next) = read_terminated_string(v, next + 1, encoding);
    Ok(Content::Picture(Picture {
        encoding,
        mime_type,
        picture_type,
        description,
        data: rest(v, next).to_vec(),
    }))
}

pub fn raw(v: &ByteView) -> Result<Content, Error> {
    Ok(Content::Raw(v.as_slice().to_vec()))
}

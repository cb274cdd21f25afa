
use crc::crc32::checksum_ieee;

use crate::tests::{frame, synch, tag};
use crate::tools::view::ByteView;
use crate::*;

fn header_bytes(major: u8, flags: u8, size: u32) -> Vec<u8> {
    let mut vec = vec![b'I', b'D', b'3', major, 0x00, flags];
    vec.extend_from_slice(&synch(size));
    vec
}

#[test]
fn header_test() {
    let data = tag(&[frame("TIT2", b"\x00x")], 100);
    let header = id3v2::read::header(&ByteView::new(&data), 0).unwrap();
    assert_eq!(
        header,
        TagHeader {
            major_version: 3,
            revision: 0,
            flags: TagFlags::default(),
            size: 12 + 100,
            extended_header: None,
        }
    );
    assert_eq!(header.total_size(), data.len());
}

#[test]
fn header_flags_test() {
    let data = header_bytes(3, 0b1110_1111, 0);
    let header = id3v2::read::fixed_header(&ByteView::new(&data), 0).unwrap();
    assert_eq!(
        header.flags,
        TagFlags {
            unsynchronization: true,
            extended_header: true,
            experimental: true,
            footer: false,
        }
    );

    let data = header_bytes(4, 0b0001_0000, 20);
    let header = id3v2::read::fixed_header(&ByteView::new(&data), 0).unwrap();
    assert!(header.flags.footer);
    assert_eq!(header.total_size(), 10 + 20 + 10);
}

#[test]
fn not_a_tag_test() {
    assert_eq!(read_tag(b"TAG", 0), Err(Error::NotATag));
    assert_eq!(read_tag(b"ID4\x03\x00\x00\x00\x00\x00\x00", 0), Err(Error::NotATag));
    assert_eq!(read_tag(b"\xFF\xFB\x90\x64", 0), Err(Error::NotATag));
}

#[test]
fn short_header_test() {
    assert_eq!(
        read_tag(b"ID3\x03\x00", 0),
        Err(Error::Truncated {
            needed: 10,
            actual: 5
        })
    );
    assert_eq!(
        read_tag(b"ID3", 7),
        Err(Error::Truncated {
            needed: 10,
            actual: 0
        })
    );
}

#[test]
fn version_test() {
    for &major in [2u8, 4].iter() {
        let data = header_bytes(major, 0, 0);
        // the header still parses
        assert!(id3v2::read::header(&ByteView::new(&data), 0).is_ok());
        // but frames are only read for v2.3
        assert_eq!(
            read_tag(&data, 0),
            Err(Error::UnsupportedVersion { major })
        );
    }
    for &major in [0u8, 1, 5, 0xFF].iter() {
        let data = header_bytes(major, 0, 0);
        assert_eq!(
            read_tag(&data, 0),
            Err(Error::UnsupportedVersion { major })
        );
    }
}

#[test]
fn offset_test() {
    let mut data = b"junk".to_vec();
    data.extend_from_slice(&tag(&[frame("TIT2", b"\x00Title")], 4));
    let tag = read_tag(&data, 4).unwrap();
    assert_eq!(tag.title(), Some("Title"));
}

#[test]
fn empty_tag_test() {
    let data = tag(&[], 0);
    let tag = read_tag(&data, 0).unwrap();
    assert!(tag.frames.is_empty());
    assert!(!tag.truncated);
}

#[test]
fn padding_stops_scan() {
    let mut data = tag(&[frame("TIT2", b"\x00Title")], 32);
    // junk after the start of padding is never looked at
    let len = data.len();
    data[len - 4..].copy_from_slice(b"TPE1");
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.frames.len(), 1);
}

#[test]
fn short_tail_stops_scan() {
    // 9 bytes left: not enough for a frame header
    let mut frames = vec![frame("TIT2", b"\x00Title")];
    frames.push(b"TPE1\x00\x00\x00".to_vec());
    let data = tag(&frames, 2);
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.frames.len(), 1);
    assert!(!tag.truncated);
}

#[test]
fn invalid_frame_id_stops_scan() {
    let data = tag(
        &[
            frame("TIT2", b"\x00Title"),
            frame("T\x01T2", b"\x00Broken"),
            frame("TPE1", b"\x00Artist"),
        ],
        0,
    );
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.frames.len(), 1);
    assert_eq!(tag.title(), Some("Title"));
}

#[test]
fn duplicate_frames_are_kept() {
    let data = tag(
        &[
            frame("TIT2", b"\x00One"),
            frame("TIT2", b"\x00Two"),
            frame("XYZ1", b"opaque"),
        ],
        0,
    );
    let tag = read_tag(&data, 0).unwrap();
    let ids: Vec<&str> = tag.frames.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["TIT2", "TIT2", "XYZ1"]);
    assert_eq!(tag.title(), Some("One"));
    assert_eq!(tag.frames[2].content, Content::Raw(b"opaque".to_vec()));
    assert_eq!(tag.frames[2].error, None);
}

#[test]
fn frame_truncated_by_tag_size() {
    let mut last = frame("TPE1", b"\x00Artist");
    // claims 100 bytes, only 7 are there
    last[4..8].copy_from_slice(&100u32.to_be_bytes());
    let data = tag(&[frame("TIT2", b"\x00Title"), last], 0);

    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.frames.len(), 2);
    assert!(!tag.frames[0].truncated);

    let f = &tag.frames[1];
    assert!(f.truncated);
    assert_eq!(f.header.size, 100);
    assert_eq!(f.content.text_value(), Some("Artist"));
}

#[test]
fn tag_truncated_by_buffer() {
    let mut data = tag(&[frame("TIT2", b"\x00Title"), frame("TPE1", b"\x00Artist")], 0);
    data.truncate(data.len() - 3);

    let tag = read_tag(&data, 0).unwrap();
    assert!(tag.truncated);
    assert_eq!(tag.frames.len(), 2);
    assert!(tag.frames[1].truncated);
    assert_eq!(tag.frames[1].content.text_value(), Some("Art"));
}

#[test]
fn frame_flags_test() {
    let mut f = frame("TIT2", b"\x00Title");
    f[8] = 0b1110_0000;
    f[9] = 0b0000_0000;
    let data = tag(&[f], 0);
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(
        tag.frames[0].header.flags,
        FrameFlags {
            tag_alter_preservation: true,
            file_alter_preservation: true,
            read_only: true,
            ..Default::default()
        }
    );
    assert_eq!(tag.title(), Some("Title"));
}

#[test]
fn grouped_frame_test() {
    let mut f = frame("TIT2", b"\x42\x00Title");
    f[9] = 0b0010_0000;
    let data = tag(&[f], 0);
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.frames[0].group_id, Some(0x42));
    assert_eq!(tag.title(), Some("Title"));
}

#[test]
fn compressed_frame_stays_raw() {
    let body = b"\x00\x00\x00\x10\x78\x9C\x01\x02";
    let mut f = frame("TIT2", body);
    f[9] = 0b1000_0000;
    let data = tag(&[f], 0);
    let tag = read_tag(&data, 0).unwrap();

    assert!(tag.frames[0].header.flags.compression);
    assert_eq!(tag.frames[0].content, Content::Raw(body.to_vec()));
    assert_eq!(tag.frames[0].error, None);
    assert_eq!(tag.title(), None);
}

fn tag_with_extended_header(crc: Option<u32>, padding: u32, frames: &[u8]) -> Vec<u8> {
    let mut ext = Vec::new();
    match crc {
        Some(crc) => {
            ext.extend_from_slice(&[0, 0, 0, 10, 0x80, 0x00]);
            ext.extend_from_slice(&padding.to_be_bytes());
            ext.extend_from_slice(&crc.to_be_bytes());
        }
        None => {
            ext.extend_from_slice(&[0, 0, 0, 6, 0x00, 0x00]);
            ext.extend_from_slice(&padding.to_be_bytes());
        }
    }

    let mut data = header_bytes(3, 0b0100_0000, (ext.len() + frames.len()) as u32 + padding);
    data.extend_from_slice(&ext);
    data.extend_from_slice(frames);
    data.resize(data.len() + padding as usize, 0);
    data
}

#[test]
fn extended_header_test() {
    let frames = frame("TIT2", b"\x00Title");
    let data = tag_with_extended_header(None, 16, &frames);
    let tag = read_tag(&data, 0).unwrap();

    assert_eq!(
        tag.header.extended_header,
        Some(ExtendedHeader {
            size: 6,
            flags: 0,
            padding_size: 16,
            crc32: None,
        })
    );
    assert_eq!(tag.title(), Some("Title"));
    assert_eq!(tag.crc_valid, None);
}

#[test]
fn extended_header_crc_test() {
    let frames = [frame("TIT2", b"\x00Title"), frame("TPE1", b"\x00Artist")].concat();
    let crc = checksum_ieee(&frames);

    let data = tag_with_extended_header(Some(crc), 8, &frames);
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.header.extended_header.as_ref().unwrap().crc32, Some(crc));
    assert_eq!(tag.crc_valid, Some(true));
    assert_eq!(tag.frames.len(), 2);

    let data = tag_with_extended_header(Some(crc ^ 1), 8, &frames);
    let tag = read_tag(&data, 0).unwrap();
    assert_eq!(tag.crc_valid, Some(false));
    // a bad CRC is reported, not fatal
    assert_eq!(tag.frames.len(), 2);

    let options = ReadOptions::default().with_verify_crc(false);
    let tag = read_tag_with(&data, 0, &options).unwrap();
    assert_eq!(tag.crc_valid, None);
}

#[test]
fn extended_header_truncated_test() {
    let mut data = header_bytes(3, 0b0100_0000, 4);
    data.extend_from_slice(&[0, 0, 0, 6]);
    assert!(match read_tag(&data, 0) {
        Err(Error::Truncated { .. }) => true,
        _ => false,
    });
}

#[test]
fn max_tag_size_test() {
    let data = tag(&[frame("TIT2", b"\x00Title")], 100);
    let options = ReadOptions::default().with_max_tag_size(64);
    assert_eq!(
        read_tag_with(&data, 0, &options),
        Err(Error::TagTooLarge {
            size: 116,
            limit: 64
        })
    );

    let options = ReadOptions::default().with_max_tag_size(116);
    assert!(read_tag_with(&data, 0, &options).is_ok());
}

#[test]
fn unsynchronized_tag_test() {
    // the 0xFF inside the title was written as 0xFF 0x00
    let body = b"\x00A\xFF\x00B";
    let mut data = tag(&[frame("TIT2", body)], 0);
    data[5] = 0b1000_0000;

    let plain = read_tag(&data, 0).unwrap();
    assert!(plain.header.flags.unsynchronization);
    // left alone, the inserted zero ends the string
    assert_eq!(plain.title(), Some("A\u{FF}"));

    let options = ReadOptions::default().with_resynchronize(true);
    let data = {
        // frame size counts the resynchronized body
        let mut f = frame("TIT2", body);
        f[4..8].copy_from_slice(&4u32.to_be_bytes());
        let mut data = tag(&[f], 0);
        data[5] = 0b1000_0000;
        data
    };
    let resynchronized = read_tag_with(&data, 0, &options).unwrap();
    assert_eq!(resynchronized.title(), Some("A\u{FF}B"));
}

#[test]
fn tag_span_test() {
    let data = tag(&[frame("TIT2", b"\x00Title")], 50);
    assert_eq!(tag_span(&data, 0), Some(data.len()));

    let mut stream = vec![0xFF, 0xFB, 0x90, 0x64];
    stream.extend_from_slice(&data);
    assert_eq!(tag_span(&stream, 0), None);
    assert_eq!(tag_span(&stream, 4), Some(data.len()));

    // v2.4 with footer
    let v4 = header_bytes(4, 0b0001_0000, 30);
    assert_eq!(tag_span(&v4, 0), Some(50));

    // size bytes with the high bit set can't be a real tag
    let mut bad = header_bytes(3, 0, 30);
    bad[9] = 0x80;
    assert_eq!(tag_span(&bad, 0), None);

    assert_eq!(tag_span(b"ID3\x03", 0), None);
    assert_eq!(tag_span(&header_bytes(9, 0, 0), 0), None);
}

use crate::tools::view::ByteView;

/// Frame ids are four ASCII letters or digits.
pub fn decode_frame_id(input: &[u8]) -> Option<String> {
    if input.len() == 4 && input.iter().all(u8::is_ascii_alphanumeric) {
        Some(input.iter().map(|&c| c as char).collect())
    } else {
        None
    }
}

/// Collapses every `$FF 00` pair back into `$FF`.
pub fn undo_unsynch(view: ByteView) -> Vec<u8> {
    let input = view.as_slice();
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        out.push(input[i]);
        if input[i] == 0xFF && input.get(i + 1) == Some(&0x00) {
            i += 1;
        }
        i += 1;
    }
    out
}

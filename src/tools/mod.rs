pub mod encoding;
pub mod view;

use crate::Error;

// big endian counter over however many bytes the field has,
// leading zero bytes don't count towards the 64 bit limit
pub fn decode_int_be_u64(input: &[u8]) -> Result<u64, Error> {
    let significant = match input.iter().position(|&b| b != 0) {
        Some(first) => &input[first..],
        None => return Ok(0),
    };
    if significant.len() > 8 {
        return Err(Error::CounterOverflow {
            width: input.len(),
        });
    }
    Ok(significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

// only the low 7 bits of each byte carry data
// (0000 0001 0111 1111 => 1111 1111)
pub fn decode_synch_int(input: &[u8]) -> u32 {
    input
        .iter()
        .take(4)
        .fold(0u32, |acc, &b| (acc << 7) | (b & 0x7F) as u32)
}

pub fn is_synch_safe(input: &[u8]) -> bool {
    input.iter().all(|b| b & 0x80 == 0)
}

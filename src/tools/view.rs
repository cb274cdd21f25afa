use crate::tools::decode_synch_int;
use crate::Error;

/// Read-only, bounds-checked window over a byte buffer.
///
/// Offsets passed to every method are relative to the start of the window.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between `offset` and the end of the window, 0 if past the end.
    pub fn remaining(&self, offset: usize) -> usize {
        self.data.len().saturating_sub(offset)
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], Error> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| self.out_of_range(offset, len))?;
        self.data
            .get(offset..end)
            .ok_or_else(|| self.out_of_range(offset, len))
    }

    /// Everything from `offset` to the end of the window.
    pub fn tail(&self, offset: usize) -> Result<&'a [u8], Error> {
        self.data
            .get(offset..)
            .ok_or_else(|| self.out_of_range(offset, 0))
    }

    pub fn slice(&self, offset: usize, len: usize) -> Result<ByteView<'a>, Error> {
        self.bytes(offset, len).map(ByteView::new)
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, Error> {
        self.data
            .get(offset)
            .copied()
            .ok_or_else(|| self.out_of_range(offset, 1))
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16, Error> {
        let b = self.bytes(offset, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32_be(&self, offset: usize) -> Result<u32, Error> {
        let b = self.bytes(offset, 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// 4 bytes, low 7 bits of each, concatenated into a 28 bit value.
    pub fn read_synchsafe_u32(&self, offset: usize) -> Result<u32, Error> {
        self.bytes(offset, 4).map(decode_synch_int)
    }

    fn out_of_range(&self, offset: usize, len: usize) -> Error {
        Error::OutOfRange {
            offset,
            len,
            available: self.data.len(),
        }
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(data: &'a [u8]) -> Self {
        ByteView::new(data)
    }
}

impl std::fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ByteView({} bytes)", self.data.len())
    }
}

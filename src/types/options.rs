/// Knobs for `read_tag_with`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ReadOptions {
    /// Refuse tags declaring more than this many bytes.
    pub max_tag_size: Option<u32>,
    /// Undo unsynchronization before scanning frames, when the header says
    /// it was applied. Off by default.
    pub resynchronize: bool,
    /// Check the extended header CRC-32 when one is present.
    pub verify_crc: bool,
}

impl Default for ReadOptions {
    fn default() -> ReadOptions {
        ReadOptions {
            max_tag_size: None,
            resynchronize: false,
            verify_crc: true,
        }
    }
}

impl ReadOptions {
    pub fn with_max_tag_size(mut self, limit: u32) -> Self {
        self.max_tag_size = Some(limit);
        self
    }

    pub fn with_resynchronize(mut self, on: bool) -> Self {
        self.resynchronize = on;
        self
    }

    pub fn with_verify_crc(mut self, on: bool) -> Self {
        self.verify_crc = on;
        self
    }
}

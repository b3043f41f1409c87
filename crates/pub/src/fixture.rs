//! Builders for encoded test data

use eodata_protocol::encode_number;

/// Accumulates encoded fields in file order
#[derive(Default)]
pub(crate) struct FixtureWriter {
    buf: Vec<u8>,
}

impl FixtureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn char(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&encode_number(value)[..1]);
        self
    }

    pub fn short(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&encode_number(value)[..2]);
        self
    }

    pub fn three(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&encode_number(value)[..3]);
        self
    }

    pub fn int(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&encode_number(value));
        self
    }

    pub fn text(&mut self, value: &str) -> &mut Self {
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    /// Length-prefixed string
    pub fn name(&mut self, value: &str) -> &mut Self {
        self.char(value.len() as u32).text(value)
    }

    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat(0u8).take(n));
        self
    }

    /// Container header declaring `count` records
    pub fn header(&mut self, tag: &str, count: u32) -> &mut Self {
        self.text(tag).int(7).short(count + 1).skip(1)
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

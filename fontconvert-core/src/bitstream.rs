//! MSB-first bit packer for glyph bitmaps.
//!
//! Pixels are appended one bit at a time. Bytes are filled starting at
//! bit 7; a byte is flushed to the buffer once bit 0 has been written.
//! [`BitPacker::align`] pads the pending byte with zero bits so that the
//! next glyph starts on a fresh byte. No padding is ever inserted between
//! scanlines of the same glyph.

/// Bit position of the first pixel in an accumulator byte.
const FIRST_BIT: u8 = 7;

/// Append-only 1-bit-per-pixel packer.
#[derive(Debug, Clone)]
pub struct BitPacker {
    /// Flushed bytes.
    buffer: Vec<u8>,
    /// Byte being filled.
    acc: u8,
    /// Next bit to write in `acc`, counting down from 7.
    bit: u8,
    /// Number of bits written into `acc`.
    pending: u8,
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl BitPacker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            acc: 0,
            bit: FIRST_BIT,
            pending: 0,
        }
    }

    /// Append one pixel.
    pub fn push_bit(&mut self, on: bool) {
        if on {
            self.acc |= 1 << self.bit;
        }
        self.pending += 1;
        if self.bit == 0 {
            self.flush();
        } else {
            self.bit -= 1;
        }
    }

    /// Pad the pending byte with zeros and flush it.
    ///
    /// Does nothing when no bits are pending, so repeated calls are
    /// equivalent to a single one.
    pub fn align(&mut self) {
        if self.pending != 0 {
            self.flush();
        }
    }

    /// Number of complete bytes flushed so far.
    ///
    /// After [`Self::align`] this is the offset at which the next bit
    /// will land.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.buffer.len()
    }

    /// Total bits appended, including those not yet flushed.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.buffer.len() * 8 + usize::from(self.pending)
    }

    /// Whether the next bit starts a new byte.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.pending == 0
    }

    /// Flushed bytes, up to [`Self::offset`].
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Align and hand over the packed bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.align();
        self.buffer
    }

    fn flush(&mut self) {
        self.buffer.push(self.acc);
        self.acc = 0;
        self.bit = FIRST_BIT;
        self.pending = 0;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(packer: &mut BitPacker, bits: &[u8]) {
        for &b in bits {
            packer.push_bit(b != 0);
        }
    }

    #[test]
    fn msb_first_single_byte() {
        let mut p = BitPacker::new();
        push_all(&mut p, &[1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(p.data(), &[0b1011_0001]);
        assert_eq!(p.offset(), 1);
        assert!(p.is_aligned());
    }

    #[test]
    fn partial_byte_is_not_visible_until_aligned() {
        let mut p = BitPacker::new();
        push_all(&mut p, &[1, 1, 1]);
        assert_eq!(p.offset(), 0);
        assert!(p.data().is_empty());
        assert_eq!(p.bit_len(), 3);

        p.align();
        assert_eq!(p.data(), &[0b1110_0000]);
    }

    #[test]
    fn align_is_idempotent() {
        let mut once = BitPacker::new();
        push_all(&mut once, &[1, 0, 1]);
        once.align();

        let mut twice = BitPacker::new();
        push_all(&mut twice, &[1, 0, 1]);
        twice.align();
        twice.align();

        assert_eq!(once.offset(), twice.offset());
        assert_eq!(once.data(), twice.data());
    }

    #[test]
    fn align_on_empty_or_full_byte_is_noop() {
        let mut p = BitPacker::new();
        p.align();
        assert_eq!(p.offset(), 0);

        push_all(&mut p, &[0; 8]);
        assert_eq!(p.offset(), 1);
        p.align();
        assert_eq!(p.offset(), 1);
    }

    #[test]
    fn bits_run_across_byte_boundaries() {
        let mut p = BitPacker::new();
        push_all(&mut p, &[1; 12]);
        assert_eq!(p.offset(), 1);
        assert_eq!(p.bit_len(), 12);
        let bytes = p.into_bytes();
        assert_eq!(bytes, vec![0xFF, 0xF0]);
    }

    #[test]
    fn grows_past_any_fixed_arena() {
        let mut p = BitPacker::new();
        for i in 0..(300 * 1024 * 8) {
            p.push_bit(i % 2 == 0);
        }
        assert_eq!(p.offset(), 300 * 1024);
        assert!(p.data().iter().all(|&b| b == 0xAA));
    }
}

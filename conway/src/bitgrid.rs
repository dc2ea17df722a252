// bitgrid.rs - Bit-packed toroidal grid storage

use crate::error::{LifeError, Result};

/// Tests bit `idx` of a packed, least-significant-bit-first byte buffer.
///
/// Readers holding only the byte view (the painter) use this to decode cells
/// the same way the grid stores them.
#[inline]
pub fn bit_is_set(bytes: &[u8], idx: usize) -> bool {
    let mask = 1u8 << (idx % 8);
    bytes[idx / 8] & mask == mask
}

/// Fixed-size grid of booleans stored eight to a byte.
///
/// Cell `(row, col)` lives at linear index `row * width + col`. Bits past
/// `width * height` in the last byte are padding and always zero.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BitGrid {
    /// Allocates an all-dead grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            bits: vec![0; len.div_ceil(8)],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (excluding padding bits).
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len(), "bit index {idx} out of range");
        bit_is_set(&self.bits, idx)
    }

    #[inline]
    pub fn set(&mut self, idx: usize, alive: bool) {
        debug_assert!(idx < self.len(), "bit index {idx} out of range");
        let mask = 1u8 << (idx % 8);
        if alive {
            self.bits[idx / 8] |= mask;
        } else {
            self.bits[idx / 8] &= !mask;
        }
    }

    #[inline]
    pub fn toggle(&mut self, idx: usize) {
        debug_assert!(idx < self.len(), "bit index {idx} out of range");
        self.bits[idx / 8] ^= 1u8 << (idx % 8);
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Number of live cells.
    pub fn count_alive(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Read-only view of the packed storage, `ceil(len / 8)` bytes long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Fills the storage from raw random bytes, then zeroes the padding.
    pub(crate) fn fill_bytes_with(&mut self, fill: impl FnOnce(&mut [u8])) {
        fill(&mut self.bits);
        self.clear_padding();
    }

    fn clear_padding(&mut self) {
        let used = self.len() % 8;
        if used != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }
    }
}

impl std::fmt::Debug for BitGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("alive", &self.count_alive())
            .finish()
    }
}

fn cell_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(LifeError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            BitGrid::new(0, 8).unwrap_err(),
            LifeError::InvalidDimensions { width: 0, height: 8 }
        );
        assert!(BitGrid::new(8, 0).is_err());
    }

    #[test]
    fn storage_is_rounded_up_to_whole_bytes() {
        assert_eq!(BitGrid::new(8, 8).unwrap().as_bytes().len(), 8);
        assert_eq!(BitGrid::new(3, 3).unwrap().as_bytes().len(), 2);
        assert_eq!(BitGrid::new(1, 1).unwrap().as_bytes().len(), 1);
    }

    #[test]
    fn bits_are_packed_lsb_first() {
        let mut grid = BitGrid::new(4, 4).unwrap();
        grid.set(0, true);
        grid.set(9, true);
        assert_eq!(grid.as_bytes(), &[0b0000_0001, 0b0000_0010]);
        assert!(bit_is_set(grid.as_bytes(), 9));
        assert!(!bit_is_set(grid.as_bytes(), 8));
    }

    #[test]
    fn set_toggle_and_clear() {
        let mut grid = BitGrid::new(5, 5).unwrap();
        grid.set(12, true);
        assert!(grid.get(12));
        grid.set(12, false);
        assert!(!grid.get(12));

        grid.toggle(24);
        assert!(grid.get(24));
        assert_eq!(grid.count_alive(), 1);

        grid.clear();
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn filling_bytes_keeps_padding_dead() {
        // 3x3 = 9 cells, so 7 bits of the second byte are padding
        let mut grid = BitGrid::new(3, 3).unwrap();
        grid.fill_bytes_with(|bytes| bytes.fill(0xFF));
        assert_eq!(grid.as_bytes(), &[0xFF, 0x01]);
        assert_eq!(grid.count_alive(), 9);
    }
}

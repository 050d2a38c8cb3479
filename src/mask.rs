use bit_set::BitSet;

/// Per-cell exclusion bitmap, addressed by buffer index. A set bit means
/// the cell takes no part in generation or solving (e.g. the dark pixels
/// of an image silhouette).
#[derive(Debug, Clone, Default)]
pub struct CellMask {
    bits: BitSet,
    len: usize,
}

impl CellMask {
    /// An all-clear mask covering `len` cells.
    pub fn new(len: usize) -> CellMask {
        CellMask {
            bits: BitSet::with_capacity(len),
            len,
        }
    }

    /// Decodes a caller-supplied packed buffer, one bit per cell in buffer
    /// order, MSB-first within each byte. Returns `None` when the buffer
    /// holds fewer than `len` bits.
    pub fn from_packed(bytes: &[u8], len: usize) -> Option<CellMask> {
        if bytes.len() * 8 < len {
            return None;
        }

        let mut bits = BitSet::with_capacity(len);
        for index in 0..len {
            if (bytes[index / 8] >> (7 - index % 8)) & 1 == 1 {
                bits.insert(index);
            }
        }

        Some(CellMask { bits, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Is the cell at this buffer index masked out?
    ///
    /// Indices beyond the mask's length count as excluded; they address no
    /// real cell.
    pub fn is_excluded(&self, index: usize) -> bool {
        index >= self.len || self.bits.contains(index)
    }

    pub fn exclude(&mut self, index: usize) {
        if index < self.len {
            self.bits.insert(index);
        }
    }

    pub fn excluded_count(&self) -> usize {
        self.bits.len()
    }
}

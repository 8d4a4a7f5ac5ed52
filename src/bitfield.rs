use std::ops::{Deref, DerefMut};

use bit_vec::BitVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitField {
    inner: BitVec,
}

impl BitField {
    /// a bitfield of `len` bits where every bit is set
    pub fn with_all(len: usize) -> Self {
        Self {
            inner: BitVec::from_elem(len, true),
        }
    }

    /// number of set bits in `[begin, end)`
    ///
    /// Only the bits inside the range are visited. The range is clamped to
    /// the length of the bitfield.
    pub fn count_range(&self, begin: usize, end: usize) -> usize {
        let end = end.min(self.inner.len());
        (begin..end).filter(|&i| self.inner[i]).count()
    }

    /// number of set bits
    pub fn count_ones(&self) -> usize {
        self.inner.iter().filter(|bit| *bit).count()
    }
}

impl Deref for BitField {
    type Target = BitVec;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BitField {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

use std::fmt;
use std::ops::Range;

use crate::{FileIndex, PieceIndex};

/// Half-open range `[begin, end)` of indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct IndexSpan<T> {
    pub begin: T,
    pub end: T,
}

/// The pieces a file occupies.
pub type PieceSpan = IndexSpan<PieceIndex>;

/// The files that overlap a piece.
pub type FileSpan = IndexSpan<FileIndex>;

impl<T> IndexSpan<T> {
    pub fn new(begin: T, end: T) -> Self {
        Self { begin, end }
    }
}

impl<T: Copy + PartialOrd> IndexSpan<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }

    #[inline]
    pub fn contains(&self, index: T) -> bool {
        self.begin <= index && index < self.end
    }
}

macro_rules! impl_index_span {
    ($($t:ty),*) => {
        $(
            impl IndexSpan<$t> {
                /// number of indices inside the span
                #[inline]
                pub fn len(&self) -> $t {
                    self.end.saturating_sub(self.begin)
                }

                pub fn iter(&self) -> Range<$t> {
                    self.begin..self.end
                }
            }

            impl IntoIterator for IndexSpan<$t> {
                type Item = $t;
                type IntoIter = Range<$t>;

                fn into_iter(self) -> Self::IntoIter {
                    self.begin..self.end
                }
            }

            impl From<Range<$t>> for IndexSpan<$t> {
                fn from(range: Range<$t>) -> Self {
                    Self::new(range.start, range.end)
                }
            }
        )*
    };
}

impl_index_span!(u32, u64, usize);

impl<T: fmt::Display> fmt::Display for IndexSpan<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

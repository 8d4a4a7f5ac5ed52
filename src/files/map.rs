use std::slice;

use crate::error::{Error, Result};
use crate::geometry::PieceOracle;
use crate::span::{FileSpan, PieceSpan};
use crate::{FileIndex, PieceIndex};

/// Maps each file of a torrent to the pieces it occupies and back.
///
/// Built once from the ordered file sizes and never changed afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FilePieceMap {
    /// the piece span of every file, in file order
    files: Vec<PieceSpan>,
}

impl FilePieceMap {
    /// Computes the piece span of every file in `file_sizes`.
    ///
    /// The sizes must be in the order the files are concatenated in the
    /// payload and are expected to add up to `oracle.total_size()`; use
    /// [`FilePieceMap::try_new`] if that hasn't been checked yet.
    ///
    /// A zero sized file is treated as occupying the single piece at its
    /// offset, so it still counts towards that piece's priority and wanted
    /// state.
    pub fn new<O: PieceOracle + ?Sized>(oracle: &O, file_sizes: &[u64]) -> Self {
        let mut files = Vec::with_capacity(file_sizes.len());
        let mut offset = 0u64;

        for (index, &size) in file_sizes.iter().enumerate() {
            let begin = oracle.piece_of(offset);
            let end = if size != 0 {
                oracle.piece_of(offset + size - 1) + 1
            } else {
                begin + 1
            };
            trace!(
                "file {} offset {} size {} -> pieces [{}, {})",
                index,
                offset,
                size,
                begin,
                end
            );
            files.push(PieceSpan::new(begin, end));
            offset += size;
        }

        debug!(
            "Mapped {} files over {} bytes onto {} pieces",
            files.len(),
            offset,
            oracle.piece_count()
        );
        Self { files }
    }

    /// Like [`FilePieceMap::new`], but rejects file sizes that don't add up
    /// to the size of the payload.
    pub fn try_new<O: PieceOracle + ?Sized>(oracle: &O, file_sizes: &[u64]) -> Result<Self> {
        let actual = file_sizes
            .iter()
            .fold(0u64, |sum, size| sum.saturating_add(*size));
        let expected = oracle.total_size();
        if actual != expected {
            debug!(
                "File sizes add up to {} bytes, expected {}",
                actual, expected
            );
            return Err(Error::SizeMismatch { expected, actual });
        }
        Ok(Self::new(oracle, file_sizes))
    }

    /// The pieces `file` occupies.
    ///
    /// # Panics
    ///
    /// If `file` is not a valid file index.
    #[inline]
    pub fn piece_span(&self, file: FileIndex) -> PieceSpan {
        self.files[file as usize]
    }

    /// The files that overlap `piece`.
    ///
    /// A piece that doesn't exist yields the empty span `[len, len)`.
    pub fn file_span(&self, piece: PieceIndex) -> FileSpan {
        // both the begins and the ends of the spans are non-decreasing, so the
        // files containing `piece` form one contiguous run
        let begin = self.files.partition_point(|span| span.end <= piece);
        let end = self.files.partition_point(|span| span.begin <= piece);
        FileSpan::new(begin as FileIndex, end as FileIndex)
    }

    /// number of files
    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// number of pieces covered by the files
    pub fn piece_count(&self) -> PieceIndex {
        self.files.last().map(|span| span.end).unwrap_or_default()
    }

    /// the piece spans of all files, in file order
    pub fn iter(&self) -> slice::Iter<'_, PieceSpan> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a FilePieceMap {
    type Item = &'a PieceSpan;
    type IntoIter = slice::Iter<'a, PieceSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

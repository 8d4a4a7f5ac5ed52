use std::sync::Arc;

use crate::bitfield::BitField;
use crate::files::FilePieceMap;
use crate::{FileIndex, PieceIndex};

/// Which files of a torrent should be downloaded at all.
#[derive(Debug, Clone)]
pub struct FileWanted {
    map: Arc<FilePieceMap>,
    wanted: BitField,
}

impl FileWanted {
    /// every file starts out wanted
    pub fn new(map: Arc<FilePieceMap>) -> Self {
        let wanted = BitField::with_all(map.len());
        Self { map, wanted }
    }

    /// Marks all `files` as wanted or unwanted.
    ///
    /// # Panics
    ///
    /// If any of the `files` is not a valid file index.
    pub fn set(&mut self, files: &[FileIndex], wanted: bool) {
        for &file in files {
            self.wanted.set(file as usize, wanted);
        }
    }

    #[inline]
    pub fn file_wanted(&self, file: FileIndex) -> bool {
        self.wanted[file as usize]
    }

    /// Whether any file that overlaps `piece` is wanted.
    ///
    /// Pieces that don't exist are never wanted.
    pub fn piece_wanted(&self, piece: PieceIndex) -> bool {
        let span = self.map.file_span(piece);
        if span.is_empty() {
            trace!("No files for piece {}, not wanted", piece);
            return false;
        }
        self.wanted
            .count_range(span.begin as usize, span.end as usize)
            != 0
    }

    /// number of wanted files
    pub fn wanted_count(&self) -> usize {
        self.wanted.count_ones()
    }

    pub fn map(&self) -> &Arc<FilePieceMap> {
        &self.map
    }
}

use std::sync::Arc;

use crate::files::FilePieceMap;
use crate::priority::Priority;
use crate::{FileIndex, PieceIndex};

/// The download priority of every file of a torrent.
#[derive(Debug, Clone)]
pub struct FilePriorities {
    map: Arc<FilePieceMap>,
    priorities: Vec<Priority>,
}

impl FilePriorities {
    /// every file starts out with [`Priority::Normal`]
    pub fn new(map: Arc<FilePieceMap>) -> Self {
        let priorities = vec![Priority::Normal; map.len()];
        Self { map, priorities }
    }

    /// Sets the priority of all `files`.
    ///
    /// # Panics
    ///
    /// If any of the `files` is not a valid file index.
    pub fn set(&mut self, files: &[FileIndex], priority: Priority) {
        for &file in files {
            self.priorities[file as usize] = priority;
        }
    }

    #[inline]
    pub fn file_priority(&self, file: FileIndex) -> Priority {
        self.priorities[file as usize]
    }

    /// The highest priority of all files that overlap `piece`.
    ///
    /// Pieces that don't exist report [`Priority::Normal`].
    pub fn piece_priority(&self, piece: PieceIndex) -> Priority {
        let span = self.map.file_span(piece);
        let files = &self.priorities[span.begin as usize..span.end as usize];
        files.iter().copied().max().unwrap_or_else(|| {
            trace!("No files for piece {}, using default priority", piece);
            Priority::default()
        })
    }

    pub fn map(&self) -> &Arc<FilePieceMap> {
        &self.map
    }
}

//! Maps the files of a torrent onto its pieces and aggregates per-file
//! download settings up to the piece granularity the request scheduler uses.

#[macro_use]
extern crate log;

pub mod bitfield;
pub mod error;
pub mod files;
pub mod geometry;
pub mod priority;
pub mod span;

pub use crate::error::{Error, Result};
pub use crate::files::{FilePieceMap, FilePriorities, FileWanted};
pub use crate::geometry::{BlockInfo, BlockInfoConfig, PieceOracle};
pub use crate::priority::Priority;
pub use crate::span::{FileSpan, IndexSpan, PieceSpan};

/// zero-based index of a piece in the torrent
pub type PieceIndex = u32;

/// zero-based index of a file in the torrent's file list
pub type FileIndex = u32;

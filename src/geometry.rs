use crate::error::{Error, Result};
use crate::span::IndexSpan;
use crate::PieceIndex;

/// size of a request block: 16 KB
pub const BLOCK_SIZE: u64 = 16384;

/// Answers where a byte of the torrent's payload lives.
///
/// The geometry is fixed for the lifetime of the torrent.
pub trait PieceOracle {
    /// total number of bytes of the payload
    fn total_size(&self) -> u64;

    /// number of bytes in each piece, the final piece may be shorter
    fn piece_size(&self) -> u64;

    /// number of pieces the payload is split into
    fn piece_count(&self) -> PieceIndex;

    /// index of the piece that holds the byte at `offset`
    fn piece_of(&self, offset: u64) -> PieceIndex;
}

/// Configuration for [`BlockInfo::with_config`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BlockInfoConfig {
    /// number of bytes in a request block
    block_size: u64,
}

impl BlockInfoConfig {
    pub fn block_size(mut self, block_size: u64) -> Self {
        self.block_size = block_size;
        self
    }
}

impl Default for BlockInfoConfig {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
        }
    }
}

/// The piece and block layout of a torrent's payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct BlockInfo {
    total_size: u64,
    piece_size: u64,
    piece_count: PieceIndex,
    final_piece_size: u64,
    block_size: u64,
    block_count: u64,
    final_block_size: u64,
}

impl BlockInfo {
    pub fn new(total_size: u64, piece_size: u64) -> Result<Self> {
        Self::with_config(total_size, piece_size, BlockInfoConfig::default())
    }

    pub fn with_config(total_size: u64, piece_size: u64, config: BlockInfoConfig) -> Result<Self> {
        let BlockInfoConfig { block_size } = config;
        if block_size == 0 {
            debug!("Rejecting zero block size");
            return Err(Error::InvalidBlockSize { block_size });
        }
        if piece_size == 0 && total_size != 0 {
            debug!("Rejecting zero piece size for {} bytes", total_size);
            return Err(Error::InvalidPieceSize {
                total_size,
                piece_size,
            });
        }

        let (piece_count, final_piece_size) = split(total_size, piece_size);
        if piece_count > u64::from(PieceIndex::max_value()) {
            debug!(
                "Piece size {} yields too many pieces ({}) for {} bytes",
                piece_size, piece_count, total_size
            );
            return Err(Error::InvalidPieceSize {
                total_size,
                piece_size,
            });
        }
        let (block_count, final_block_size) = split(total_size, block_size);

        Ok(Self {
            total_size,
            piece_size,
            piece_count: piece_count as PieceIndex,
            final_piece_size,
            block_size,
            block_count,
            final_block_size,
        })
    }

    #[inline]
    pub fn final_piece_size(&self) -> u64 {
        self.final_piece_size
    }

    /// size of the piece at `piece`, 0 if the piece doesn't exist
    pub fn piece_size_at(&self, piece: PieceIndex) -> u64 {
        if piece >= self.piece_count {
            0
        } else if piece + 1 == self.piece_count {
            self.final_piece_size
        } else {
            self.piece_size
        }
    }

    #[inline]
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    #[inline]
    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    /// size of the block at `block`, 0 if the block doesn't exist
    pub fn block_size_at(&self, block: u64) -> u64 {
        if block >= self.block_count {
            0
        } else if block + 1 == self.block_count {
            self.final_block_size
        } else {
            self.block_size
        }
    }

    /// index of the block that holds the byte at `offset`
    ///
    /// Offsets at or past the end of the payload map to the final block.
    pub fn block_of(&self, offset: u64) -> u64 {
        if offset >= self.total_size {
            return self.block_count.saturating_sub(1);
        }
        offset / self.block_size
    }

    /// the blocks that overlap `piece`, empty if the piece doesn't exist
    pub fn block_span_for_piece(&self, piece: PieceIndex) -> IndexSpan<u64> {
        let size = self.piece_size_at(piece);
        if size == 0 {
            return IndexSpan::new(self.block_count, self.block_count);
        }
        let first_byte = u64::from(piece) * self.piece_size;
        let last_byte = first_byte + size - 1;
        IndexSpan::new(self.block_of(first_byte), self.block_of(last_byte) + 1)
    }
}

impl PieceOracle for BlockInfo {
    #[inline]
    fn total_size(&self) -> u64 {
        self.total_size
    }

    #[inline]
    fn piece_size(&self) -> u64 {
        self.piece_size
    }

    #[inline]
    fn piece_count(&self) -> PieceIndex {
        self.piece_count
    }

    /// Offsets at or past the end of the payload map to the final piece, so
    /// that zero sized files at the end of a torrent still land on a piece.
    fn piece_of(&self, offset: u64) -> PieceIndex {
        if offset >= self.total_size {
            return self.piece_count.saturating_sub(1);
        }
        (offset / self.piece_size) as PieceIndex
    }
}

/// number of chunks of `chunk` bytes that cover `total` bytes, and the size of
/// the final chunk
fn split(total: u64, chunk: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let rest = total % chunk;
    let count = total / chunk + (rest != 0) as u64;
    (count, if rest == 0 { chunk } else { rest })
}

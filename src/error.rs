use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum Error {
    #[snafu(display("Invalid piece size {} for a torrent of {} bytes", piece_size, total_size))]
    InvalidPieceSize { total_size: u64, piece_size: u64 },
    #[snafu(display("Invalid block size {}", block_size))]
    InvalidBlockSize { block_size: u64 },
    #[snafu(display(
        "File sizes add up to {} bytes but the torrent has {} bytes",
        actual,
        expected
    ))]
    SizeMismatch { expected: u64, actual: u64 },
    #[snafu(display("Invalid priority value {}", value))]
    InvalidPriority { value: i8 },
    #[snafu(display("Unknown priority {:?}", name))]
    UnknownPriority { name: String },
}

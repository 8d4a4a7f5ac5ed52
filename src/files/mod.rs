pub mod map;
pub mod priorities;
pub mod wanted;

pub use map::FilePieceMap;
pub use priorities::FilePriorities;
pub use wanted::FileWanted;

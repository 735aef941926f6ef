//! Repository structs providing operations for each entity.

pub mod memo_repo;

pub use memo_repo::MemoRepo;

// Service exports
pub mod backend;
pub mod cache;
pub mod directory;

pub use backend::BackendDirectory;
pub use cache::{CachedDirectory, CacheKey};
pub use directory::{DirectoryError, MentorDirectory, StaticDirectory, fetch_or_empty};

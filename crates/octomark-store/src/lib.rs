// Bookmark persistence - the one bit of durable state we own

pub mod backend;
pub mod notify;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use notify::{LogNotifier, Notifier};
pub use store::{BookmarkChange, BookmarkKind, BookmarkStore};

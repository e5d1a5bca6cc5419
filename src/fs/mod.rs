//! Filesystem module

pub mod entry;
pub mod ops;
pub mod path;
pub mod search;

pub use entry::FileEntry;

//! Fixed-capacity record structures used by the log ring.

pub mod entry;
pub mod entry_ring;

pub use entry::Entry;
pub use entry_ring::{Entries, EntryLog, EntryRing, LOG_CAPACITY};

//! Bounded log of variable-length byte records with virtual-stream addressing.
//!
//! ## Scope
//! The crate provides [`EntryRing`], a fixed-capacity ring of record
//! descriptors. Records are admitted whole; once the ring is full each new
//! record evicts the oldest. Reads address the live records as one virtual
//! byte stream (oldest first), and
//! [`EntryRing::find_entry_offset_for_fpos`] maps a stream offset back to the
//! record and in-record offset that hold it. This is the lookup a
//! character-device log backend needs to serve `lseek`/`pread` over data
//! stored as discrete chunks.
//!
//! ## Key invariants
//! - At most `N` live records; the `N+1`-th admission evicts the first.
//! - Full and empty rings both have coincident cursors; an explicit flag
//!   disambiguates them.
//! - The ring stores borrowed [`Entry`] descriptors only. It never copies,
//!   allocates, or frees record bytes, and the lifetime parameter keeps the
//!   owner's content alive for as long as the ring can observe it.
//!
//! ## Out of scope
//! Device dispatch, accumulating partial writes into complete lines, and
//! locking belong to the caller.
//!
//! ## Example
//! ```
//! use record_ring::{Entry, EntryRing};
//!
//! let lines: [&[u8]; 4] = [b"aa", b"bbb", b"c", b"dddd"];
//! let mut ring: EntryRing<'_, 3> = EntryRing::new();
//! for line in &lines[..3] {
//!     assert!(ring.add_entry(Entry::new(line)).is_none());
//! }
//!
//! let (entry, off) = ring.find_entry_offset_for_fpos(2).unwrap();
//! assert_eq!((entry.content(), off), (&b"bbb"[..], 0));
//!
//! // Saturated: the oldest record comes back to its owner.
//! let evicted = ring.add_entry(Entry::new(lines[3])).unwrap();
//! assert_eq!(evicted.content(), b"aa");
//! assert!(ring.find_entry_offset_for_fpos(8).is_none());
//! ```

pub mod error;
pub mod stdx;

pub use error::EntryError;
pub use stdx::{Entries, Entry, EntryLog, EntryRing, LOG_CAPACITY};

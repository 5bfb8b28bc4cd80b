//! Fixed-capacity ring of record descriptors addressed as one byte stream.
//!
//! Each slot holds an [`Entry`]: a borrowed content slice. Admission overwrites
//! the oldest record once the ring is saturated. Lookup treats the live
//! entries, oldest first, as if concatenated into a single virtual stream and
//! maps a byte offset in that stream back to `(entry, offset_in_entry)`.
//!
//! # Invariants
//! - `write_cursor < N` and `read_cursor < N`.
//! - `!full` implies the live count is `(write_cursor - read_cursor) mod N`.
//! - `full` implies the live count is `N` and `write_cursor == read_cursor`.
//!   Cursor distance is ambiguous here, so `full` is consulted first.
//! - Live entries are the slots visited from `read_cursor` stepping forward
//!   `mod N`. Other slots hold stale descriptors and are never returned.
//!
//! # Ownership
//! The ring never copies, allocates, or frees record bytes. The lifetime `'a`
//! pins every stored descriptor to caller-owned content, so the content cannot
//! be freed while the ring can still observe it. `add_entry` hands back the
//! descriptor it evicts so the owner can release that record.
//!
//! # Threading
//! Not synchronized. Callers sharing a ring must serialize every call behind
//! one lock; a lookup result borrows the ring and blocks admission until it is
//! dropped.

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use super::entry::Entry;
use crate::error::EntryError;

/// Slot count shared between the log ring and its callers.
pub const LOG_CAPACITY: usize = 10;

/// The production ring: [`EntryRing`] at [`LOG_CAPACITY`] slots.
pub type EntryLog<'a> = EntryRing<'a, LOG_CAPACITY>;

/// Bounded, append-only ring of [`Entry`] descriptors with FIFO eviction.
///
/// Capacity is the const parameter `N` and never changes. `N` need not be a
/// power of two, so cursors wrap with `%`.
pub struct EntryRing<'a, const N: usize> {
    slots: [Entry<'a>; N],
    write_cursor: usize,
    read_cursor: usize,
    full: bool,
}

impl<'a, const N: usize> EntryRing<'a, N> {
    const CAPACITY: usize = {
        assert!(N > 0, "EntryRing capacity must be > 0");
        N
    };

    /// Constructs an empty ring: both cursors at 0, not full, every slot
    /// holding [`Entry::EMPTY`].
    pub const fn new() -> Self {
        let _ = Self::CAPACITY;
        Self {
            slots: [Entry::EMPTY; N],
            write_cursor: 0,
            read_cursor: 0,
            full: false,
        }
    }

    /// Re-initializes the ring to the state produced by [`new`](Self::new).
    ///
    /// Live descriptors are discarded without notification. Owners of the
    /// referenced content must release it themselves, typically by draining
    /// [`iter`](Self::iter) first.
    pub fn reset(&mut self) {
        let discarded = self.len();
        self.slots = [Entry::EMPTY; N];
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.full = false;
        debug!("entry ring reset, discarded {discarded} live entries");

        debug_assert!(self.is_empty());
    }

    /// Admits `entry` at the write cursor, evicting the oldest entry when the
    /// ring is already full.
    ///
    /// Returns the evicted descriptor, or `None` if the ring had spare
    /// capacity. The ring drops its own copy of the evicted descriptor, so the
    /// return value is the owner's last chance to observe which record left.
    ///
    /// Never fails and never allocates.
    pub fn add_entry(&mut self, entry: Entry<'a>) -> Option<Entry<'a>> {
        debug_assert!(self.write_cursor < N, "write cursor out of bounds");
        debug_assert!(self.read_cursor < N, "read cursor out of bounds");

        let was_full = self.full;
        let outgoing = std::mem::replace(&mut self.slots[self.write_cursor], entry);

        if was_full {
            self.read_cursor = Self::step(self.read_cursor);
            trace!(
                "entry ring evicted {}-byte entry, read cursor now {}",
                outgoing.len(),
                self.read_cursor
            );
        }

        self.write_cursor = Self::step(self.write_cursor);

        // Re-asserted on every admission once saturated.
        if self.write_cursor == self.read_cursor {
            if !was_full {
                trace!("entry ring reached capacity ({N} entries)");
            }
            self.full = true;
        }

        debug_assert!(self.full || self.len() < N);

        was_full.then_some(outgoing)
    }

    /// Resolves `char_offset` in the virtual stream to the live entry that
    /// contains it and the offset of that byte within the entry.
    ///
    /// Returns `None` when `char_offset` is at or past the end of the stream,
    /// which includes every offset on an empty ring.
    ///
    /// The returned reference borrows the ring, so it cannot outlive the next
    /// `add_entry` call.
    ///
    /// Complexity: O(live entries), independent of byte length.
    pub fn find_entry_offset_for_fpos(&self, char_offset: usize) -> Option<(&Entry<'a>, usize)> {
        let mut consumed = 0usize;
        for entry in self.iter() {
            // `consumed <= char_offset` holds on every iteration.
            let within = char_offset - consumed;
            if within < entry.len() {
                return Some((entry, within));
            }
            consumed += entry.len();
        }
        None
    }

    /// Like [`find_entry_offset_for_fpos`](Self::find_entry_offset_for_fpos),
    /// reporting a miss as an error for `?` propagation.
    ///
    /// # Errors
    /// Returns [`EntryError::OffsetOutOfBounds`] if `char_offset` is not
    /// inside the virtual stream.
    pub fn locate(&self, char_offset: usize) -> Result<(&Entry<'a>, usize), EntryError> {
        self.find_entry_offset_for_fpos(char_offset)
            .ok_or_else(|| EntryError::OffsetOutOfBounds {
                offset: char_offset,
                stream_len: self.stream_len(),
            })
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        if self.full {
            N
        } else {
            (self.write_cursor + N - self.read_cursor) % N
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.full && self.write_cursor == self.read_cursor
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Slot index the next `add_entry` writes.
    #[inline]
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Slot index of the oldest live entry.
    #[inline]
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    /// Total bytes across live entries, i.e. the virtual stream length.
    pub fn stream_len(&self) -> usize {
        self.iter().map(Entry::len).sum()
    }

    /// Returns the `i`-th live entry counting from the oldest.
    pub fn get(&self, i: usize) -> Option<&Entry<'a>> {
        if i >= self.len() {
            return None;
        }
        Some(&self.slots[(self.read_cursor + i) % N])
    }

    pub fn oldest(&self) -> Option<&Entry<'a>> {
        self.get(0)
    }

    pub fn newest(&self) -> Option<&Entry<'a>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates live entries from oldest to newest.
    pub fn iter(&self) -> Entries<'_, 'a, N> {
        Entries {
            ring: self,
            pos: self.read_cursor,
            remaining: self.len(),
        }
    }

    #[inline(always)]
    fn step(cursor: usize) -> usize {
        (cursor + 1) % N
    }
}

impl<const N: usize> Default for EntryRing<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for EntryRing<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRing")
            .field("capacity", &N)
            .field("write_cursor", &self.write_cursor)
            .field("read_cursor", &self.read_cursor)
            .field("full", &self.full)
            .field("live", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'r, 'a, const N: usize> IntoIterator for &'r EntryRing<'a, N> {
    type Item = &'r Entry<'a>;
    type IntoIter = Entries<'r, 'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over live entries, oldest first. Created by [`EntryRing::iter`].
pub struct Entries<'r, 'a, const N: usize> {
    ring: &'r EntryRing<'a, N>,
    pos: usize,
    remaining: usize,
}

impl<'r, 'a, const N: usize> Iterator for Entries<'r, 'a, N> {
    type Item = &'r Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.ring.slots[self.pos];
        self.pos = (self.pos + 1) % N;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Entries<'_, '_, N> {}

impl<const N: usize> FusedIterator for Entries<'_, '_, N> {}

#[cfg(any(test, kani))]
impl<const N: usize> EntryRing<'_, N> {
    /// Asserts every structural invariant listed in the module docs.
    pub(crate) fn debug_validate(&self) {
        assert!(self.write_cursor < N, "write cursor out of bounds");
        assert!(self.read_cursor < N, "read cursor out of bounds");
        if self.full {
            assert_eq!(
                self.write_cursor, self.read_cursor,
                "full ring must have coincident cursors"
            );
            assert_eq!(self.len(), N);
        } else {
            assert!(self.len() < N, "non-full ring reports {} live", self.len());
        }
        assert_eq!(self.iter().count(), self.len());
    }
}

#[cfg(any(test, kani))]
#[path = "entry_ring_tests.rs"]
mod entry_ring_tests;

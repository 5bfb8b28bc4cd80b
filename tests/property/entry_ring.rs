//! Properties of the entry ring over arbitrary admission sequences.
//!
//! Record contents are generated up front and owned by the test so the ring
//! can borrow them for its whole lifetime.

use proptest::prelude::*;

use record_ring::{Entry, EntryRing};

fn records_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // Zero-length records are legal and exercise the skip path in lookup.
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..24), 0..40)
}

/// Admits every record, returning the ring and `(admission index, evicted
/// content)` for each eviction.
fn fill<const N: usize>(records: &[Vec<u8>]) -> (EntryRing<'_, N>, Vec<(usize, &[u8])>) {
    let mut ring = EntryRing::new();
    let mut evicted = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        if let Some(e) = ring.add_entry(Entry::new(rec)) {
            evicted.push((i, e.content()));
        }
    }
    (ring, evicted)
}

fn same_record(a: &[u8], b: &[u8]) -> bool {
    std::ptr::eq(a.as_ptr(), b.as_ptr()) && a.len() == b.len()
}

fn check_capacity<const N: usize>(records: &[Vec<u8>]) -> Result<(), TestCaseError> {
    let mut ring: EntryRing<'_, N> = EntryRing::new();
    for (i, rec) in records.iter().enumerate() {
        ring.add_entry(Entry::new(rec));
        let admitted = i + 1;
        prop_assert!(ring.len() <= N);
        prop_assert_eq!(ring.len(), admitted.min(N));
        prop_assert_eq!(ring.is_full(), admitted >= N);
        prop_assert!(ring.write_cursor() < N && ring.read_cursor() < N);
    }
    Ok(())
}

fn check_eviction_order<const N: usize>(records: &[Vec<u8>]) -> Result<(), TestCaseError> {
    let (ring, evicted) = fill::<N>(records);
    prop_assert_eq!(evicted.len(), records.len().saturating_sub(N));
    for &(admission, content) in &evicted {
        // Record k is evicted by admission k + N.
        prop_assert!(admission >= N);
        prop_assert!(same_record(content, &records[admission - N]));
    }

    // Survivors are the last N admissions, oldest first.
    let start = records.len().saturating_sub(N);
    let live: Vec<&[u8]> = ring.iter().map(|e| e.content()).collect();
    let want: Vec<&[u8]> = records[start..].iter().map(Vec::as_slice).collect();
    prop_assert_eq!(live, want);
    Ok(())
}

fn check_resolution<const N: usize>(records: &[Vec<u8>]) -> Result<(), TestCaseError> {
    let (ring, _) = fill::<N>(records);
    let start = records.len().saturating_sub(N);
    let live = &records[start..];

    let mut prefix = 0usize;
    for rec in live {
        for within in 0..rec.len() {
            let (entry, off) = ring
                .find_entry_offset_for_fpos(prefix + within)
                .ok_or_else(|| TestCaseError::fail(format!("miss at {}", prefix + within)))?;
            prop_assert!(same_record(entry.content(), rec));
            prop_assert_eq!(off, within);
        }
        prefix += rec.len();
    }

    prop_assert_eq!(ring.stream_len(), prefix);
    prop_assert!(ring.find_entry_offset_for_fpos(prefix).is_none());
    prop_assert!(ring.find_entry_offset_for_fpos(prefix + 17).is_none());
    Ok(())
}

fn check_reset<const N: usize>(records: &[Vec<u8>]) -> Result<(), TestCaseError> {
    let (mut ring, _) = fill::<N>(records);
    ring.reset();
    prop_assert!(ring.is_empty());
    prop_assert!(!ring.is_full());
    prop_assert_eq!(ring.write_cursor(), 0);
    prop_assert_eq!(ring.read_cursor(), 0);
    prop_assert!(ring.find_entry_offset_for_fpos(0).is_none());
    Ok(())
}

proptest! {
    #[test]
    fn capacity_is_never_exceeded(records in records_strategy()) {
        check_capacity::<1>(&records)?;
        check_capacity::<2>(&records)?;
        check_capacity::<3>(&records)?;
        check_capacity::<{ record_ring::LOG_CAPACITY }>(&records)?;
    }

    #[test]
    fn eviction_is_fifo(records in records_strategy()) {
        check_eviction_order::<1>(&records)?;
        check_eviction_order::<3>(&records)?;
        check_eviction_order::<{ record_ring::LOG_CAPACITY }>(&records)?;
    }

    #[test]
    fn offsets_resolve_to_unique_entry(records in records_strategy()) {
        check_resolution::<1>(&records)?;
        check_resolution::<2>(&records)?;
        check_resolution::<3>(&records)?;
        check_resolution::<{ record_ring::LOG_CAPACITY }>(&records)?;
    }

    #[test]
    fn reset_is_idempotent_from_any_state(records in records_strategy()) {
        check_reset::<2>(&records)?;
        check_reset::<{ record_ring::LOG_CAPACITY }>(&records)?;
    }
}

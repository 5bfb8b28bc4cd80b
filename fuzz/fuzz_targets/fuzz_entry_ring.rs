#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;

use record_ring::{Entry, EntryRing};

const CAP: usize = 5;

static RECORDS: [&[u8]; 6] = [b"a", b"bb", b"", b"dddd", b"eeeeeeee", b"fff\n"];

// Interprets a byte stream as an operation sequence against `EntryRing`,
// checking every result against a `VecDeque` of record indices.
//
// Byte layout, as `(opcode, operand)` pairs:
//   - 0 → `add_entry(RECORDS[operand % RECORDS.len()])`
//   - 1 → `find_entry_offset_for_fpos(operand)`
//   - 2 → `reset()`
fuzz_target!(|data: &[u8]| {
    let mut ring: EntryRing<'static, CAP> = EntryRing::new();
    let mut model: VecDeque<usize> = VecDeque::new();

    for pair in data.chunks_exact(2) {
        let (opcode, operand) = (pair[0], pair[1] as usize);
        match opcode % 3 {
            0 => {
                let idx = operand % RECORDS.len();
                let evicted = ring.add_entry(Entry::new(RECORDS[idx]));
                model.push_back(idx);
                let model_evicted = if model.len() > CAP {
                    model.pop_front()
                } else {
                    None
                };
                assert_eq!(
                    evicted.map(|e| e.content()),
                    model_evicted.map(|i| RECORDS[i]),
                    "evicted descriptor mismatch"
                );
            }
            1 => {
                let mut start = 0;
                let mut want = None;
                for &i in &model {
                    let len = RECORDS[i].len();
                    if operand >= start && operand < start + len {
                        want = Some((RECORDS[i], operand - start));
                        break;
                    }
                    start += len;
                }
                let got = ring
                    .find_entry_offset_for_fpos(operand)
                    .map(|(e, off)| (e.content(), off));
                assert_eq!(got, want, "lookup mismatch at {operand}");
            }
            _ => {
                ring.reset();
                model.clear();
            }
        }

        assert_eq!(ring.len(), model.len());
        assert_eq!(ring.is_full(), model.len() == CAP);
    }
});

use rustc_hash::FxHashMap;

use crate::path::Pointer;

use super::{
    fingerprint::fingerprint,
    ops::Op,
    rebase::{after_remove, drop_insertion, lift_over_gap},
};

/// Unpaired adds or removes, bucketed by value fingerprint.
///
/// A bucket is a list of slots in buffer order. Its entries share a hash,
/// not necessarily a value, so candidates are confirmed with `==`.
#[derive(Debug, Default)]
struct PendingIndex {
    buckets: FxHashMap<u64, Vec<usize>>,
}

impl PendingIndex {
    fn register(&mut self, key: u64, slot: usize) {
        self.buckets.entry(key).or_default().push(slot);
    }

    fn candidates(&self, key: u64) -> &[usize] {
        self.buckets.get(&key).map_or(&[], Vec::as_slice)
    }

    fn release(&mut self, key: u64, slot: usize) {
        if let Some(bucket) = self.buckets.get_mut(&key) {
            bucket.retain(|&s| s != slot);
            if bucket.is_empty() {
                self.buckets.remove(&key);
            }
        }
    }
}

/// The buffer edits that turn an add/remove pair into a single move.
#[derive(Debug)]
struct Fusion {
    rewritten: Vec<(usize, Op)>,
    /// Either the move, or a tombstone when the pair cancels out.
    replacement: Op,
}

impl Fusion {
    fn commit(self, ops: &mut [Op], earlier: usize, later: usize) {
        for (slot, op) in self.rewritten {
            ops[slot] = op;
        }
        ops[earlier] = Op::Tombstone;
        ops[later] = self.replacement;
    }
}

/// Pairs adds and removes of equal values into moves, in a single scan.
///
/// Returns the number of pairs fused. Operations between the two halves of
/// a pair are rebased so that every pointer in the buffer stays relative to
/// the document right before its own operation.
///
/// Each fusion walks the slots between its two halves, so a buffer with many
/// far-apart pairs costs time quadratic in its length.
pub(super) fn optimize(ops: &mut [Op]) -> usize {
    let mut pending_adds = PendingIndex::default();
    let mut pending_removes = PendingIndex::default();
    let mut fused = 0;

    for slot in 0..ops.len() {
        let (key, is_remove) = match &ops[slot] {
            Op::Remove { value, .. } => (fingerprint(value), true),
            Op::Add { value, .. } => (fingerprint(value), false),
            _ => continue,
        };

        let (partners, own) = if is_remove {
            (&mut pending_adds, &mut pending_removes)
        } else {
            (&mut pending_removes, &mut pending_adds)
        };

        let buffer: &[Op] = ops;
        let found = partners.candidates(key).iter().find_map(|&earlier| {
            if buffer[earlier].value() != buffer[slot].value() {
                return None;
            }
            let fusion = if is_remove {
                add_then_remove(buffer, earlier, slot)
            } else {
                remove_then_add(buffer, earlier, slot)
            }?;
            Some((earlier, fusion))
        });

        match found {
            Some((earlier, fusion)) => {
                tracing::trace!(
                    earlier,
                    later = slot,
                    cancelled = fusion.replacement.is_tombstone(),
                    "fused add/remove pair"
                );
                partners.release(key, earlier);
                fusion.commit(ops, earlier, slot);
                fused += 1;
            }
            None => own.register(key, slot),
        }
    }

    fused
}

/// A remove at `removed` followed by an equal add at `added`.
///
/// The element stays in place until the move at `added` picks it up, so the
/// operations in between see one more element than they were recorded with.
fn remove_then_add(ops: &[Op], removed: usize, added: usize) -> Option<Fusion> {
    let Op::Remove { path: origin, .. } = &ops[removed] else {
        return None;
    };
    let Op::Add {
        path: destination, ..
    } = &ops[added]
    else {
        return None;
    };

    let mut gap = origin.clone();
    let mut rewritten = Vec::new();
    for (slot, op) in ops.iter().enumerate().take(added).skip(removed + 1) {
        if op.is_tombstone() {
            continue;
        }
        rewritten.push((slot, lift_over_gap(op, &mut gap)?));
    }

    let replacement = moved(gap, destination.clone())?;
    Some(Fusion {
        rewritten,
        replacement,
    })
}

/// An add at `added` followed by a remove of an equal value at `removed`.
///
/// The add is dropped, so the operations in between see one element less,
/// and the removed element is moved to where the added one would have been.
fn add_then_remove(ops: &[Op], added: usize, removed: usize) -> Option<Fusion> {
    let Op::Add { path: inserted, .. } = &ops[added] else {
        return None;
    };
    let Op::Remove {
        path: removed_at, ..
    } = &ops[removed]
    else {
        return None;
    };

    let mut target = inserted.clone();
    let mut rewritten = Vec::new();
    for (slot, op) in ops.iter().enumerate().take(removed).skip(added + 1) {
        if op.is_tombstone() {
            continue;
        }
        rewritten.push((slot, drop_insertion(op, &mut target)?));
    }

    // removing exactly what was added
    if *removed_at == target {
        return Some(Fusion {
            rewritten,
            replacement: Op::Tombstone,
        });
    }

    let from = after_remove(removed_at, &target)?;
    let to = after_remove(&target, removed_at)?;
    let replacement = moved(from, to)?;
    Some(Fusion {
        rewritten,
        replacement,
    })
}

fn moved(from: Pointer, to: Pointer) -> Option<Op> {
    if from == to {
        return Some(Op::Tombstone);
    }
    // RFC 6902 rejects moving a location into its own children, judged on
    // the pointer text.
    if from.is_parent_of(&to) {
        return None;
    }
    Some(Op::move_op(from, to))
}

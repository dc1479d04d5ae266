use serde_json::Value;

use crate::path::Pointer;

use super::{AlignmentStrategy, DiffOptions, ops::Op};

/// A run of `len` equal elements starting at `left` in the source array and
/// at `right` in the destination array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Anchor {
    pub(super) left: usize,
    pub(super) right: usize,
    pub(super) len: usize,
}

pub(super) fn diff_array(
    left: &[Value],
    right: &[Value],
    options: &DiffOptions,
    path_pos: &mut Pointer,
    ops: &mut Vec<Op>,
) {
    if left.len().max(right.len()) > options.sequence_alignment_max_length {
        tracing::trace!(
            path = %path_pos,
            left = left.len(),
            right = right.len(),
            "array exceeds the alignment limit, comparing by position"
        );
        diff_positional(left, right, 0, path_pos, ops);
        return;
    }

    diff_aligned(left, right, 0, options.alignment, path_pos, ops);
}

/// Diffs `left` into `right`, both living at `base` in the current array.
fn diff_aligned(
    left: &[Value],
    right: &[Value],
    base: usize,
    strategy: AlignmentStrategy,
    path_pos: &mut Pointer,
    ops: &mut Vec<Op>,
) {
    let Some(anchor) = find_anchor(left, right) else {
        diff_positional(left, right, base, path_pos, ops);
        return;
    };

    let (left_head, left_tail) = (&left[..anchor.left], &left[anchor.left + anchor.len..]);
    let (right_head, right_tail) = (
        &right[..anchor.right],
        &right[anchor.right + anchor.len..],
    );
    // The head is rewritten first. Once it matches `right_head` the anchored
    // run, and with it the tail, sits at destination offsets.
    let tail_base = base + anchor.right + anchor.len;

    match strategy {
        AlignmentStrategy::SingleAnchor => {
            diff_positional(left_head, right_head, base, path_pos, ops);
            diff_positional(left_tail, right_tail, tail_base, path_pos, ops);
        }
        AlignmentStrategy::Recursive => {
            diff_aligned(left_head, right_head, base, strategy, path_pos, ops);
            diff_aligned(left_tail, right_tail, tail_base, strategy, path_pos, ops);
        }
    }
}

/// Finds the longest run of equal elements shared by both arrays.
///
/// Ties go to the run that starts first in `left`, then first in `right`.
pub(super) fn find_anchor(left: &[Value], right: &[Value]) -> Option<Anchor> {
    let mut best: Option<Anchor> = None;
    // run lengths ending at (i - 1, j - 1), shifted by one to avoid underflow
    let mut prev = vec![0usize; right.len() + 1];
    let mut curr = vec![0usize; right.len() + 1];

    for (i, left_item) in left.iter().enumerate() {
        for (j, right_item) in right.iter().enumerate() {
            curr[j + 1] = if left_item == right_item {
                prev[j] + 1
            } else {
                0
            };

            let len = curr[j + 1];
            if len > 0 && best.is_none_or(|b| len > b.len) {
                best = Some(Anchor {
                    left: i + 1 - len,
                    right: j + 1 - len,
                    len,
                });
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Element-by-element diff of two array slices placed at `base`.
///
/// Mismatching positions become a remove followed by an add at the same
/// index; the replace optimizer later narrows such pairs to a nested diff.
fn diff_positional(
    left: &[Value],
    right: &[Value],
    base: usize,
    path_pos: &mut Pointer,
    ops: &mut Vec<Op>,
) {
    for (offset, (left_item, right_item)) in left.iter().zip(right).enumerate() {
        if left_item != right_item {
            path_pos.push_index(base + offset);
            ops.push(Op::remove(path_pos.clone(), left_item.clone()));
            ops.push(Op::add(path_pos.clone(), right_item.clone()));
            path_pos.pop();
        }
    }

    let common = left.len().min(right.len());

    // back to front, so every index is still in range when it is applied
    for offset in (common..left.len()).rev() {
        path_pos.push_index(base + offset);
        ops.push(Op::remove(path_pos.clone(), left[offset].clone()));
        path_pos.pop();
    }

    for (offset, right_item) in right.iter().enumerate().skip(common) {
        path_pos.push_index(base + offset);
        ops.push(Op::add(path_pos.clone(), right_item.clone()));
        path_pos.pop();
    }
}

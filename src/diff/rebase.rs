//! Location arithmetic used when two buffered operations are fused.
//!
//! Every pointer in the buffer is relative to the document as it is right
//! before its own operation runs. Fusing an add and a remove into one move
//! changes what the document looks like for every operation in between, so
//! those operations are rewritten here. Functions return `None` when the
//! rewrite is impossible (an operation touches the element being moved or
//! one of its ancestors); callers then give up on the fusion.

use crate::path::{Pointer, Segment};

use super::ops::Op;

/// If `anchor` addresses an array element and `path` descends through the
/// same array, returns `(depth, anchor index, path index)`.
fn sibling_index(path: &Pointer, anchor: &Pointer) -> Option<(usize, usize, usize)> {
    let (last, parent) = anchor.segments().split_last()?;
    let anchor_index = last.as_index()?;
    let depth = parent.len();
    let path_index = path.segments().get(depth)?.as_index()?;

    path.segments()
        .starts_with(parent)
        .then_some((depth, anchor_index, path_index))
}

fn with_index(path: &Pointer, depth: usize, index: usize) -> Pointer {
    let mut shifted = path.clone();
    shifted.segments_mut()[depth] = Segment::Index(index);
    shifted
}

/// Where `path` ends up once a value has been inserted at `at`.
///
/// Array insertions shift the element at `at` and its later siblings up by
/// one. Object insertions overwrite `at`, so anything below it is gone.
pub(super) fn after_insert(path: &Pointer, at: &Pointer) -> Option<Pointer> {
    match sibling_index(path, at) {
        Some((depth, k, i)) if i >= k => Some(with_index(path, depth, i + 1)),
        Some(_) => Some(path.clone()),
        None if path.starts_with(at) => None,
        None => Some(path.clone()),
    }
}

/// Where `path` ends up once the value at `at` has been removed.
pub(super) fn after_remove(path: &Pointer, at: &Pointer) -> Option<Pointer> {
    if path.starts_with(at) {
        return None;
    }
    match sibling_index(path, at) {
        Some((depth, k, i)) if i > k => Some(with_index(path, depth, i - 1)),
        _ => Some(path.clone()),
    }
}

/// Like [`after_remove`], for a pointer used as an insertion position.
///
/// Inserting at the removed element's own index is inserting in front of it,
/// which stays the same index once it is gone.
fn insertion_after_remove(path: &Pointer, at: &Pointer) -> Option<Pointer> {
    if path == at && matches!(at.last_segment(), Some(Segment::Index(_))) {
        return Some(path.clone());
    }
    after_remove(path, at)
}

/// Where `path` ends up once `op` has been applied.
pub(super) fn follow(path: &Pointer, op: &Op) -> Option<Pointer> {
    match op {
        Op::Add { path: at, .. } => after_insert(path, at),
        Op::Remove { path: at, .. } => after_remove(path, at),
        Op::Replace { path: at, .. } => (!path.starts_with(at)).then(|| path.clone()),
        Op::Move { from, path: to } if path.starts_with(from) => {
            let mut moved = to.clone();
            for segment in &path.segments()[from.len()..] {
                moved.push(segment.clone());
            }
            Some(moved)
        }
        Op::Move { from, path: to } => after_insert(&after_remove(path, from)?, to),
        Op::Tombstone => Some(path.clone()),
    }
}

/// Rewrites `op` for a document in which the element at `gap` has not been
/// removed yet, and advances `gap` past it.
///
/// `op` was recorded after the removal of that element. The element must
/// survive `op` untouched, otherwise `None` is returned.
pub(super) fn lift_over_gap(op: &Op, gap: &mut Pointer) -> Option<Op> {
    if let Op::Move { from, path } = op {
        let from = after_insert(from, gap)?;
        let mid = after_remove(gap, &from)?;
        let path = after_insert(path, &mid)?;
        *gap = after_insert(&mid, &path)?;
        return Some(Op::move_op(from, path));
    }

    let lifted = op.map_paths(|p| after_insert(p, gap))?;
    *gap = follow(gap, &lifted)?;
    Some(lifted)
}

/// Rewrites `op` for a document in which the element inserted at `target`
/// does not exist, and advances `target` past it.
///
/// Fails when `op` reads or writes inside the inserted element or removes
/// one of its ancestors.
pub(super) fn drop_insertion(op: &Op, target: &mut Pointer) -> Option<Op> {
    let dropped = match op {
        Op::Add { path, value } => Op::add(insertion_after_remove(path, target)?, value.clone()),
        Op::Remove { path, value } => Op::remove(after_remove(path, target)?, value.clone()),
        Op::Replace { path, value } => Op::replace(after_remove(path, target)?, value.clone()),
        Op::Move { from, path } => {
            let from_dropped = after_remove(from, target)?;
            let mid = after_remove(target, from)?;
            let path_dropped = insertion_after_remove(path, &mid)?;
            *target = after_insert(&mid, path)?;
            return Some(Op::move_op(from_dropped, path_dropped));
        }
        Op::Tombstone => Op::Tombstone,
    };
    *target = follow(target, op)?;
    Some(dropped)
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use crate::diff::test_util::indexed;

    use super::*;

    #[test]
    fn insert_shifts_later_siblings() {
        check!(after_insert(&indexed("/a/2"), &indexed("/a/1")) == Some(indexed("/a/3")));
        check!(after_insert(&indexed("/a/1/x"), &indexed("/a/1")) == Some(indexed("/a/2/x")));
        check!(after_insert(&indexed("/a/0"), &indexed("/a/1")) == Some(indexed("/a/0")));
    }

    #[test]
    fn insert_elsewhere_leaves_path_alone() {
        check!(after_insert(&indexed("/b/2"), &indexed("/a/1")) == Some(indexed("/b/2")));
        check!(after_insert(&indexed("/a"), &indexed("/a/1")) == Some(indexed("/a")));
    }

    #[test]
    fn keyed_insert_overwrites_descendants() {
        check!(after_insert(&indexed("/a/b"), &indexed("/a")) == None);
        check!(after_insert(&indexed("/a"), &indexed("/a")) == None);
        check!(after_insert(&indexed("/ab"), &indexed("/a")) == Some(indexed("/ab")));
    }

    #[test]
    fn remove_shifts_later_siblings_down() {
        check!(after_remove(&indexed("/3"), &indexed("/1")) == Some(indexed("/2")));
        check!(after_remove(&indexed("/0/k"), &indexed("/1")) == Some(indexed("/0/k")));
        check!(after_remove(&indexed("/1/k"), &indexed("/1")) == None);
    }

    #[test]
    fn follow_through_move_relocates_the_subtree() {
        let op = Op::move_op(indexed("/a/0"), indexed("/b"));

        check!(follow(&indexed("/a/0/x"), &op) == Some(indexed("/b/x")));
        check!(follow(&indexed("/a/1"), &op) == Some(indexed("/a/0")));
    }

    #[test]
    fn follow_through_replace_of_ancestor_fails() {
        let op = Op::replace(indexed("/a"), json!(1));

        check!(follow(&indexed("/a/0"), &op) == None);
        check!(follow(&indexed("/b"), &op) == Some(indexed("/b")));
    }

    #[test]
    fn lift_shifts_ops_at_or_after_the_gap() {
        let mut gap = indexed("/0");
        let op = Op::add(indexed("/1"), json!("q"));

        check!(lift_over_gap(&op, &mut gap) == Some(Op::add(indexed("/2"), json!("q"))));
        check!(gap == indexed("/0"));
    }

    #[test]
    fn lift_tracks_the_gap_through_earlier_removals() {
        let mut gap = indexed("/2");
        let op = Op::remove(indexed("/0"), json!("a"));

        check!(lift_over_gap(&op, &mut gap) == Some(op.clone()));
        check!(gap == indexed("/1"));
    }

    #[test]
    fn lift_rejects_reused_member_names() {
        let mut gap = indexed("/k");
        let op = Op::add(indexed("/k"), json!(1));

        check!(lift_over_gap(&op, &mut gap) == None);
    }

    #[test]
    fn drop_insertion_shifts_later_siblings_down() {
        let mut target = indexed("/1");
        let op = Op::remove(indexed("/3"), json!("z"));

        check!(drop_insertion(&op, &mut target) == Some(Op::remove(indexed("/2"), json!("z"))));
        check!(target == indexed("/1"));
    }

    #[test]
    fn drop_insertion_keeps_inserts_in_front_of_the_element() {
        let mut target = indexed("/1");
        let op = Op::add(indexed("/1"), json!("y"));

        check!(drop_insertion(&op, &mut target) == Some(op.clone()));
        check!(target == indexed("/2"));
    }

    #[test]
    fn drop_insertion_rejects_edits_inside_the_element() {
        let mut target = indexed("/1");
        let op = Op::replace(indexed("/1/x"), json!(0));

        check!(drop_insertion(&op, &mut target) == None);
    }
}

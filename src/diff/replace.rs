use super::{DiffOptions, engine, ops::Op};

/// Replaces each remove directly followed by an add at the same location
/// with the nested diff of the two values.
///
/// Tombstones are dropped on the way. Returns the number of pairs split.
pub(super) fn optimize(ops: &mut Vec<Op>, options: &DiffOptions) -> usize {
    let mut output = Vec::with_capacity(ops.len());
    let mut replaced = 0;
    let mut survivors = std::mem::take(ops)
        .into_iter()
        .filter(|op| !op.is_tombstone())
        .peekable();

    while let Some(op) = survivors.next() {
        if let Op::Remove { path, value: old } = &op
            && let Some(Op::Add {
                path: next_path,
                value: new,
            }) = survivors.peek()
            && next_path == path
        {
            let mut path_pos = path.clone();
            engine::diff_recursive(old, new, options, &mut path_pos, &mut output);
            survivors.next();
            replaced += 1;
            continue;
        }
        output.push(op);
    }

    *ops = output;
    replaced
}

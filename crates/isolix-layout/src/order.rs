//! Drag-and-drop reordering of the panel strip.

/// Remove the item at `from` and insert it at `to`.
///
/// `to` is the index in the list after removal, matching a splice-based
/// drag and drop. Out-of-range indices and no-op moves return `false`.
pub fn splice_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() || from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

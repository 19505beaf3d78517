use std::collections::HashSet;

use uuid::Uuid;

use crate::document::LineItem;

/// Assigns fresh UUIDs to line items whose id is missing, empty, or a
/// duplicate of an earlier item in the same document.
///
/// Invariant upheld: after this call every line item carries a unique,
/// non-empty identifier. Items that already hold a unique id keep it,
/// so client-assigned ids survive a round trip through the server.
pub fn ensure_line_item_ids(items: &mut [LineItem]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    for item in items.iter_mut() {
        if item.id.is_empty() || !seen.insert(item.id.clone()) {
            item.id = Uuid::new_v4().to_string();
            seen.insert(item.id.clone());
        }
    }
}

/// Replaces every line-item id with a fresh UUID.
///
/// Used on duplication paths (contract copy, template instantiation)
/// where the clone must not share identity with the source.
pub fn regenerate_line_item_ids(items: &mut [LineItem]) {
    for item in items.iter_mut() {
        item.id = Uuid::new_v4().to_string();
    }
}

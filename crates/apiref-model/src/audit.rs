//! Read-only consistency checks over a content tree.

use std::collections::HashMap;

use crate::content::ContentItem;

/// Ids that occur more than once anywhere in the tree, in first-seen order.
///
/// Duplicate ids make deep links ambiguous. Rendering does not repair them;
/// this only reports.
#[must_use]
pub fn duplicate_ids(items: &[ContentItem]) -> Vec<&str> {
    fn walk<'a>(
        items: &'a [ContentItem],
        seen: &mut HashMap<&'a str, usize>,
        order: &mut Vec<&'a str>,
    ) {
        for item in items {
            let count = seen.entry(item.id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(item.id.as_str());
            }
            walk(item.children(), seen, order);
        }
    }

    let mut seen = HashMap::new();
    let mut duplicates = Vec::new();
    walk(items, &mut seen, &mut duplicates);
    duplicates
}

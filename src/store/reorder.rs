//! Reorder-by-id-sequence primitive.
//!
//! Shared by swimlane, sub-item and sub-stage reordering: the caller
//! passes the complete id set in its new display order.

/// Rebuild `entries` to match `order`, assigning each entry its 0-based
/// index as the new order value.
///
/// Entries whose id is missing from `order` are dropped; ids matching no
/// entry are skipped. Callers therefore pass the full id set.
pub(crate) fn reorder_by_ids<T, Id>(
    entries: Vec<T>,
    order: &[Id],
    id_of: impl Fn(&T) -> &Id,
    set_order: impl Fn(&mut T, u32),
) -> Vec<T>
where
    Id: PartialEq,
{
    let mut remaining: Vec<Option<T>> = entries.into_iter().map(Some).collect();
    let mut reordered = Vec::with_capacity(order.len());
    for id in order {
        let found = remaining
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|e| id_of(e) == id));
        if let Some(slot) = found {
            if let Some(mut entry) = slot.take() {
                set_order(&mut entry, reordered.len() as u32);
                reordered.push(entry);
            }
        }
    }
    reordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        order: u32,
    }

    fn row(id: &'static str, order: u32) -> Row {
        Row { id, order }
    }

    fn apply(entries: Vec<Row>, order: &[&'static str]) -> Vec<Row> {
        reorder_by_ids(entries, order, |r| &r.id, |r, o| r.order = o)
    }

    #[test]
    fn assigns_index_order() {
        let rows = apply(vec![row("a", 0), row("b", 1), row("c", 2)], &["c", "a", "b"]);
        assert_eq!(rows, vec![row("c", 0), row("a", 1), row("b", 2)]);
    }

    #[test]
    fn drops_ids_missing_from_sequence() {
        let rows = apply(vec![row("a", 0), row("b", 1), row("c", 2)], &["c", "a"]);
        assert_eq!(rows, vec![row("c", 0), row("a", 1)]);
    }

    #[test]
    fn skips_unknown_ids() {
        let rows = apply(vec![row("a", 0)], &["ghost", "a"]);
        assert_eq!(rows, vec![row("a", 0)]);
    }

    #[test]
    fn duplicate_ids_consume_one_entry_each() {
        let rows = apply(vec![row("a", 0), row("b", 1)], &["a", "a", "b"]);
        assert_eq!(rows, vec![row("a", 0), row("b", 1)]);
    }
}

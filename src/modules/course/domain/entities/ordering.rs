use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::shared::errors::{AppError, AppResult};

/// Fails on the first value seen twice.
pub(crate) fn ensure_distinct<T, I>(label: &str, values: I) -> AppResult<()>
where
    T: Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        if seen.contains(&value) {
            return Err(AppError::ValidationError(format!(
                "duplicate {} '{}'",
                label, value
            )));
        }
        seen.insert(value);
    }
    Ok(())
}

/// Rebuild `items` in the order given by `ordered_ids`, assigning positions
/// 1..=n. The ids must name every item exactly once; on failure `items` is
/// left as it was.
pub(crate) fn reorder_by_ids<T: Clone>(
    label: &str,
    items: &[T],
    ordered_ids: &[String],
    id_of: impl Fn(&T) -> &str,
    set_order: impl Fn(&mut T, i32),
) -> AppResult<Vec<T>> {
    if ordered_ids.len() != items.len() {
        return Err(AppError::ValidationError(format!("{} count mismatch", label)));
    }
    ensure_distinct(&format!("{} id", label), ordered_ids.iter())?;

    let mut reordered = Vec::with_capacity(items.len());
    for (position, id) in ordered_ids.iter().enumerate() {
        let Some(item) = items.iter().find(|item| id_of(item) == id) else {
            return Err(AppError::NotFound(format!(
                "{} with id '{}' not found",
                label, id
            )));
        };
        let mut item = item.clone();
        set_order(&mut item, position as i32 + 1);
        reordered.push(item);
    }
    Ok(reordered)
}

//! Partitioner
//!
//! Splits the collection into the "active" and "completed" columns.

use crate::domain::Item;

/// Borrowed view of both columns, each in collection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub active: Vec<&'a Item>,
    pub completed: Vec<&'a Item>,
}

impl Partition<'_> {
    /// Clone both columns out of the borrowed collection
    pub fn into_owned(self) -> (Vec<Item>, Vec<Item>) {
        (
            self.active.into_iter().cloned().collect(),
            self.completed.into_iter().cloned().collect(),
        )
    }
}

pub fn partition(items: &[Item]) -> Partition<'_> {
    let (completed, active): (Vec<&Item>, Vec<&Item>) =
        items.iter().partition(|item| item.completed);
    Partition { active, completed }
}

//! Domain Layer
//!
//! Entities exchanged with the remote todo service.
//! No transport or UI concerns live here.

mod draft;
mod item;

pub use draft::Draft;
pub use item::{CompletionPatch, Item, ItemId};

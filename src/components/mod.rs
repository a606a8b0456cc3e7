//! UI Components
//!
//! Leptos components of the todo board.

mod todo_card;
mod todo_column;
mod todo_form;

pub use todo_card::{card_dom_id, TodoCard};
pub use todo_column::{Column, TodoColumn};
pub use todo_form::TodoForm;

//! Console pages.
//!
//! Each page is a [`ResourcePage`]: a list fetcher rendered as a text table,
//! create/update/delete mutations, and a dialog reducer that keeps the form
//! open with an alert when the server rejects a save.

mod columns;
pub mod dialog;
pub mod forms;
mod page;
mod pages;
pub mod table;

pub use dialog::{DialogMode, DialogState};
pub use forms::{FormError, Validate};
pub use page::{Access, ConsolePage, PageError, ResourcePage};
pub use pages::RENTAL_REJECTED;
pub use table::{PageView, TableView, Tabular, EMPTY_MESSAGE};

use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogIntent {
    OpenCreate,
    OpenEdit(i64),
    Submit,
    /// Submit failed; stay open and show the alert.
    Failed(String),
    /// Submit succeeded or the user cancelled.
    Close,
}

impl Intent for DialogIntent {}

use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        mode: DialogMode,
        /// Message from the last failed submit; cleared on the next attempt.
        alert: Option<String>,
        submitting: bool,
    },
}

impl UiState for DialogState {}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }

    pub fn alert(&self) -> Option<&str> {
        match self {
            Self::Open { alert, .. } => alert.as_deref(),
            Self::Closed => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open { submitting: true, .. })
    }
}

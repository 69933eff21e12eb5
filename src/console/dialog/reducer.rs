use super::{DialogIntent, DialogMode, DialogState};
use crate::mvi::Reducer;

pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::OpenCreate => DialogState::Open {
                mode: DialogMode::Create,
                alert: None,
                submitting: false,
            },
            DialogIntent::OpenEdit(id) => DialogState::Open {
                mode: DialogMode::Edit(id),
                alert: None,
                submitting: false,
            },
            DialogIntent::Submit => match state {
                DialogState::Open { mode, .. } => DialogState::Open {
                    mode,
                    alert: None,
                    submitting: true,
                },
                closed => closed,
            },
            DialogIntent::Failed(message) => match state {
                DialogState::Open { mode, .. } => DialogState::Open {
                    mode,
                    alert: Some(message),
                    submitting: false,
                },
                closed => closed,
            },
            DialogIntent::Close => DialogState::Closed,
        }
    }
}

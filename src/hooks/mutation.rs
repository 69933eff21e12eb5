use std::fmt::Display;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{error_message, AsyncIntent, BoxFuture};
use crate::api::ApiError;
use crate::mvi::{Reducer, UiState};

/// State of one write operation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for MutationState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for MutationState<T> {}

pub struct MutationReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for MutationReducer<T> {
    type State = MutationState<T>;
    type Intent = AsyncIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AsyncIntent::Started => MutationState {
                data: state.data,
                loading: true,
                error: None,
            },
            AsyncIntent::Succeeded(data) => MutationState {
                data: Some(data),
                loading: false,
                error: None,
            },
            // The last successful result survives a failed retry.
            AsyncIntent::Failed(message) => MutationState {
                data: state.data,
                loading: false,
                error: Some(message),
            },
        }
    }
}

type Operation<P, T, E> = Arc<dyn Fn(P) -> BoxFuture<Result<T, E>> + Send + Sync>;

/// Tracks a parameterized write invoked on demand.
pub struct Mutation<P, T, E = ApiError> {
    operation: Operation<P, T, E>,
    state: Arc<Mutex<MutationState<T>>>,
}

impl<P, T, E> Clone for Mutation<P, T, E> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            state: self.state.clone(),
        }
    }
}

impl<P, T, E> Mutation<P, T, E>
where
    P: Send + 'static,
    T: Clone + PartialEq + Send + 'static,
    E: Display + Send + 'static,
{
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let operation: Operation<P, T, E> =
            Arc::new(move |params: P| -> BoxFuture<Result<T, E>> { Box::pin(operation(params)) });
        Self {
            operation,
            state: Arc::new(Mutex::new(MutationState::default())),
        }
    }

    /// Run the write.
    ///
    /// The outcome is recorded in the state and also handed back unchanged,
    /// so callers can chain a refetch or keep a dialog open on failure.
    pub async fn execute(&self, params: P) -> Result<T, E> {
        self.dispatch(AsyncIntent::Started);

        match (self.operation)(params).await {
            Ok(result) => {
                self.dispatch(AsyncIntent::Succeeded(result.clone()));
                Ok(result)
            }
            Err(err) => {
                let message = error_message(&err);
                tracing::debug!(error = %message, "Mutation failed");
                self.dispatch(AsyncIntent::Failed(message));
                Err(err)
            }
        }
    }

    fn dispatch(&self, intent: AsyncIntent<T>) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = MutationReducer::reduce(current, intent);
    }

    pub fn state(&self) -> MutationState<T> {
        self.state.lock().clone()
    }

    pub fn loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.lock().data.clone()
    }
}

use std::fmt::Display;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{error_message, AsyncIntent, BoxFuture};
use crate::api::ApiError;
use crate::mvi::{Reducer, UiState};

/// State of one read operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchState<T> {}

pub struct FetchReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchState<T>;
    type Intent = AsyncIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Previous data stays visible while reloading.
            AsyncIntent::Started => FetchState {
                data: state.data,
                loading: true,
                error: None,
            },
            AsyncIntent::Succeeded(data) => FetchState {
                data: Some(data),
                loading: false,
                error: None,
            },
            AsyncIntent::Failed(message) => FetchState {
                data: None,
                loading: false,
                error: Some(message),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Run the operation on [`Fetcher::mount`]. Defaults to `true`.
    pub immediate: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { immediate: true }
    }
}

impl FetchOptions {
    pub fn deferred() -> Self {
        Self { immediate: false }
    }
}

type Operation<T, E> = Arc<dyn Fn() -> BoxFuture<Result<T, E>> + Send + Sync>;

/// Tracks a single read operation.
///
/// Clones share state. Overlapping [`refetch`](Fetcher::refetch) calls are
/// not de-duplicated, but only the most recently started call may write its
/// outcome; earlier completions are dropped.
pub struct Fetcher<T, E = ApiError> {
    operation: Operation<T, E>,
    state: Arc<Mutex<FetchState<T>>>,
    generation: Arc<AtomicU64>,
    calls: Arc<AtomicUsize>,
    options: FetchOptions,
}

impl<T, E> Clone for Fetcher<T, E> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            state: self.state.clone(),
            generation: self.generation.clone(),
            calls: self.calls.clone(),
            options: self.options,
        }
    }
}

impl<T, E> Fetcher<T, E>
where
    T: Clone + PartialEq + Send + 'static,
    E: Display + Send + 'static,
{
    /// Create the fetcher without running anything.
    ///
    /// The initial `loading` flag equals `options.immediate`, matching a view
    /// that is about to load on mount.
    pub fn new<F, Fut>(operation: F, options: FetchOptions) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let operation: Operation<T, E> =
            Arc::new(move || -> BoxFuture<Result<T, E>> { Box::pin(operation()) });
        Self {
            operation,
            state: Arc::new(Mutex::new(FetchState {
                data: None,
                loading: options.immediate,
                error: None,
            })),
            generation: Arc::new(AtomicU64::new(0)),
            calls: Arc::new(AtomicUsize::new(0)),
            options,
        }
    }

    /// Run the initial load if the fetcher is immediate.
    pub async fn mount(&self) {
        if self.options.immediate {
            self.refetch().await;
        }
    }

    /// Run the operation and record its outcome.
    pub async fn refetch(&self) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.dispatch(AsyncIntent::Started);

        let intent = match (self.operation)().await {
            Ok(data) => AsyncIntent::Succeeded(data),
            Err(err) => {
                let message = error_message(&err);
                tracing::debug!(error = %message, "Fetch failed");
                AsyncIntent::Failed(message)
            }
        };

        let mut guard = self.state.lock();
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "Dropping stale fetch result");
            return;
        }
        let current = std::mem::take(&mut *guard);
        *guard = FetchReducer::reduce(current, intent);
    }

    fn dispatch(&self, intent: AsyncIntent<T>) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = FetchReducer::reduce(current, intent);
    }

    pub fn state(&self) -> FetchState<T> {
        self.state.lock().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.lock().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    /// How many times the operation has been started.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

//! List pages: a fetcher for the table, mutations for the dialog, and the
//! dialog state machine tying them together.

use chrono::NaiveDate;
use parking_lot::Mutex;
use thiserror::Error;

use super::dialog::{DialogIntent, DialogMode, DialogReducer, DialogState};
use super::forms::{FormError, Validate};
use super::table::{PageView, Tabular};
use crate::api::ApiError;
use crate::hooks::{BoxFuture, FetchOptions, Fetcher, Mutation};
use crate::mvi::Reducer;
use crate::resources::{Resource, ResourceClient};
use crate::session::{AccessError, Session};

/// Who may use a page or its write actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Everyone,
    AdminOnly,
}

impl Access {
    pub fn check(self, session: &Session, area: &str) -> Result<(), AccessError> {
        match self {
            Access::Everyone => Ok(()),
            Access::AdminOnly => session.require_admin(area),
        }
    }
}

/// Per-resource page behaviour.
pub trait ConsolePage: Resource + Sized {
    const TITLE: &'static str;
    const READ: Access;
    /// Edit and delete.
    const WRITE: Access;
    /// Opening the create dialog. Defaults to [`WRITE`](Self::WRITE).
    const CREATE: Access = Self::WRITE;

    /// Alert shown in the dialog when the server rejects a save.
    fn save_failed_alert(mode: DialogMode) -> String {
        match mode {
            DialogMode::Create => format!("Could not create the {}.", Self::LABEL),
            DialogMode::Edit(id) => format!("Could not update {} #{}.", Self::LABEL, id),
        }
    }

    /// Fill in fields the session determines before validation.
    fn prepare(_record: &mut Self::Record, _session: &Session) {}

    /// The list operation behind the page's table.
    fn load(
        client: &ResourceClient<Self>,
        _session: &Session,
    ) -> BoxFuture<Result<Vec<Self::Record>, ApiError>> {
        let client = client.clone();
        Box::pin(async move { client.list().await })
    }
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no dialog is open")]
    NoDialog,
}

pub struct ResourcePage<P: ConsolePage> {
    client: ResourceClient<P>,
    session: Session,
    list: Fetcher<Vec<P::Record>>,
    create: Mutation<P::Record, P::Record>,
    update: Mutation<(i64, P::Record), P::Record>,
    remove: Mutation<i64, ()>,
    dialog: Mutex<DialogState>,
    today: Option<NaiveDate>,
}

impl<P> ResourcePage<P>
where
    P: ConsolePage,
    P::Record: Tabular + Validate,
{
    /// Build the page for `session`. Nothing is fetched until [`mount`](Self::mount).
    pub fn open(
        client: ResourceClient<P>,
        session: Session,
        options: FetchOptions,
    ) -> Result<Self, AccessError> {
        P::READ.check(&session, P::TITLE)?;

        let list = {
            let client = client.clone();
            let session = session.clone();
            Fetcher::new(move || P::load(&client, &session), options)
        };
        let create = {
            let client = client.clone();
            Mutation::new(move |record: P::Record| {
                let client = client.clone();
                async move { client.create(&record).await }
            })
        };
        let update = {
            let client = client.clone();
            Mutation::new(move |(id, record): (i64, P::Record)| {
                let client = client.clone();
                async move { client.update(id, &record).await }
            })
        };
        let remove = {
            let client = client.clone();
            Mutation::new(move |id: i64| {
                let client = client.clone();
                async move { client.delete(id).await }
            })
        };

        Ok(Self {
            client,
            session,
            list,
            create,
            update,
            remove,
            dialog: Mutex::new(DialogState::Closed),
            today: None,
        })
    }

    /// Pin the date form checks compare against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn client(&self) -> &ResourceClient<P> {
        &self.client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list(&self) -> &Fetcher<Vec<P::Record>> {
        &self.list
    }

    pub async fn mount(&self) {
        self.list.mount().await;
    }

    pub async fn refetch(&self) {
        self.list.refetch().await;
    }

    pub fn view(&self) -> PageView {
        PageView::from_state(&self.list.state())
    }

    pub fn records(&self) -> Vec<P::Record> {
        self.list.data().unwrap_or_default()
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog.lock().clone()
    }

    fn dispatch(&self, intent: DialogIntent) {
        let mut guard = self.dialog.lock();
        let current = std::mem::take(&mut *guard);
        *guard = DialogReducer::reduce(current, intent);
    }

    pub fn open_create(&self) -> Result<(), AccessError> {
        P::CREATE.check(&self.session, P::TITLE)?;
        self.dispatch(DialogIntent::OpenCreate);
        Ok(())
    }

    pub fn open_edit(&self, id: i64) -> Result<(), AccessError> {
        P::WRITE.check(&self.session, P::TITLE)?;
        self.dispatch(DialogIntent::OpenEdit(id));
        Ok(())
    }

    pub fn cancel(&self) {
        self.dispatch(DialogIntent::Close);
    }

    /// Save the dialog's record.
    ///
    /// On success the dialog closes and the list refetches. On failure the
    /// dialog stays open with an alert and the error is returned.
    pub async fn submit(&self, mut record: P::Record) -> Result<P::Record, PageError> {
        let mode = self.dialog().mode().ok_or(PageError::NoDialog)?;

        P::prepare(&mut record, &self.session);
        if let Err(e) = record.validate(self.today(), mode) {
            tracing::debug!(page = P::TITLE, error = %e, "Form rejected");
            self.dispatch(DialogIntent::Failed(e.to_string()));
            return Err(e.into());
        }

        self.dispatch(DialogIntent::Submit);
        let result = match mode {
            DialogMode::Create => self.create.execute(record).await,
            DialogMode::Edit(id) => self.update.execute((id, record)).await,
        };

        match result {
            Ok(saved) => {
                self.dispatch(DialogIntent::Close);
                self.list.refetch().await;
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(page = P::TITLE, error = %e, "Save failed");
                self.dispatch(DialogIntent::Failed(P::save_failed_alert(mode)));
                Err(e.into())
            }
        }
    }

    /// Delete a record and refetch the list.
    pub async fn delete(&self, id: i64) -> Result<(), PageError> {
        P::WRITE.check(&self.session, P::TITLE)?;
        self.remove.execute(id).await?;
        self.list.refetch().await;
        Ok(())
    }

    /// Loading flag of whichever write is in flight.
    pub fn saving(&self) -> bool {
        self.create.loading() || self.update.loading() || self.remove.loading()
    }
}

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{BankAccountAction, Cli, Command, Crud, PaymentAction, RentalAction, SignupArgs, VehicleAction};
use crate::api::{ApiClient, ApiError, FileUpload};
use crate::config::{Config, ConfigError};
use crate::console::{ConsolePage, PageError, PageView, ResourcePage, TableView, Tabular, Validate};
use crate::hooks::{FetchOptions, Fetcher};
use crate::resources::{
    AuthClient, BankAccounts, Branches, Customers, MaintenanceRecord, Payment,
    Payments, Rentals, Resource, ResourceClient, SignupRequest, Staff, Vehicles,
};
use crate::session::{AccessError, Session, SessionError, SessionStore};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read '{path}': {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page rendered an error or a dialog refused a save.
    #[error("{0}")]
    Rejected(String),
}

struct Context {
    api: ApiClient,
    store: SessionStore,
}

impl Context {
    fn session(&self) -> Result<Session, CliError> {
        Ok(self.store.require()?)
    }

    fn client<R: Resource>(&self, session: &Session) -> ResourceClient<R> {
        ResourceClient::new(self.api.clone().with_session(session))
    }
}

/// Execute one parsed command against the backend.
pub async fn run(cli: Cli, mut config: Config) -> Result<(), CliError> {
    if let Some(url) = cli.base_url {
        config.api.base_url = url;
        config.validate()?;
    }
    tracing::debug!(base_url = %config.api.base_url, "Using backend");

    let ctx = Context {
        api: ApiClient::new(&config.api)?,
        store: SessionStore::new(config.session_path()),
    };

    match cli.command {
        Command::Login { username, password } => {
            let session = AuthClient::new(ctx.api.clone())
                .login(&username, &password)
                .await?;
            ctx.store.save(&session)?;
            println!("Signed in as {} ({})", session.display_name(), session.role);
        }
        Command::Logout => {
            ctx.store.clear()?;
            println!("Signed out");
        }
        Command::Whoami => match ctx.store.load()? {
            Some(session) => {
                println!("{} ({})", session.display_name(), session.role);
                println!("user id: {}", session.user_id);
                if let Some(id) = session.customer_id {
                    println!("customer id: {}", id);
                }
            }
            None => println!("Not signed in"),
        },
        Command::Signup(args) => {
            let message = AuthClient::new(ctx.api.clone())
                .signup(&signup_request(args))
                .await?;
            println!("{}", message);
        }
        Command::Vehicles { action } => {
            let session = ctx.session()?;
            match action {
                VehicleAction::Crud(crud) => run_crud::<Vehicles>(&ctx, session, crud).await?,
                VehicleAction::Available => {
                    let client = ctx.client::<Vehicles>(&session);
                    let fetcher = Fetcher::new(
                        move || {
                            let client = client.clone();
                            async move { client.available().await }
                        },
                        FetchOptions::default(),
                    );
                    fetcher.mount().await;
                    show(PageView::from_view_state(&fetcher.state(), Vehicles::VIEW_COLUMNS))?;
                }
            }
        }
        Command::Customers { action } => run_crud::<Customers>(&ctx, ctx.session()?, action).await?,
        Command::Staff { action } => run_crud::<Staff>(&ctx, ctx.session()?, action).await?,
        Command::Branches { action } => run_crud::<Branches>(&ctx, ctx.session()?, action).await?,
        Command::Maintenance { action } => {
            run_crud::<MaintenanceRecord>(&ctx, ctx.session()?, action).await?
        }
        Command::BankAccounts { action } => {
            let session = ctx.session()?;
            match action {
                BankAccountAction::Crud(crud) => run_crud::<BankAccounts>(&ctx, session, crud).await?,
                BankAccountAction::Active => {
                    let accounts = ctx.client::<BankAccounts>(&session).active().await?;
                    show_records(&accounts)?;
                }
            }
        }
        Command::Rentals { action } => run_rentals(&ctx, ctx.session()?, action).await?,
        Command::Payments { action } => run_payments(&ctx, ctx.session()?, action).await?,
        Command::Audit => {
            let session = ctx.session()?;
            session.require_admin("Audit")?;
            let entries = ctx.client::<Rentals>(&session).audit().await?;
            show_records(&entries)?;
        }
    }

    Ok(())
}

async fn run_crud<P>(ctx: &Context, session: Session, crud: Crud) -> Result<(), CliError>
where
    P: ConsolePage,
    P::Record: Tabular + Validate,
{
    let client = ctx.client::<P>(&session);
    let page = ResourcePage::<P>::open(client, session, FetchOptions::default())?;

    match crud {
        Crud::List => {
            page.mount().await;
            show(page.view())?;
        }
        Crud::Get { id } => {
            let record = page.client().get(id).await?;
            print_json(&record)?;
        }
        Crud::Create { json } => {
            page.open_create()?;
            let record = parse_json_arg(&json)?;
            let saved = submit(&page, record).await?;
            print_json(&saved)?;
        }
        Crud::Update { id, json } => {
            page.open_edit(id)?;
            let record = parse_json_arg(&json)?;
            let saved = submit(&page, record).await?;
            print_json(&saved)?;
        }
        Crud::Delete { id } => {
            page.delete(id).await?;
            println!("Deleted {} #{}", P::LABEL, id);
        }
    }
    Ok(())
}

/// Submit through the page so a refused save surfaces the dialog alert.
async fn submit<P>(page: &ResourcePage<P>, record: P::Record) -> Result<P::Record, CliError>
where
    P: ConsolePage,
    P::Record: Tabular + Validate,
{
    match page.submit(record).await {
        Ok(saved) => Ok(saved),
        Err(e) => match page.dialog().alert() {
            Some(alert) => {
                tracing::debug!(error = %e, "Save refused");
                Err(CliError::Rejected(alert.to_string()))
            }
            None => Err(e.into()),
        },
    }
}

async fn run_rentals(ctx: &Context, session: Session, action: RentalAction) -> Result<(), CliError> {
    let client = ctx.client::<Rentals>(&session);
    match action {
        RentalAction::Crud(crud) => run_crud::<Rentals>(ctx, session, crud).await?,
        RentalAction::Approve { id } => {
            session.require_admin("Rentals")?;
            show_records(&[client.approve(id).await?])?;
        }
        RentalAction::Reject { id } => {
            session.require_admin("Rentals")?;
            show_records(&[client.reject(id).await?])?;
        }
        RentalAction::Complete { id } => {
            session.require_admin("Rentals")?;
            show_records(&[client.complete(id).await?])?;
        }
        RentalAction::Active => {
            session.require_admin("Rentals")?;
            let rows = client.active_view().await?;
            println!("{}", TableView::from_view(Rentals::VIEW_COLUMNS, &rows));
        }
        RentalAction::Mine => {
            let rentals = client.by_user(session.customer_key()).await?;
            show_records(&rentals)?;
        }
        RentalAction::Quote { vehicle, from, to } => {
            let amount = client.calculate_amount(vehicle, from, to).await?;
            println!("{:.2}", amount);
        }
        RentalAction::UploadProof { id, file } => {
            let upload = FileUpload::from_path(&file).await?;
            client.upload_proof(id, upload).await?;
            println!("Uploaded {} to rental #{}", file.display(), id);
        }
    }
    Ok(())
}

async fn run_payments(ctx: &Context, session: Session, action: PaymentAction) -> Result<(), CliError> {
    let client = ctx.client::<Payments>(&session);
    match action {
        PaymentAction::Crud(crud) => run_crud::<Payments>(ctx, session, crud).await?,
        PaymentAction::Status { id, status, notes } => {
            session.require_admin("Payments")?;
            let payment = client.update_status(id, status, notes).await?;
            show_records(&[payment])?;
        }
        PaymentAction::Submit { json, slip } => {
            let payment: Payment = parse_json_arg(&json)?;
            let upload = FileUpload::from_path(&slip).await?;
            let created = client.submit_with_slip(&payment, upload).await?;
            print_json(&created)?;
        }
        PaymentAction::UploadSlip { id, file } => {
            let upload = FileUpload::from_path(&file).await?;
            client.upload_slip(id, upload).await?;
            println!("Uploaded {} to payment #{}", file.display(), id);
        }
        PaymentAction::DownloadSlip { id, dir } => {
            let download = client.download_slip(id).await?;
            let path = download.save_to(&dir).await?;
            println!("Saved {}", path.display());
        }
    }
    Ok(())
}

fn signup_request(args: SignupArgs) -> SignupRequest {
    SignupRequest {
        username: args.username,
        password: args.password,
        role: args.role,
        full_name: args.full_name,
        nic_passport_no: args.nic,
        phone_no: args.phone,
        email: args.email,
        address: args.address,
        license_no: args.license,
    }
}

/// Print a page; a page in its error state fails the command.
fn show(view: PageView) -> Result<(), CliError> {
    print!("{}", view);
    match view {
        PageView::Error(message) => Err(CliError::Rejected(message)),
        _ => Ok(()),
    }
}

fn show_records<T: Tabular>(records: &[T]) -> Result<(), CliError> {
    if records.is_empty() {
        return show(PageView::Empty);
    }
    show(PageView::Table(TableView::from_records(records)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Inline JSON, or `@path` to read it from a file.
fn parse_json_arg<T: DeserializeOwned>(arg: &str) -> Result<T, CliError> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let path = Path::new(path);
            let content = std::fs::read_to_string(path).map_err(|e| CliError::Input {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(serde_json::from_str(arg)?),
    }
}

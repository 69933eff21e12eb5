//! Command-line surface of the `rentdesk` binary.

mod dispatch;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::resources::PaymentStatus;

pub use dispatch::{run, CliError};

#[derive(Debug, Parser)]
#[command(name = "rentdesk", version, about = "Vehicle rental admin console")]
pub struct Cli {
    /// Backend base URL; overrides config file and environment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session.
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show who is signed in.
    Whoami,
    /// Register a new account.
    Signup(SignupArgs),
    Vehicles {
        #[command(subcommand)]
        action: VehicleAction,
    },
    Customers {
        #[command(subcommand)]
        action: Crud,
    },
    Staff {
        #[command(subcommand)]
        action: Crud,
    },
    Branches {
        #[command(subcommand)]
        action: Crud,
    },
    Maintenance {
        #[command(subcommand)]
        action: Crud,
    },
    BankAccounts {
        #[command(subcommand)]
        action: BankAccountAction,
    },
    Rentals {
        #[command(subcommand)]
        action: RentalAction,
    },
    Payments {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// Show the rental audit trail.
    Audit,
}

/// The five calls every resource supports.
#[derive(Debug, Subcommand)]
pub enum Crud {
    /// List all records as a table.
    List,
    /// Show one record as JSON.
    Get { id: i64 },
    /// Create a record from JSON (inline, or `@file`).
    Create {
        #[arg(long)]
        json: String,
    },
    /// Replace a record from JSON (inline, or `@file`).
    Update {
        id: i64,
        #[arg(long)]
        json: String,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum VehicleAction {
    #[command(flatten)]
    Crud(Crud),
    /// Vehicles that can be rented now.
    Available,
}

#[derive(Debug, Subcommand)]
pub enum BankAccountAction {
    #[command(flatten)]
    Crud(Crud),
    /// Accounts currently accepting transfers.
    Active,
}

#[derive(Debug, Subcommand)]
pub enum RentalAction {
    #[command(flatten)]
    Crud(Crud),
    Approve { id: i64 },
    Reject { id: i64 },
    Complete { id: i64 },
    /// The active-rentals view.
    Active,
    /// Rentals of the signed-in user.
    Mine,
    /// Ask the server what a rental would cost.
    Quote {
        #[arg(long)]
        vehicle: i64,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    UploadProof { id: i64, file: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum PaymentAction {
    #[command(flatten)]
    Crud(Crud),
    /// Record the admin decision on a payment.
    Status {
        id: i64,
        status: PaymentStatus,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Create a payment together with its bank slip.
    Submit {
        #[arg(long)]
        json: String,
        #[arg(long)]
        slip: PathBuf,
    },
    UploadSlip { id: i64, file: PathBuf },
    DownloadSlip {
        id: i64,
        /// Directory to save into.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, default_value = "CUSTOMER")]
    pub role: String,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub nic: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub license: Option<String>,
}

//! Command-line interface definitions using clap.
//!
//! Argument structs here are thin wrappers over the core parameter types:
//! clap-specific attributes (flags, help text, value parsers) live on the
//! wrapper, and each wrapper converts into its core counterpart via `From`.
//! This keeps the core free of CLI framework concerns and makes the boundary
//! between the two layers explicit.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::{Date, Time};
use vetbook_core::models::Service;
use vetbook_core::params::{
    ChangePassword, Credentials, NewPet, Registration, UpdatePet,
};

/// Terminal client for the Vetbook veterinary-appointment service
///
/// Vetbook lets pet owners register, manage pet profiles, book and cancel
/// clinic appointments, and browse a calendar of appointments and public
/// clinic events. All data lives on the clinic server; this client talks to
/// it over HTTP.
#[derive(Parser)]
#[command(version, about, name = "vetbook")]
pub struct Args {
    /// Base URL of the clinic server
    #[arg(long, global = true, env = "VETBOOK_SERVER_URL")]
    pub server_url: Option<String>,

    /// Path to the session file. Defaults to
    /// $XDG_DATA_HOME/vetbook/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Vetbook CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Register a new owner account
    Register(RegisterArgs),
    /// Log in and store the session
    Login(LoginArgs),
    /// Log out and clear the stored session
    Logout,
    /// Manage pet profiles
    #[command(alias = "p")]
    Pets {
        #[command(subcommand)]
        command: PetCommands,
    },
    /// Book an appointment (runs the booking wizard)
    #[command(alias = "b")]
    Book(BookArgs),
    /// Manage appointments
    #[command(alias = "a")]
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommands,
    },
    /// Show the merged calendar of appointments and clinic events
    Calendar(CalendarArgs),
    /// Show upcoming appointments
    Dashboard,
    /// List the day's bookable time slots
    Slots,
    /// Account settings
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

/// Register a new owner account
#[derive(ClapArgs)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Password (min 8 chars, uppercase, number, special character)
    #[arg(long)]
    pub password: String,
    /// Confirmation copy of the password
    #[arg(long)]
    pub confirm_password: String,
}

impl From<RegisterArgs> for Registration {
    fn from(val: RegisterArgs) -> Self {
        Registration {
            name: val.name,
            email: val.email,
            password: val.password,
            confirm_password: val.confirm_password,
        }
    }
}

/// Log in with email and password
#[derive(ClapArgs)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Password
    #[arg(long)]
    pub password: String,
}

impl From<LoginArgs> for Credentials {
    fn from(val: LoginArgs) -> Self {
        Credentials {
            email: val.email,
            password: val.password,
        }
    }
}

/// Pet profile commands
#[derive(Subcommand)]
pub enum PetCommands {
    /// List your pets
    #[command(alias = "ls")]
    List,
    /// Add a pet profile
    Add(AddPetArgs),
    /// Edit an existing pet profile
    Edit(EditPetArgs),
}

/// Add a pet profile
#[derive(ClapArgs)]
pub struct AddPetArgs {
    /// Pet name
    pub name: String,
    /// Species (e.g. Dog, Cat)
    #[arg(long)]
    pub species: String,
    /// Breed
    #[arg(long)]
    pub breed: String,
    /// Gender
    #[arg(long)]
    pub gender: String,
}

impl AddPetArgs {
    /// Pairs the form fields with the logged-in owner.
    pub fn into_params(self, owner_id: u64) -> NewPet {
        NewPet {
            owner_id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            gender: self.gender,
        }
    }
}

/// Edit a pet profile; only the provided fields change
#[derive(ClapArgs)]
pub struct EditPetArgs {
    /// Pet ID to edit
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New species
    #[arg(long)]
    pub species: Option<String>,
    /// New breed
    #[arg(long)]
    pub breed: Option<String>,
    /// New gender
    #[arg(long)]
    pub gender: Option<String>,
}

impl From<EditPetArgs> for UpdatePet {
    fn from(val: EditPetArgs) -> Self {
        UpdatePet {
            id: val.id,
            name: val.name,
            species: val.species,
            breed: val.breed,
            gender: val.gender,
        }
    }
}

/// Book an appointment
///
/// Walks the booking wizard phase by phase with the selections given here:
/// pets, then services, then the schedule, then a summary and the
/// confirmation request.
#[derive(ClapArgs)]
pub struct BookArgs {
    /// Pet ID to book for (repeat for several pets)
    #[arg(long = "pet", required = true)]
    pub pet_ids: Vec<u64>,
    /// Service to book (repeat for several services)
    #[arg(long = "service", required = true, value_parser = parse_service)]
    pub services: Vec<Service>,
    /// Appointment date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Date,
    /// Half-hour slot (HH:MM, between 08:00 and 17:30)
    #[arg(long, value_parser = parse_time)]
    pub time: Time,
    /// Optional notes for the clinic
    #[arg(long, default_value = "")]
    pub notes: String,
}

/// Appointment commands
#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// List your appointment history
    #[command(alias = "ls")]
    List,
    /// Cancel an appointment
    Cancel {
        /// Appointment ID to cancel
        id: u64,
    },
}

/// Calendar options
#[derive(ClapArgs)]
pub struct CalendarArgs {
    /// Restrict to one month (YYYY-MM)
    #[arg(long, value_parser = parse_month)]
    pub month: Option<(i16, i8)>,
}

/// Account settings commands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Change your password
    ChangePassword(ChangePasswordArgs),
    /// Delete your account (guarded by a confirmation countdown)
    Delete,
}

/// Change the account password
#[derive(ClapArgs)]
pub struct ChangePasswordArgs {
    /// Current password
    #[arg(long)]
    pub current: String,
    /// New password (same rules as registration)
    #[arg(long)]
    pub new: String,
}

impl From<ChangePasswordArgs> for ChangePassword {
    fn from(val: ChangePasswordArgs) -> Self {
        ChangePassword {
            current_password: val.current,
            new_password: val.new,
        }
    }
}

fn parse_service(raw: &str) -> Result<Service, String> {
    raw.parse()
}

fn parse_date(raw: &str) -> Result<Date, String> {
    raw.parse::<Date>()
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_time(raw: &str) -> Result<Time, String> {
    vetbook_core::models::wire::parse_time(raw).map_err(|e| format!("expected HH:MM: {e}"))
}

fn parse_month(raw: &str) -> Result<(i16, i8), String> {
    let date = format!("{raw}-01")
        .parse::<Date>()
        .map_err(|e| format!("expected YYYY-MM: {e}"))?;
    Ok((date.year(), date.month()))
}

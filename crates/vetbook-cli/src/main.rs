//! Vetbook CLI application.
//!
//! Terminal client for the Vetbook veterinary-appointment service. The heavy
//! lifting (wizard state machine, HTTP client, session persistence) lives in
//! `vetbook-core`; this binary only parses arguments and renders results.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{AccountCommands, AppointmentCommands, Args, Commands, PetCommands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use vetbook_core::{ApiClientBuilder, SessionStore};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        server_url,
        session_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = ApiClientBuilder::new();
    if let Some(url) = server_url {
        builder = builder.with_base_url(url);
    }
    let api = builder.build().context("Failed to initialize API client")?;

    let store = match session_file {
        Some(path) => SessionStore::new(path),
        None => SessionStore::at_default_path().context("Failed to locate the session file")?,
    };

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(api, store, renderer);

    info!("Vetbook started");

    match command {
        Register(register) => cli.register(register).await,
        Login(login) => cli.login(login).await,
        Logout => cli.logout(),
        Pets { command } => match command {
            PetCommands::List => cli.list_pets().await,
            PetCommands::Add(add) => cli.add_pet(add).await,
            PetCommands::Edit(edit) => cli.edit_pet(edit).await,
        },
        Book(book) => cli.book(book).await,
        Appointments { command } => match command {
            AppointmentCommands::List => cli.list_appointments().await,
            AppointmentCommands::Cancel { id } => cli.cancel_appointment(id).await,
        },
        Calendar(calendar) => cli.calendar(calendar).await,
        Dashboard => cli.dashboard().await,
        Slots => cli.slots(),
        Account { command } => match command {
            AccountCommands::ChangePassword(change) => cli.change_password(change).await,
            AccountCommands::Delete => cli.delete_account().await,
        },
    }
}

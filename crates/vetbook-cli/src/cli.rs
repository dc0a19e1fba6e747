//! Command handlers gluing the core library to the terminal.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use jiff::Zoned;
use vetbook_core::display::{Appointments, CalendarDays, OperationStatus, Pets, SlotList};
use vetbook_core::params::Id;
use vetbook_core::wizard::{is_valid_slot, time_slots, BookingWizard};
use vetbook_core::{calendar, countdown::DeleteCountdown, ApiClient, SessionStore};

use crate::args::{
    AddPetArgs, BookArgs, CalendarArgs, ChangePasswordArgs, EditPetArgs, LoginArgs, RegisterArgs,
};
use crate::renderer::TerminalRenderer;

/// How long the booking confirmation stays on screen before the dashboard is
/// shown, independent of the wizard's own state.
const CONFIRMATION_DISPLAY: Duration = Duration::from_secs(2);

/// Command dispatcher owning the API client, session store and renderer.
pub struct Cli {
    api: ApiClient,
    store: SessionStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(api: ApiClient, store: SessionStore, renderer: TerminalRenderer) -> Self {
        Self {
            api,
            store,
            renderer,
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn register(&self, args: RegisterArgs) -> Result<()> {
        self.api.register(&args.into()).await?;
        self.render_status(OperationStatus::success(
            "Account created. You can now log in.",
        ))
    }

    pub async fn login(&self, args: LoginArgs) -> Result<()> {
        let session = self.api.login(&args.into()).await?;
        self.store
            .save(&session)
            .context("Failed to store the session")?;
        self.render_status(OperationStatus::success(format!(
            "Logged in as {}.",
            session.user.name
        )))
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear().context("Failed to clear the session")?;
        self.render_status(OperationStatus::success("Logged out."))
    }

    // ------------------------------------------------------------------
    // Pets
    // ------------------------------------------------------------------

    pub async fn list_pets(&self) -> Result<()> {
        let session = self.store.require()?;
        let pets = self.api.list_pets(Some(session.user.id)).await?;
        self.renderer.render(&Pets(pets).to_string())
    }

    pub async fn add_pet(&self, args: AddPetArgs) -> Result<()> {
        let session = self.store.require()?;
        let params = args.into_params(session.user.id);
        self.api.add_pet(&params).await?;
        self.render_status(OperationStatus::success(format!(
            "Added {} to your pets.",
            params.name
        )))
    }

    pub async fn edit_pet(&self, args: EditPetArgs) -> Result<()> {
        self.store.require()?;
        self.api.update_pet(&args.into()).await?;
        self.render_status(OperationStatus::success("Pet profile updated."))
    }

    // ------------------------------------------------------------------
    // Booking wizard
    // ------------------------------------------------------------------

    /// Walks the booking wizard with the selections from the command line.
    ///
    /// The wizard enforces its own phase guards; this handler only feeds it
    /// and renders what it produces. On success the confirmation stays on
    /// screen briefly and the dashboard is shown, mirroring the app's
    /// post-booking navigation.
    pub async fn book(&self, args: BookArgs) -> Result<()> {
        let session = self.store.require()?;
        let owner_id = session.user.id;

        let mut wizard = BookingWizard::new();
        let ticket = wizard.begin_pet_load();
        match self.api.list_pets(Some(owner_id)).await {
            Ok(pets) => {
                wizard.complete_pet_load(ticket, pets);
            }
            Err(e) => {
                wizard.fail_pet_load(ticket);
                return Err(e.into());
            }
        }

        // Select Pet
        for id in &args.pet_ids {
            if !wizard.pets().iter().any(|p| p.id == *id) {
                bail!("No pet with ID {id}. Run `vetbook pets list` to see your pets.");
            }
            wizard.toggle_pet(*id);
        }
        wizard.next()?;

        // Select Service
        for service in &args.services {
            wizard.toggle_service(*service);
        }
        if !args.notes.is_empty() {
            wizard.set_notes(&args.notes);
        }
        wizard.next()?;

        // Schedule
        if !is_valid_slot(args.time) {
            bail!(
                "{} is not a bookable slot. Run `vetbook slots` to see the day's slots.",
                args.time.strftime("%H:%M")
            );
        }
        wizard.set_date(args.date);
        wizard.set_time(args.time);
        wizard.next()?;

        // Summary + confirm
        self.renderer.render(&wizard.summary().to_string())?;

        let mut refresh = self.api.refresh_bus().subscribe();
        if !wizard.begin_submit() {
            return Ok(());
        }
        let request = wizard.submission(owner_id)?;
        let outcome = self.api.submit_booking(&request).await;
        wizard.finish_submit(outcome.is_ok());
        outcome?;

        self.render_status(OperationStatus::success(
            "Booking Confirmed! Your appointment has been successfully scheduled.",
        ))?;
        tokio::time::sleep(CONFIRMATION_DISPLAY).await;

        // The submission published a refresh signal; the dashboard view
        // consumes it and re-fetches
        if refresh.try_recv().is_ok() {
            self.dashboard().await?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Appointments, calendar, dashboard
    // ------------------------------------------------------------------

    pub async fn list_appointments(&self) -> Result<()> {
        let session = self.store.require()?;
        let appointments = self.api.list_appointments(session.user.id).await?;
        self.renderer.render(&Appointments(appointments).to_string())
    }

    pub async fn cancel_appointment(&self, id: u64) -> Result<()> {
        self.store.require()?;
        let mut refresh = self.api.refresh_bus().subscribe();
        self.api.cancel_appointment(&Id { id }).await?;
        self.render_status(OperationStatus::success("Appointment cancelled."))?;
        if refresh.try_recv().is_ok() {
            self.list_appointments().await?;
        }
        Ok(())
    }

    pub async fn calendar(&self, args: CalendarArgs) -> Result<()> {
        let session = self.store.require()?;
        let appointments = self.api.list_appointments(session.user.id).await?;
        let events = self.api.list_events().await?;
        let mut days = calendar::merge(appointments, events);
        if let Some((year, month)) = args.month {
            days = calendar::month_view(days, year, month);
        }
        self.renderer.render(&CalendarDays(days).to_string())
    }

    pub async fn dashboard(&self) -> Result<()> {
        let session = self.store.require()?;
        let appointments = self.api.list_appointments(session.user.id).await?;
        let today = Zoned::now().date();
        let upcoming = calendar::upcoming(appointments, today);
        self.renderer.render("# Upcoming Appointments\n")?;
        self.renderer.render(&Appointments(upcoming).to_string())
    }

    pub fn slots(&self) -> Result<()> {
        self.renderer
            .render(&SlotList(time_slots().collect()).to_string())
    }

    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    pub async fn change_password(&self, args: ChangePasswordArgs) -> Result<()> {
        let session = self.store.require()?;
        self.api
            .change_password(session.user.id, &args.into())
            .await?;
        self.render_status(OperationStatus::success("Password changed."))
    }

    /// Deletes the account after the forced confirmation countdown.
    pub async fn delete_account(&self) -> Result<()> {
        let session = self.store.require()?;

        self.renderer.render(
            "**Confirm Deletion** - this removes your account and all pet profiles.\n",
        )?;
        let mut countdown = DeleteCountdown::new();
        while !countdown.is_ready() {
            self.renderer
                .render(&format!("Deleting in {}...\n", countdown.remaining()))?;
            tokio::time::sleep(Duration::from_secs(1)).await;
            countdown.tick();
        }

        self.api
            .delete_account(&Id {
                id: session.user.id,
            })
            .await?;
        self.store.clear().context("Failed to clear the session")?;
        self.render_status(OperationStatus::success("Account deleted."))
    }

    fn render_status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }
}

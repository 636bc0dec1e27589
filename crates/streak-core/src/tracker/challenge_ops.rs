//! Challenge lifecycle operations for the Tracker.

use jiff::Zoned;
use log::{debug, info};

use super::Tracker;
use crate::{
    engine,
    error::{Result, TrackerError},
    models::{Challenge, StatsSnapshot},
    params::{CreateChallenge, EditRules, EditStartDate, Id},
    rules,
    store::ChallengeStore,
};

/// Length of a challenge when none is given.
pub const DEFAULT_DURATION_DAYS: u32 = 75;

/// Longest challenge accepted at creation.
pub const MAX_DURATION_DAYS: u32 = 1000;

impl<S: ChallengeStore> Tracker<S> {
    /// Creates a new active challenge.
    ///
    /// Preset types get a fresh copy of their preset; only the always-editable
    /// toggles are taken from `params.rules`. Custom challenges use the
    /// supplied rules, or the hard preset as a starting point when none are
    /// given. At most one challenge may be active at a time.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for a blank name, an out-of-range duration
    /// or rules that fail the start gate, and `InvalidTransition` when another
    /// challenge is still active.
    pub async fn create_challenge(&self, params: &CreateChallenge) -> Result<Challenge> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(TrackerError::validation("name").with_reason("must not be empty"));
        }

        let duration = params.duration.unwrap_or(DEFAULT_DURATION_DAYS);
        if duration == 0 || duration > MAX_DURATION_DAYS {
            return Err(TrackerError::validation("duration").with_reason(format!(
                "must be between 1 and {MAX_DURATION_DAYS} days"
            )));
        }

        let rule_set = rules::normalized(&rules::initial_rules(
            params.challenge_type,
            params.rules.as_ref(),
        ));
        rules::validate_for_start(&rule_set)?;

        if let Some(active) = self.active_challenge().await? {
            return Err(TrackerError::invalid_transition(format!(
                "challenge {} '{}' is still active",
                active.id, active.name
            )));
        }

        let start_date = params.start_date.unwrap_or_else(|| Zoned::now().date());
        let mut challenge = Challenge::new(
            name,
            params.challenge_type,
            duration,
            start_date,
            rule_set,
        );

        let (id, revision) = self.store.create(&challenge).await?;
        challenge.id = id;
        challenge.revision = Some(revision);

        info!(
            "Created {} challenge {id} '{}' ({duration} days from {start_date})",
            challenge.challenge_type.as_str(),
            challenge.name
        );
        Ok(challenge)
    }

    /// Retrieves a challenge by its ID.
    pub async fn get_challenge(&self, params: &Id) -> Result<Challenge> {
        self.load(params.id).await
    }

    /// Lists every challenge, newest first.
    pub async fn list_challenges(&self) -> Result<Vec<Challenge>> {
        let mut challenges = self.store.list_all().await?;
        challenges.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        debug!("Listed {} challenges", challenges.len());
        Ok(challenges)
    }

    /// The single active challenge, if there is one.
    pub async fn active_challenge(&self) -> Result<Option<Challenge>> {
        Ok(self
            .list_challenges()
            .await?
            .into_iter()
            .find(Challenge::is_active))
    }

    /// Gives up on an active challenge.
    pub async fn mark_failed(&self, params: &Id) -> Result<Challenge> {
        self.apply(params.id, engine::mark_failed).await
    }

    /// Moves the first day of an active challenge.
    pub async fn edit_start_date(&self, params: &EditStartDate) -> Result<Challenge> {
        let start_date = params.start_date;
        self.apply(params.id, move |challenge| {
            engine::edit_start_date(challenge, start_date)
        })
        .await
    }

    /// Applies one rule edit; the edited rules must still pass the start gate.
    pub async fn edit_rules(&self, params: &EditRules) -> Result<Challenge> {
        self.apply(params.id, |challenge| {
            engine::edit_rules(challenge, &params.edit)
        })
        .await
    }

    /// Aggregated statistics of a challenge.
    pub async fn stats(&self, params: &Id) -> Result<StatsSnapshot> {
        let challenge = self.load(params.id).await?;
        Ok(engine::compute_stats(&challenge))
    }

    /// Irreversibly deletes every challenge and attachment.
    pub async fn reset_all(&self) -> Result<()> {
        self.store.delete_all().await?;
        info!("All challenges deleted");
        Ok(())
    }
}

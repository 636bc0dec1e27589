//! Per-day operations for the Tracker.

use log::{debug, warn};

use super::Tracker;
use crate::{
    engine,
    error::{Result, TrackerError},
    models::Challenge,
    params::{AttachPhoto, DayRef, RecordJournal, RecordMeasurement, RecordWeight, ToggleTask},
    store::{photo_attachment_key, Attachment, ChallengeStore},
};

impl<S: ChallengeStore> Tracker<S> {
    /// Flips one task checkbox on an open day.
    pub async fn toggle_task(&self, params: &ToggleTask) -> Result<Challenge> {
        let (day, task) = (params.day, params.task);
        self.apply(params.id, move |challenge| {
            engine::toggle_task(challenge, day, task)
        })
        .await
    }

    /// Completes a day once all of its required tasks are checked.
    ///
    /// Completing the final day completes the challenge.
    pub async fn complete_day(&self, params: &DayRef) -> Result<Challenge> {
        let day = params.day;
        self.apply(params.id, move |challenge| engine::complete_day(challenge, day))
            .await
    }

    pub async fn record_weight(&self, params: &RecordWeight) -> Result<Challenge> {
        let (day, weight) = (params.day, params.weight);
        self.apply(params.id, move |challenge| {
            engine::record_weight(challenge, day, weight)
        })
        .await
    }

    pub async fn record_journal(&self, params: &RecordJournal) -> Result<Challenge> {
        self.apply(params.id, |challenge| {
            engine::record_journal(challenge, params.day, &params.text)
        })
        .await
    }

    pub async fn record_measurement(&self, params: &RecordMeasurement) -> Result<Challenge> {
        self.apply(params.id, |challenge| {
            engine::record_measurement(challenge, params.day, &params.part, params.value)
        })
        .await
    }

    /// Stores a day's progress photo and flags the day.
    ///
    /// The attachment is written before the flag, both guarded by the same
    /// revision. If the second write loses a race the photo stays stored but
    /// unflagged, which a retry repairs.
    pub async fn attach_photo(&self, params: &AttachPhoto) -> Result<Challenge> {
        if !params.mime_type.starts_with("image/") {
            return Err(TrackerError::validation("photo")
                .with_reason(format!("unsupported MIME type '{}'", params.mime_type)));
        }
        if params.data.is_empty() {
            return Err(TrackerError::validation("photo").with_reason("image is empty"));
        }

        let current = self.load(params.id).await?;
        let next = engine::mark_photo_attached(&current, params.day)?;
        let revision = current
            .revision
            .as_ref()
            .ok_or(TrackerError::Conflict { id: params.id })?;

        let key = photo_attachment_key(params.day);
        self.store
            .put_attachment(
                params.id,
                &key,
                revision,
                Attachment::new(params.mime_type.clone(), params.data.clone()),
            )
            .await?;
        debug!(
            "Stored {} ({} bytes) for challenge {}",
            key,
            params.data.len(),
            params.id
        );

        self.save(next).await
    }

    /// Fetches a day's progress photo, `None` when none was uploaded.
    pub async fn get_photo(&self, params: &DayRef) -> Result<Option<Attachment>> {
        let key = photo_attachment_key(params.day);
        match self.store.get_attachment(params.id, &key).await {
            Ok(attachment) => Ok(Some(attachment)),
            Err(TrackerError::AttachmentNotFound { .. }) => {
                let challenge = self.load(params.id).await?;
                if challenge.day(params.day).is_some_and(|day| day.photo_attached) {
                    warn!(
                        "Challenge {} day {} is flagged with a photo but none is stored",
                        params.id, params.day
                    );
                }
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

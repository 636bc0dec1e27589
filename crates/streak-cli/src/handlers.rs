//! Command handlers: run tracker operations and render their results.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use streak_core::{
    display::{task_label, Challenges, CreateResult, DayView, OperationStatus, UpdateResult},
    engine,
    params::{AttachPhoto, DayRef, EditRules, Id, ToggleTask},
    Challenge, Tracker,
};

use crate::{
    cli::{ChallengeCommands, DayCommands, PhotoArgs, ResetArgs, ShowDayArgs},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against a tracker.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_challenge_command(&self, command: ChallengeCommands) -> Result<()> {
        match command {
            ChallengeCommands::Create(args) => {
                let challenge = self.tracker.create_challenge(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(challenge).to_string())
            }
            ChallengeCommands::List => {
                let challenges = self.tracker.list_challenges().await?;
                self.renderer.render(&Challenges(challenges).to_string())
            }
            ChallengeCommands::Show(args) => {
                let challenge = self.tracker.get_challenge(&args.into()).await?;
                self.renderer.render(&challenge.to_string())
            }
            ChallengeCommands::Stats(args) => {
                let stats = self.tracker.stats(&args.into()).await?;
                self.renderer.render(&stats.to_string())
            }
            ChallengeCommands::Fail(args) => {
                let challenge = self.tracker.mark_failed(&args.into()).await?;
                self.render_update(challenge, "Marked as failed".to_string())
            }
            ChallengeCommands::StartDate(args) => {
                let challenge = self.tracker.edit_start_date(&args.into()).await?;
                let change = format!("Start date set to {}", challenge.start_date);
                self.render_update(challenge, change)
            }
            ChallengeCommands::Rule(args) => {
                let params = EditRules::try_from(args).map_err(|e| anyhow!(e))?;
                let before = self.tracker.get_challenge(&Id { id: params.id }).await?;
                let challenge = self.tracker.edit_rules(&params).await?;
                let change = if challenge.rules == before.rules {
                    "No rule changed (locked preset field or invalid value)".to_string()
                } else {
                    "Rules updated".to_string()
                };
                self.render_update(challenge, change)
            }
        }
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Show(args) => self.show_day(args).await,
            DayCommands::Toggle(args) => {
                let params: ToggleTask = args.into();
                let challenge = self.tracker.toggle_task(&params).await?;
                let checked = challenge
                    .day(params.day)
                    .is_some_and(|record| record.tasks.get(params.task));
                let message = format!(
                    "{} {} on day {}",
                    if checked { "Checked" } else { "Unchecked" },
                    task_label(params.task),
                    params.day
                );
                self.render_day(&challenge, params.day, &message)
            }
            DayCommands::Complete(args) => {
                let params: DayRef = args.into();
                let challenge = self.tracker.complete_day(&params).await?;
                let message = if challenge.is_active() {
                    format!("Completed day {}", params.day)
                } else {
                    format!(
                        "Completed day {} and the challenge '{}'",
                        params.day, challenge.name
                    )
                };
                self.render_day(&challenge, params.day, &message)
            }
            DayCommands::Weight(args) => {
                let day = args.day;
                let challenge = self.tracker.record_weight(&args.into()).await?;
                self.render_day(&challenge, day, &format!("Recorded weight for day {day}"))
            }
            DayCommands::Journal(args) => {
                let day = args.day;
                let challenge = self.tracker.record_journal(&args.into()).await?;
                self.render_day(&challenge, day, &format!("Saved journal for day {day}"))
            }
            DayCommands::Measure(args) => {
                let day = args.day;
                let challenge = self.tracker.record_measurement(&args.into()).await?;
                self.render_day(
                    &challenge,
                    day,
                    &format!("Recorded measurement for day {day}"),
                )
            }
            DayCommands::Photo(args) => self.attach_photo(args).await,
        }
    }

    pub async fn reset(&self, args: ResetArgs) -> Result<()> {
        if !args.yes {
            bail!("Refusing to delete all challenges without --yes");
        }
        self.tracker.reset_all().await?;
        self.renderer
            .render(&OperationStatus::success("All challenges deleted").to_string())
    }

    /// Shows the active challenge and its current day, or a hint when there is
    /// none.
    pub async fn show_active(&self) -> Result<()> {
        match self.tracker.active_challenge().await? {
            Some(challenge) => {
                let day = engine::compute_next_unlocked_day(&challenge);
                self.renderer.render(&format!(
                    "{challenge}\n{}",
                    DayView::new(&challenge, day)
                ))
            }
            None => self.renderer.render(
                "No active challenge. Start one with `streak challenge create <NAME>`.\n",
            ),
        }
    }

    async fn show_day(&self, args: ShowDayArgs) -> Result<()> {
        let challenge = self.tracker.get_challenge(&Id { id: args.id }).await?;
        let day = args
            .day
            .unwrap_or_else(|| engine::compute_next_unlocked_day(&challenge));
        if day == 0 || day > challenge.duration {
            bail!(
                "Day {day} is outside challenge {} (1 to {})",
                challenge.id,
                challenge.duration
            );
        }
        self.renderer
            .render(&DayView::new(&challenge, day).to_string())
    }

    async fn attach_photo(&self, args: PhotoArgs) -> Result<()> {
        let mime_type = image_mime_type(&args.file)?;
        let data = std::fs::read(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        debug!("Read {} bytes from {}", data.len(), args.file.display());

        let challenge = self
            .tracker
            .attach_photo(&AttachPhoto {
                id: args.id,
                day: args.day,
                mime_type: mime_type.to_string(),
                data,
            })
            .await?;
        self.render_day(
            &challenge,
            args.day,
            &format!("Attached photo to day {}", args.day),
        )
    }

    fn render_day(&self, challenge: &Challenge, day: u32, message: &str) -> Result<()> {
        let output = format!(
            "{}\n{}",
            OperationStatus::success(message),
            DayView::new(challenge, day)
        );
        self.renderer.render(&output)
    }

    fn render_update(&self, challenge: Challenge, change: String) -> Result<()> {
        self.renderer
            .render(&UpdateResult::with_changes(challenge, vec![change]).to_string())
    }
}

/// MIME type of an image file, judged by its extension.
fn image_mime_type(path: &Path) -> Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "heic" => Ok("image/heic"),
        _ => bail!("Unsupported image file: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime_type() {
        assert_eq!(image_mime_type(Path::new("a/day1.JPG")).unwrap(), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("day1.png")).unwrap(), "image/png");
        assert!(image_mime_type(Path::new("notes.txt")).is_err());
        assert!(image_mime_type(Path::new("no_extension")).is_err());
    }
}

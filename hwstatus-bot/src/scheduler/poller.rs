//! Status poller
//!
//! Polls the review API, reports status changes of the latest homework and
//! relays failures, one iteration per retry interval.
//!
//! Notifications are deduplicated against the last message actually
//! delivered: an unchanged status or a repeated failure is logged but not
//! sent again. The watermark only moves forward after an iteration that saw
//! at least one homework record.

use hwstatus_client::ClientError;
use hwstatus_core::{ShapeError, Watermark, check_response, parse_status};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::repository::HomeworkRepository;
use crate::service::Notifier;

/// Prefix of every failure notification
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Longest text the messaging API accepts, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Why a poll iteration failed
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Result of a single poll iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new status was delivered
    Notified,
    /// A new status was found but could not be delivered
    Undelivered,
    /// The latest status matches the last delivered one
    Unchanged,
    /// No homework activity since the watermark
    NoActivity,
    /// The iteration failed; `notified` tells whether the failure was sent
    Failed { notified: bool },
}

/// State carried from one iteration to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound of the next query
    pub watermark: Watermark,
    /// Last status message delivered
    pub last_sent_status: Option<String>,
    /// Last failure message delivered
    pub last_sent_error: Option<String>,
}

impl PollState {
    pub fn new(watermark: Watermark) -> Self {
        Self {
            watermark,
            last_sent_status: None,
            last_sent_error: None,
        }
    }
}

/// Poller that checks the latest homework status forever
pub struct StatusPoller {
    config: Config,
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
    state: PollState,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `config` - Bot configuration (retry interval, verdicts)
    /// * `homeworks` - Source of homework statuses
    /// * `notifier` - Destination for status and failure messages
    /// * `watermark` - Lower bound of the first query
    pub fn new(
        config: Config,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
        watermark: Watermark,
    ) -> Self {
        Self {
            config,
            homeworks,
            notifier,
            state: PollState::new(watermark),
        }
    }

    /// Current poll state
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Starts the polling loop
    ///
    /// Runs one iteration, sleeps for the retry interval, and repeats. Only
    /// `shutdown` completing ends the loop; an iteration already in progress
    /// is allowed to finish first.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.config.retry_interval, self.state.watermark
        );

        tokio::pin!(shutdown);

        loop {
            let outcome = self.poll_once().await;
            debug!("Poll iteration finished: {:?}", outcome);

            tokio::select! {
                _ = tokio::time::sleep(self.config.retry_interval) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping status poller");
                    return;
                }
            }
        }
    }

    /// Performs a single poll iteration
    ///
    /// Never fails: errors are logged, reported to the notifier when they
    /// differ from the last reported one, and returned as
    /// [`PollOutcome::Failed`].
    pub async fn poll_once(&mut self) -> PollOutcome {
        match self.check_latest_status().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("{}: {}", FAILURE_PREFIX, e);
                error!("{}", message);
                let message = truncate_message(message);
                let notified = self.report_failure(message).await;
                PollOutcome::Failed { notified }
            }
        }
    }

    async fn check_latest_status(&mut self) -> Result<PollOutcome, PollError> {
        let response = self
            .homeworks
            .fetch_statuses(self.state.watermark.timestamp())
            .await?;

        let feed = check_response(response)?;
        let Some(latest) = feed.latest() else {
            debug!("No homework activity since {}", self.state.watermark);
            return Ok(PollOutcome::NoActivity);
        };

        let message = truncate_message(parse_status(latest, &self.config.verdicts)?);
        let watermark = Watermark::from_record(latest)?;

        let outcome = if self.state.last_sent_status.as_deref() == Some(message.as_str()) {
            debug!("Status unchanged: {}", message);
            PollOutcome::Unchanged
        } else if self.notifier.notify(&message).await {
            self.state.last_sent_status = Some(message);
            PollOutcome::Notified
        } else {
            PollOutcome::Undelivered
        };

        debug!("Advancing watermark {} -> {}", self.state.watermark, watermark);
        self.state.watermark = watermark;

        Ok(outcome)
    }

    async fn report_failure(&mut self, message: String) -> bool {
        if self.state.last_sent_error.as_deref() == Some(message.as_str()) {
            debug!("Failure already reported, not sending again");
            return false;
        }

        if self.notifier.notify(&message).await {
            self.state.last_sent_error = Some(message);
            return true;
        }

        false
    }
}

/// Shortens `message` to [`MAX_MESSAGE_CHARS`], marking the cut with `…`
fn truncate_message(message: String) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message;
    }

    let mut truncated: String = message.chars().take(MAX_MESSAGE_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

//! Interaction state of one window: selected file, preview, pending analysis
//! and last outcome.
//!
//! Time is passed in explicitly. The UI calls [`Session::poll`] every frame
//! while an analysis is pending; nothing here blocks or spawns.

use crate::error::CoreError;
use crate::model::{Outcome, SelectedFile};
use crate::preview::Preview;
use crate::simulate::{Entropy, simulate};
use std::time::{Duration, Instant};

/// Fixed delay between triggering an analysis and its outcome.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

/// Identifies one file selection. A preview decoded for an older selection is
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewTicket(u64);

/// Result of [`Session::trigger_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Started,
    /// Nothing selected; state unchanged.
    NoFile,
    /// An analysis is already pending; state unchanged.
    AlreadyRunning,
}

#[derive(Debug, Default)]
pub struct Session {
    selection: u64,
    file: Option<SelectedFile>,
    preview: Option<Preview>,
    outcome: Option<Outcome>,
    confidence: u8,
    started: Option<Instant>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected file and clears everything derived from the
    /// previous one, including a pending analysis.
    pub fn select_file(&mut self, file: SelectedFile) -> PreviewTicket {
        self.selection += 1;
        if self.started.take().is_some() {
            tracing::debug!("discarding pending analysis for previous file");
        }
        tracing::info!(name = %file.name, size = file.size, "file selected");
        self.file = Some(file);
        self.preview = None;
        self.outcome = None;
        self.confidence = 0;
        PreviewTicket(self.selection)
    }

    /// Stores a decoded preview. Returns `false` if the file changed since.
    pub fn attach_preview(&mut self, ticket: PreviewTicket, preview: Preview) -> bool {
        if ticket.0 != self.selection || self.file.is_none() {
            tracing::debug!(?ticket, "dropping preview for superseded selection");
            return false;
        }
        self.preview = Some(preview);
        true
    }

    /// Records a failed preview. The preview stays unset.
    pub fn preview_failed(&mut self, ticket: PreviewTicket, err: &CoreError) {
        let name = self.file.as_ref().map(|f| f.name.as_str()).unwrap_or("");
        if ticket.0 == self.selection {
            tracing::warn!("preview unavailable for {name}: {err}");
        } else {
            tracing::debug!(?ticket, "ignoring preview error for superseded selection: {err}");
        }
    }

    pub fn trigger_analysis(&mut self, now: Instant) -> Trigger {
        if self.file.is_none() {
            tracing::debug!("analysis requested without a file");
            return Trigger::NoFile;
        }
        if self.started.is_some() {
            return Trigger::AlreadyRunning;
        }
        self.started = Some(now);
        tracing::debug!("analysis started");
        Trigger::Started
    }

    /// Completes the pending analysis once [`ANALYSIS_DELAY`] has elapsed.
    /// Returns the new outcome on the call that commits it.
    pub fn poll(&mut self, now: Instant, entropy: &mut impl Entropy) -> Option<Outcome> {
        let started = self.started?;
        if now.saturating_duration_since(started) < ANALYSIS_DELAY {
            return None;
        }
        self.started = None;
        let file = self.file.as_ref()?;
        let outcome = simulate(file, entropy);
        tracing::info!(
            classification = ?outcome.classification,
            confidence = outcome.confidence,
            "analysis finished for {}",
            file.name
        );
        self.confidence = outcome.confidence;
        self.outcome = Some(outcome);
        Some(outcome)
    }

    /// Time left before the pending analysis completes.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.started
            .map(|s| ANALYSIS_DELAY.saturating_sub(now.saturating_duration_since(s)))
    }

    pub fn is_analyzing(&self) -> bool {
        self.started.is_some()
    }

    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && !self.is_analyzing()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Confidence of the last outcome, `0` until one exists.
    pub fn confidence(&self) -> u8 {
        self.confidence
    }
}

//! Background decoding of preview images.

use eframe::egui;
use screening_core::{Preview, PreviewTicket};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

pub(super) struct LoadedPreview {
    pub ticket: PreviewTicket,
    pub result: screening_core::Result<Preview>,
}

pub(super) struct PreviewLoader {
    tx: Sender<LoadedPreview>,
    rx: Receiver<LoadedPreview>,
}

impl PreviewLoader {
    pub(super) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Decodes `path` on a worker thread and wakes the UI when done.
    pub(super) fn spawn(
        &self,
        ctx: egui::Context,
        ticket: PreviewTicket,
        path: PathBuf,
        max_side: u32,
    ) {
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name("preview-decode".into())
            .spawn(move || {
                let result = Preview::load(&path, max_side);
                if tx.send(LoadedPreview { ticket, result }).is_err() {
                    tracing::debug!("window closed before preview finished");
                }
                ctx.request_repaint();
            });
        if let Err(e) = spawned {
            tracing::warn!("could not start preview thread: {e}");
        }
    }

    pub(super) fn try_iter(&self) -> mpsc::TryIter<'_, LoadedPreview> {
        self.rx.try_iter()
    }
}

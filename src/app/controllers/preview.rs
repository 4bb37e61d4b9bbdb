use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::app::domain::messages::PreviewMessage;
use crate::app::domain::theme::ThemeConfiguration;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform;
use crate::app::services::renderer;

/// Sending half of the preview channel, handed to the rendering surface.
///
/// The surface only ever posts raw message strings; it has no access to
/// editor state.
#[derive(Clone)]
pub struct PreviewBridge {
    sender: Sender<String>,
}

impl PreviewBridge {
    /// Post a raw message as received from the sandboxed document.
    /// Returns false if the editor side has gone away.
    pub fn post(&self, raw: impl Into<String>) -> bool {
        self.sender.send(raw.into()).is_ok()
    }

    pub fn post_message(&self, message: &PreviewMessage) -> bool {
        match message.to_json() {
            Ok(json) => self.post(json),
            Err(e) => {
                tracing::warn!("cannot encode preview message: {}", e);
                false
            }
        }
    }
}

pub struct PreviewController {
    pub enabled: bool,
    receiver: Receiver<String>,
    sender: Sender<String>,
    /// Where rendered documents are written.
    output_dir: PathBuf,
}

impl PreviewController {
    pub fn new(enabled: bool) -> Self {
        Self::with_output_dir(enabled, platform::preview_dir())
    }

    pub fn with_output_dir(enabled: bool, output_dir: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            enabled,
            receiver,
            sender,
            output_dir,
        }
    }

    pub fn bridge(&self) -> PreviewBridge {
        PreviewBridge {
            sender: self.sender.clone(),
        }
    }

    /// Next well-formed message from the surface, skipping malformed ones.
    /// Returns `None` once the queue is empty.
    pub fn poll(&mut self) -> Option<PreviewMessage> {
        loop {
            let raw = match self.receiver.try_recv() {
                Ok(raw) => raw,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            };
            match PreviewMessage::parse(&raw) {
                Ok(message) => return Some(message),
                Err(e) => tracing::warn!("dropping preview message {:?}: {}", raw, e),
            }
        }
    }

    /// Render and write the preview for `slug`. Returns the written path.
    pub fn write(&self, theme: &ThemeConfiguration, slug: &str) -> Result<PathBuf> {
        let html = renderer::render(theme, slug);
        platform::write_preview_file(&self.output_dir, slug, &html)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

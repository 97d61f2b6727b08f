//! Clipboard access.
//!
//! [`SystemClipboard`] talks to the OS clipboard through `arboard`;
//! [`MemoryClipboard`] keeps everything in process for tests.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("failed to clear clipboard: {0}")]
    Clear(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Destination for copied dates.
///
/// `set_text` replaces whatever the clipboard held; callers clear first so
/// nothing is ever appended to stale contents.
pub trait ClipboardWriter {
    fn clear(&mut self) -> Result<(), ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard.
///
/// The handle is opened on first use and then kept: on X11 the copied text
/// is only served while the owning handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
                tracing::debug!("opened system clipboard");
                clipboard
            }
        };
        Ok(self.handle.insert(clipboard))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.handle()?.clear().map_err(ClipboardError::Clear)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(ClipboardError::Write)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardOp {
    Clear,
    SetText(String),
}

/// In-process clipboard that records every operation.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    operations: Vec<ClipboardOp>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard whose every operation fails as if no clipboard existed.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn operations(&self) -> &[ClipboardOp] {
        &self.operations
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Clear(arboard::Error::ClipboardNotSupported));
        }
        self.contents = None;
        self.operations.push(ClipboardOp::Clear);
        Ok(())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write(arboard::Error::ClipboardNotSupported));
        }
        self.contents = Some(text.to_owned());
        self.operations.push(ClipboardOp::SetText(text.to_owned()));
        Ok(())
    }
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Box<W> {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        (**self).clear()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

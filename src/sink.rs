use crate::aggregate::OutputDocument;
use crate::errors::ClipboardError;
use arboard::Clipboard;
use tracing::{debug, info};

/// Something that accepts the finished document, normally the clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// The system clipboard. The handle is opened on first use so a headless
/// host only fails when there is something to copy.
#[derive(Default)]
pub struct ArboardSink {
    clipboard: Option<Clipboard>,
}

impl ArboardSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for ArboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            debug!("Initializing clipboard");
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::ClipboardInitError(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::ClipboardWriteError(e.to_string())),
            None => Err(ClipboardError::ClipboardInitError(
                "clipboard unavailable".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Copied { files: usize, bytes: usize },
}

/// Hands `document` to `sink`. An empty document never reaches the sink.
pub fn deliver<S: ClipboardSink + ?Sized>(
    sink: &mut S,
    document: OutputDocument,
) -> Result<Delivery, ClipboardError> {
    if document.is_empty() {
        return Err(ClipboardError::EmptyResult);
    }
    let files = document.file_count();
    let text = document.into_string();
    let bytes = text.len();
    debug!("Delivering {} bytes from {} file(s)", bytes, files);

    sink.set_text(text)?;
    info!("✅ Content copied to clipboard.");
    Ok(Delivery::Copied { files, bytes })
}

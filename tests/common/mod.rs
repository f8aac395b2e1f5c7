#![allow(dead_code)]

use copydir::errors::ClipboardError;
use copydir::sink::ClipboardSink;
use std::path::Path;
use tokio::fs;

/// Keeps whatever it is given so tests can inspect it.
#[derive(Default)]
pub struct MemorySink {
    pub writes: Vec<String>,
}

impl ClipboardSink for MemorySink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.writes.push(text);
        Ok(())
    }
}

/// Behaves like a host without a clipboard.
#[derive(Default)]
pub struct HeadlessSink {
    pub attempts: usize,
}

impl ClipboardSink for HeadlessSink {
    fn set_text(&mut self, _text: String) -> Result<(), ClipboardError> {
        self.attempts += 1;
        Err(ClipboardError::ClipboardInitError(
            "no display available".to_string(),
        ))
    }
}

pub async fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.unwrap();
    }
    fs::write(&path, content).await.unwrap();
}

/// Number of `--- FILE:` markers in a document.
pub fn file_blocks(document: &str) -> usize {
    document.matches("--- FILE: ").count()
}

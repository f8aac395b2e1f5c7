use crate::errors::ClipboardError;
use crate::policy::ExclusionPolicy;
use crate::walker::TreeWalker;
use std::path::Path;
use tokio::fs as async_fs;
use tracing::{debug, info, trace, warn};

const PREVIEW_RULE_WIDTH: usize = 60;

/// How much of each copied file is echoed to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Off,
    Lines(usize),
    Full,
}

impl PreviewMode {
    /// Interprets the `--showContent [N]` flag.
    ///
    /// A missing or non-numeric `N` shows the whole file.
    pub fn from_flag(flag: Option<Option<&str>>) -> Self {
        match flag {
            None => PreviewMode::Off,
            Some(None) => PreviewMode::Full,
            Some(Some(raw)) => match raw.trim().parse::<usize>() {
                Ok(lines) => PreviewMode::Lines(lines),
                Err(_) => {
                    warn!("'{}' is not a line count, previewing full content", raw);
                    PreviewMode::Full
                }
            },
        }
    }
}

/// A path and the text read from it. Lives for one aggregation pass.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub path: String,
    pub lines: usize,
}

/// The blob that ends up on the clipboard.
#[derive(Debug, Default)]
pub struct OutputDocument {
    text: String,
    records: Vec<RecordSummary>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_file(&mut self, record: &FileRecord) {
        self.text
            .push_str(&format!("\n\n--- FILE: {} ---\n\n{}", record.path, record.content));
        self.records.push(RecordSummary {
            path: record.path.clone(),
            lines: record.content.lines().count(),
        });
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[RecordSummary] {
        &self.records
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

pub struct Aggregator {
    policy: ExclusionPolicy,
    preview: PreviewMode,
}

impl Aggregator {
    pub fn new(policy: ExclusionPolicy, preview: PreviewMode) -> Self {
        Aggregator { policy, preview }
    }

    /// Appends every eligible file reachable from `path` to `document`.
    ///
    /// Per-file problems are logged and skipped. Returns how many files were
    /// appended.
    pub async fn aggregate_path(&self, path: &str, document: &mut OutputDocument) -> usize {
        let target = Path::new(path);
        debug!("Processing path: {}", path);

        if target.is_dir() {
            let mut appended = 0;
            for file in TreeWalker::new(&self.policy).walk(target) {
                if self.include_file(&file, document).await {
                    appended += 1;
                }
            }
            if appended == 0 {
                debug!("No eligible files under {}", path);
            }
            appended
        } else if target.is_file() {
            if !self.policy.is_eligible(target) {
                warn!("{}", ClipboardError::UnsupportedExtension(path.to_string()));
                return 0;
            }
            usize::from(self.include_file(target, document).await)
        } else {
            warn!("{}", ClipboardError::InvalidPath(path.to_string()));
            0
        }
    }

    async fn include_file(&self, file: &Path, document: &mut OutputDocument) -> bool {
        match read_text(file).await {
            Ok(record) => {
                trace!("Read {} bytes from {}", record.content.len(), record.path);
                if let Some(preview) = render_preview(&record.content, self.preview) {
                    log_preview(&record.path, self.preview, &preview);
                }
                document.push_file(&record);
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}

/// Reads a whole file as UTF-8 text.
pub async fn read_text(path: &Path) -> Result<FileRecord, ClipboardError> {
    let display = path.to_string_lossy().into_owned();
    let bytes = async_fs::read(path)
        .await
        .map_err(|err| ClipboardError::ReadFailure {
            path: display.clone(),
            reason: err.to_string(),
        })?;
    let content = String::from_utf8(bytes).map_err(|_| ClipboardError::DecodeFailure(display.clone()))?;
    Ok(FileRecord {
        path: display,
        content,
    })
}

/// The text echoed for a file under `mode`, or `None` when previews are off.
/// Trailing whitespace is trimmed from every line and from the block.
pub fn render_preview(content: &str, mode: PreviewMode) -> Option<String> {
    let limit = match mode {
        PreviewMode::Off => return None,
        PreviewMode::Lines(limit) => limit,
        PreviewMode::Full => usize::MAX,
    };
    let preview = content
        .lines()
        .take(limit)
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    Some(preview.trim_end().to_string())
}

// One event per line keeps every preview line tagged with the current span.
fn log_preview(path: &str, mode: PreviewMode, preview: &str) {
    let rule = "-".repeat(PREVIEW_RULE_WIDTH);
    info!("📄 Preview of {} ({}):", path, describe_preview(mode));
    info!("{}", rule);
    for line in preview.lines() {
        info!("│ {}", line);
    }
    info!("{}", rule);
}

fn describe_preview(mode: PreviewMode) -> String {
    match mode {
        PreviewMode::Lines(limit) => format!("first {} lines", limit),
        _ => "full content".to_string(),
    }
}

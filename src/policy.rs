use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "venv",
    "__pycache__",
    "build",
    "dist",
    "target",
    "out",
    "bin",
    "obj",
    "coverage",
    "logs",
    "tmp",
    "temp",
    "cache",
    ".idea",
    ".vscode",
    ".mypy_cache",
    ".pytest_cache",
];

pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // Programming languages
    ".py", ".js", ".ts", ".java", ".c", ".cpp", ".go", ".rb", ".php", ".swift", ".kt", ".rs",
    ".r", ".pl", ".lua", ".hs", ".erl", ".ex", ".exs", ".scala", ".clj", ".cljs", ".groovy",
    // Web
    ".html", ".css",
    // Scripts
    ".sh", ".bat", ".cmd", ".ps1",
    // Data, docs and configuration
    ".txt", ".json", ".md", ".sql", ".xml", ".yml", ".yaml", ".ini", ".cfg", ".conf",
    ".dockerfile", ".tf", ".toml", ".lock",
];

/// Which directories are pruned and which file extensions are copied.
///
/// Both sets are fixed once built. Extensions are stored lower-cased with
/// their leading dot, so `.RS` and `rs` both become `.rs`.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    excluded_dirs: HashSet<String>,
    extensions: HashSet<String>,
}

impl ExclusionPolicy {
    pub fn new<D, E>(excluded_dirs: D, extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let excluded_dirs: HashSet<String> = excluded_dirs.into_iter().map(Into::into).collect();
        let extensions: HashSet<String> = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| ext.len() > 1)
            .collect();

        debug!(
            "Policy with {} excluded directories and {} extensions",
            excluded_dirs.len(),
            extensions.len()
        );

        ExclusionPolicy {
            excluded_dirs,
            extensions,
        }
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn is_eligible<P: AsRef<Path>>(&self, path: P) -> bool {
        extension_of(path.as_ref())
            .map(|ext| self.extensions.contains(&ext))
            .unwrap_or(false)
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        ExclusionPolicy::new(
            DEFAULT_EXCLUDED_DIRS.iter().copied(),
            DEFAULT_EXTENSIONS.iter().copied(),
        )
    }
}

/// Lower-cased extension of `path` including the leading dot.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

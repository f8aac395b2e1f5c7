use crate::errors::ClipboardError;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const LAUNCHER_NAME: &str = "copydir";

/// Puts a `copydir` launcher on the user's `PATH`.
///
/// The launcher is a symlink to `source`, an artifact the caller names
/// explicitly. If `install_dir` is not already on `PATH`, an export line is
/// appended to the profile of the user's shell.
#[derive(Debug, Clone)]
pub struct Installer {
    source: PathBuf,
    install_dir: PathBuf,
    home: PathBuf,
    shell: String,
    path_var: OsString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub target: PathBuf,
    pub profile: Option<PathBuf>,
    pub profile_modified: bool,
}

impl Installer {
    pub fn new(source: PathBuf, install_dir: PathBuf, home: PathBuf) -> Self {
        Installer {
            source,
            install_dir,
            home,
            shell: String::new(),
            path_var: OsString::new(),
        }
    }

    /// Installer configured from `$HOME`, `$SHELL` and `$PATH`. The install
    /// directory defaults to `~/bin`.
    pub fn from_env(source: PathBuf, install_dir: Option<PathBuf>) -> Result<Self, ClipboardError> {
        let home = dirs::home_dir().ok_or_else(|| {
            ClipboardError::InstallError("could not determine home directory".to_string())
        })?;
        let install_dir = install_dir.unwrap_or_else(|| home.join("bin"));
        Ok(Installer::new(source, install_dir, home)
            .with_shell(env::var("SHELL").unwrap_or_default())
            .with_path_var(env::var_os("PATH").unwrap_or_default()))
    }

    pub fn with_shell(mut self, shell: String) -> Self {
        self.shell = shell;
        self
    }

    pub fn with_path_var(mut self, path_var: OsString) -> Self {
        self.path_var = path_var;
        self
    }

    pub fn target(&self) -> PathBuf {
        self.install_dir.join(LAUNCHER_NAME)
    }

    pub fn profile_path(&self) -> PathBuf {
        if self.shell.contains("zsh") {
            self.home.join(".zshrc")
        } else if self.shell.contains("fish") {
            self.home.join(".config").join("fish").join("config.fish")
        } else {
            self.home.join(".bashrc")
        }
    }

    pub fn install(&self) -> Result<InstallReport, ClipboardError> {
        if !self.source.is_file() {
            return Err(ClipboardError::InstallError(format!(
                "'{}' not found",
                self.source.display()
            )));
        }
        let source = fs::canonicalize(&self.source)?;

        fs::create_dir_all(&self.install_dir)?;
        let target = self.target();
        if fs::symlink_metadata(&target).is_ok() {
            debug!("Replacing existing launcher at {:?}", target);
            fs::remove_file(&target)?;
        }
        symlink(&source, &target)?;
        info!("✅ Installed '{}' to {}", LAUNCHER_NAME, target.display());

        if dir_on_path(&self.install_dir, &self.path_var) {
            return Ok(InstallReport {
                target,
                profile: None,
                profile_modified: false,
            });
        }

        let profile = self.profile_path();
        let export_line = format!("export PATH=\"{}:$PATH\"", self.install_dir.display());
        let profile_modified = append_to_profile(&profile, &export_line)?;
        if profile_modified {
            info!("➕ Added to {}: {}", profile.display(), export_line);
        } else {
            info!("ℹ️ PATH already in {}", profile.display());
        }
        info!("🔄 Restart your terminal or run: source {}", profile.display());

        Ok(InstallReport {
            target,
            profile: Some(profile),
            profile_modified,
        })
    }
}

/// Appends `line` to the profile at `path` unless it is already there.
/// Returns whether the file changed.
pub fn append_to_profile(path: &Path, line: &str) -> Result<bool, ClipboardError> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    match existing {
        Some(content) if content.contains(line) => Ok(false),
        Some(_) => {
            let mut file = fs::OpenOptions::new().append(true).open(path)?;
            writeln!(file, "\n{}", line)?;
            Ok(true)
        }
        None => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{}\n", line))?;
            Ok(true)
        }
    }
}

pub fn dir_on_path(dir: &Path, path_var: &OsStr) -> bool {
    env::split_paths(path_var).any(|entry| entry == dir)
}

/// Whether an executable called `name` exists in one of the `PATH` entries.
pub fn launcher_on_path(name: &str, path_var: &OsStr) -> bool {
    env::split_paths(path_var).any(|dir| dir.join(name).is_file())
}

#[cfg(unix)]
fn symlink(source: &Path, target: &Path) -> Result<(), ClipboardError> {
    std::os::unix::fs::symlink(source, target).map_err(|e| {
        ClipboardError::InstallError(format!("could not link {}: {}", target.display(), e))
    })
}

#[cfg(windows)]
fn symlink(source: &Path, target: &Path) -> Result<(), ClipboardError> {
    std::os::windows::fs::symlink_file(source, target).map_err(|e| {
        ClipboardError::InstallError(format!("could not link {}: {}", target.display(), e))
    })
}

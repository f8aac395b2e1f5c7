use std::path::{PathBuf, MAIN_SEPARATOR};
use tracing::{debug, trace};

const CWD_SENTINELS: &[&str] = &["pwd", "."];

/// Turns free-form path text into an ordered list of path strings.
///
/// Text with explicit delimiters (commas, newlines, quotes) is split on them
/// and each line is tokenized shell-style. Anything else is treated as a
/// possibly flattened run of paths and regrouped heuristically, see
/// [`regroup_tokens`]. A bare space is not an explicit delimiter: plain
/// space-separated text always takes the regrouping route, so a path like
/// `/srv/My Project` survives without quoting.
#[derive(Debug, Clone)]
pub struct PathResolver {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(cwd: PathBuf) -> Self {
        PathResolver {
            cwd,
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn resolve(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Empty path input");
            return Vec::new();
        }

        let groups = if has_explicit_delimiters(text) {
            trace!("Splitting on explicit delimiters: {:?}", text);
            text.split(|c: char| c == ',' || c == '\n')
                .flat_map(tokenize)
                .collect::<Vec<_>>()
        } else {
            trace!("Regrouping flattened input: {:?}", text);
            regroup_tokens(tokenize(text))
        };

        let resolved: Vec<String> = groups
            .into_iter()
            .map(|group| group.trim().to_string())
            .filter(|group| !group.is_empty())
            .map(|group| self.expand(group))
            .collect();

        debug!("Resolved {} path(s): {:?}", resolved.len(), resolved);
        resolved
    }

    /// Resolves command-line arguments one by one, since the shell has
    /// already separated them.
    pub fn resolve_args<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        args.iter()
            .flat_map(|arg| self.resolve(arg.as_ref()))
            .collect()
    }

    fn expand(&self, path: String) -> String {
        if CWD_SENTINELS.contains(&path.as_str()) {
            return self.cwd.to_string_lossy().into_owned();
        }

        match (&self.home, path.strip_prefix('~')) {
            (Some(home), Some("")) => home.to_string_lossy().into_owned(),
            (Some(home), Some(rest)) if rest.starts_with('/') || rest.starts_with(MAIN_SEPARATOR) => {
                home.join(&rest[1..]).to_string_lossy().into_owned()
            }
            _ => path,
        }
    }
}

fn has_explicit_delimiters(text: &str) -> bool {
    text.contains(|c: char| matches!(c, ',' | '\n' | '"' | '\''))
}

fn tokenize(line: &str) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    // Unbalanced quotes, e.g. an apostrophe in a name: regroup the words.
    shlex::split(line).unwrap_or_else(|| {
        trace!("Unbalanced quotes in {:?}", line);
        regroup_tokens(line.split_whitespace().map(str::to_string).collect())
    })
}

fn starts_new_path(token: &str) -> bool {
    token.starts_with('/')
        || token.starts_with(MAIN_SEPARATOR)
        || token.starts_with('~')
        || CWD_SENTINELS.contains(&token)
}

/// Best-effort recovery of multi-word paths from a flattened token run.
///
/// A token that looks absolute (leading separator or `~`) or is a
/// current-directory sentinel opens a new path; every other token is
/// appended to the open path with a single space. This cannot tell a real
/// space-separated list of relative paths from one relative path with
/// spaces: `src tests` comes back as the single path `src tests`.
pub fn regroup_tokens(tokens: Vec<String>) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for token in tokens {
        match groups.last_mut() {
            Some(current) if !starts_new_path(&token) => {
                current.push(' ');
                current.push_str(&token);
            }
            _ => groups.push(token),
        }
    }
    groups
}

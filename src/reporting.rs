use crate::aggregate::RecordSummary;
use crate::trie::{Trie, TrieNode};
use std::path::Path;
use tracing::{debug, info};

/// Logs the copied files as a tree with line counts.
pub fn print_summary(records: &[RecordSummary]) {
    debug!("Printing summary for {} file(s)", records.len());
    for line in summary_lines(records) {
        info!("{}", line);
    }
}

/// The lines [`print_summary`] logs, top line first.
pub fn summary_lines(records: &[RecordSummary]) -> Vec<String> {
    let mut trie = Trie::new();
    for record in records {
        trie.insert(Path::new(&record.path), record.lines);
    }

    let mut lines = vec![format!(
        "Copied {} file(s) ({} lines)",
        records.len(),
        trie.root().total_lines()
    )];
    render_tree(trie.root(), "", &mut lines);
    lines
}

fn render_tree(node: &TrieNode, prefix: &str, out: &mut Vec<String>) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗━━" } else { "┣━━" };

        match child.line_count {
            Some(lines) if child.children.is_empty() => {
                out.push(format!(
                    "{}{} {} {} ({} lines)",
                    prefix,
                    connector,
                    file_icon(Path::new(name)),
                    name,
                    lines
                ));
            }
            _ => {
                out.push(format!(
                    "{}{}📂 {} ({} lines)",
                    prefix,
                    connector,
                    name,
                    child.total_lines()
                ));
                let child_prefix = format!("{}{}    ", prefix, if is_last { " " } else { "┃" });
                render_tree(child, &child_prefix, out);
            }
        }
    }
}

pub fn file_icon(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("py") => "🐍",
        Some("js") => "🟨",
        Some("ts") => "🔷",
        Some("html") => "🌐",
        Some("css") => "🎨",
        Some("java") => "☕",
        Some("go") => "🐹",
        Some("rb") => "💎",
        Some("php") => "🐘",
        Some("rs") => "🦀",
        Some("json") => "🔖",
        Some("yaml") | Some("yml") => "🗂️",
        Some("xml") => "📰",
        Some("ini") | Some("cfg") | Some("conf") | Some("toml") => "⚙️",
        Some("lock") => "🔒",
        Some("md") => "📝",
        Some("sh") => "🐚",
        Some("bat") | Some("cmd") | Some("ps1") => "🖥️",
        Some("dockerfile") => "🐳",
        _ => "📄",
    }
}

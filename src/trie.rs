use std::collections::BTreeMap;
use std::path::Path;
use tracing::trace;

/// A path component in the summary tree.
#[derive(Default)]
pub struct TrieNode {
    pub children: BTreeMap<String, TrieNode>,
    pub line_count: Option<usize>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in this node plus everything below it.
    pub fn total_lines(&self) -> usize {
        self.line_count.unwrap_or(0)
            + self
                .children
                .values()
                .map(TrieNode::total_lines)
                .sum::<usize>()
    }
}

#[derive(Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &Path, line_count: usize) {
        let mut current_node = &mut self.root;
        for component in path.iter() {
            let component_str = component.to_string_lossy().into_owned();
            current_node = current_node
                .children
                .entry(component_str)
                .or_default();
        }
        if current_node.line_count.is_some() {
            trace!("Path listed twice: {:?}", path);
        }
        current_node.line_count = Some(current_node.line_count.unwrap_or(0) + line_count);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

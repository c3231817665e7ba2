use crate::error::{ParseError, Result};
use crate::graph::VertexId;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// An interning table from roster names to dense vertex ids.
///
/// Ids are handed out 0, 1, 2, ... in order of first appearance, so the
/// table also works backwards: `names[id]` recovers the name. A roster may
/// spell each name only once; a repeat aborts the parse.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    /// Map of name to vertex id
    ids: HashMap<String, VertexId>,

    /// Names in id order; position doubles as the id
    names: Vec<String>,
}

impl NameIndex {
    /// Reads and parses a roster file.
    ///
    /// Fails with [`ParseError::SourceUnavailable`] when the file cannot be
    /// read, or [`ParseError::DuplicateName`] when a name repeats.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        Self::parse(&source)
    }

    /// Parses roster content that is already in memory.
    ///
    /// Names are whitespace-separated and may span any number of lines;
    /// token order alone decides id assignment. An empty source is a valid
    /// empty roster.
    pub fn parse(source: &str) -> Result<Self> {
        let mut index = NameIndex::default();
        for (lineno, line) in source.lines().enumerate() {
            for name in line.split_whitespace() {
                index.insert(name, lineno + 1)?;
            }
        }
        debug!("indexed {} roster names", index.len());
        Ok(index)
    }

    /// Interns one name under the next sequential id.
    fn insert(&mut self, name: &str, line: usize) -> Result<()> {
        if self.ids.contains_key(name) {
            return Err(ParseError::DuplicateName {
                name: name.to_string(),
                line,
            });
        }
        self.ids.insert(name.to_string(), self.names.len());
        self.names.push(name.to_string());
        Ok(())
    }

    /// Resolves a name to its vertex id.
    pub fn resolve(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Returns the name interned under `id`.
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// All names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consumes the index, keeping only the id-ordered names.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when the roster was empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

//! Core graph data structure.
//!
//! The sociogram stores a directed "who likes whom" relation in one dense
//! boolean matrix. Construction consumes a finished [`NameIndex`] plus the
//! likes source and either yields a complete, immutable graph or fails with
//! the first parse error.

use crate::error::{ParseError, Result};
use crate::name_index::NameIndex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Dense identifier of a vertex; equal to the name's roster position.
pub type VertexId = usize;

/// A directed liking relation over N named vertices.
///
/// The matrix is a single contiguous row-major `Vec<bool>` of N*N cells.
/// Cell `(i, j)` is true iff vertex `j` likes vertex `i`: row `i` collects
/// the likes *received* by `i`, column `j` the likes *cast* by `j`. Only
/// `add_like` writes cells and only [`Sociogram::likes`] and `row` read
/// them back, so the direction convention lives in exactly those three
/// places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sociogram {
    /// Display names in vertex-id order.
    names: Vec<String>,

    /// Flat N*N adjacency cells; the diagonal stays false.
    matrix: Vec<bool>,

    /// Vertex count N, fixed at construction.
    size: usize,
}

impl Sociogram {
    /// Builds a sociogram by reading both source files.
    ///
    /// Parses `names_path` into a [`NameIndex`], then runs `likes_path`
    /// through [`Sociogram::build`]. Any unreadable file, duplicated roster
    /// name, or unknown name in the likes list aborts the whole build and
    /// no graph value is produced.
    pub fn from_paths(names_path: &Path, likes_path: &Path) -> Result<Self> {
        let index = NameIndex::from_path(names_path)?;
        let likes = fs::read_to_string(likes_path).map_err(|e| ParseError::io(likes_path, e))?;
        Self::build(index, &likes)
    }

    /// Builds a sociogram from a finished index and the likes source text.
    ///
    /// The likes source is line-oriented: the first name on a line is the
    /// subject, every further name on the same line someone the subject
    /// likes. Blank lines are skipped, a subject with no objects is valid,
    /// and a subject may recur on later lines (its likes accumulate). Every
    /// name must resolve in `index`; a self-reference records nothing.
    pub fn build(index: NameIndex, source: &str) -> Result<Self> {
        let size = index.len();
        let mut graph = Sociogram {
            names: Vec::new(),
            matrix: vec![false; size * size],
            size,
        };

        for (lineno, line) in source.lines().enumerate() {
            let mut names = line.split_whitespace();
            let subject = match names.next() {
                Some(name) => name,
                None => continue,
            };
            let admirer = Self::lookup(&index, subject, lineno + 1)?;
            for object in names {
                let target = Self::lookup(&index, object, lineno + 1)?;
                graph.add_like(admirer, target);
            }
        }

        graph.names = index.into_names();
        debug!(
            "built sociogram with {} vertices and {} likes",
            graph.size,
            graph.like_count()
        );
        Ok(graph)
    }

    fn lookup(index: &NameIndex, name: &str, line: usize) -> Result<VertexId> {
        index.resolve(name).ok_or_else(|| ParseError::UnknownVertex {
            name: name.to_string(),
            line,
        })
    }

    /// Records that `admirer` likes `target`.
    ///
    /// This is the one place a cell is written: the statement lands
    /// transposed, at row `target` and column `admirer`. A self-reference
    /// lands nowhere, which keeps the diagonal false.
    fn add_like(&mut self, admirer: VertexId, target: VertexId) {
        if admirer == target {
            return;
        }
        self.matrix[target * self.size + admirer] = true;
    }

    /// Returns true iff `admirer` likes `target`.
    ///
    /// Ids outside the roster never like anyone, so the answer for them is
    /// simply false.
    pub fn likes(&self, admirer: VertexId, target: VertexId) -> bool {
        if admirer >= self.size || target >= self.size {
            return false;
        }
        self.matrix[target * self.size + admirer]
    }

    /// Row `v` of the matrix: cell `j` is true iff `j` likes `v`.
    pub(crate) fn row(&self, v: VertexId) -> &[bool] {
        &self.matrix[v * self.size..(v + 1) * self.size]
    }

    /// Returns the vertex count N.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true for the zero-vertex graph.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Display names in vertex-id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name of vertex `v`.
    pub fn name(&self, v: VertexId) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }

    /// Counts the true cells, i.e. the recorded likes.
    fn like_count(&self) -> usize {
        self.matrix.iter().filter(|&&cell| cell).count()
    }
}

/// Graph statistics for status output.
#[derive(Debug, Serialize, Deserialize)]
pub struct SociogramStats {
    pub vertex_count: usize,
    pub like_count: usize,
}

impl Sociogram {
    /// Returns graph statistics.
    pub fn stats(&self) -> SociogramStats {
        SociogramStats {
            vertex_count: self.size,
            like_count: self.like_count(),
        }
    }
}

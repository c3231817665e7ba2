//! Sociogram Graph - "who likes whom" relation analysis
//!
//! This crate loads a labeled directed relation from two plain-text sources
//! into a dense boolean adjacency matrix and answers three structural
//! questions: who receives no like at all, whose like goes unanswered, and
//! who collects the most likes.
//!
//! # Architecture
//!
//! Construction runs in two stages:
//! - A [`NameIndex`] parses the roster source and interns every distinct
//!   name under a dense id in first-seen order.
//! - [`Sociogram::build`] consumes the index plus the likes source and
//!   fills one contiguous N*N matrix.
//!
//! A [`Sociogram`] value only exists if the whole build succeeded, and the
//! queries on it are read-only and total.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> sociogram_graph::Result<()> {
//! use sociogram_graph::Sociogram;
//! use std::path::Path;
//!
//! let graph = Sociogram::from_paths(Path::new("names.txt"), Path::new("likes.txt"))?;
//!
//! for name in graph.isolated_vertices() {
//!     println!("{} is liked by nobody", name);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod graph;
mod name_index;
mod query;

pub use error::{ParseError, Result};
pub use graph::{Sociogram, SociogramStats, VertexId};
pub use name_index::NameIndex;
pub use query::Popularity;

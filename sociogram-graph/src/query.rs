//! Analytical queries over a built sociogram.
//!
//! This module answers the three questions the tool exists for: who is
//! liked by nobody, whose like goes unanswered, and who collects the most
//! likes. Every query is read-only and total, and every result comes back
//! in ascending vertex-id order, which is first-seen roster order.

use crate::graph::{Sociogram, VertexId};
use serde::{Deserialize, Serialize};

/// One vertex's popularity: its name and the likes it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popularity {
    pub name: String,
    pub likes: usize,
}

impl Sociogram {
    /// Names of the vertices that nobody likes.
    ///
    /// A vertex is isolated when its whole matrix row is false, meaning no
    /// like was ever cast at it. In an edge-less graph that is every vertex.
    pub fn isolated_vertices(&self) -> Vec<String> {
        (0..self.len())
            .filter(|&v| self.row(v).iter().all(|&cell| !cell))
            .map(|v| self.names()[v].clone())
            .collect()
    }

    /// Names of the vertices whose like goes unanswered.
    ///
    /// Scans every unordered pair `(i, j)` with `i < j`. A pair is only
    /// considered when the higher vertex `j` has cast a like at all; an
    /// admitted pair counts when exactly one liking direction holds between
    /// the two, and the vertex holding the unanswered like is recorded.
    /// Names come back deduplicated, in ascending vertex-id order.
    pub fn unrequited_vertices(&self) -> Vec<String> {
        let mut recorded: Vec<VertexId> = Vec::new();

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                if !self.casts_any_like(j) {
                    continue;
                }
                let j_likes_i = self.likes(j, i);
                let i_likes_j = self.likes(i, j);
                if j_likes_i != i_likes_j {
                    recorded.push(if j_likes_i { j } else { i });
                }
            }
        }

        recorded.sort_unstable();
        recorded.dedup();
        recorded
            .into_iter()
            .map(|v| self.names()[v].clone())
            .collect()
    }

    /// The most-liked vertices with their like counts.
    ///
    /// A vertex's count is its received likes, its matrix row sum. All
    /// vertices tied at the maximum are returned in ascending vertex-id
    /// order; in an edge-less graph the maximum is zero and every vertex
    /// qualifies.
    pub fn most_popular_vertices(&self) -> Vec<Popularity> {
        let received: Vec<usize> = (0..self.len())
            .map(|v| self.row(v).iter().filter(|&&cell| cell).count())
            .collect();
        let max = match received.iter().copied().max() {
            Some(max) => max,
            None => return Vec::new(),
        };

        received
            .into_iter()
            .enumerate()
            .filter(|&(_, likes)| likes == max)
            .map(|(v, likes)| Popularity {
                name: self.names()[v].clone(),
                likes,
            })
            .collect()
    }

    /// Returns true iff `v` has cast at least one like.
    ///
    /// This gates which pairs the unrequited scan considers, and it is only
    /// ever asked of the higher vertex of a pair.
    // TODO: confirm with the product owner that the gate should look at the
    // likes `v` casts rather than the likes `v` receives, and that checking
    // only the higher vertex of each pair is intended. A pair whose higher
    // vertex never cast a like is currently dropped.
    fn casts_any_like(&self, v: VertexId) -> bool {
        (0..self.len()).any(|target| self.likes(v, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name_index::NameIndex;

    fn build(roster: &str, likes: &str) -> Sociogram {
        let index = NameIndex::parse(roster).unwrap();
        Sociogram::build(index, likes).unwrap()
    }

    #[test]
    fn test_isolated_finds_the_never_liked() {
        // ann likes both others, ben likes carol; nobody likes ann
        let graph = build("ann ben carol", "ann ben carol\nben carol");
        assert_eq!(graph.isolated_vertices(), ["ann"]);
    }

    #[test]
    fn test_isolated_lists_everyone_in_edgeless_graph() {
        let graph = build("ann ben carol", "");
        assert_eq!(graph.isolated_vertices(), ["ann", "ben", "carol"]);
    }

    #[test]
    fn test_isolated_empty_when_everyone_is_liked() {
        let graph = build("ann ben carol", "ann ben\nben carol\ncarol ann");
        assert!(graph.isolated_vertices().is_empty());
    }

    #[test]
    fn test_isolated_on_empty_graph() {
        let graph = build("", "");
        assert!(graph.isolated_vertices().is_empty());
    }

    #[test]
    fn test_unrequited_records_the_unanswered_liker() {
        // ann likes ben, ben never answers; ben's own like admits the pair
        let graph = build("ann ben carol", "ann ben carol\nben carol");
        assert_eq!(graph.unrequited_vertices(), ["ann"]);
    }

    #[test]
    fn test_unrequited_skips_pairs_whose_higher_vertex_casts_nothing() {
        // ann likes ben and is not liked back, but ben casts no like at all
        let graph = build("ann ben", "ann ben");
        assert!(graph.unrequited_vertices().is_empty());
    }

    #[test]
    fn test_unrequited_skips_mutual_pairs() {
        let graph = build("ann ben", "ann ben\nben ann");
        assert!(graph.unrequited_vertices().is_empty());
    }

    #[test]
    fn test_unrequited_sorts_by_roster_order() {
        // carol likes ann, dave likes carol; neither is answered
        let graph = build("ann ben carol dave", "ann ben\nben ann\ncarol ann\ndave carol");
        assert_eq!(graph.unrequited_vertices(), ["carol", "dave"]);
    }

    #[test]
    fn test_unrequited_deduplicates_a_repeat_offender() {
        // ann's likes at ben and carol both go unanswered
        let graph = build("ann ben carol dave", "ann ben carol\nben dave\ncarol dave");
        assert_eq!(graph.unrequited_vertices(), ["ann"]);
    }

    #[test]
    fn test_unrequited_on_empty_graph() {
        let graph = build("", "");
        assert!(graph.unrequited_vertices().is_empty());
    }

    #[test]
    fn test_most_popular_single_winner() {
        let graph = build("ann ben carol", "ann ben carol\nben carol");

        let popular = graph.most_popular_vertices();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "carol");
        assert_eq!(popular[0].likes, 2);
    }

    #[test]
    fn test_most_popular_reports_ties_in_roster_order() {
        let graph = build("ann ben carol", "ann ben\nben ann");

        let popular = graph.most_popular_vertices();
        assert_eq!(
            popular,
            [
                Popularity { name: "ann".to_string(), likes: 1 },
                Popularity { name: "ben".to_string(), likes: 1 },
            ]
        );
    }

    #[test]
    fn test_most_popular_in_edgeless_graph_is_everyone_at_zero() {
        let graph = build("ann ben", "");

        let popular = graph.most_popular_vertices();
        assert_eq!(popular.len(), 2);
        assert!(popular.iter().all(|entry| entry.likes == 0));
    }

    #[test]
    fn test_most_popular_on_empty_graph() {
        let graph = build("", "");
        assert!(graph.most_popular_vertices().is_empty());
    }

    #[test]
    fn test_popularity_serializes_as_name_and_likes() {
        let entry = Popularity {
            name: "carol".to_string(),
            likes: 2,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "carol", "likes": 2 }));
    }
}

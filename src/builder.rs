use crate::disjoint_set::DisjointSetForest;
use crate::edge::{Cost, Edge};
use crate::error::MstError;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

const PARALLEL_SORT_THRESHOLD: usize = 1 << 16;

/// Tunables for [`MstBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstConfig {
    /// Stop scanning once `vertex_count - 1` edges have been accepted.
    /// Turning this off never changes the result, only the amount of work.
    pub early_termination: bool,
    /// Edge collections at least this long are sorted in parallel.
    pub parallel_sort_threshold: usize,
    /// Threads used by the parallel sort; `0` lets rayon decide.
    pub num_threads: usize,
}

impl Default for MstConfig {
    fn default() -> Self {
        MstConfig {
            early_termination: true,
            parallel_sort_threshold: PARALLEL_SORT_THRESHOLD,
            num_threads: 0,
        }
    }
}

/// Outcome of a Kruskal run.
///
/// When the graph is disconnected this describes a minimum spanning forest;
/// check [`is_spanning_tree`](MstResult::is_spanning_tree) to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult<W> {
    pub total_cost: W,
    pub edges_used: usize,
    pub vertex_count: usize,
    /// Accepted edges in the order they were accepted.
    pub tree: Vec<Edge<W>>,
}

impl<W: Cost> MstResult<W> {
    /// Whether the accepted edges connect every vertex.
    ///
    /// Graphs with zero or one vertex are trivially spanned.
    pub fn is_spanning_tree(&self) -> bool {
        self.edges_used + 1 >= self.vertex_count
    }

    /// Number of connected components left after the run.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges_used
    }
}

/// Builds minimum spanning trees with Kruskal's algorithm.
///
/// # Example
///
/// ```
/// use kruskal_mst::{Edge, MstBuilder};
///
/// let edges = vec![Edge::new(1, 0, 1), Edge::new(2, 1, 2), Edge::new(10, 0, 2)];
/// let result = MstBuilder::default().compute(3, edges).unwrap();
/// assert_eq!(result.total_cost, 3);
/// assert!(result.is_spanning_tree());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MstBuilder {
    config: MstConfig,
}

impl MstBuilder {
    /// Creates a builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Sorting and termination settings, see [`MstConfig`].
    pub fn new(config: MstConfig) -> MstBuilder {
        MstBuilder { config }
    }

    pub fn config(&self) -> &MstConfig {
        &self.config
    }

    /// Checks every endpoint against `vertex_count`, then runs Kruskal.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Number of vertices; endpoints must lie in `0..vertex_count`.
    /// * `edges` - The edge collection, consumed and sorted in place.
    ///
    /// # Returns
    ///
    /// The spanning tree (or forest), [`MstError::VertexOutOfRange`] for a bad
    /// endpoint, or [`MstError::CostOverflow`] if the total does not fit in `W`.
    pub fn compute<W: Cost>(
        &self,
        vertex_count: usize,
        mut edges: Vec<Edge<W>>,
    ) -> Result<MstResult<W>, MstError> {
        if let Some((edge_index, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, edge)| edge.max_endpoint() >= vertex_count)
        {
            return Err(MstError::VertexOutOfRange {
                edge_index,
                vertex: edge.max_endpoint(),
                vertex_count,
            });
        }

        self.sort_edges(&mut edges)?;
        self.scan_sorted(vertex_count, &edges)
    }

    fn sort_edges<W: Cost>(&self, edges: &mut [Edge<W>]) -> Result<(), MstError> {
        if edges.len() < self.config.parallel_sort_threshold {
            edges.sort_unstable();
            return Ok(());
        }

        log::debug!(
            "Sorting {} edges in parallel ({} threads requested)",
            edges.len(),
            self.config.num_threads
        );
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()?;
        pool.install(|| edges.par_sort_unstable());
        Ok(())
    }

    /// Greedy scan over edges already in ascending order.
    fn scan_sorted<W: Cost>(
        &self,
        vertex_count: usize,
        edges: &[Edge<W>],
    ) -> Result<MstResult<W>, MstError> {
        log::debug!(
            "Running Kruskal over {} vertices and {} edges",
            vertex_count,
            edges.len()
        );

        let target = vertex_count.saturating_sub(1);
        let mut forest = DisjointSetForest::new(vertex_count);
        let mut total_cost = W::default();
        let mut tree = Vec::with_capacity(target.min(edges.len()));

        for (position, edge) in edges.iter().enumerate() {
            if self.config.early_termination && tree.len() == target {
                log::debug!(
                    "Spanning tree complete after {} of {} edges",
                    position,
                    edges.len()
                );
                break;
            }
            if forest.union(edge.a, edge.b) {
                log::trace!("Accepted edge {edge:?}");
                total_cost = total_cost
                    .checked_add(edge.weight)
                    .ok_or(MstError::CostOverflow {
                        edges_used: tree.len(),
                    })?;
                tree.push(*edge);
            }
        }

        let result = MstResult {
            total_cost,
            edges_used: tree.len(),
            vertex_count,
            tree,
        };
        if !result.is_spanning_tree() {
            log::warn!(
                "Graph is disconnected: {} components remain, returning a spanning forest",
                result.component_count()
            );
        }
        Ok(result)
    }
}

/// Computes the minimum spanning tree (or forest) of a graph with `vertex_count`
/// vertices using the default configuration.
///
/// # Panics
///
/// Panics if an edge references a vertex outside `0..vertex_count`, or if the
/// total cost overflows `W`. Use [`MstBuilder::compute`] to get these as errors.
pub fn compute_mst<W: Cost>(vertex_count: usize, mut edges: Vec<Edge<W>>) -> MstResult<W> {
    edges.sort_unstable();
    match MstBuilder::default().scan_sorted(vertex_count, &edges) {
        Ok(result) => result,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_with_shortcut() -> Vec<Edge<i64>> {
        vec![
            Edge::new(1, 0, 1),
            Edge::new(2, 1, 2),
            Edge::new(3, 2, 3),
            Edge::new(10, 0, 3),
        ]
    }

    #[test]
    fn path_graph_ignores_expensive_shortcut() {
        let result = compute_mst(4, path_with_shortcut());
        assert_eq!(result.total_cost, 6);
        assert_eq!(result.edges_used, 3);
        assert!(result.is_spanning_tree());
        assert_eq!(
            result.tree,
            vec![Edge::new(1, 0, 1), Edge::new(2, 1, 2), Edge::new(3, 2, 3)]
        );
    }

    #[test]
    fn single_vertex_has_zero_cost() {
        let result = compute_mst::<i64>(1, vec![]);
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.edges_used, 0);
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn zero_vertices_has_zero_cost() {
        let result = compute_mst::<u32>(0, vec![]);
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.component_count(), 0);
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn no_edges_leaves_every_vertex_isolated() {
        let result = compute_mst::<u32>(5, vec![]);
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.edges_used, 0);
        assert_eq!(result.component_count(), 5);
        assert!(!result.is_spanning_tree());
    }

    #[test]
    fn isolated_vertex_yields_partial_forest() {
        let result = compute_mst(3, vec![Edge::new(5, 0, 1)]);
        assert_eq!(result.total_cost, 5);
        assert_eq!(result.edges_used, 1);
        assert_eq!(result.component_count(), 2);
        assert!(!result.is_spanning_tree());
    }

    #[test]
    fn cheaper_parallel_edge_wins() {
        let edges = vec![
            Edge::new(7, 0, 1),
            Edge::new(2, 0, 1),
            Edge::new(3, 1, 2),
            Edge::new(4, 2, 3),
        ];
        let result = compute_mst(4, edges);
        assert_eq!(result.total_cost, 9);
        assert!(result.tree.contains(&Edge::new(2, 0, 1)));
        assert!(!result.tree.contains(&Edge::new(7, 0, 1)));
    }

    #[test]
    fn self_loop_contributes_nothing() {
        let edges = vec![
            Edge::new(0, 2, 2),
            Edge::new(1, 0, 1),
            Edge::new(1, 1, 2),
        ];
        let result = compute_mst(3, edges);
        assert_eq!(result.total_cost, 2);
        assert_eq!(result.edges_used, 2);
        assert!(result.tree.iter().all(|edge| !edge.is_self_loop()));
    }

    #[test]
    fn negative_weights_are_summed() {
        let edges = vec![Edge::new(-5, 0, 1), Edge::new(-1, 1, 2), Edge::new(-3, 0, 2)];
        let result = compute_mst(3, edges);
        assert_eq!(result.total_cost, -8);
    }

    #[test]
    fn early_termination_does_not_change_result() {
        let eager = MstBuilder::new(MstConfig {
            early_termination: false,
            ..MstConfig::default()
        });
        let lazy = MstBuilder::default();
        let edges = path_with_shortcut();
        assert_eq!(
            eager.compute(4, edges.clone()).unwrap(),
            lazy.compute(4, edges).unwrap()
        );
    }

    #[test]
    fn parallel_sort_matches_sequential() {
        let edges: Vec<Edge<u64>> = (0..200)
            .map(|i| Edge::new((i * 37 % 101) as u64, i % 50, (i * 7 + 3) % 50))
            .collect();
        let parallel = MstBuilder::new(MstConfig {
            parallel_sort_threshold: 0,
            num_threads: 2,
            ..MstConfig::default()
        });
        assert_eq!(parallel.config().num_threads, 2);
        assert!(parallel.config().early_termination);
        assert_eq!(
            parallel.compute(50, edges.clone()).unwrap(),
            MstBuilder::default().compute(50, edges).unwrap()
        );
    }

    #[test]
    fn compute_rejects_out_of_range_vertex() {
        let edges = vec![Edge::new(1, 0, 1), Edge::new(1, 1, 3)];
        let err = MstBuilder::default().compute(3, edges).unwrap_err();
        assert!(matches!(
            err,
            MstError::VertexOutOfRange {
                edge_index: 1,
                vertex: 3,
                vertex_count: 3,
            }
        ));
    }

    #[test]
    fn compute_reports_cost_overflow() {
        let edges = vec![Edge::new(i64::MAX, 0, 1), Edge::new(1, 1, 2)];
        let err = MstBuilder::default().compute(3, edges).unwrap_err();
        assert!(matches!(err, MstError::CostOverflow { edges_used: 1 }));
    }

    #[test]
    fn large_costs_that_fit_are_summed() {
        let edges = vec![Edge::new(i64::MAX - 1, 0, 1), Edge::new(1, 1, 2)];
        let result = MstBuilder::default().compute(3, edges).unwrap();
        assert_eq!(result.total_cost, i64::MAX);
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn compute_mst_panics_on_cost_overflow() {
        compute_mst(3, vec![Edge::new(u8::MAX, 0, 1), Edge::new(1, 1, 2)]);
    }

    #[test]
    #[should_panic]
    fn compute_mst_panics_on_out_of_range_vertex() {
        compute_mst(2, vec![Edge::new(1u8, 0, 2)]);
    }
}

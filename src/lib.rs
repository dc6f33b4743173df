//! Minimum spanning trees with Kruskal's algorithm.
//!
//! The crate is built around two pieces:
//!
//! - [`DisjointSetForest`]: a union-find structure with path compression and union by rank.
//! - [`MstBuilder`] / [`compute_mst`]: sorts edges by weight and greedily merges
//!   endpoints through the forest, accumulating the total cost.
//!
//! Disconnected graphs are not an error. The result then describes a minimum
//! spanning forest, and [`MstResult::is_spanning_tree`] reports whether every
//! vertex ended up connected.
//!
//! # Example
//!
//! ```
//! use kruskal_mst::{compute_mst, parse_graph};
//!
//! let graph = parse_graph::<i64>("4 4\n1 2 1\n2 3 2\n3 4 3\n1 4 10\n").unwrap();
//! let result = compute_mst(graph.vertex_count, graph.edges);
//! assert_eq!(result.total_cost, 6);
//! assert_eq!(result.edges_used, 3);
//! ```

pub use builder::{compute_mst, MstBuilder, MstConfig, MstResult};
pub use disjoint_set::DisjointSetForest;
pub use edge::{Cost, Edge};
pub use error::{MstError, ParseError};
pub use input::{parse_graph, read_graph, Graph};

pub mod builder;
pub mod disjoint_set;
pub mod edge;
pub mod error;
pub mod input;

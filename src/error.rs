use thiserror::Error;

/// Errors reported by the validated builder entry point.
#[derive(Debug, Error)]
pub enum MstError {
    #[error("Edge {edge_index} references vertex {vertex}, but the graph has {vertex_count} vertices")]
    VertexOutOfRange {
        /// Position of the offending edge in the input collection.
        edge_index: usize,
        /// Zero-indexed vertex that is out of range.
        vertex: usize,
        vertex_count: usize,
    },

    #[error("Total cost overflowed after accepting {edges_used} edges")]
    CostOverflow {
        /// Edges accepted before the sum overflowed.
        edges_used: usize,
    },

    #[error("Failed to build sorting thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors related to reading a graph from its textual form.
///
/// The text is a header `R C` followed by `C` records `a b cost`, with
/// 1-indexed endpoints.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for when the input ran out.
        expected: &'static str,
    },

    #[error("Invalid number {token:?} at token {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("Vertex {vertex} out of range 1..={vertex_count}")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Unexpected trailing input at token {position}")]
    TrailingInput { position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

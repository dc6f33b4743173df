use crate::edge::{Cost, Edge};
use crate::error::ParseError;
use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

/// A graph ready to be handed to the builder: zero-indexed edges over
/// `vertex_count` vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W> {
    pub vertex_count: usize,
    pub edges: Vec<Edge<W>>,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Tokens<'a> {
        Tokens {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self
            .inner
            .next()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        let position = self.position;
        self.position += 1;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
            position,
        })
    }

    /// Reads a 1-indexed vertex and returns it zero-indexed.
    fn next_vertex(&mut self, vertex_count: usize) -> Result<usize, ParseError> {
        let vertex: usize = self.next_number("vertex")?;
        if vertex == 0 || vertex > vertex_count {
            return Err(ParseError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
        Ok(vertex - 1)
    }
}

/// Parses the textual graph format: a header `R C` followed by `C` records
/// `a b cost` with 1-indexed endpoints.
///
/// ```
/// use kruskal_mst::parse_graph;
///
/// let graph = parse_graph::<i64>("3 2\n1 2 5\n2 3 1\n").unwrap();
/// assert_eq!(graph.vertex_count, 3);
/// assert_eq!(graph.edges[0].endpoints(), (0, 1));
/// ```
pub fn parse_graph<W: Cost + FromStr>(text: &str) -> Result<Graph<W>, ParseError> {
    let mut tokens = Tokens::new(text);
    let vertex_count: usize = tokens.next_number("vertex count")?;
    let edge_count: usize = tokens.next_number("edge count")?;

    // each record needs at least "a b c" plus a separator
    let mut edges = Vec::with_capacity(edge_count.min(text.len() / 6));
    for _ in 0..edge_count {
        let a = tokens.next_vertex(vertex_count)?;
        let b = tokens.next_vertex(vertex_count)?;
        let weight: W = tokens.next_number("edge cost")?;
        edges.push(Edge::new(weight, a, b));
    }

    if tokens.inner.next().is_some() {
        return Err(ParseError::TrailingInput {
            position: tokens.position,
        });
    }

    log::debug!(
        "Parsed graph with {} vertices and {} edges",
        vertex_count,
        edges.len()
    );
    Ok(Graph {
        vertex_count,
        edges,
    })
}

/// Reads the whole of `reader` and parses it with [`parse_graph`].
pub fn read_graph<W: Cost + FromStr, R: Read>(mut reader: R) -> Result<Graph<W>, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_graph(&text)
}

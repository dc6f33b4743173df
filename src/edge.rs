use std::fmt::Debug;

/// A weight type usable as an edge cost.
///
/// Implemented for every primitive integer, signed or unsigned.
pub trait Cost: Copy + Ord + Default + Send + Sync + Debug {
    /// Adds `rhs`, returning `None` if the sum does not fit in `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// An undirected weighted edge between two zero-indexed vertices.
///
/// Field order matters: the derived ordering compares `weight` first and
/// falls back to the endpoints, so sorting a slice of edges puts them in
/// ascending weight with a deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<W> {
    pub(crate) weight: W,
    pub(crate) a: usize,
    pub(crate) b: usize,
}

impl<W: Cost> Edge<W> {
    /// Creates an edge of cost `weight` connecting `a` and `b`.
    ///
    /// Self-loops (`a == b`) are allowed; the builder never accepts them.
    pub fn new(weight: W, a: usize, b: usize) -> Edge<W> {
        Edge { weight, a, b }
    }

    /// Returns the cost of traversing this edge.
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the two endpoints in the order they were given.
    ///
    /// # Returns
    ///
    /// A tuple `(a, b)` of zero-indexed vertices.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Largest endpoint index, used when validating against a vertex count.
    pub(crate) fn max_endpoint(&self) -> usize {
        self.a.max(self.b)
    }
}

//! Middleware pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! Pipeline [p1, p2, ..., pn]
//!     → build(H)
//!     → p1(p2(...pn(H)))
//!
//! Request:  p1 → p2 → ... → pn → H
//! Response: H → pn → ... → p2 → p1
//! ```
//!
//! # Design Decisions
//! - First pipe added is the outermost wrapper
//! - Pipelines are values: composition returns a new pipeline, operands untouched
//! - Building is pure; side effects happen only when the built handler runs

mod handler;
mod pipe;

pub use handler::Handler;
pub use pipe::Pipe;

/// An ordered, composable sequence of pipes.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pipes: Vec<Pipe>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new pipeline with `pipes` appended after this one's.
    #[must_use]
    pub fn with<I>(&self, pipes: I) -> Self
    where
        I: IntoIterator<Item = Pipe>,
    {
        let mut next = self.clone();
        next.pipes.extend(pipes);
        next
    }

    /// Return a new pipeline running this one's pipes, then `other`'s.
    #[must_use]
    pub fn chain(&self, other: &Pipeline) -> Self {
        self.with(other.pipes.iter().cloned())
    }

    /// Fold the pipes around `terminal`, last pipe innermost.
    pub fn build(&self, terminal: Handler) -> Handler {
        self.pipes
            .iter()
            .rev()
            .fold(terminal, |next, pipe| pipe.apply(next))
    }

    /// Whether `prefix` is, pipe for pipe, the start of this pipeline.
    pub fn starts_with(&self, prefix: &Pipeline) -> bool {
        prefix.pipes.len() <= self.pipes.len()
            && prefix
                .pipes
                .iter()
                .zip(&self.pipes)
                .all(|(a, b)| a.ptr_eq(b))
    }

    /// Number of leading pipes this pipeline shares, by identity, with `other`.
    pub fn common_prefix_len(&self, other: &Pipeline) -> usize {
        self.pipes
            .iter()
            .zip(&other.pipes)
            .take_while(|(a, b)| a.ptr_eq(b))
            .count()
    }

    /// Number of pipes.
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// True when building returns the terminal handler unchanged.
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Pipes in application order, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }
}

impl FromIterator<Pipe> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Pipe>>(iter: I) -> Self {
        Self {
            pipes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pipe> for Pipeline {
    fn extend<I: IntoIterator<Item = Pipe>>(&mut self, iter: I) {
        self.pipes.extend(iter);
    }
}

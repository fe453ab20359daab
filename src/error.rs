//! Error types for graph construction and loading

use thiserror::Error;

/// Errors raised while building or loading a social graph.
///
/// Queries never fail with these: a query with no answer returns `None`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("person `{0}` is already in the graph")]
    DuplicatePerson(String),

    #[error("unknown person `{0}`")]
    UnknownPerson(String),

    #[error("`{0}` cannot be friends with themselves")]
    SelfFriendship(String),

    #[error("line {line}: expected the number of people, found `{found}`")]
    InvalidCount { line: usize, found: String },

    #[error("expected {expected} people but the input ends after {found}")]
    MissingPeople { expected: usize, found: usize },

    #[error("line {line}: malformed person entry `{entry}`")]
    MalformedPerson { line: usize, entry: String },

    #[error("line {line}: malformed friendship entry `{entry}`")]
    MalformedFriendship { line: usize, entry: String },

    #[error("line {line}: expected `from|to`, found `{entry}`")]
    MalformedQuery { line: usize, entry: String },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<GraphError>,
    },

    #[error("graph has {0} people, more than the index width allows")]
    TooLarge(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Attach a 1-based input line number to a builder error.
    pub fn at_line(self, line: usize) -> Self {
        GraphError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;

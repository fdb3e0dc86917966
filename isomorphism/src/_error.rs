use tessel_inmem::GraphError;
use thiserror::Error;

/// Type alias for `Result` with default error `IsoError`.
pub type Result<T, E = IsoError> = std::result::Result<T, E>;

/// This error is raised when two graphs can not be compared.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsoError {
    /// Triples made of three blank nodes can not be matched.
    #[error("The triple ({0}) is made of three blank nodes, which is not supported")]
    AllBlankTriple(String),
    /// The brute-force search tried more assignments than allowed by its
    /// [configuration](crate::MatcherConfig::with_search_budget).
    #[error("Could not decide after {0} blank node assignments")]
    SearchBudgetExceeded(u64),
    /// An intermediate graph could not be built.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl From<tessel_term::TermError> for IsoError {
    fn from(value: tessel_term::TermError) -> Self {
        IsoError::Graph(value.into())
    }
}

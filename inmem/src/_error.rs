use tessel_term::{GraphId, TermError};
use thiserror::Error;

/// Type alias for `Result` with default error `GraphError`.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// This error is raised when a graph can not be mutated as requested.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node could not be created.
    #[error(transparent)]
    Term(#[from] TermError),
    /// The blank nodes of a triple belong to another graph,
    /// and must be copied first.
    #[error("The triple ({triple}) belongs to graph {scope}, not to graph {graph}")]
    ForeignTriple {
        /// The rejected triple.
        triple: String,
        /// The graph its blank nodes belong to.
        scope: GraphId,
        /// The graph it was asserted in.
        graph: GraphId,
    },
    /// Variables can only appear in patterns.
    #[error("The triple ({0}) contains a variable, and can not be asserted")]
    VariableInData(String),
    /// A graph can not be merged into itself,
    /// nor into a graph sharing its blank node scope.
    #[error("Graph {0} can not be merged into itself")]
    SelfMerge(GraphId),
}

//! Error taxonomy.

/// Errors surfaced by parsing, validation and configuration.
///
/// The search itself never fails once started: a mutation asked to
/// remove a node that no slot references is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    /// Wrong token count, non-integer token, or an empty instance.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An assignment with the wrong number of pairs or an index out of range.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),

    /// A search configuration that cannot be run.
    #[error("invalid search config: {0}")]
    InvalidConfig(String),
}

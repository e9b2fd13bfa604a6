use thiserror::Error;

/// Errors surfaced by [`crate::set`] construction and mutation.
///
/// Precondition violations that are not listed here (passing the key `0`,
/// indexing past `capacity()`) are programmer errors and panic instead of
/// returning a value; only the two conditions below are runtime outcomes
/// a caller can reasonably recover from.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SetError {
    /// `new` was called with `n == 0` or a load factor outside `(0, 1]`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// `add` could not find an empty cell for the new hash within the
    /// variant's probe bound. The table is left in the state it was in
    /// immediately before the call; the caller picked an unreachable
    /// load factor or ran the table past its declared capacity.
    #[error("table full: add() found no empty cell within the probe bound")]
    TableFull,
}

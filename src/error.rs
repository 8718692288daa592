use thiserror::Error;

/// Errors produced by the lookup operations that return a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
	/// The requested key is not stored in the map.
	#[error("key not found")]
	KeyNotFound,
}

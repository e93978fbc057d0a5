use std::fmt;

/// Errors produced while driving the documentation build.
#[derive(Debug)]
pub enum NodedocError {
	/// Generic error with a message.
	Generate(String),
	/// The rustdoc JSON build did not complete.
	Build(String),
}

impl fmt::Display for NodedocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Generate(message) => write!(f, "{message}"),
			Self::Build(message) => write!(f, "{message}"),
		}
	}
}

impl std::error::Error for NodedocError {}

impl From<std::io::Error> for NodedocError {
	fn from(err: std::io::Error) -> Self {
		Self::Generate(err.to_string())
	}
}

/// Result type returned by nodedoc-cargo helpers.
pub type Result<T> = std::result::Result<T, NodedocError>;

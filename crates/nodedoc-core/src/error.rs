use std::fmt;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the nodedoc-core API.
#[derive(Debug)]
pub enum NodedocError {
	/// Errors returned by the documentation build helpers.
	Cargo(nodedoc_cargo::NodedocError),
	/// Failed to read the generated documentation file.
	Io(std::io::Error),
	/// The documentation dump could not be decoded.
	Parse(String),
	/// Failed to encode the catalog as JSON.
	Serialization(SerdeError),
}

impl fmt::Display for NodedocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Cargo(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "failed to read rustdoc JSON: {err}"),
			Self::Parse(message) => write!(f, "{message}"),
			Self::Serialization(err) => write!(f, "{err}"),
		}
	}
}

impl std::error::Error for NodedocError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Cargo(err) => Some(err),
			Self::Io(err) => Some(err),
			Self::Parse(_) => None,
			Self::Serialization(err) => Some(err),
		}
	}
}

impl From<nodedoc_cargo::NodedocError> for NodedocError {
	fn from(err: nodedoc_cargo::NodedocError) -> Self {
		Self::Cargo(err)
	}
}

impl From<std::io::Error> for NodedocError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<SerdeError> for NodedocError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

/// Result type returned by the nodedoc-core library.
pub type Result<T> = std::result::Result<T, NodedocError>;

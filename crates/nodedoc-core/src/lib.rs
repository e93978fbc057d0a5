//! Core library for nodedoc, cataloging a compiler's public AST node types
//! from rustdoc JSON.
//!
//! This crate provides the high-level `Nodedoc` API which orchestrates the
//! documentation build, tolerant JSON decoding, and catalog rendering. It is
//! UI-agnostic and can be used by any frontend.

/// Item filtering, resolution, and definition formatting.
pub mod catalog;
/// Error helpers for the core API.
pub mod error;
/// Textual rendering of type descriptors.
pub mod render;
/// Tolerant data model for the rustdoc JSON dump.
pub mod schema;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use nodedoc_cargo::{build_doc_json, is_rustup_available};

pub use crate::catalog::{CatalogEntry, build_catalog};
pub use crate::error::{NodedocError, Result};
pub use crate::render::render_type;
pub use crate::schema::Document;

/// Nodedoc extracts a compiler's public AST type definitions from generated
/// documentation and re-renders them as a compact catalog of struct and enum
/// declarations with their doc comments, keyed by type name.
///
/// The tool runs a rustdoc JSON build for the configured package with the
/// nightly toolchain, decodes the dump, and emits the catalog as
/// pretty-printed JSON. One shot: a single run either completes or fails
/// before printing anything.
#[derive(Debug, Clone)]
pub struct Nodedoc {
	/// Package whose public AST node types are cataloged.
	package: String,

	/// Manifest the documentation build runs against.
	manifest_path: PathBuf,

	/// Whether to suppress cargo/rustdoc output during the build.
	silent: bool,
}

impl Nodedoc {
	/// Creates a new instance cataloging `package`, building against the
	/// manifest in the current directory.
	pub fn new(package: impl Into<String>) -> Self {
		Self {
			package: package.into(),
			manifest_path: PathBuf::from("./Cargo.toml"),
			silent: true,
		}
	}

	/// Sets the manifest path the documentation build runs against.
	pub fn with_manifest_path(mut self, manifest_path: impl Into<PathBuf>) -> Self {
		self.manifest_path = manifest_path.into();
		self
	}

	/// Enables or disables silent mode, which suppresses build output.
	pub fn with_silent(mut self, silent: bool) -> Self {
		self.silent = silent;
		self
	}

	/// Builds the documentation and returns the decoded document.
	pub fn inspect(&self) -> Result<Document> {
		let json_path = build_doc_json(&self.package, &self.manifest_path, self.silent)?;
		let json_content = fs::read_to_string(&json_path)?;
		parse_document(&json_content)
	}

	/// Builds the documentation and assembles the node catalog.
	pub fn catalog(&self) -> Result<BTreeMap<String, CatalogEntry>> {
		Ok(build_catalog(&self.inspect()?))
	}

	/// Renders the catalog as pretty-printed JSON, keys in lexicographic
	/// order.
	pub fn render(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.catalog()?)?)
	}
}

/// Decode a documentation dump, surfacing parse failures with a
/// toolchain-update hint.
fn parse_document(json: &str) -> Result<Document> {
	serde_json::from_str(json).map_err(|err| {
		let update_msg = if is_rustup_available() {
			"try running 'rustup update nightly'"
		} else {
			"try updating your nightly Rust toolchain"
		};
		NodedocError::Parse(format!(
			"failed to parse rustdoc JSON, which may indicate an outdated nightly toolchain - {update_msg}: {err}"
		))
	})
}

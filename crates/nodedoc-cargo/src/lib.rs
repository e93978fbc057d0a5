//! Documentation-build invocation for nodedoc.
//!
//! Drives `rustdoc_json` to produce the JSON documentation dump that
//! `nodedoc-core` decodes. The build runs against the target compiler's own
//! workspace with the nightly toolchain, since JSON output is still an
//! unstable rustdoc feature.

/// Error types for documentation builds.
pub mod error;

use std::path::{Path, PathBuf};

pub use error::{NodedocError, Result};

/// Check if rustup is available on the system
pub fn is_rustup_available() -> bool {
	use std::process::{Command, Stdio};
	Command::new("rustup")
		.arg("--version")
		.stderr(Stdio::null())
		.stdout(Stdio::null())
		.status()
		.map(|status| status.success())
		.unwrap_or(false)
}

/// Build rustdoc JSON for `package` and return the path of the generated file.
///
/// With `silent` set, cargo and rustdoc output is suppressed; otherwise the
/// build inherits the calling process's streams so its diagnostics stay
/// visible. A failed build aborts the run, there is no partial fallback.
pub fn build_doc_json(package: &str, manifest_path: &Path, silent: bool) -> Result<PathBuf> {
	let mut builder = rustdoc_json::Builder::default();

	// Only set toolchain if rustup is available
	if is_rustup_available() {
		builder = builder.toolchain("nightly");
	}

	builder
		.manifest_path(manifest_path)
		.package(package)
		.quiet(silent)
		.silent(silent)
		.build()
		.map_err(|err| map_build_error(&err))
}

/// Translate a `rustdoc_json` build failure into a user-facing [`NodedocError`].
fn map_build_error(err: &rustdoc_json::BuildError) -> NodedocError {
	match err {
		rustdoc_json::BuildError::BuildRustdocJsonError => NodedocError::Build(
			"failed to build rustdoc JSON: rustdoc exited with an error; rerun with --verbose for full diagnostics"
				.to_string(),
		),
		other => {
			let message = other.to_string();

			if message.contains("toolchain") && message.contains("is not installed") {
				let install_msg = if is_rustup_available() {
					"run 'rustup toolchain install nightly'"
				} else {
					"ensure nightly Rust is installed and available in PATH"
				};
				return NodedocError::Build(format!(
					"nodedoc requires the nightly toolchain to be installed - {install_msg}"
				));
			}

			NodedocError::Build(format!("failed to build rustdoc JSON: {message}"))
		}
	}
}

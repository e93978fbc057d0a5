//! CLI entrypoint.

use std::error::Error;
use std::process::{self, Command, Stdio};

use clap::Parser;
use nodedoc_core::Nodedoc;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Parsed command-line options for the nodedoc CLI.
struct Cli {
	/// Package whose public AST node types are cataloged
	#[arg(default_value = "oxc_ast")]
	package: String,

	/// Path to the manifest the documentation build runs against
	#[arg(short = 'm', long, default_value = "./Cargo.toml")]
	manifest_path: String,

	/// Show cargo/rustdoc output while generating docs
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,
}

/// Ensure a nightly toolchain is available for the rustdoc JSON build.
fn check_nightly_toolchain() -> Result<(), String> {
	// First, check if rustup is available
	let rustup_available = Command::new("rustup")
		.arg("--version")
		.stderr(Stdio::null())
		.stdout(Stdio::null())
		.status()
		.map(|status| status.success())
		.unwrap_or(false);

	if rustup_available {
		// Check if nightly toolchain is installed via rustup
		let output = Command::new("rustup")
			.args(["run", "nightly", "rustc", "--version"])
			.stderr(Stdio::null())
			.output()
			.map_err(|e| format!("Failed to run rustup: {e}"))?;

		if !output.status.success() {
			return Err("nodedoc requires the nightly toolchain to be installed.\nRun: rustup toolchain install nightly".to_string());
		}
	} else {
		// rustup is not available - check for nightly rustc directly
		let output = Command::new("rustc")
			.arg("--version")
			.output()
			.map_err(|e| {
				format!(
					"Failed to run rustc: {e}\nEnsure nightly Rust is installed and available in PATH."
				)
			})?;

		if !output.status.success() {
			return Err("nodedoc requires a nightly Rust toolchain.\nEnsure nightly Rust is installed and available in PATH.".to_string());
		}

		let version_str = String::from_utf8_lossy(&output.stdout);
		if !version_str.contains("nightly") {
			return Err(format!(
				"nodedoc requires a nightly Rust toolchain, but found: {}\nEnsure nightly Rust is installed and available in PATH.",
				version_str.trim()
			));
		}
	}

	Ok(())
}

/// Generate the catalog and print it to stdout.
fn run_cmdline(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let nodedoc = Nodedoc::new(&cli.package)
		.with_manifest_path(&cli.manifest_path)
		.with_silent(!cli.verbose);

	let output = nodedoc.render()?;

	println!("{output}");

	Ok(())
}

fn main() {
	let cli = Cli::parse();

	if let Err(e) = check_nightly_toolchain() {
		eprintln!("{} {e}", "error:".red());
		process::exit(1);
	}

	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{} {e}", "error:".red());
		process::exit(1);
	}
}

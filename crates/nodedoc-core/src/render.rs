//! Textual rendering of type descriptors.

use crate::schema::{Type, TypeArg};

/// Placeholder emitted for shapes the renderer cannot decode.
pub const UNKNOWN: &str = "unknown";

/// Render a type descriptor into its canonical textual signature.
///
/// Total and deterministic: every input maps to exactly one string, with
/// unsupported shapes collapsing to the `unknown` placeholder.
pub fn render_type(type_: &Type) -> String {
	match type_ {
		Type::Primitive(name) => name.clone(),
		Type::ResolvedPath { path, args } => {
			let rendered = args
				.iter()
				.map(render_type_arg)
				.collect::<Vec<_>>()
				.join(", ");
			if rendered.is_empty() {
				path.clone()
			} else {
				format!("{path}<{rendered}>")
			}
		}
		Type::BorrowedRef {
			lifetime,
			is_mutable,
			type_,
		} => {
			let lifetime = lifetime
				.as_ref()
				.map(|lt| format!("{lt} "))
				.unwrap_or_default();
			let mutability = if *is_mutable { "mut " } else { "" };
			format!("&{lifetime}{mutability}{}", render_type(type_))
		}
		Type::Generic(name) => name.clone(),
		Type::Unknown => UNKNOWN.to_string(),
	}
}

/// Render a single generic argument.
fn render_type_arg(arg: &TypeArg) -> String {
	match arg {
		TypeArg::Lifetime(lifetime) => lifetime.clone(),
		TypeArg::Type(type_) => render_type(type_),
		TypeArg::Unknown => UNKNOWN.to_string(),
	}
}

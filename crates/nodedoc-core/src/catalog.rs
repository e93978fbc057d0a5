//! Item filtering, field/variant resolution, and definition formatting.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::render::{UNKNOWN, render_type};
use crate::schema::{Document, EnumInfo, Item, ItemId, StructInfo, VariantKind, Visibility};

/// Infrastructure types excluded from the catalog: the builder facade, the
/// kind/type discriminant enums, and the "none" sentinel. They are documented
/// alongside the AST nodes but are not nodes themselves.
const EXCLUDED_NAMES: &[&str] = &["AstBuilder", "AstKind", "AstType", "NONE"];

/// A single rendered catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
	/// Markdown documentation attached to the type, empty when undocumented.
	pub docs: String,
	/// Pseudo-declaration body of the struct or enum.
	pub body: String,
}

/// A resolved struct field ready for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
	/// Field name.
	pub name: String,
	/// Rendered type signature.
	pub type_: String,
}

/// Build the name-keyed catalog of public struct and enum declarations.
///
/// Iteration order of the document is irrelevant: entries land in a
/// `BTreeMap`, so serialization order is lexicographic by name. Should two
/// items share a name, the last write wins; rustdoc deduplicates ids
/// upstream so this is not guarded further.
pub fn build_catalog(document: &Document) -> BTreeMap<String, CatalogEntry> {
	let mut catalog = BTreeMap::new();

	for item in document.index.values() {
		if item.visibility != Visibility::Public {
			continue;
		}
		let Some(name) = item.name.as_deref() else {
			continue;
		};
		if EXCLUDED_NAMES.contains(&name) {
			continue;
		}

		// Items that are neither structs nor enums are not AST nodes.
		let body = if let Some(struct_info) = &item.inner.struct_ {
			struct_definition(name, &struct_fields(struct_info, document))
		} else if let Some(enum_info) = &item.inner.enum_ {
			enum_definition(name, &enum_variants(enum_info, document))
		} else {
			continue;
		};

		catalog.insert(
			name.to_string(),
			CatalogEntry {
				docs: item.docs.clone().unwrap_or_default(),
				body,
			},
		);
	}

	catalog
}

/// Resolve a struct's field ids to named public fields with rendered types.
///
/// Ids missing from the index, private fields, and unnamed fields are
/// omitted. A field without a recorded type renders as the placeholder.
pub fn struct_fields(info: &StructInfo, document: &Document) -> Vec<FieldDecl> {
	info.fields
		.iter()
		.filter_map(|id| document.item(id))
		.filter(|field| field.visibility == Visibility::Public)
		.filter_map(|field| {
			let name = field.name.clone()?;
			let type_ = field
				.inner
				.struct_field
				.as_ref()
				.map(render_type)
				.unwrap_or_else(|| UNKNOWN.to_string());
			Some(FieldDecl { name, type_ })
		})
		.collect()
}

/// Resolve an enum's variant ids to rendered variant declarations,
/// preserving declaration order.
///
/// Ids missing from the index and unnamed variants are omitted.
pub fn enum_variants(info: &EnumInfo, document: &Document) -> Vec<String> {
	info.variants
		.iter()
		.filter_map(|id| document.item(id))
		.filter_map(|variant| variant_signature(variant, document))
		.collect()
}

/// Render a single variant: bare name, `Name(T1, T2)`, or `Name { f: T }`.
///
/// Tuple entries that fail to resolve render as the placeholder; struct
/// fields missing a name or type are dropped, and a struct variant whose
/// fields all drop renders as the bare name.
fn variant_signature(variant: &Item, document: &Document) -> Option<String> {
	let mut signature = variant.name.clone()?;

	match variant.inner.variant.as_ref().map(|info| &info.kind) {
		Some(VariantKind::Tuple(field_ids)) if !field_ids.is_empty() => {
			let types: Vec<String> = field_ids
				.iter()
				.map(|id| tuple_field_type(id.as_ref(), document))
				.collect();
			signature.push('(');
			signature.push_str(&types.join(", "));
			signature.push(')');
		}
		Some(VariantKind::Struct(field_ids)) if !field_ids.is_empty() => {
			let fields: Vec<String> = field_ids
				.iter()
				.filter_map(|id| document.item(id))
				.filter_map(|field| {
					let name = field.name.as_deref()?;
					let type_ = field.inner.struct_field.as_ref()?;
					Some(format!("{name}: {}", render_type(type_)))
				})
				.collect();
			if !fields.is_empty() {
				signature.push_str(" { ");
				signature.push_str(&fields.join(", "));
				signature.push_str(" }");
			}
		}
		// Unit variants, and tuple/struct kinds with zero entries.
		_ => {}
	}

	Some(signature)
}

/// Render the type of one positional tuple field, falling back to the
/// placeholder when the id or its type cannot be resolved.
fn tuple_field_type(id: Option<&ItemId>, document: &Document) -> String {
	id.and_then(|id| document.item(id))
		.and_then(|field| field.inner.struct_field.as_ref())
		.map(render_type)
		.unwrap_or_else(|| UNKNOWN.to_string())
}

/// Format a struct pseudo-declaration, one field per line with a trailing
/// comma. An empty field list still renders the enclosing braces.
pub fn struct_definition(name: &str, fields: &[FieldDecl]) -> String {
	let fields = fields
		.iter()
		.map(|field| format!("  pub {}: {},", field.name, field.type_))
		.collect::<Vec<_>>()
		.join("\n");
	format!("struct {name} {{\n{fields}\n}}")
}

/// Format an enum pseudo-declaration, one pre-rendered variant per line with
/// a trailing comma. An empty variant list still renders the enclosing
/// braces.
pub fn enum_definition(name: &str, variants: &[String]) -> String {
	let variants = variants
		.iter()
		.map(|variant| format!("  {variant},"))
		.collect::<Vec<_>>()
		.join("\n");
	format!("enum {name} {{\n{variants}\n}}")
}

//! Tolerant data model for the rustdoc JSON documentation dump.
//!
//! Only the subset of the format needed to catalog struct and enum
//! declarations is decoded. Decoding is deliberately lenient: rustdoc has
//! shipped several generations of this format, and a field or shape outside
//! the supported subset must degrade to an empty or `Unknown` value instead
//! of failing the whole document. The only fatal condition is a document
//! that is not valid JSON or lacks the top-level `index` object.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The loaded documentation dump, keyed by opaque item identifiers.
///
/// Immutable once loaded; passed by shared reference through all resolution
/// calls.
#[derive(Debug, Deserialize)]
pub struct Document {
	/// Flat mapping from item identifier to item descriptor.
	pub index: HashMap<ItemId, Item>,
}

impl Document {
	/// Look up an item by identifier.
	pub fn item(&self, id: &ItemId) -> Option<&Item> {
		self.index.get(id)
	}
}

/// Opaque item identifier.
///
/// Current rustdoc serializes ids as JSON numbers while older formats used
/// strings; both normalize to the same key so cross-references resolve
/// against either encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
	/// Construct an identifier from its normalized string form.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}
}

impl<'de> Deserialize<'de> for ItemId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Ok(match value {
			Value::Number(number) => Self(number.to_string()),
			Value::String(text) => Self(text),
			// An id of any other shape can never resolve; give it a key that
			// is absent from the index.
			_ => Self(String::new()),
		})
	}
}

/// Visibility of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
	/// Exported from the crate.
	Public,
	/// Private, crate-local, or restricted.
	#[default]
	Other,
}

impl<'de> Deserialize<'de> for Visibility {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		// Restricted visibility is an object rather than a string; anything
		// but the literal "public" folds into Other.
		let value = Value::deserialize(deserializer)?;
		Ok(match value.as_str() {
			Some("public") => Self::Public,
			_ => Self::Other,
		})
	}
}

/// A single documented entity within the dump.
#[derive(Debug, Default, Deserialize)]
pub struct Item {
	/// Declared name; anonymous items such as impls have none.
	#[serde(default)]
	pub name: Option<String>,
	/// Item visibility.
	#[serde(default)]
	pub visibility: Visibility,
	/// Markdown documentation attached to the item.
	#[serde(default)]
	pub docs: Option<String>,
	/// Kind-specific payload.
	#[serde(default)]
	pub inner: ItemInner,
}

/// Kind-specific payload of an item.
///
/// The format tags the payload with a single key. Only the four kinds this
/// tool consumes are decoded; a payload that is missing or malformed leaves
/// the corresponding slot empty, which downstream filtering treats as "not
/// that kind".
#[derive(Debug, Default)]
pub struct ItemInner {
	/// Struct payload, when the item is a struct.
	pub struct_: Option<StructInfo>,
	/// Enum payload, when the item is an enum.
	pub enum_: Option<EnumInfo>,
	/// Declared type, when the item is a struct or variant field.
	pub struct_field: Option<Type>,
	/// Variant payload, when the item is an enum variant.
	pub variant: Option<VariantInfo>,
}

impl<'de> Deserialize<'de> for ItemInner {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let Value::Object(map) = Value::deserialize(deserializer)? else {
			return Ok(Self::default());
		};
		Ok(Self {
			struct_: map
				.get("struct")
				.and_then(|value| serde_json::from_value(value.clone()).ok()),
			enum_: map
				.get("enum")
				.and_then(|value| serde_json::from_value(value.clone()).ok()),
			struct_field: map.get("struct_field").map(Type::from_value),
			variant: map
				.get("variant")
				.and_then(|value| serde_json::from_value(value.clone()).ok()),
		})
	}
}

/// Struct payload: the identifiers of the struct's named fields.
///
/// Two encodings are accepted: the current format nests the ids under
/// `kind.plain.fields`, older dumps listed them directly under `fields`.
/// Unit and tuple struct kinds carry no named fields and decode to an empty
/// list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructInfo {
	/// Field identifiers in declaration order.
	pub fields: Vec<ItemId>,
}

impl<'de> Deserialize<'de> for StructInfo {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		let plain_fields = value
			.get("kind")
			.and_then(|kind| kind.get("plain"))
			.and_then(|plain| plain.get("fields"));
		let ids = plain_fields.or_else(|| value.get("fields"));
		Ok(Self {
			fields: ids
				.and_then(|ids| serde_json::from_value(ids.clone()).ok())
				.unwrap_or_default(),
		})
	}
}

/// Enum payload: the ordered list of variant identifiers.
///
/// Order is the enum's discriminant order and is preserved through
/// rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumInfo {
	/// Variant identifiers in declaration order.
	pub variants: Vec<ItemId>,
}

impl<'de> Deserialize<'de> for EnumInfo {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Ok(Self {
			variants: value
				.get("variants")
				.and_then(|ids| serde_json::from_value(ids.clone()).ok())
				.unwrap_or_default(),
		})
	}
}

/// Variant payload of an enum variant item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantInfo {
	/// The variant's field layout.
	pub kind: VariantKind,
}

impl<'de> Deserialize<'de> for VariantInfo {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Ok(Self {
			kind: decode_variant_kind(value.get("kind")),
		})
	}
}

/// Field layout of an enum variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VariantKind {
	/// No payload.
	#[default]
	Unit,
	/// Positional fields; entries stripped from the docs are `None`.
	Tuple(Vec<Option<ItemId>>),
	/// Named fields.
	Struct(Vec<ItemId>),
}

/// Decode a variant kind payload. The plain kind is the string `"plain"`,
/// which falls through to `Unit` along with every unrecognized shape.
fn decode_variant_kind(value: Option<&Value>) -> VariantKind {
	let Some(value) = value else {
		return VariantKind::Unit;
	};
	if let Some(tuple) = value.get("tuple") {
		return VariantKind::Tuple(serde_json::from_value(tuple.clone()).unwrap_or_default());
	}
	if let Some(fields) = value.get("struct").and_then(|payload| payload.get("fields")) {
		return VariantKind::Struct(serde_json::from_value(fields.clone()).unwrap_or_default());
	}
	VariantKind::Unit
}

/// Structured description of a declared type.
///
/// Only the shapes that occur in AST node declarations are modelled; the
/// decoder collapses everything else (function pointers, tuples, slices,
/// qualified paths, ...) to [`Type::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
	/// Built-in primitive such as `u32` or `str`.
	Primitive(String),
	/// Reference to a named type, possibly with generic arguments.
	ResolvedPath {
		/// Path of the referenced type as written in the source.
		path: String,
		/// Angle-bracketed arguments; empty when the path is not generic.
		args: Vec<TypeArg>,
	},
	/// Borrowed reference.
	BorrowedRef {
		/// Lifetime annotation, when present.
		lifetime: Option<String>,
		/// Whether this is a `&mut` reference.
		is_mutable: bool,
		/// The referenced type.
		type_: Box<Type>,
	},
	/// Bare generic parameter such as `T`.
	Generic(String),
	/// Any shape outside the supported subset.
	Unknown,
}

impl Type {
	/// Decode a type payload. Total: no input shape is an error, shapes
	/// outside the supported subset become [`Type::Unknown`].
	pub fn from_value(value: &Value) -> Self {
		let Some(object) = value.as_object() else {
			return Self::Unknown;
		};
		if let Some(name) = object.get("primitive").and_then(Value::as_str) {
			return Self::Primitive(name.to_string());
		}
		if let Some(path) = object.get("resolved_path") {
			return decode_resolved_path(path);
		}
		if let Some(reference) = object.get("borrowed_ref") {
			return decode_borrowed_ref(reference);
		}
		if let Some(name) = object.get("generic").and_then(Value::as_str) {
			return Self::Generic(name.to_string());
		}
		Self::Unknown
	}
}

impl<'de> Deserialize<'de> for Type {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Ok(Self::from_value(&value))
	}
}

/// A single angle-bracketed generic argument.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeArg {
	/// Lifetime argument, rendered verbatim.
	Lifetime(String),
	/// Type argument, rendered recursively.
	Type(Type),
	/// Const or inferred arguments, outside the supported subset.
	Unknown,
}

fn decode_resolved_path(value: &Value) -> Type {
	let Some(path) = value.get("path").and_then(Value::as_str) else {
		return Type::Unknown;
	};
	// Parenthesized `Fn(..)` sugar has no angle-bracketed payload and decodes
	// to an empty argument list.
	let args = value
		.get("args")
		.and_then(|args| args.get("angle_bracketed"))
		.and_then(|args| args.get("args"))
		.and_then(Value::as_array)
		.map(|args| args.iter().map(decode_type_arg).collect())
		.unwrap_or_default();
	Type::ResolvedPath {
		path: path.to_string(),
		args,
	}
}

fn decode_borrowed_ref(value: &Value) -> Type {
	Type::BorrowedRef {
		lifetime: value
			.get("lifetime")
			.and_then(Value::as_str)
			.map(str::to_string),
		is_mutable: value
			.get("is_mutable")
			.and_then(Value::as_bool)
			.unwrap_or(false),
		type_: Box::new(
			value
				.get("type")
				.map(Type::from_value)
				.unwrap_or(Type::Unknown),
		),
	}
}

fn decode_type_arg(value: &Value) -> TypeArg {
	if let Some(lifetime) = value.get("lifetime").and_then(Value::as_str) {
		return TypeArg::Lifetime(lifetime.to_string());
	}
	if let Some(type_) = value.get("type") {
		return TypeArg::Type(Type::from_value(type_));
	}
	TypeArg::Unknown
}

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::catalog::{FieldDecl, build_catalog, enum_variants, struct_definition, struct_fields};
use crate::render::render_type;
use crate::schema::{Document, ItemId, Type, TypeArg};

/// Decode a fixture document through the real schema path.
fn document(value: Value) -> Document {
	serde_json::from_value(value).expect("fixture documents always decode")
}

fn path(name: &str, args: Vec<TypeArg>) -> Type {
	Type::ResolvedPath {
		path: name.to_string(),
		args,
	}
}

#[test]
fn renders_primitive_verbatim() {
	assert_eq!(render_type(&Type::Primitive("u32".into())), "u32");
}

#[test]
fn renders_nested_path_arguments() {
	let ty = path(
		"Vec",
		vec![TypeArg::Type(path(
			"Box",
			vec![TypeArg::Type(Type::Primitive("u8".into()))],
		))],
	);
	assert_eq!(render_type(&ty), "Vec<Box<u8>>");
}

#[test]
fn renders_path_without_arguments_without_brackets() {
	assert_eq!(render_type(&path("Span", Vec::new())), "Span");
}

#[test]
fn renders_lifetime_and_type_arguments_in_order() {
	let ty = path(
		"Box",
		vec![
			TypeArg::Lifetime("'a".into()),
			TypeArg::Type(path("Stmt", Vec::new())),
		],
	);
	assert_eq!(render_type(&ty), "Box<'a, Stmt>");
}

#[test]
fn renders_unsupported_argument_as_placeholder() {
	let ty = path("Cell", vec![TypeArg::Unknown]);
	assert_eq!(render_type(&ty), "Cell<unknown>");
}

#[test]
fn renders_mutable_reference_with_lifetime() {
	let ty = Type::BorrowedRef {
		lifetime: Some("'a".into()),
		is_mutable: true,
		type_: Box::new(path("Atom", Vec::new())),
	};
	assert_eq!(render_type(&ty), "&'a mut Atom");
}

#[test]
fn renders_shared_reference_without_lifetime() {
	let ty = Type::BorrowedRef {
		lifetime: None,
		is_mutable: false,
		type_: Box::new(Type::Primitive("str".into())),
	};
	assert_eq!(render_type(&ty), "&str");
}

#[test]
fn renders_generic_parameter_verbatim() {
	assert_eq!(render_type(&Type::Generic("T".into())), "T");
}

#[test]
fn unsupported_type_shapes_decode_to_unknown() {
	for value in [
		json!(null),
		json!("infer"),
		json!({ "tuple": [{ "primitive": "u8" }] }),
		json!({ "slice": { "primitive": "u8" } }),
		json!({ "function_pointer": { "sig": { "inputs": [] } } }),
		json!({ "qualified_path": { "name": "Output" } }),
	] {
		assert_eq!(Type::from_value(&value), Type::Unknown);
	}
	assert_eq!(render_type(&Type::Unknown), "unknown");
}

#[test]
fn reference_with_missing_inner_type_renders_placeholder() {
	let ty = Type::from_value(&json!({ "borrowed_ref": { "lifetime": "'a" } }));
	assert_eq!(render_type(&ty), "&'a unknown");
}

#[test]
fn path_with_parenthesized_arguments_decodes_to_bare_path() {
	let ty = Type::from_value(&json!({
		"resolved_path": {
			"path": "FnOnce",
			"id": 10,
			"args": { "parenthesized": { "inputs": [], "output": null } }
		}
	}));
	assert_eq!(render_type(&ty), "FnOnce");
}

#[test]
fn struct_field_ids_decode_from_both_encodings() {
	let nested = document(json!({
		"index": {
			"0": {
				"name": "Span",
				"visibility": "public",
				"inner": { "struct": { "kind": { "plain": {
					"fields": [1],
					"has_stripped_fields": false
				} } } }
			},
			"1": {
				"name": "start",
				"visibility": "public",
				"inner": { "struct_field": { "primitive": "u32" } }
			}
		}
	}));
	let flat = document(json!({
		"index": {
			"0": {
				"name": "Span",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [1] } }
			},
			"1": {
				"name": "start",
				"visibility": "public",
				"inner": { "struct_field": { "primitive": "u32" } }
			}
		}
	}));

	assert_eq!(build_catalog(&nested), build_catalog(&flat));
	assert_eq!(
		build_catalog(&nested)["Span"].body,
		"struct Span {\n  pub start: u32,\n}"
	);
}

#[test]
fn numeric_and_string_field_ids_resolve_alike() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Program",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [1, "2"] } }
			},
			"1": {
				"name": "span",
				"visibility": "public",
				"inner": { "struct_field": { "resolved_path": { "path": "Span", "id": 9 } } }
			},
			"2": {
				"name": "source",
				"visibility": "public",
				"inner": { "struct_field": { "primitive": "str" } }
			}
		}
	}));

	assert_eq!(
		build_catalog(&doc)["Program"].body,
		"struct Program {\n  pub span: Span,\n  pub source: str,\n}"
	);
}

#[test]
fn filter_drops_denylisted_private_and_unnamed_items() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "AstBuilder",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			},
			"1": {
				"name": "AstKind",
				"visibility": "public",
				"inner": { "enum": { "variants": [] } }
			},
			"2": {
				"name": "AstType",
				"visibility": "public",
				"inner": { "enum": { "variants": [] } }
			},
			"3": {
				"name": "NONE",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			},
			"4": {
				"name": "Hidden",
				"visibility": "crate",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			},
			"5": {
				"name": "Restricted",
				"visibility": { "restricted": { "parent": 0, "path": "::detail" } },
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			},
			"6": {
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			},
			"7": {
				"name": "parse",
				"visibility": "public",
				"inner": { "function": { "sig": { "inputs": [] } } }
			},
			"8": {
				"name": "Atom",
				"visibility": "public",
				"docs": "An interned string.",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			}
		}
	}));

	let catalog = build_catalog(&doc);
	assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["Atom"]);
	assert_eq!(catalog["Atom"].docs, "An interned string.");
	assert_eq!(catalog["Atom"].body, "struct Atom {\n\n}");
}

#[test]
fn struct_definition_matches_expected_layout() {
	let fields = vec![FieldDecl {
		name: "span".into(),
		type_: "Span".into(),
	}];
	assert_eq!(
		struct_definition("S", &fields),
		"struct S {\n  pub span: Span,\n}"
	);
}

#[test]
fn struct_resolution_skips_private_unnamed_and_missing_fields() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Function",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [1, 2, 3, 99] } }
			},
			"1": {
				"name": "params",
				"visibility": "public",
				"inner": { "struct_field": { "resolved_path": { "path": "FormalParameters", "id": 9 } } }
			},
			"2": {
				"name": "scope_id",
				"visibility": "crate",
				"inner": { "struct_field": { "primitive": "u32" } }
			},
			"3": {
				"visibility": "public",
				"inner": { "struct_field": { "primitive": "u32" } }
			}
		}
	}));

	let item = &doc.index[&ItemId::new("0")];
	let fields = struct_fields(item.inner.struct_.as_ref().unwrap(), &doc);
	assert_eq!(
		fields,
		vec![FieldDecl {
			name: "params".into(),
			type_: "FormalParameters".into(),
		}]
	);
}

#[test]
fn field_without_recorded_type_renders_placeholder() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Directive",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [1] } }
			},
			"1": { "name": "expression", "visibility": "public" }
		}
	}));

	assert_eq!(
		build_catalog(&doc)["Directive"].body,
		"struct Directive {\n  pub expression: unknown,\n}"
	);
}

#[test]
fn enum_variants_render_unit_tuple_and_struct_forms_in_order() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Expression",
				"visibility": "public",
				"inner": { "enum": { "variants": [1, 2, 4, 99] } }
			},
			"1": {
				"name": "Null",
				"visibility": "public",
				"inner": { "variant": { "kind": "plain" } }
			},
			"2": {
				"name": "Literal",
				"visibility": "public",
				"inner": { "variant": { "kind": { "tuple": [3, null] } } }
			},
			"3": {
				"name": "0",
				"visibility": "public",
				"inner": { "struct_field": { "primitive": "bool" } }
			},
			"4": {
				"name": "Binary",
				"visibility": "public",
				"inner": { "variant": { "kind": { "struct": {
					"fields": [5, 6],
					"has_stripped_fields": false
				} } } }
			},
			"5": {
				"name": "operator",
				"visibility": "public",
				"inner": { "struct_field": { "resolved_path": { "path": "BinaryOperator", "id": 9 } } }
			},
			"6": { "name": "right", "visibility": "public" }
		}
	}));

	assert_eq!(
		build_catalog(&doc)["Expression"].body,
		"enum Expression {\n  Null,\n  Literal(bool, unknown),\n  Binary { operator: BinaryOperator },\n}"
	);
}

#[test]
fn struct_variant_with_no_usable_fields_renders_bare_name() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Declaration",
				"visibility": "public",
				"inner": { "enum": { "variants": [1] } }
			},
			"1": {
				"name": "Empty",
				"visibility": "public",
				"inner": { "variant": { "kind": { "struct": {
					"fields": [2],
					"has_stripped_fields": true
				} } } }
			},
			"2": { "visibility": "public" }
		}
	}));

	assert_eq!(
		build_catalog(&doc)["Declaration"].body,
		"enum Declaration {\n  Empty,\n}"
	);
}

#[test]
fn variant_with_empty_tuple_kind_is_unit_like() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Kind",
				"visibility": "public",
				"inner": { "enum": { "variants": [1, 2] } }
			},
			"1": {
				"name": "Foo",
				"visibility": "public",
				"inner": { "variant": { "kind": { "tuple": [] } } }
			},
			"2": {
				"name": "Bar",
				"visibility": "public",
				"inner": { "variant": { "kind": { "struct": {
					"fields": [],
					"has_stripped_fields": false
				} } } }
			}
		}
	}));

	let item = &doc.index[&ItemId::new("0")];
	let variants = enum_variants(item.inner.enum_.as_ref().unwrap(), &doc);
	assert_eq!(variants, vec!["Foo", "Bar"]);
}

#[test]
fn enum_without_variant_list_renders_empty_braces() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Never",
				"visibility": "public",
				"inner": { "enum": {} }
			}
		}
	}));

	assert_eq!(build_catalog(&doc)["Never"].body, "enum Never {\n\n}");
}

#[test]
fn missing_docs_default_to_empty_string() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Span",
				"visibility": "public",
				"docs": null,
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			}
		}
	}));

	assert_eq!(build_catalog(&doc)["Span"].docs, "");
}

#[test]
fn catalog_keys_are_sorted_lexicographically() {
	let doc = document(json!({
		"index": {
			"0": {
				"name": "Statement",
				"visibility": "public",
				"inner": { "enum": { "variants": [] } }
			},
			"1": {
				"name": "Atom",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			},
			"2": {
				"name": "Program",
				"visibility": "public",
				"inner": { "struct": { "struct_type": "plain", "fields": [] } }
			}
		}
	}));

	let keys: Vec<_> = build_catalog(&doc).keys().cloned().collect();
	assert_eq!(keys, vec!["Atom", "Program", "Statement"]);
}

#[test]
fn render_is_deterministic() {
	let ty = path(
		"Vec",
		vec![TypeArg::Type(Type::BorrowedRef {
			lifetime: Some("'a".into()),
			is_mutable: false,
			type_: Box::new(Type::Generic("T".into())),
		})],
	);
	assert_eq!(render_type(&ty), render_type(&ty));
	assert_eq!(render_type(&ty), "Vec<&'a T>");
}

mod common;

use common::*;
use pretty_assertions::assert_eq;
use rowbind::resolver::resolve;
use rowbind::{FieldSet, Record, TypeRef};

fn bindings(fields: &FieldSet) -> Vec<(&'static str, Vec<usize>)> {
    fields
        .iter()
        .map(|f| (f.bound_name, f.path.clone()))
        .collect()
}

// ── Flat records ──────────────────────────────────────────────────

#[test]
fn flat_record_keeps_declaration_order() {
    let fields = resolve::<Flat>();
    assert_eq!(
        bindings(&fields),
        vec![
            ("id", vec![0]),
            ("title", vec![1]),
            ("rating", vec![2]),
            ("note", vec![3]),
        ]
    );
}

#[test]
fn tag_name_or_declared_name() {
    let fields = resolve::<Flat>();
    let id = fields.get("id").unwrap();
    assert!(id.explicitly_tagged);
    let title = fields.get("title").unwrap();
    assert!(!title.explicitly_tagged);
    assert_eq!(title.declared_name, "title");
    let rating = fields.get("rating").unwrap();
    assert_eq!(rating.declared_name, "score");
    assert!(rating.explicitly_tagged);
}

#[test]
fn root_fields_have_empty_context() {
    let fields = resolve::<Flat>();
    assert!(fields.iter().all(|f| f.context.is_empty()));
    assert_eq!(fields.record(), "Flat");
}

// ── Embedding ─────────────────────────────────────────────────────

#[test]
fn derived_scenario() {
    let fields = resolve::<Derived>();
    assert_eq!(
        bindings(&fields),
        vec![("id", vec![0, 0]), ("name", vec![1])]
    );
    assert_eq!(fields.get("id").unwrap().context, "Base");
    assert_eq!(fields.get("name").unwrap().context, "");
}

#[test]
fn nested_embedding_orders_by_path() {
    let fields = resolve::<Customer>();
    assert_eq!(
        bindings(&fields),
        vec![
            ("created_at", vec![0, 0, 0]),
            ("updated_at", vec![0, 0, 1]),
            ("id", vec![0, 1]),
            ("name", vec![1]),
            ("email", vec![2]),
            ("is_active", vec![3]),
        ]
    );
    assert_eq!(fields.get("created_at").unwrap().context, "Audit");
    assert_eq!(fields.get("id").unwrap().context, "Entity");
}

#[test]
fn boxed_embed_is_traversed() {
    let fields = resolve::<Boxed>();
    assert_eq!(bindings(&fields), vec![("id", vec![0, 0]), ("n", vec![1])]);
    assert_eq!(fields.get("id").unwrap().context, "Base");
}

#[test]
fn self_embedding_terminates() {
    let fields = resolve::<Node>();
    assert_eq!(bindings(&fields), vec![("id", vec![0])]);
}

#[test]
fn tagged_embed_is_a_leaf() {
    let fields = resolve::<TaggedEmbed>();
    assert_eq!(bindings(&fields), vec![("base", vec![0]), ("name", vec![1])]);
    let base = fields.get("base").unwrap();
    assert!(base.explicitly_tagged);
    assert_eq!(base.ty.as_record().map(|r| r.name()), Some("Base"));
}

// ── Shadowing and ambiguity ───────────────────────────────────────

#[test]
fn root_field_shadows_embedded_field() {
    let after = resolve::<OuterAfter>();
    assert_eq!(bindings(&after), vec![("z", vec![0, 1]), ("x", vec![1])]);

    let before = resolve::<OuterBefore>();
    assert_eq!(bindings(&before), vec![("x", vec![0]), ("z", vec![1, 1])]);
}

#[test]
fn same_depth_names_annihilate() {
    let fields = resolve::<Both>();
    assert!(fields.get("y").is_none());
    assert_eq!(bindings(&fields), vec![("a", vec![0, 1]), ("b", vec![1, 1])]);
}

#[test]
fn deeper_tagged_field_beats_shallower_untagged() {
    let fields = resolve::<Doc>();
    assert_eq!(bindings(&fields), vec![("title", vec![0, 0])]);
    let title = fields.get("title").unwrap();
    assert_eq!(title.declared_name, "label");
    assert_eq!(title.context, "Titled");
}

#[test]
fn tag_breaks_same_depth_tie() {
    let fields = resolve::<KTie>();
    assert_eq!(bindings(&fields), vec![("k", vec![1, 0])]);
    let k = fields.get("k").unwrap();
    assert!(k.explicitly_tagged);
    assert_eq!(k.context, "TaggedK");
}

#[test]
fn shallower_tagged_beats_deeper_tagged() {
    let fields = resolve::<ShallowKey>();
    assert_eq!(bindings(&fields), vec![("key", vec![1])]);
    assert_eq!(fields.get("key").unwrap().declared_name, "w");
}

#[test]
fn same_depth_tagged_fields_annihilate() {
    let fields = resolve::<DupClash>();
    assert!(fields.get("dup").is_none());
    assert_eq!(bindings(&fields), vec![("a", vec![0, 1]), ("b", vec![1, 1])]);
}

#[test]
fn diamond_embedding_drops_shared_fields() {
    let fields = resolve::<Diamond>();
    assert!(fields.get("sid").is_none());
    assert_eq!(bindings(&fields), vec![("l", vec![0, 1]), ("r", vec![1, 1])]);
}

#[test]
fn bound_names_are_unique() {
    for fields in [
        resolve::<Customer>(),
        resolve::<Both>(),
        resolve::<Diamond>(),
        resolve::<OuterAfter>(),
        resolve::<Doc>(),
        resolve::<KTie>(),
        resolve::<ShallowKey>(),
        resolve::<DupClash>(),
    ] {
        let mut names: Vec<_> = fields.names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate names in {}", fields.record());
    }
}

// ── Exclusion ─────────────────────────────────────────────────────

#[test]
fn excluded_and_private_fields_are_skipped() {
    let fields = resolve::<Account>();
    assert_eq!(bindings(&fields), vec![("account_id", vec![1])]);
}

// ── Determinism ───────────────────────────────────────────────────

#[test]
fn resolution_is_deterministic() {
    assert_eq!(resolve::<Customer>(), resolve::<Customer>());
    assert_eq!(resolve::<Diamond>(), resolve::<Diamond>());
}

// ── Metadata ──────────────────────────────────────────────────────

#[test]
fn record_type_lists_declared_fields() {
    let record_type = Account::record_type();
    assert_eq!(record_type.name(), "Account");
    let names: Vec<_> = record_type.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["cache", "id", "password", "base"]);
    assert!(!record_type.fields()[0].exported);
    assert!(record_type.fields()[3].embedded);
    assert_eq!(record_type.fields()[2].tag, "-");
}

#[test]
fn value_types_are_named() {
    let fields = resolve::<Flat>();
    assert_eq!(fields.get("id").unwrap().ty, TypeRef::Value("i64"));
    assert!(fields.get("title").unwrap().ty.name().ends_with("String"));
}

#[test]
fn field_display_shows_binding() {
    let fields = resolve::<Derived>();
    let id = fields.get("id").unwrap();
    assert_eq!(
        id.to_string(),
        r#"Base("id"); tagged? true, indices: [0, 0], type: i64"#
    );
}

#[test]
fn field_set_serializes() {
    let fields = resolve::<Derived>();
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(json["record"], "Derived");
    assert_eq!(json["fields"][0]["bound_name"], "id");
    assert_eq!(json["fields"][0]["path"], serde_json::json!([0, 0]));
    assert_eq!(json["fields"][0]["type"], "i64");
    assert_eq!(json["fields"][1]["context"], "");
}

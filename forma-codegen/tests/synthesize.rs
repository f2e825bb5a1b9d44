//! End-to-end synthesis tests driven by schema manifests.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use forma_codegen::{ArtifactKind, Error, GenerationOptions, synthesize};
use forma_schema::SchemaManifest;

const ORDER_ITEMS: &str = r#"
[[tables]]
name = "order_items"

[[tables.columns]]
name = "id"
type = "int"
primary_key = true

[[tables.columns]]
name = "sku"
type = "varchar(64)"

[[tables.columns]]
name = "qty"
type = "int"

[[tables.columns]]
name = "created_at"
type = "datetime"
"#;

fn manifest(toml: &str) -> SchemaManifest {
    SchemaManifest::from_str(toml).expect("Failed to parse manifest")
}

#[test]
fn test_order_items_model() {
    let manifest = manifest(ORDER_ITEMS);
    let table = manifest.table("order_items").unwrap();

    let artifacts = synthesize(table, manifest.options()).unwrap();

    insta::assert_snapshot!("order_items_model", artifacts.model());
}

#[test]
fn test_order_items_artifacts_agree() {
    let manifest = manifest(ORDER_ITEMS);
    let table = manifest.table("order_items").unwrap();

    let artifacts = synthesize(table, manifest.options()).unwrap();

    assert_eq!(artifacts.type_name(), "OrderItem");
    assert!(artifacts.model().contains("type OrderItem struct {"));
    assert!(artifacts.dao().contains("table *model.OrderItem) error {"));
    assert!(artifacts.handler().contains("type OrderItemObjDetail struct {"));
    assert!(artifacts.handler().contains("\tID        uint64    `json:\"id,string\"`\n"));
    assert_eq!(artifacts.handler().matches("json:\"id,string\"").count(), 1);

    // audit columns live in the embedded base model
    assert!(!artifacts.model().contains("CreatedAt"));
    assert!(!artifacts.dao().contains("created_at"));

    let kinds: Vec<_> = artifacts.iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, ArtifactKind::ALL);
}

#[test]
fn test_synthesize_is_deterministic() {
    let manifest = manifest(ORDER_ITEMS);
    let table = manifest.table("order_items").unwrap();

    let first = synthesize(table, manifest.options()).unwrap();
    let second = synthesize(table, manifest.options()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_manifest_options_flow_into_artifacts() {
    let manifest = manifest(
        r#"
        [options]
        embed = false
        package = "entity"

        [[tables]]
        name = "api_keys"

        [[tables.columns]]
        name = "id"
        type = "bigint unsigned"
        primary_key = true

        [[tables.columns]]
        name = "expires_at"
        type = "timestamp"
        nullable = true
        comment = "null means never"
        "#,
    );
    let table = manifest.table("api_keys").unwrap();

    let artifacts = synthesize(table, manifest.options()).unwrap();

    assert_eq!(artifacts.type_name(), "APIKey");
    assert!(artifacts.model().starts_with("package entity\n\nimport (\n\t\"time\"\n)\n"));
    assert!(artifacts.model().contains("// null means never"));
    assert!(!artifacts.model().contains("ggorm"));
    assert!(artifacts.dao().contains("func (d *apiKeyDao) updateDataByID("));
    assert!(artifacts.dao().contains("table *entity.APIKey"));
    assert!(artifacts.dao().contains("\tif table.ExpiresAt != nil {\n"));
}

#[test]
fn test_errors_name_the_offender() {
    let manifest = manifest(
        r#"
        [[tables]]
        name = "places"

        [[tables.columns]]
        name = "location"
        type = "geometry"
        "#,
    );
    let table = manifest.table("places").unwrap();

    let err = synthesize(table, &GenerationOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedType { ref table, ref column, ref sql_type }
            if table == "places" && column == "location" && sql_type == "geometry"
    ));
}

#[test]
fn test_empty_table_is_rejected() {
    let manifest = manifest(
        r#"
        [[tables]]
        name = "nothing"
        "#,
    );
    let table = manifest.table("nothing").unwrap();

    let err = synthesize(table, manifest.options()).unwrap_err();

    assert_eq!(err.to_string(), "table 'nothing' has no columns");
}

use std::path::PathBuf;

use swagger_gql::{ConvertError, Options, Selection, SwaggerToGraphql, schema};

fn fixture(case: &str, file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(case).join(file);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

fn engine(case: &str, root_interface: &str, template: Option<&str>) -> SwaggerToGraphql {
    let document = schema::load_document(&fixture(case, "schema.json")).unwrap();
    SwaggerToGraphql::new(Options {
        schema: Some(document),
        root_interface: Some(root_interface.to_string()),
        template: template.map(|file| fixture(case, file)),
    })
    .unwrap()
}

#[test]
fn account_info_matches_golden_output() {
    let engine = engine("account-info", "OBAccount3", Some("template.graphql"));
    let selection = Selection { filter: None, exclude: Some("^(OBRead.*|OBRisk2)$".into()) };
    let out = engine.render_all_with(&selection).unwrap();
    assert_eq!(out, fixture("account-info", "expected.graphql"));
    assert!(out.contains("interface OBAccount3"));
    assert!(out.contains("type Account implements OBAccount3"));
}

#[test]
fn account_info_lookahead_filter_matches_golden_output() {
    let engine = engine("account-info", "OBAccount3", Some("template.graphql"));
    let out = engine.render_all(Some("^((?!(OBRead.*|Links|Meta|OBRisk2|OBError.*)))")).unwrap();
    assert_eq!(out, fixture("account-info", "expected.graphql"));
}

#[test]
fn nested_flattening_matches_golden_output() {
    let engine = engine("nested-flattening", "OBAccount3", None);
    let out = engine.render_all(Some("^OBBCA")).unwrap();
    assert_eq!(out, fixture("nested-flattening", "expected.graphql"));
}

#[test]
fn account_info_without_filter_includes_everything() {
    let engine = engine("account-info", "OBAccount3", None);
    let out = engine.render_all(None).unwrap();
    assert!(out.contains(
        "type OBReadAccount3_Data {\n  \"Unambiguous identification of the account to which credit and debit entries are made.\"\n  Account: [OBAccount3]\n}"
    ));
    assert!(out.contains("type OBRisk2 {\n  _: String\n}"));
    assert_eq!(out, engine.render_all(None).unwrap());
}

#[test]
fn alias_cycle_fixture_fails() {
    let engine = engine("alias-cycle", "Holder", None);
    let err = engine.render_all(Some("^Holder$")).unwrap_err();
    assert!(matches!(err, ConvertError::CyclicReference { .. }));
}

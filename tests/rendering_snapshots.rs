//! Snapshot tests for rendered descriptions

use valdoc::valdoc::{Description, EnrichRequest, Enricher, ValidatorFragment};

#[test]
fn test_kitchen_sink_description() {
    let fragments = [
        ValidatorFragment::new("stringvalidator.LengthAtMost(64)"),
        ValidatorFragment::new(
            "stringvalidator.OneOf(\n    \"fast\",\n    \"safe, slow\",\n    \"a`b\",\n)",
        ),
        ValidatorFragment::new(r#"stringvalidator.OneOf("x") // legacy"#),
        ValidatorFragment::new(r#"stringvalidator.OneOf("fast", "safe, slow", "a`b")"#),
    ];
    let description = Description::from("Some description.").with_validators(&fragments);

    insta::assert_snapshot!(description.text(), @r###"
    Some description.
    Possible values: `fast`, `safe, slow`, `` a`b ``
    Possible values: `x`
    "###);
}

#[test]
fn test_values_listing() {
    let sets = Enricher::standard().value_sets(
        r#"listvalidator.All(stringvalidator.OneOf("a", 'r', "b"), stringvalidator.OneOf(`raw\n`))"#,
    );
    let listing: Vec<String> = sets.iter().map(|set| set.values().join("|")).collect();

    insta::assert_snapshot!(listing.join("\n"), @r###"
    a|b
    raw\n
    "###);
}

#[test]
fn test_request_document() {
    let request: EnrichRequest = serde_yaml::from_str(
        r#"
description: Deployment strategy.
validators:
  - schema_definition: 'stringvalidator.OneOf("rolling", "recreate")'
  - schema_definition: 'stringvalidator.LengthAtLeast(1)'
"#,
    )
    .unwrap();

    insta::assert_snapshot!(request.enrich(Enricher::standard()).text(), @r###"
    Deployment strategy.
    Possible values: `rolling`, `recreate`
    "###);
}

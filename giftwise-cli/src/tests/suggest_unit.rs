//! Focused unit tests covering suggest CLI configuration and input loading.

use super::helpers::{SAMPLE_CATALOG, Workspace};
use super::*;
use crate::suggest::{
    CriteriaOverrides, SuggestArgs, SuggestConfig, config_from_layers_for_test, load_catalog,
    load_criteria,
};
use camino::Utf8PathBuf;
use giftwise_core::{CriteriaError, GiftCriteria};
use giftwise_scorer::{SuggestionLimits, SuggestionLimitsError};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config_for(catalog_path: Utf8PathBuf, criteria_path: Option<Utf8PathBuf>) -> SuggestConfig {
    SuggestConfig {
        catalog_path,
        criteria_path,
        overrides: CriteriaOverrides::default(),
        limits: SuggestionLimits::DEFAULT,
    }
}

fn full_overrides() -> CriteriaOverrides {
    CriteriaOverrides {
        occasion: Some("birthday".to_owned()),
        relation: Some("friend".to_owned()),
        age_group: Some("adults".to_owned()),
        budget: Some(1000.0),
        ..CriteriaOverrides::default()
    }
}

#[rstest]
fn converting_suggest_without_catalog_errors() {
    let err = SuggestConfig::try_from(SuggestArgs::default()).expect_err("missing catalog");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn suggest_config_defaults_limits() {
    let args = SuggestArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        occasion: Some("wedding".to_owned()),
        interests: vec!["art".to_owned()],
        ..SuggestArgs::default()
    };

    let config = SuggestConfig::try_from(args).expect("config should build");
    assert_eq!(config.catalog_path, Utf8PathBuf::from("catalog.json"));
    assert_eq!(config.criteria_path, None);
    assert_eq!(config.limits, SuggestionLimits::DEFAULT);
    assert_eq!(config.overrides.occasion.as_deref(), Some("wedding"));
    assert_eq!(config.overrides.interests, ["art"]);
}

#[rstest]
fn suggest_config_applies_custom_limits() {
    let args = SuggestArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        max_suggestions: Some(3),
        min_score: Some(50.0),
        ..SuggestArgs::default()
    };

    let config = SuggestConfig::try_from(args).expect("config should build");
    assert_eq!(config.limits.max_suggestions, 3);
    assert!((config.limits.min_score - 50.0).abs() < f64::EPSILON);
}

#[rstest]
fn suggest_config_rejects_zero_suggestions() {
    let args = SuggestArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        max_suggestions: Some(0),
        ..SuggestArgs::default()
    };

    let err = SuggestConfig::try_from(args).expect_err("zero suggestions should fail");
    match err {
        CliError::InvalidLimits(SuggestionLimitsError::ZeroMaxSuggestions) => {}
        other => panic!("expected InvalidLimits, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog(workspace: Workspace) {
    let config = config_for(workspace.root.join("absent.json"), None);

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_criteria(workspace: Workspace) {
    let catalog = workspace.write("catalog.json", "[]");
    let config = config_for(catalog, Some(workspace.root.join("absent.json")));

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CRITERIA),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let catalog = workspace.root.join("catalog.json");
    std::fs::create_dir(&catalog).expect("catalog directory");
    let config = config_for(catalog.clone(), None);

    let err = config.validate_sources().expect_err("directory should fail");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, catalog);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_decodes_products(workspace: Workspace) {
    let path = workspace.write("catalog.json", SAMPLE_CATALOG);

    let catalog = load_catalog(&path).expect("catalog should decode");
    assert_eq!(catalog.len(), 4);
    let ring = catalog.first().expect("ring listed first");
    assert_eq!(ring.name, "Silver ring");
    assert!(ring.instant_delivery_eligible);
    assert!(ring.has_tag("handmade"));
}

#[rstest]
fn load_catalog_reports_invalid_json(workspace: Workspace) {
    let path = workspace.write("catalog.json", "{ not json");

    let err = load_catalog(&path).expect_err("invalid JSON should fail");
    match err {
        CliError::ParseCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_criteria_rejects_non_positive_budget(workspace: Workspace) {
    let path = workspace.write(
        "criteria.json",
        r#"{"occasion":"birthday","relation":"friend","ageGroup":"adults","budget":0}"#,
    );

    let err = load_criteria(&path).expect_err("zero budget should fail");
    assert!(matches!(err, CliError::ParseCriteria { .. }));
}

#[rstest]
fn overrides_build_criteria_without_file() {
    let criteria = full_overrides().resolve(None).expect("criteria should build");
    assert_eq!(criteria.occasion(), "birthday");
    assert!(criteria.interests().is_empty());
    assert_eq!(criteria.personality(), None);
}

#[rstest]
#[case::occasion(ARG_OCCASION)]
#[case::relation(ARG_RELATION)]
#[case::age_group(ARG_AGE_GROUP)]
#[case::budget(ARG_BUDGET)]
fn overrides_report_missing_fields(#[case] missing: &'static str) {
    let mut overrides = full_overrides();
    match missing {
        ARG_OCCASION => overrides.occasion = None,
        ARG_RELATION => overrides.relation = None,
        ARG_AGE_GROUP => overrides.age_group = None,
        _ => overrides.budget = None,
    }

    let err = overrides.resolve(None).expect_err("missing field should fail");
    match err {
        CliError::MissingArgument { field, .. } => assert_eq!(field, missing),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn overrides_take_precedence_over_criteria_file() {
    let base = GiftCriteria::builder("anniversary", "spouse", "adults", 2000.0)
        .interests(["art", "fashion"])
        .personality("romantic")
        .build()
        .expect("valid base");
    let overrides = CriteriaOverrides {
        budget: Some(500.0),
        personality: Some("minimalist".to_owned()),
        ..CriteriaOverrides::default()
    };

    let criteria = overrides.resolve(Some(base)).expect("criteria should build");
    assert_eq!(criteria.occasion(), "anniversary");
    assert_eq!(criteria.relation(), "spouse");
    assert!((criteria.budget() - 500.0).abs() < f64::EPSILON);
    assert_eq!(criteria.interests(), ["art", "fashion"]);
    assert_eq!(criteria.personality(), Some("minimalist"));
}

#[rstest]
fn overrides_report_invalid_budget() {
    let overrides = CriteriaOverrides {
        budget: Some(-5.0),
        ..full_overrides()
    };

    let err = overrides.resolve(None).expect_err("negative budget should fail");
    match err {
        CliError::InvalidCriteria(CriteriaError::NonPositiveBudget { budget }) => {
            assert!((budget + 5.0).abs() < f64::EPSILON);
        }
        other => panic!("expected InvalidCriteria, found {other:?}"),
    }
}

#[rstest]
fn config_layer_type_errors_map_to_configuration() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "catalog": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file.json",
            "occasion": "wedding",
            "budget": 800.0,
            "min_score": 45.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": "from-env.json",
        "relation": "parent",
    }));
    composer.push_cli(json!({
        "occasion": "birthday",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.overrides.occasion.as_deref(), Some("birthday"));
    assert_eq!(config.overrides.relation.as_deref(), Some("parent"));
    assert_eq!(config.overrides.budget, Some(800.0));
    assert!((config.limits.min_score - 45.0).abs() < f64::EPSILON);
    assert_eq!(config.limits.max_suggestions, 12);
}

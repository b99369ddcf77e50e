//! Suggest command implementation for the Giftwise CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use giftwise_core::{GiftCriteria, Product, Suggester};
use giftwise_fs::open_utf8_file;
use giftwise_scorer::{GiftSuggestionScorer, SuggestionLimits};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_AGE_GROUP, ARG_BUDGET, ARG_CATALOG, ARG_CRITERIA, ARG_INTEREST, ARG_MAX_SUGGESTIONS,
    ARG_MIN_SCORE, ARG_OCCASION, ARG_PERSONALITY, ARG_RELATION, CliError, ENV_AGE_GROUP,
    ENV_BUDGET, ENV_CATALOG, ENV_OCCASION, ENV_RELATION, write_json,
};

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON product catalog against a gift request. The \
                 request can come from a criteria JSON file, individual \
                 flags, configuration files, or environment variables; \
                 flags override the criteria file field by field.",
    about = "Suggest gifts from a catalog"
)]
#[ortho_config(prefix = "GIFTWISE")]
pub(crate) struct SuggestArgs {
    /// Path to a JSON file containing an array of products.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a JSON file containing gift criteria.
    #[arg(long = ARG_CRITERIA, value_name = "path")]
    #[serde(default)]
    pub(crate) criteria: Option<Utf8PathBuf>,
    /// Occasion being celebrated (e.g. "birthday").
    #[arg(long = ARG_OCCASION, value_name = "occasion")]
    #[serde(default)]
    pub(crate) occasion: Option<String>,
    /// Relationship of the giver to the recipient (e.g. "spouse").
    #[arg(long = ARG_RELATION, value_name = "relation")]
    #[serde(default)]
    pub(crate) relation: Option<String>,
    /// Recipient age bucket (e.g. "adults").
    #[arg(long = ARG_AGE_GROUP, value_name = "group")]
    #[serde(default)]
    pub(crate) age_group: Option<String>,
    /// Intended spend in the storefront currency.
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Recipient interest; repeat for several.
    #[arg(long = ARG_INTEREST, value_name = "interest")]
    #[serde(default)]
    pub(crate) interests: Vec<String>,
    /// Recipient personality archetype.
    #[arg(long = ARG_PERSONALITY, value_name = "personality")]
    #[serde(default)]
    pub(crate) personality: Option<String>,
    /// Maximum number of suggestions to print.
    #[arg(long = ARG_MAX_SUGGESTIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_suggestions: Option<usize>,
    /// Score a product must exceed to be suggested.
    #[arg(long = ARG_MIN_SCORE, value_name = "points")]
    #[serde(default)]
    pub(crate) min_score: Option<f64>,
}

impl SuggestArgs {
    pub(crate) fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Criteria fields supplied directly rather than through a criteria file.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct CriteriaOverrides {
    pub(crate) occasion: Option<String>,
    pub(crate) relation: Option<String>,
    pub(crate) age_group: Option<String>,
    pub(crate) budget: Option<f64>,
    pub(crate) interests: Vec<String>,
    pub(crate) personality: Option<String>,
}

impl CriteriaOverrides {
    /// Combine the overrides with an optional criteria file into validated
    /// criteria. Override fields win; interests replace the file's list
    /// only when at least one is given.
    pub(crate) fn resolve(self, base: Option<GiftCriteria>) -> Result<GiftCriteria, CliError> {
        let occasion = required(
            self.occasion,
            base.as_ref().map(|c| c.occasion().to_owned()),
            ARG_OCCASION,
            ENV_OCCASION,
        )?;
        let relation = required(
            self.relation,
            base.as_ref().map(|c| c.relation().to_owned()),
            ARG_RELATION,
            ENV_RELATION,
        )?;
        let age_group = required(
            self.age_group,
            base.as_ref().map(|c| c.age_group().to_owned()),
            ARG_AGE_GROUP,
            ENV_AGE_GROUP,
        )?;
        let budget = required(
            self.budget,
            base.as_ref().map(GiftCriteria::budget),
            ARG_BUDGET,
            ENV_BUDGET,
        )?;

        let interests = if self.interests.is_empty() {
            base.as_ref()
                .map(|c| c.interests().to_vec())
                .unwrap_or_default()
        } else {
            self.interests
        };
        let personality = self.personality.or_else(|| {
            base.as_ref()
                .and_then(|c| c.personality().map(str::to_owned))
        });

        let builder =
            GiftCriteria::builder(occasion, relation, age_group, budget).interests(interests);
        let builder = match personality {
            Some(value) => builder.personality(value),
            None => builder,
        };
        builder.build().map_err(CliError::InvalidCriteria)
    }
}

fn required<T>(
    value: Option<T>,
    fallback: Option<T>,
    field: &'static str,
    env: &'static str,
) -> Result<T, CliError> {
    value
        .or(fallback)
        .ok_or(CliError::MissingArgument { field, env })
}

/// Resolved `suggest` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SuggestConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog_path: Utf8PathBuf,
    /// Optional path to a JSON criteria file.
    pub(crate) criteria_path: Option<Utf8PathBuf>,
    /// Criteria fields given as flags, env vars or config entries.
    pub(crate) overrides: CriteriaOverrides,
    /// Validated ranking limits.
    pub(crate) limits: SuggestionLimits,
}

impl SuggestConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog_path, ARG_CATALOG)?;
        if let Some(criteria_path) = &self.criteria_path {
            Self::require_existing(criteria_path, ARG_CRITERIA)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match giftwise_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let catalog_path = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;

        let defaults = SuggestionLimits::DEFAULT;
        let limits = SuggestionLimits {
            max_suggestions: args.max_suggestions.unwrap_or(defaults.max_suggestions),
            min_score: args.min_score.unwrap_or(defaults.min_score),
            ..defaults
        }
        .validate()?;

        Ok(Self {
            catalog_path,
            criteria_path: args.criteria,
            overrides: CriteriaOverrides {
                occasion: args.occasion,
                relation: args.relation,
                age_group: args.age_group,
                budget: args.budget,
                interests: args.interests,
                personality: args.personality,
            },
            limits,
        })
    }
}

pub(super) fn run_suggest(args: SuggestArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_suggest_with(args, &mut stdout)
}

pub(super) fn run_suggest_with(args: SuggestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_suggest_config(args)?;
    let catalog = load_catalog(&config.catalog_path)?;
    let base = config
        .criteria_path
        .as_deref()
        .map(load_criteria)
        .transpose()?;
    let criteria = config.overrides.resolve(base)?;

    let scorer = GiftSuggestionScorer::with_limits(config.limits)?;
    let suggestions = scorer.suggest(&criteria, &catalog);
    debug!(
        "Suggested {} of {} catalog products for {}",
        suggestions.len(),
        catalog.len(),
        criteria.occasion()
    );
    write_json(writer, &suggestions)
}

fn resolve_suggest_config(args: SuggestArgs) -> Result<SuggestConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON array of [`Product`] values from disk.
pub(super) fn load_catalog(path: &Utf8Path) -> Result<Vec<Product>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads JSON-encoded [`GiftCriteria`] from disk, validating the budget.
pub(super) fn load_criteria(path: &Utf8Path) -> Result<GiftCriteria, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCriteria {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseCriteria {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SuggestConfig, CliError> {
    let merged = SuggestArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SuggestConfig::try_from(merged)
}

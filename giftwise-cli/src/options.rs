//! Options command: print the table keys the scorer recognises.

use serde::Serialize;
use std::io::Write;

use giftwise_scorer::{
    list_age_groups, list_interests, list_occasions, list_personalities, list_relations,
    popular_occasions, trending_categories,
};

use crate::CliError;

/// Selectable values for building a gift request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptionsReport {
    pub(crate) occasions: Vec<&'static str>,
    pub(crate) relations: Vec<&'static str>,
    pub(crate) age_groups: Vec<&'static str>,
    pub(crate) personalities: Vec<&'static str>,
    pub(crate) interests: Vec<&'static str>,
    pub(crate) trending_categories: &'static [&'static str],
    pub(crate) popular_occasions: &'static [&'static str],
}

impl OptionsReport {
    pub(crate) fn collect() -> Self {
        Self {
            occasions: list_occasions(),
            relations: list_relations(),
            age_groups: list_age_groups(),
            personalities: list_personalities(),
            interests: list_interests(),
            trending_categories: trending_categories(),
            popular_occasions: popular_occasions(),
        }
    }
}

pub(super) fn run_options() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_options_with(&mut stdout)
}

pub(super) fn run_options_with(writer: &mut dyn Write) -> Result<(), CliError> {
    crate::write_json(writer, &OptionsReport::collect())
}

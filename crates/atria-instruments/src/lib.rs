//! atria-instruments
//!
//! Questionnaire definitions and the talent scoring engine. Pure data and
//! pure functions: no HTTP, no persistence, no rendering.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod report;
pub mod scoring;

use atria_core::models::domain::CoreDomain;
use atria_core::models::response::Responses;
use atria_core::models::score::DetailedTalentScores;

use catalog::Catalog;
use report::{TalentReport, percentage, top_subdomains_for_domain};

/// Trait implemented by each forced-choice questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "strength360").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Strength 360").
    fn name(&self) -> &str;

    /// The items and statement themes this instrument uses.
    fn catalog(&self) -> &Catalog;

    fn score(&self, responses: &Responses) -> DetailedTalentScores {
        scoring::score_responses(self.catalog(), responses)
    }

    fn report(&self, responses: &Responses, top_limit: usize) -> TalentReport {
        TalentReport::build(&self.score(responses), top_limit)
    }

    /// Format scores as structured Markdown for report generation.
    fn to_structured_input(&self, scores: &DetailedTalentScores) -> String {
        let total = scores.total();
        let primary = report::primary_talent_domain(&scores.core);

        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!("Primary talent domain: {}\n", primary.label()));
        output.push_str(&format!("Statements scored: {total}\n\n"));

        for domain in CoreDomain::ALL {
            let domain_score = scores.core.get(domain);
            output.push_str(&format!(
                "### {} ({}, {}%)\n",
                domain.label(),
                domain_score,
                percentage(domain_score, total)
            ));
            output.push_str(&format!("{}.\n", domain.description()));
            for top in top_subdomains_for_domain(&scores.subdomains, domain, usize::MAX) {
                if top.score > 0 {
                    output.push_str(&format!(
                        "- {}: {} ({}%)\n",
                        top.subdomain.label(),
                        top.score,
                        top.percentage
                    ));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::strength360::Strength360)]
}

/// Look up a built-in instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

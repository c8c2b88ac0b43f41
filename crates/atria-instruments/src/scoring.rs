//! The scoring engine: responses in, subdomain counts and core totals out.
//!
//! Pure and synchronous. A call owns its accumulator and only reads the
//! catalog, so concurrent callers can share one `&Catalog`.

use atria_core::models::domain::Subdomain;
use atria_core::models::response::Responses;
use atria_core::models::score::{DetailedTalentScores, SubdomainScores, TalentScores};

use crate::catalog::Catalog;

/// Running subdomain counts for one submission.
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    subdomains: SubdomainScores,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, subdomain: Subdomain) {
        self.subdomains.increment(subdomain);
    }

    pub fn finish(self) -> DetailedTalentScores {
        DetailedTalentScores::from_subdomains(self.subdomains)
    }
}

/// Score a submission against `catalog`.
///
/// Each entry with a non-empty selection adds one to the subdomain its
/// statement measures. Entries that do not name a statement in the catalog
/// (unknown question, choice other than `A`/`B`, non-numeric key) are skipped.
pub fn score_responses(catalog: &Catalog, responses: &Responses) -> DetailedTalentScores {
    let mut accumulator = ScoreAccumulator::new();

    for (question_key, selection, response) in responses.entries() {
        let subdomain =
            response.and_then(|response| catalog.subdomain_for_key(&response.statement_key()));

        match subdomain {
            Some(subdomain) => accumulator.record(subdomain),
            None => tracing::debug!(
                question = question_key,
                selection,
                "skipping response with no matching statement"
            ),
        }
    }

    accumulator.finish()
}

/// Core-domain totals only.
pub fn calculate_scores(catalog: &Catalog, responses: &Responses) -> TalentScores {
    score_responses(catalog, responses).core
}

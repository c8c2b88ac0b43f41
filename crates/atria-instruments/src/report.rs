//! Presentation-ready views derived from computed scores.
//!
//! Nothing here re-reads responses. Ordering rules are deliberate and stable:
//! ties resolve to the earlier domain or subdomain in declaration order.

use std::collections::BTreeMap;

use atria_core::error::CoreError;
use atria_core::models::domain::{CoreDomain, Subdomain};
use atria_core::models::score::{
    DetailedTalentScores, DomainShare, SubdomainScores, TalentScores, TopSubdomain,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_TOP_SUBDOMAINS: usize = 3;

/// `part / whole` as a whole percent, 0 when `whole` is 0.
///
/// Rounds half away from zero, which for non-negative counts matches the
/// half-up rounding the web client uses.
pub fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

/// The counts of `domain`'s members, keyed in declaration order.
pub fn subdomain_scores_for_domain(
    scores: &SubdomainScores,
    domain: CoreDomain,
) -> BTreeMap<Subdomain, u32> {
    domain.subdomains().map(|s| (s, scores.get(s))).collect()
}

/// The `limit` highest-scoring members of `domain`.
///
/// Sorted by score, descending. The sort is stable, so equal scores keep
/// catalog declaration order.
pub fn top_subdomains_for_domain(
    scores: &SubdomainScores,
    domain: CoreDomain,
    limit: usize,
) -> Vec<TopSubdomain> {
    let members = subdomain_scores_for_domain(scores, domain);
    let domain_total: u32 = members.values().sum();

    let mut ranked: Vec<TopSubdomain> = members
        .into_iter()
        .map(|(subdomain, score)| TopSubdomain {
            subdomain,
            score,
            percentage: percentage(score, domain_total),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// The domain with the highest total.
///
/// Scans in [`CoreDomain::ALL`] order and only replaces the leader on a
/// strictly greater score, so the first of several tied domains wins.
pub fn primary_talent_domain(scores: &TalentScores) -> CoreDomain {
    let mut leader = (CoreDomain::Executing, scores.executing);
    for (domain, score) in scores.iter().skip(1) {
        if score > leader.1 {
            leader = (domain, score);
        }
    }
    leader.0
}

pub fn primary_talent_domain_label(scores: &TalentScores) -> &'static str {
    primary_talent_domain(scores).label()
}

/// Display label for a domain key coming from outside the engine
/// (`"relationshipBuilding"`, `"StrategicThinking"`, ...).
pub fn talent_domain_label(key: &str) -> Result<&'static str, CoreError> {
    key.parse::<CoreDomain>().map(CoreDomain::label)
}

/// Each domain's share of every scored statement, in fixed order.
pub fn domain_shares(scores: &TalentScores) -> Vec<DomainShare> {
    let total = scores.total();
    scores
        .iter()
        .map(|(domain, score)| DomainShare {
            domain,
            score,
            percentage: percentage(score, total),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainBreakdown {
    pub domain: CoreDomain,
    pub label: String,
    pub description: String,
    pub score: u32,
    pub top_subdomains: Vec<TopSubdomain>,
}

/// Everything the results page and exported reports show for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TalentReport {
    pub primary_domain: CoreDomain,
    pub primary_domain_label: String,
    pub scores: DetailedTalentScores,
    pub domain_shares: Vec<DomainShare>,
    pub breakdown: Vec<DomainBreakdown>,
}

impl TalentReport {
    pub fn build(scores: &DetailedTalentScores, limit: usize) -> Self {
        let primary = primary_talent_domain(&scores.core);
        let breakdown = CoreDomain::ALL
            .into_iter()
            .map(|domain| DomainBreakdown {
                domain,
                label: domain.label().to_string(),
                description: domain.description().to_string(),
                score: scores.core.get(domain),
                top_subdomains: top_subdomains_for_domain(&scores.subdomains, domain, limit),
            })
            .collect();

        Self {
            primary_domain: primary,
            primary_domain_label: primary.label().to_string(),
            scores: scores.clone(),
            domain_shares: domain_shares(&scores.core),
            breakdown,
        }
    }
}

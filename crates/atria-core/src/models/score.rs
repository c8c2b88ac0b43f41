use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::domain::{CoreDomain, Subdomain};

/// Count per subdomain. Every subdomain is always present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SubdomainScores(BTreeMap<Subdomain, u32>);

impl SubdomainScores {
    pub fn zeroed() -> Self {
        Self(Subdomain::ALL.into_iter().map(|s| (s, 0)).collect())
    }

    pub fn get(&self, subdomain: Subdomain) -> u32 {
        self.0.get(&subdomain).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, subdomain: Subdomain) {
        *self.0.entry(subdomain).or_insert(0) += 1;
    }

    /// `(subdomain, count)` pairs in catalog declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Subdomain, u32)> + '_ {
        self.0.iter().map(|(subdomain, count)| (*subdomain, *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Sum of the counts of every member of `domain`.
    pub fn domain_total(&self, domain: CoreDomain) -> u32 {
        domain.subdomains().map(|s| self.get(s)).sum()
    }
}

impl Default for SubdomainScores {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<BTreeMap<Subdomain, u32>> for SubdomainScores {
    fn from(counts: BTreeMap<Subdomain, u32>) -> Self {
        let mut scores = Self::zeroed();
        scores.0.extend(counts);
        scores
    }
}

// Stored breakdowns written by older clients omit zero entries.
impl<'de> Deserialize<'de> for SubdomainScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<Subdomain, u32>::deserialize(deserializer).map(Self::from)
    }
}

/// The four core-domain totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TalentScores {
    pub executing: u32,
    pub influencing: u32,
    pub relationship_building: u32,
    pub strategic_thinking: u32,
}

impl TalentScores {
    pub fn from_subdomains(subdomains: &SubdomainScores) -> Self {
        Self {
            executing: subdomains.domain_total(CoreDomain::Executing),
            influencing: subdomains.domain_total(CoreDomain::Influencing),
            relationship_building: subdomains.domain_total(CoreDomain::RelationshipBuilding),
            strategic_thinking: subdomains.domain_total(CoreDomain::StrategicThinking),
        }
    }

    pub fn get(&self, domain: CoreDomain) -> u32 {
        match domain {
            CoreDomain::Executing => self.executing,
            CoreDomain::Influencing => self.influencing,
            CoreDomain::RelationshipBuilding => self.relationship_building,
            CoreDomain::StrategicThinking => self.strategic_thinking,
        }
    }

    /// `(domain, total)` pairs in the fixed enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (CoreDomain, u32)> + '_ {
        CoreDomain::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| score).sum()
    }
}

/// Core totals plus the full subdomain breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetailedTalentScores {
    #[serde(flatten)]
    pub core: TalentScores,
    pub subdomains: SubdomainScores,
}

impl DetailedTalentScores {
    pub fn from_subdomains(subdomains: SubdomainScores) -> Self {
        Self {
            core: TalentScores::from_subdomains(&subdomains),
            subdomains,
        }
    }

    /// Number of scored statements.
    pub fn total(&self) -> u32 {
        self.core.total()
    }
}

/// One row of a per-domain top-theme listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopSubdomain {
    pub subdomain: Subdomain,
    pub score: u32,
    /// Share of the domain total, rounded to a whole percent.
    pub percentage: u32,
}

/// A core domain's share of all scored statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainShare {
    pub domain: CoreDomain,
    pub score: u32,
    pub percentage: u32,
}

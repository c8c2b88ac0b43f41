//! The talent taxonomy: four core domains partitioned into subdomains.
//!
//! The partition is encoded in [`Subdomain::domain`], so every subdomain
//! belongs to exactly one core domain by construction. Declaration order of
//! both enums is significant: it is the iteration order used for tie-breaks
//! and for stable ordering of equal scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four top-level talent categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum CoreDomain {
    Executing,
    Influencing,
    RelationshipBuilding,
    StrategicThinking,
}

impl CoreDomain {
    /// All domains in the fixed enumeration order.
    pub const ALL: [CoreDomain; 4] = [
        CoreDomain::Executing,
        CoreDomain::Influencing,
        CoreDomain::RelationshipBuilding,
        CoreDomain::StrategicThinking,
    ];

    /// Internal key, e.g. `RelationshipBuilding`.
    pub fn key(self) -> &'static str {
        match self {
            CoreDomain::Executing => "Executing",
            CoreDomain::Influencing => "Influencing",
            CoreDomain::RelationshipBuilding => "RelationshipBuilding",
            CoreDomain::StrategicThinking => "StrategicThinking",
        }
    }

    /// camelCase key used by the front end's score objects.
    pub fn score_key(self) -> &'static str {
        match self {
            CoreDomain::Executing => "executing",
            CoreDomain::Influencing => "influencing",
            CoreDomain::RelationshipBuilding => "relationshipBuilding",
            CoreDomain::StrategicThinking => "strategicThinking",
        }
    }

    /// Human-readable name shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            CoreDomain::Executing => "Executing",
            CoreDomain::Influencing => "Influencing",
            CoreDomain::RelationshipBuilding => "Relationship Building",
            CoreDomain::StrategicThinking => "Strategic Thinking",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CoreDomain::Executing => "People who execute make things happen",
            CoreDomain::Influencing => "People who influence help teams reach broader audiences",
            CoreDomain::RelationshipBuilding => "People who build relationships hold teams together",
            CoreDomain::StrategicThinking => "People who think strategically focus on what could be",
        }
    }

    /// Member subdomains in catalog declaration order.
    pub fn subdomains(self) -> impl Iterator<Item = Subdomain> {
        Subdomain::ALL
            .into_iter()
            .filter(move |subdomain| subdomain.domain() == self)
    }
}

impl fmt::Display for CoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CoreDomain {
    type Err = CoreError;

    /// Accepts the internal key, the camelCase score key or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoreDomain::ALL
            .into_iter()
            .find(|d| d.key() == s || d.score_key() == s || d.label() == s)
            .ok_or_else(|| CoreError::UnknownDomain(s.to_string()))
    }
}

/// One of the fine-grained talent themes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Subdomain {
    // Executing
    Achiever,
    Arranger,
    Belief,
    Consistency,
    Deliberative,
    Discipline,
    Focus,
    Responsibility,
    Restorative,

    // Influencing
    Activator,
    Command,
    Communication,
    Competition,
    Maximizer,
    SelfAssurance,
    Significance,
    Woo,

    // Relationship Building
    Adaptability,
    Connectedness,
    Developer,
    Empathy,
    Harmony,
    Includer,
    Individualization,
    Positivity,
    Relator,

    // Strategic Thinking
    Analytical,
    Context,
    Futuristic,
    Ideation,
    Input,
    Intellection,
    Learner,
    Strategic,
}

impl Subdomain {
    pub const COUNT: usize = 34;

    /// Every subdomain in catalog declaration order.
    pub const ALL: [Subdomain; Subdomain::COUNT] = [
        Subdomain::Achiever,
        Subdomain::Arranger,
        Subdomain::Belief,
        Subdomain::Consistency,
        Subdomain::Deliberative,
        Subdomain::Discipline,
        Subdomain::Focus,
        Subdomain::Responsibility,
        Subdomain::Restorative,
        Subdomain::Activator,
        Subdomain::Command,
        Subdomain::Communication,
        Subdomain::Competition,
        Subdomain::Maximizer,
        Subdomain::SelfAssurance,
        Subdomain::Significance,
        Subdomain::Woo,
        Subdomain::Adaptability,
        Subdomain::Connectedness,
        Subdomain::Developer,
        Subdomain::Empathy,
        Subdomain::Harmony,
        Subdomain::Includer,
        Subdomain::Individualization,
        Subdomain::Positivity,
        Subdomain::Relator,
        Subdomain::Analytical,
        Subdomain::Context,
        Subdomain::Futuristic,
        Subdomain::Ideation,
        Subdomain::Input,
        Subdomain::Intellection,
        Subdomain::Learner,
        Subdomain::Strategic,
    ];

    /// The core domain this subdomain belongs to.
    pub fn domain(self) -> CoreDomain {
        use Subdomain::*;
        match self {
            Achiever | Arranger | Belief | Consistency | Deliberative | Discipline | Focus
            | Responsibility | Restorative => CoreDomain::Executing,
            Activator | Command | Communication | Competition | Maximizer | SelfAssurance
            | Significance | Woo => CoreDomain::Influencing,
            Adaptability | Connectedness | Developer | Empathy | Harmony | Includer
            | Individualization | Positivity | Relator => CoreDomain::RelationshipBuilding,
            Analytical | Context | Futuristic | Ideation | Input | Intellection | Learner
            | Strategic => CoreDomain::StrategicThinking,
        }
    }

    /// Identifier as it appears in stored score maps, e.g. `SelfAssurance`.
    pub fn name(self) -> &'static str {
        use Subdomain::*;
        match self {
            Achiever => "Achiever",
            Arranger => "Arranger",
            Belief => "Belief",
            Consistency => "Consistency",
            Deliberative => "Deliberative",
            Discipline => "Discipline",
            Focus => "Focus",
            Responsibility => "Responsibility",
            Restorative => "Restorative",
            Activator => "Activator",
            Command => "Command",
            Communication => "Communication",
            Competition => "Competition",
            Maximizer => "Maximizer",
            SelfAssurance => "SelfAssurance",
            Significance => "Significance",
            Woo => "Woo",
            Adaptability => "Adaptability",
            Connectedness => "Connectedness",
            Developer => "Developer",
            Empathy => "Empathy",
            Harmony => "Harmony",
            Includer => "Includer",
            Individualization => "Individualization",
            Positivity => "Positivity",
            Relator => "Relator",
            Analytical => "Analytical",
            Context => "Context",
            Futuristic => "Futuristic",
            Ideation => "Ideation",
            Input => "Input",
            Intellection => "Intellection",
            Learner => "Learner",
            Strategic => "Strategic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subdomain::SelfAssurance => "Self-Assurance",
            other => other.name(),
        }
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subdomain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subdomain::ALL
            .into_iter()
            .find(|sub| sub.name() == s || sub.label() == s)
            .ok_or_else(|| CoreError::UnknownSubdomain(s.to_string()))
    }
}

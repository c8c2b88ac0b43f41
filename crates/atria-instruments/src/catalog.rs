//! The theme catalog: forced-choice items and the statement → subdomain lookup.
//!
//! A [`Catalog`] is validated once on construction and never mutated
//! afterwards. Every question `1..=N` has exactly one item, so the lookup is
//! total over that range and absent everywhere else.

use std::cmp::Ordering;

use atria_core::models::domain::{CoreDomain, Subdomain};
use atria_core::models::response::{Choice, StatementKey};
use atria_core::models::score::TalentScores;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// A forced-choice item: two statements, each tied to a subdomain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    pub id: u16,
    pub statement_a: String,
    pub statement_b: String,
    pub theme_a: Subdomain,
    pub theme_b: Subdomain,
}

impl Item {
    pub fn theme(&self, choice: Choice) -> Subdomain {
        match choice {
            Choice::A => self.theme_a,
            Choice::B => self.theme_b,
        }
    }

    pub fn statement(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.statement_a,
            Choice::B => &self.statement_b,
        }
    }
}

/// On-disk shape of a catalog. Theme names are resolved during validation so
/// a typo is reported as an unknown subdomain rather than a parse failure.
#[derive(Debug, Deserialize)]
struct CatalogDefinition {
    items: Vec<ItemDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemDefinition {
    id: u16,
    statement_a: String,
    statement_b: String,
    theme_a: String,
    theme_b: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Validate and index a set of items.
    ///
    /// Items may arrive in any order; ids must cover `1..=N` exactly once.
    pub fn new(mut items: Vec<Item>) -> Result<Self, InstrumentError> {
        if items.is_empty() {
            return Err(InstrumentError::InvalidCatalog(
                "catalog has no items".to_string(),
            ));
        }
        if items.len() > usize::from(u16::MAX) {
            return Err(InstrumentError::InvalidCatalog(format!(
                "catalog has {} items, more than question ids can address",
                items.len()
            )));
        }

        items.sort_by_key(|item| item.id);
        for (idx, item) in items.iter().enumerate() {
            let expected = idx as u16 + 1;
            match item.id.cmp(&expected) {
                Ordering::Equal => {}
                Ordering::Less if item.id == 0 => {
                    return Err(InstrumentError::InvalidCatalog(
                        "question ids start at 1".to_string(),
                    ));
                }
                Ordering::Less => return Err(InstrumentError::DuplicateQuestion(item.id)),
                Ordering::Greater => return Err(InstrumentError::MissingQuestion(expected)),
            }
            if item.statement_a.trim().is_empty() || item.statement_b.trim().is_empty() {
                return Err(InstrumentError::InvalidCatalog(format!(
                    "question {} has an empty statement",
                    item.id
                )));
            }
        }

        Ok(Self { items })
    }

    /// Load a catalog from its JSON definition.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        let items = definition
            .items
            .into_iter()
            .map(|def| -> Result<Item, InstrumentError> {
                Ok(Item {
                    id: def.id,
                    theme_a: def.theme_a.parse()?,
                    theme_b: def.theme_b.parse()?,
                    statement_a: def.statement_a,
                    statement_b: def.statement_b,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    pub fn to_json_pretty(&self) -> Result<String, InstrumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Items ordered by question id.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, question_id: u16) -> Option<&Item> {
        let idx = usize::from(question_id).checked_sub(1)?;
        self.items.get(idx)
    }

    pub fn question_count(&self) -> usize {
        self.items.len()
    }

    /// Two statements per question.
    pub fn statement_count(&self) -> usize {
        self.items.len() * 2
    }

    /// The static partition. Total over every subdomain.
    pub fn domain_for_subdomain(&self, subdomain: Subdomain) -> CoreDomain {
        subdomain.domain()
    }

    /// Subdomain measured by a statement, or `None` if the question is
    /// outside this catalog.
    pub fn subdomain_for_answer(&self, question_id: u16, choice: Choice) -> Option<Subdomain> {
        self.item(question_id).map(|item| item.theme(choice))
    }

    pub fn subdomain_for_key(&self, key: &StatementKey) -> Option<Subdomain> {
        self.subdomain_for_answer(key.question, key.choice)
    }

    pub fn domain_for_answer(&self, question_id: u16, choice: Choice) -> Option<CoreDomain> {
        self.subdomain_for_answer(question_id, choice)
            .map(|subdomain| self.domain_for_subdomain(subdomain))
    }

    /// How many statements feed each core domain, counting both sides of
    /// every item. Sums to [`Catalog::statement_count`].
    pub fn statement_counts(&self) -> TalentScores {
        let mut counts = TalentScores::default();
        for item in &self.items {
            for choice in Choice::ALL {
                match item.theme(choice).domain() {
                    CoreDomain::Executing => counts.executing += 1,
                    CoreDomain::Influencing => counts.influencing += 1,
                    CoreDomain::RelationshipBuilding => counts.relationship_building += 1,
                    CoreDomain::StrategicThinking => counts.strategic_thinking += 1,
                }
            }
        }
        counts
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which of the two statements of a forced-choice item was selected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    pub const ALL: [Choice; 2] = [Choice::A, Choice::B];

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            other => Err(CoreError::InvalidChoice(other.to_string())),
        }
    }
}

/// Identifies one statement: question number plus choice, e.g. `14B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementKey {
    pub question: u16,
    pub choice: Choice,
}

impl StatementKey {
    pub fn new(question: u16, choice: Choice) -> Self {
        Self { question, choice }
    }
}

impl fmt::Display for StatementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.question, self.choice)
    }
}

impl FromStr for StatementKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidStatementKey(s.to_string());
        if !s.is_ascii() || s.len() < 2 {
            return Err(invalid());
        }
        let (question, choice) = s.split_at(s.len() - 1);
        let question = parse_question_id(question).ok_or_else(invalid)?;
        let choice = choice.parse::<Choice>().map_err(|_| invalid())?;
        Ok(Self { question, choice })
    }
}

/// Parse a question id in canonical decimal form.
///
/// Signs, whitespace and leading zeros are rejected so that the parsed id
/// always prints back to the same key the respondent's client sent.
pub fn parse_question_id(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return None;
    }
    raw.parse().ok()
}

/// A validated answer to a single forced-choice item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub question_id: u16,
    pub choice: Choice,
}

impl Response {
    /// Validate a raw `(question key, selection)` pair from the client.
    ///
    /// Returns `None` for anything that cannot name a statement; callers
    /// treat that as "not scored" rather than as an error.
    pub fn parse(question_key: &str, selection: &str) -> Option<Self> {
        let question_id = parse_question_id(question_key)?;
        let choice = selection.parse().ok()?;
        Some(Self {
            question_id,
            choice,
        })
    }

    pub fn statement_key(&self) -> StatementKey {
        StatementKey::new(self.question_id, self.choice)
    }
}

/// One entry of the client payload, as the test runner sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ForcedChoiceResponse {
    #[serde(rename = "selectedStatement", skip_serializing_if = "Option::is_none")]
    pub selected_statement: Option<String>,
}

/// Never fails: `null`, bare strings, arrays and non-string selections all
/// read as unanswered.
impl<'de> Deserialize<'de> for ForcedChoiceResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let selected_statement = value
            .get("selectedStatement")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        Ok(Self { selected_statement })
    }
}

impl ForcedChoiceResponse {
    pub fn new(choice: Choice) -> Self {
        Self {
            selected_statement: Some(choice.to_string()),
        }
    }

    /// The selection, if present and non-empty.
    pub fn selection(&self) -> Option<&str> {
        self.selected_statement.as_deref().filter(|s| !s.is_empty())
    }
}

/// Question key to selected statement, e.g. `{"34": {"selectedStatement": "B"}}`.
///
/// Kept loosely typed so partial or garbled submissions still deserialize;
/// [`Responses::iter_parsed`] is the validation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Responses(BTreeMap<String, ForcedChoiceResponse>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_choices(choices: impl IntoIterator<Item = (u16, Choice)>) -> Self {
        let mut responses = Self::new();
        for (question_id, choice) in choices {
            responses.insert(question_id, choice);
        }
        responses
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Record a choice, replacing any earlier answer to the same question.
    pub fn insert(&mut self, question_id: u16, choice: Choice) {
        self.0
            .insert(question_id.to_string(), ForcedChoiceResponse::new(choice));
    }

    /// Record an unvalidated entry exactly as a client sent it.
    pub fn insert_raw(&mut self, question_key: impl Into<String>, selection: impl Into<String>) {
        self.0.insert(
            question_key.into(),
            ForcedChoiceResponse {
                selected_statement: Some(selection.into()),
            },
        );
    }

    pub fn get(&self, question_key: &str) -> Option<&ForcedChoiceResponse> {
        self.0.get(question_key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ForcedChoiceResponse)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries with a non-empty selection, unvalidated.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(key, response)| response.selection().map(|sel| (key, sel)))
    }

    /// Every answered entry alongside its validated form, `None` when the
    /// key or selection is malformed.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, Option<Response>)> {
        self.selections()
            .map(|(key, selection)| (key, selection, Response::parse(key, selection)))
    }

    /// Entries that parse into a [`Response`]; malformed ones are skipped.
    pub fn iter_parsed(&self) -> impl Iterator<Item = Response> + '_ {
        self.entries().filter_map(|(_, _, response)| response)
    }

    /// Number of questions with a non-empty selection.
    pub fn answered_count(&self) -> usize {
        self.selections().count()
    }
}

impl FromIterator<(u16, Choice)> for Responses {
    fn from_iter<I: IntoIterator<Item = (u16, Choice)>>(iter: I) -> Self {
        Self::from_choices(iter)
    }
}

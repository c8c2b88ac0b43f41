use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::domain::CoreDomain;
use super::response::Responses;
use super::score::DetailedTalentScores;

/// What the test runner submits when a candidate finishes (or is
/// auto-submitted out of) an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestSubmission {
    pub assignment_id: Uuid,
    pub responses: Responses,
    #[serde(default)]
    pub is_auto_submit: bool,
    pub test_start_time: Option<jiff::Timestamp>,
    pub test_completion_time: Option<jiff::Timestamp>,
}

/// A scored submission in the shape of the `responses` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRecord {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub responses_json: Responses,
    pub executing_score: u32,
    pub influencing_score: u32,
    pub relationship_building_score: u32,
    pub strategic_thinking_score: u32,
    /// Display label, e.g. "Relationship Building".
    pub primary_talent_domain: String,
    pub detailed_scores: DetailedTalentScores,
    pub questions_answered: u32,
    pub is_auto_submit: bool,
    pub test_start_time: Option<jiff::Timestamp>,
    pub test_completion_time: Option<jiff::Timestamp>,
}

impl ResponseRecord {
    /// Attach computed scores to a submission. Scoring itself happens in
    /// `atria-instruments`; this only arranges the columns.
    pub fn from_submission(
        submission: TestSubmission,
        scores: DetailedTalentScores,
        primary: CoreDomain,
    ) -> Self {
        let questions_answered = submission.responses.answered_count() as u32;
        Self {
            id: Uuid::new_v4(),
            assignment_id: submission.assignment_id,
            executing_score: scores.core.executing,
            influencing_score: scores.core.influencing,
            relationship_building_score: scores.core.relationship_building,
            strategic_thinking_score: scores.core.strategic_thinking,
            primary_talent_domain: primary.label().to_string(),
            detailed_scores: scores,
            questions_answered,
            is_auto_submit: submission.is_auto_submit,
            test_start_time: submission.test_start_time,
            test_completion_time: submission.test_completion_time,
            responses_json: submission.responses,
        }
    }

    pub fn primary_domain(&self) -> Option<CoreDomain> {
        self.primary_talent_domain.parse().ok()
    }
}

//! atria-core
//!
//! Pure domain types for the Strength 360 assessment: talent domains,
//! forced-choice responses, score shapes and the persisted response record.
//! No I/O. This is the shared vocabulary of the Atria system.

pub mod error;
pub mod models;

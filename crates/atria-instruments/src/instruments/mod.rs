pub mod custom;
pub mod strength360;

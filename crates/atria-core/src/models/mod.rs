pub mod domain;
pub mod record;
pub mod response;
pub mod score;

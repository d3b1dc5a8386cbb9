pub mod preview;
pub mod query;
pub mod search;

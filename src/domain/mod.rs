pub mod builtin;
pub mod catalog;
pub mod dispatch;
pub mod query;
pub mod recency;

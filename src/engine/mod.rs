//! The progression and recommendation engine.
//!
//! Every function here is a pure computation over explicitly supplied
//! inputs: a catalog snapshot, an assessment collection, and user state.
//! Nothing is cached and nothing is mutated; callers re-invoke after any
//! data change, and all inputs to one call must come from the same
//! snapshot.

pub mod access;
pub mod aggregate;
pub mod prereq;
pub mod progression;
pub mod recommend;

pub use aggregate::RatingSummary;
pub use progression::ProgressStatistics;
pub use recommend::{ReasonCode, Suggestion};

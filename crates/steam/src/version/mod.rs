#![forbid(unsafe_code)]

//! Picking the current release out of the versions reported by a population
//! of servers.
//!
//! The highest reported version is not trustworthy on its own: test builds
//! and spoofed servers report versions that were never released. A version
//! has to be carried by a minimum share of the population (`threshold`,
//! in percent) to be a candidate. If nothing reaches it, a looser `fallback`
//! share is tried, and if that finds nothing either the highest version
//! present is returned.

mod compare;
mod consensus;

pub use compare::compare_versions;
pub use consensus::{Consensus, VersionMap, find_version, find_version_safe};

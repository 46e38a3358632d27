//! Upstream source adapters.

mod nbp;

pub use nbp::NbpGoldAdapter;

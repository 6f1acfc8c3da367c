//! Reconcile storage records stuck as incomplete chunked uploads.
//!
//! A known client bug leaves aborted multi-part uploads behind as files
//! whose size is an exact multiple of the 10 MB chunk unit. Given the list
//! of suspect records, this crate resolves each one against the backing
//! store, decides whether a complete prior version exists, and plans or
//! executes a rollback to it.
//!
//! The pipeline runs strictly forward, one record at a time:
//! loader → filter → classifier → resolver → reporter/executor.

pub mod classify;
pub mod cli;
pub mod client;
pub mod constants;
pub mod filter;
pub mod loader;
pub mod options;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod resolve;
pub mod rollback;

pub use client::{BackendError, BackendResult, HttpBackend, StorageBackend};
pub use filter::SkipCounts;
pub use options::{Options, OptionsBuilder};
pub use pipeline::RunReport;
pub use record::{Diagnosed, FileMeta, LocatedRecord, Outcome, StuckRecord, Version};
pub use rollback::{Repair, RepairState};

//! Progress notification port
//!
//! Defines the interface for reporting progress during a query run.

use docquery_domain::{DocumentId, Stage};

/// Callback for progress updates during a query run
///
/// Implementations live in the presentation layer. Notifications are a
/// side channel: they never influence the pipeline.
pub trait QueryProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage finishes; `success` is false only for a stage
    /// that raised
    fn on_stage_complete(&self, stage: Stage, success: bool);

    /// Called instead of start/complete when a stage is skipped
    fn on_stage_skipped(&self, _stage: Stage, _reason: &str) {}

    /// Called when some requested documents are not in the catalog
    fn on_documents_missing(&self, _missing: &[DocumentId]) {}

    /// Called when theme synthesis raised and was downgraded to no themes
    fn on_themes_failed(&self, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoQueryProgress;

impl QueryProgressNotifier for NoQueryProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}

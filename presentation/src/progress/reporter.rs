//! Progress reporting for query execution
//!
//! Spinners are drawn on stderr so stdout carries only the result.

use colored::Colorize;
use docquery_application::ports::progress::QueryProgressNotifier;
use docquery_domain::{DocumentId, Stage, util::join_display};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per pipeline stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            stage_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_current(&self, message: String) {
        if let Ok(mut guard) = self.stage_bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(message);
        }
    }

    fn note(&self, line: String) {
        let _ = self.multi.println(line);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage.display_name());
        pb.set_message("running...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.stage_bar.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish();
        }
    }

    fn on_stage_complete(&self, _stage: Stage, success: bool) {
        let message = if success {
            format!("{}", "done".green())
        } else {
            format!("{}", "failed".red())
        };
        self.finish_current(message);
    }

    fn on_stage_skipped(&self, stage: Stage, reason: &str) {
        self.note(format!(
            "{} {} {}",
            "-".dimmed(),
            stage.display_name().bold(),
            format!("skipped ({})", reason).dimmed()
        ));
    }

    fn on_documents_missing(&self, missing: &[DocumentId]) {
        self.note(format!(
            "{} Some document IDs not found: [{}]",
            "!".yellow().bold(),
            join_display(missing)
        ));
    }

    fn on_themes_failed(&self, reason: &str) {
        self.note(format!(
            "{} Theme identification failed: {}",
            "!".yellow().bold(),
            reason
        ));
    }
}

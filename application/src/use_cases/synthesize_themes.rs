//! Theme delegate.
//!
//! Runs theme synthesis when it was requested and there is evidence to work
//! from. A synthesis error is contained here: it is reported and turned into
//! [`ThemeOutcome::Failed`], which the response shows as an empty theme list.

use crate::ports::theme_synthesizer::ThemeSynthesizer;
use docquery_domain::{Match, ThemeOutcome};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Delegates theme synthesis to the [`ThemeSynthesizer`] port
#[derive(Clone)]
pub struct ThemeDelegate {
    synthesizer: Arc<dyn ThemeSynthesizer>,
}

impl ThemeDelegate {
    pub fn new(synthesizer: Arc<dyn ThemeSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Synthesize themes, or skip when disabled or when `matches` is empty.
    ///
    /// Never fails.
    pub async fn maybe_synthesize(
        &self,
        enable: bool,
        matches: &[Match],
        theme_count: u32,
    ) -> ThemeOutcome {
        if !enable {
            debug!("Theme synthesis not requested");
            return ThemeOutcome::NotComputed;
        }
        if matches.is_empty() {
            debug!("Skipping theme synthesis: no matches");
            return ThemeOutcome::NotComputed;
        }

        match self.synthesizer.identify_themes(matches, theme_count).await {
            Ok(themes) => {
                info!(
                    "Identified {} themes from {} matches",
                    themes.len(),
                    matches.len()
                );
                ThemeOutcome::Computed(themes)
            }
            Err(e) => {
                error!("Error in theme identification: {}", e);
                ThemeOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

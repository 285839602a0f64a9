//! Theme synthesizer used when no theme service is configured.

use async_trait::async_trait;
use docquery_application::{SynthesisError, ThemeSynthesizer};
use docquery_domain::{Match, Theme};

/// Fails every synthesis request
///
/// The theme stage contains the failure, so queries with themes enabled
/// still succeed with an empty theme list.
pub struct UnconfiguredThemeSynthesizer;

#[async_trait]
impl ThemeSynthesizer for UnconfiguredThemeSynthesizer {
    async fn identify_themes(
        &self,
        _matches: &[Match],
        _theme_count: u32,
    ) -> Result<Vec<Theme>, SynthesisError> {
        Err(SynthesisError::Other(
            "no theme service configured (set themes.endpoint)".to_string(),
        ))
    }
}

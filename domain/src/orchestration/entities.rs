//! Orchestration domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stage of a query run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Resolve requested document ids against the catalog
    ScopeResolution,
    /// Fetch ranked matches from the retrieval engine
    Retrieval,
    /// Optionally synthesize themes from the matches
    ThemeSynthesis,
    /// Build the final response
    Assembly,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ScopeResolution => "scope_resolution",
            Stage::Retrieval => "retrieval",
            Stage::ThemeSynthesis => "theme_synthesis",
            Stage::Assembly => "assembly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::ScopeResolution => "Scope Resolution",
            Stage::Retrieval => "Retrieval",
            Stage::ThemeSynthesis => "Theme Synthesis",
            Stage::Assembly => "Assembly",
        }
    }

    /// Whether a failure in this stage fails the whole run.
    pub fn is_fatal_on_error(&self) -> bool {
        matches!(self, Stage::ScopeResolution | Stage::Retrieval)
    }

    pub fn all() -> [Stage; 4] {
        [
            Stage::ScopeResolution,
            Stage::Retrieval,
            Stage::ThemeSynthesis,
            Stage::Assembly,
        ]
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// State of a query run.
///
/// ```text
/// Start -> ScopeResolved -> Retrieved -> ThemesResolved -> Assembled
///   |            |              |
///   +------------+--------------+--> Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Start,
    ScopeResolved,
    Retrieved,
    ThemesResolved,
    Assembled,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Start => "start",
            RunState::ScopeResolved => "scope_resolved",
            RunState::Retrieved => "retrieved",
            RunState::ThemesResolved => "themes_resolved",
            RunState::Assembled => "assembled",
            RunState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Assembled | RunState::Failed)
    }

    /// The state reached when the stage following this one succeeds.
    fn successor(&self) -> Option<RunState> {
        match self {
            RunState::Start => Some(RunState::ScopeResolved),
            RunState::ScopeResolved => Some(RunState::Retrieved),
            RunState::Retrieved => Some(RunState::ThemesResolved),
            RunState::ThemesResolved => Some(RunState::Assembled),
            RunState::Assembled | RunState::Failed => None,
        }
    }

    /// The stage that runs while in this state.
    pub fn pending_stage(&self) -> Option<Stage> {
        match self {
            RunState::Start => Some(Stage::ScopeResolution),
            RunState::ScopeResolved => Some(Stage::Retrieval),
            RunState::Retrieved => Some(Stage::ThemeSynthesis),
            RunState::ThemesResolved => Some(Stage::Assembly),
            RunState::Assembled | RunState::Failed => None,
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single query run (Entity)
///
/// Tracks the pipeline state and rejects out-of-order transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRun {
    state: RunState,
    failed_stage: Option<Stage>,
}

impl Default for QueryRun {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryRun {
    pub fn new() -> Self {
        Self {
            state: RunState::Start,
            failed_stage: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn failed_stage(&self) -> Option<Stage> {
        self.failed_stage
    }

    /// Move to `next`, which must be the direct successor of the current
    /// state.
    pub fn advance(&mut self, next: RunState) -> Result<(), DomainError> {
        if self.state.successor() != Some(next) {
            return Err(self.illegal(next));
        }
        self.state = next;
        Ok(())
    }

    /// Enter the terminal failure state because `stage` raised.
    ///
    /// Only scope resolution and retrieval may fail a run.
    pub fn fail(&mut self, stage: Stage) -> Result<(), DomainError> {
        let allowed = matches!(
            self.state,
            RunState::Start | RunState::ScopeResolved | RunState::Retrieved
        );
        if !allowed || !stage.is_fatal_on_error() {
            return Err(self.illegal(RunState::Failed));
        }
        self.state = RunState::Failed;
        self.failed_stage = Some(stage);
        Ok(())
    }

    fn illegal(&self, to: RunState) -> DomainError {
        DomainError::IllegalTransition {
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}

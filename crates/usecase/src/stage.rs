// crates/usecase/src/stage.rs

/// Whole-run stages, strictly sequential with no re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    Probing,
    Classifying,
    Packing,
    Done,
    Failed,
}

impl RunStage {
    const fn successor(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Probing),
            Self::Probing => Some(Self::Classifying),
            Self::Classifying => Some(Self::Packing),
            Self::Packing => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Probing => "probing",
            Self::Classifying => "classifying",
            Self::Packing => "packing",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

/// Tracks and logs the run's progress through [`RunStage`].
///
/// `advance` only ever moves to the unique successor stage; `fail` jumps
/// to the terminal `Failed` stage from anywhere. Terminal stages cannot
/// be left.
#[derive(Debug)]
pub struct StageTracker {
    stage: RunStage,
}

impl StageTracker {
    pub fn new() -> Self {
        Self { stage: RunStage::Idle }
    }

    pub fn current(&self) -> RunStage {
        self.stage
    }

    pub fn advance(&mut self) -> RunStage {
        debug_assert!(!self.stage.is_terminal(), "terminal stage cannot advance");
        if let Some(next) = self.stage.successor() {
            tracing::info!(from = self.stage.name(), to = next.name(), "stage transition");
            self.stage = next;
        }
        self.stage
    }

    pub fn fail(&mut self) {
        if !self.stage.is_terminal() {
            tracing::warn!(from = self.stage.name(), "run failed");
            self.stage = RunStage::Failed;
        }
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

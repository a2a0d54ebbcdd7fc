use std::fmt;

use chroma_tier::Stage;

/// Where an image is in the pipeline.
///
/// The PNG path visits every state in order. The JPEG path goes from
/// `Loaded` to `Encoded`, through `Filtered` when the denoise pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Loaded,
    ColorConverted,
    Filtered,
    Quantized,
    Reconstructed,
    Encoded,
    Failed,
}

impl PipelineState {
    /// True for `Encoded` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Encoded | PipelineState::Failed)
    }

    /// Whether `next` is a legal successor of this state.
    pub fn can_advance_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (Encoded | Failed, _) => false,
            (_, Failed) => true,
            (Loaded, ColorConverted | Filtered | Encoded) => true,
            (ColorConverted, Filtered) => true,
            (Filtered, Quantized | Encoded) => true,
            (Quantized, Reconstructed) => true,
            (Reconstructed, Encoded) => true,
            _ => false,
        }
    }
}

impl From<Stage> for PipelineState {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::ColorConverted => PipelineState::ColorConverted,
            Stage::Filtered => PipelineState::Filtered,
            Stage::Quantized => PipelineState::Quantized,
            Stage::Reconstructed => PipelineState::Reconstructed,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Loaded => "loaded",
            PipelineState::ColorConverted => "color-converted",
            PipelineState::Filtered => "filtered",
            PipelineState::Quantized => "quantized",
            PipelineState::Reconstructed => "reconstructed",
            PipelineState::Encoded => "encoded",
            PipelineState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Current state plus every state visited so far.
#[derive(Debug, Clone)]
pub(crate) struct Progress {
    state: PipelineState,
    history: Vec<PipelineState>,
}

impl Progress {
    pub(crate) fn new() -> Self {
        Self {
            state: PipelineState::Loaded,
            history: vec![PipelineState::Loaded],
        }
    }

    pub(crate) fn advance(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal pipeline transition {} -> {}",
            self.state,
            next
        );
        tracing::debug!(from = %self.state, to = %next, "pipeline transition");
        self.state = next;
        self.history.push(next);
    }

    pub(crate) fn state(&self) -> PipelineState {
        self.state
    }

    pub(crate) fn into_history(self) -> Vec<PipelineState> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PipelineState::*;

    #[test]
    fn test_png_path_is_legal() {
        let path = [Loaded, ColorConverted, Filtered, Quantized, Reconstructed, Encoded];
        for pair in path.windows(2) {
            assert!(pair[0].can_advance_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_jpeg_paths_are_legal() {
        assert!(Loaded.can_advance_to(Encoded));
        assert!(Loaded.can_advance_to(Filtered));
        assert!(Filtered.can_advance_to(Encoded));
    }

    #[test]
    fn test_terminal_states_are_final() {
        for next in [Loaded, ColorConverted, Encoded, Failed] {
            assert!(!Encoded.can_advance_to(next));
            assert!(!Failed.can_advance_to(next));
        }
        assert!(Encoded.is_terminal() && Failed.is_terminal());
        assert!(!Reconstructed.is_terminal());
    }

    #[test]
    fn test_no_skipping_or_going_back() {
        assert!(!ColorConverted.can_advance_to(Quantized));
        assert!(!Quantized.can_advance_to(Encoded));
        assert!(!Reconstructed.can_advance_to(Filtered));
    }

    #[test]
    fn test_any_live_state_can_fail() {
        for state in [Loaded, ColorConverted, Filtered, Quantized, Reconstructed] {
            assert!(state.can_advance_to(Failed));
        }
    }

    #[test]
    fn test_progress_records_history() {
        let mut progress = Progress::new();
        progress.advance(Filtered);
        progress.advance(Encoded);
        assert_eq!(progress.state(), Encoded);
        assert_eq!(progress.into_history(), vec![Loaded, Filtered, Encoded]);
    }
}

use std::fmt;

/// Stages of one reconciliation run.
///
/// A run advances strictly forward through these states. `Aborted` is
/// terminal and entered only when the update inventory is unreachable;
/// every other anomaly is per-item and leaves the run on its normal path
/// to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    ResolvingModel,
    CollectingMembers,
    ResolvingDescriptors,
    FilteringSuperseded,
    QueryingInventoryA,
    CollapsingByArticle,
    QueryingInventoryB,
    FilteringRequired,
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Aborted)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::Idle => "idle",
            RunState::ResolvingModel => "resolving-model",
            RunState::CollectingMembers => "collecting-members",
            RunState::ResolvingDescriptors => "resolving-descriptors",
            RunState::FilteringSuperseded => "filtering-superseded",
            RunState::QueryingInventoryA => "querying-update-inventory",
            RunState::CollapsingByArticle => "collapsing-by-article",
            RunState::QueryingInventoryB => "querying-compliance-inventory",
            RunState::FilteringRequired => "filtering-required",
            RunState::Done => "done",
            RunState::Aborted => "aborted",
        };
        write!(f, "{}", label)
    }
}

use crate::locate::DeviceFix;
use crate::Error;

/// How a fetch-render pipeline ended. Failures have already been reported on
/// the status line by the time this is returned.
#[derive(Debug)]
pub enum PipelineOutcome {
    Rendered,
    /// A later request, a clear or a restart click overtook this one.
    /// Its result was dropped without touching the map.
    Superseded,
    Failed(Error),
}

impl PipelineOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, PipelineOutcome::Rendered)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            PipelineOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ClickOutcome {
    StartSelected,
    /// The previous selection was released and the click became the new start.
    Restarted,
    Route(PipelineOutcome),
}

#[derive(Debug)]
pub enum LocateOutcome {
    /// The fix became the start of the session.
    Applied(DeviceFix),
    /// The user had already started selecting; the fix was dropped.
    Ignored(DeviceFix),
}

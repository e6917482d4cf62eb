/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    /// Whether the window should ask for another redraw after this outcome.
    ///
    /// Redraws are invalidation-driven, so a skipped or reconfigured frame would
    /// otherwise leave a stale image on screen until the next input event.
    #[inline]
    pub fn wants_retry(self) -> bool {
        !matches!(self, SurfaceErrorAction::Fatal)
    }
}

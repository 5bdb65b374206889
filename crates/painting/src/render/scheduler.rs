/// Coalesces render requests to at most one frame per refresh tick.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    pending: bool,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a frame on the next tick. Repeated requests collapse.
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called once per display refresh. Returns whether a frame should run
    /// now, and clears the pending flag if so.
    pub fn tick(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.frames += 1;
        true
    }

    /// Frames granted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

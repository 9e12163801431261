//! Mount/unmount bookkeeping for hosts whose mount completes asynchronously.
//!
//! The host asks the gate before doing anything: `request_mount` says whether
//! to start building a viewport, `finish_mount` says whether the finished one
//! should be installed or thrown away, and `request_unmount`/`lost` say when
//! an installed one must be torn down. The last request wins, so
//! mount → unmount → mount during a pending build still ends mounted.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountPhase {
    Idle,
    Mounting(u64),
    Mounted(u64),
}

/// What to do with a viewport whose asynchronous build just finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// Keep it; it is now the mounted viewport.
    Install,
    /// Dispose it; an unmount arrived while it was being built.
    Discard,
    /// The build failed; the effect stays absent.
    Failed,
}

#[derive(Debug)]
pub struct MountGate {
    phase: MountPhase,
    wanted: bool,
    generation: u64,
}

impl Default for MountGate {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGate {
    pub const fn new() -> Self {
        Self {
            phase: MountPhase::Idle,
            wanted: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    /// Whether the last request was a mount.
    pub fn wanted(&self) -> bool {
        self.wanted
    }

    /// Returns the generation to build when a new build should start. A
    /// build already in flight or an installed viewport absorbs the request.
    pub fn request_mount(&mut self) -> Option<u64> {
        self.wanted = true;
        match self.phase {
            MountPhase::Idle => {
                self.generation += 1;
                self.phase = MountPhase::Mounting(self.generation);
                Some(self.generation)
            }
            MountPhase::Mounting(_) | MountPhase::Mounted(_) => None,
        }
    }

    /// Returns true when an installed viewport must be disposed now. A
    /// pending build is left running and discarded by `finish_mount`.
    pub fn request_unmount(&mut self) -> bool {
        self.wanted = false;
        match self.phase {
            MountPhase::Mounted(_) => {
                self.phase = MountPhase::Idle;
                true
            }
            MountPhase::Mounting(_) | MountPhase::Idle => false,
        }
    }

    pub fn finish_mount(&mut self, generation: u64, built: bool) -> MountOutcome {
        if self.phase != MountPhase::Mounting(generation) {
            return MountOutcome::Discard;
        }
        if !built {
            self.phase = MountPhase::Idle;
            self.wanted = false;
            return MountOutcome::Failed;
        }
        if self.wanted {
            self.phase = MountPhase::Mounted(generation);
            MountOutcome::Install
        } else {
            self.phase = MountPhase::Idle;
            MountOutcome::Discard
        }
    }

    /// The mounted viewport of `generation` died on its own (fatal frame or
    /// failed wiring). Returns true if it was the current one and the host
    /// should clear it.
    pub fn lost(&mut self, generation: u64) -> bool {
        if self.phase == MountPhase::Mounted(generation) {
            self.phase = MountPhase::Idle;
            self.wanted = false;
            true
        } else {
            false
        }
    }
}

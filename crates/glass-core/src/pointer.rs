//! Pointer tracking.
//!
//! Input events write the latest normalized pointer position into a
//! [`PointerCell`]; the frame callback reads it once per frame. Both halves
//! share the cell through an `Arc`, so neither side needs a global.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Last observed pointer position, each component in `[-1, 1]`.
///
/// `x` runs left to right, `y` runs bottom to top (flipped from screen space).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: PointerState = PointerState { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    #[inline]
    fn pack(self) -> u64 {
        ((self.x.to_bits() as u64) << 32) | self.y.to_bits() as u64
    }

    #[inline]
    fn unpack(bits: u64) -> Self {
        Self {
            x: f32::from_bits((bits >> 32) as u32),
            y: f32::from_bits(bits as u32),
        }
    }
}

/// Map raw viewport coordinates (origin top-left, in CSS or physical pixels)
/// to normalized pointer space.
///
/// Returns `None` for a degenerate viewport so the caller can drop the event.
#[inline]
pub fn normalize_pointer(raw_x: f32, raw_y: f32, width: f32, height: f32) -> Option<PointerState> {
    if !(width > 0.0 && height > 0.0) || !raw_x.is_finite() || !raw_y.is_finite() {
        return None;
    }
    Some(PointerState::new(
        (raw_x / width) * 2.0 - 1.0,
        -(raw_y / height) * 2.0 + 1.0,
    ))
}

/// Single-writer / single-reader cell holding the current [`PointerState`].
///
/// Both components live in one 64-bit word so a read never observes half of
/// an update. Once closed, writes are ignored.
#[derive(Debug)]
pub struct PointerCell {
    bits: AtomicU64,
    closed: AtomicBool,
}

impl Default for PointerCell {
    fn default() -> Self {
        Self {
            bits: AtomicU64::new(PointerState::CENTER.pack()),
            closed: AtomicBool::new(false),
        }
    }
}

impl PointerCell {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Overwrite the stored position. Returns `false` if the cell is closed.
    pub fn store(&self, state: PointerState) -> bool {
        if self.closed.load(Ordering::Acquire) {
            return false;
        }
        self.bits.store(state.pack(), Ordering::Release);
        true
    }

    pub fn load(&self) -> PointerState {
        PointerState::unpack(self.bits.load(Ordering::Acquire))
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Write side of the pointer cell, owned by whatever receives input events.
#[derive(Clone, Debug)]
pub struct InputTracker {
    cell: Arc<PointerCell>,
}

impl InputTracker {
    pub fn new(cell: Arc<PointerCell>) -> Self {
        Self { cell }
    }

    /// Handle one pointer-move event. Returns whether the state changed.
    pub fn on_pointer_move(&self, raw_x: f32, raw_y: f32, width: f32, height: f32) -> bool {
        match normalize_pointer(raw_x, raw_y, width, height) {
            Some(p) => self.cell.store(p),
            None => false,
        }
    }

    pub fn cell(&self) -> &Arc<PointerCell> {
        &self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square_with_flipped_y() {
        let tl = normalize_pointer(0.0, 0.0, 800.0, 600.0).unwrap();
        assert_eq!(tl, PointerState { x: -1.0, y: 1.0 });
        let br = normalize_pointer(800.0, 600.0, 800.0, 600.0).unwrap();
        assert_eq!(br, PointerState { x: 1.0, y: -1.0 });
        let mid = normalize_pointer(400.0, 300.0, 800.0, 600.0).unwrap();
        assert_eq!(mid, PointerState::CENTER);
    }

    #[test]
    fn out_of_viewport_is_clamped() {
        let p = normalize_pointer(-50.0, 900.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState { x: -1.0, y: -1.0 });
    }

    #[test]
    fn zero_viewport_is_ignored() {
        assert!(normalize_pointer(10.0, 10.0, 0.0, 600.0).is_none());
        assert!(normalize_pointer(10.0, 10.0, 800.0, 0.0).is_none());
        assert!(normalize_pointer(f32::NAN, 10.0, 800.0, 600.0).is_none());
    }

    #[test]
    fn cell_starts_centered_and_overwrites() {
        let cell = PointerCell::new();
        assert_eq!(cell.load(), PointerState::CENTER);
        assert!(cell.store(PointerState::new(0.25, -0.75)));
        assert!(cell.store(PointerState::new(-0.5, 0.5)));
        assert_eq!(cell.load(), PointerState { x: -0.5, y: 0.5 });
    }

    #[test]
    fn closed_cell_ignores_writes() {
        let cell = PointerCell::new();
        let tracker = InputTracker::new(cell.clone());
        assert!(tracker.on_pointer_move(0.0, 0.0, 100.0, 100.0));
        cell.close();
        assert!(!tracker.on_pointer_move(100.0, 100.0, 100.0, 100.0));
        assert_eq!(cell.load(), PointerState { x: -1.0, y: 1.0 });
    }
}

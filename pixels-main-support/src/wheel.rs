use winit::event::MouseScrollDelta;

/// Touchpad scroll distance, in physical pixels, that counts as one notch.
const PIXELS_PER_NOTCH: f64 = 50.0;

/// Turns wheel deltas into whole notches. Fractions carry over to the next
/// delta, so a stream of small touchpad deltas adds up to the same number of
/// notches as one large delta.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelNotches {
    pending: f64,
}

impl WheelNotches {
    /// Whole notches completed by `delta`; positive scrolls up. Horizontal
    /// scrolling is ignored.
    pub fn add(&mut self, delta: MouseScrollDelta) -> i32 {
        self.pending += match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_NOTCH,
        };
        let notches = self.pending.trunc();
        self.pending -= notches;
        notches as i32
    }
}

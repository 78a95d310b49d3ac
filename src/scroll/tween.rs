/// Fraction of the remaining distance covered per frame.
pub const LERP: f64 = 0.1;
/// Frame cadence of the smoothing loop.
pub const FRAME_MS: u32 = 16;
/// Closer than this the position snaps onto the target.
const SETTLE_PX: f64 = 0.5;

/// Inertial scroll position that eases toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Inertia {
    current: f64,
    target: f64,
    max: f64,
    lerp: f64,
}

impl Inertia {
    pub fn new(position: f64, max: f64) -> Self {
        let max = max.max(0.0);
        let position = position.clamp(0.0, max);
        Self { current: position, target: position, max, lerp: LERP }
    }

    /// Adopts a position reached without us (touch, keyboard, anchors).
    pub fn sync(&mut self, position: f64, max: f64) {
        self.max = max.max(0.0);
        self.current = position.clamp(0.0, self.max);
        self.target = self.current;
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
    }

    /// Wheel input: moves the target by `delta` pixels.
    pub fn push(&mut self, delta: f64) {
        self.target = (self.target + delta).clamp(0.0, self.max);
    }

    pub fn aim(&mut self, target: f64) {
        self.target = target.clamp(0.0, self.max);
    }

    pub fn jump(&mut self, target: f64) {
        self.aim(target);
        self.current = self.target;
    }

    /// Advances one frame and returns the new position.
    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.lerp;
        if (self.target - self.current).abs() < SETTLE_PX {
            self.current = self.target;
        }
        self.current
    }

    pub fn is_moving(&self) -> bool {
        self.current != self.target
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_toward_target_and_settles() {
        let mut inertia = Inertia::new(0.0, 5000.0);
        inertia.push(1000.0);
        let first = inertia.step();
        assert!((first - 100.0).abs() < 1e-9);

        let mut frames = 1;
        while inertia.is_moving() {
            inertia.step();
            frames += 1;
            assert!(frames < 200, "never settled");
        }
        assert_eq!(inertia.position(), 1000.0);
    }

    #[test]
    fn targets_are_clamped_to_the_page() {
        let mut inertia = Inertia::new(0.0, 800.0);
        inertia.push(-300.0);
        assert_eq!(inertia.target(), 0.0);
        inertia.push(5000.0);
        assert_eq!(inertia.target(), 800.0);
        inertia.set_max(500.0);
        assert_eq!(inertia.target(), 500.0);
    }

    #[test]
    fn sync_stops_motion() {
        let mut inertia = Inertia::new(0.0, 5000.0);
        inertia.aim(2000.0);
        inertia.step();
        inertia.sync(640.0, 5000.0);
        assert!(!inertia.is_moving());
        assert_eq!(inertia.position(), 640.0);
    }

    #[test]
    fn jump_skips_easing() {
        let mut inertia = Inertia::new(300.0, 5000.0);
        inertia.jump(0.0);
        assert_eq!(inertia.position(), 0.0);
        assert!(!inertia.is_moving());
    }
}

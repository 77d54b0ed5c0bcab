//! Geometry transitions.
//!
//! A [`Transition`] interpolates between two geometries over a duration in
//! milliseconds, sampled against an external frame clock. Retargeting a
//! running transition restarts it from wherever it currently is, so rapid
//! updates supersede each other instead of queueing.

/// Values that can be blended for animation.
pub trait Interpolate: Clone {
    /// `t = 0` gives `self`, `t = 1` gives `to`.
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// Symmetric cubic easing.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Whether a reconcile pass should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// First render: changes apply instantly.
    Init,
    /// Later renders: changes animate over the configured duration.
    Update,
}

impl RenderMode {
    pub fn duration(self, configured_ms: f64) -> f64 {
        match self {
            RenderMode::Init => 0.0,
            RenderMode::Update => configured_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition<G> {
    from: G,
    to: G,
    start: f64,
    duration: f64,
}

impl<G: Interpolate> Transition<G> {
    pub fn new(from: G, to: G, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// A transition that is already at rest on `value`.
    pub fn settled(value: G) -> Self {
        Self::new(value.clone(), value, 0.0, 0.0)
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> G {
        let p = self.progress(now);
        if p >= 1.0 {
            self.to.clone()
        } else if p <= 0.0 {
            self.from.clone()
        } else {
            self.from.interpolate(&self.to, ease_cubic_in_out(p))
        }
    }

    /// Head for `to`, starting from the value shown at `now`.
    pub fn retarget(&mut self, to: G, now: f64, duration: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.progress(now) < 1.0
    }

    pub fn target(&self) -> &G {
        &self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn zero_duration_is_instant() {
        let t = Transition::new(0.0, 10.0, 100.0, RenderMode::Init.duration(750.0));
        assert_eq!(t.value_at(100.0), 10.0);
        assert!(!t.is_running(100.0));
    }

    #[test]
    fn update_is_halfway_at_half_duration() {
        let t = Transition::new(0.0, 10.0, 0.0, RenderMode::Update.duration(750.0));
        assert_eq!(t.value_at(0.0), 0.0);
        assert!((t.value_at(375.0) - 5.0).abs() < 1e-9);
        assert!(t.is_running(375.0));
        assert_eq!(t.value_at(750.0), 10.0);
        assert!(!t.is_running(750.0));
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut t = Transition::new(0.0, 10.0, 0.0, 100.0);
        t.retarget(-10.0, 50.0, 100.0);
        assert!((t.value_at(50.0) - 5.0).abs() < 1e-9);
        assert_eq!(t.value_at(150.0), -10.0);
        assert_eq!(*t.target(), -10.0);
    }
}

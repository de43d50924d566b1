//! Retargetable tweens on an injected millisecond timeline.
//!
//! Starting a new transition on a tween samples where it currently is and
//! heads for the new target from there, so an interrupted animation redirects
//! smoothly and stale targets are never queued.

use eframe::egui::Color32;

use crate::config::{ANIMATION, Easing};

pub fn ease(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::CubicOut => {
            let inv = 1.0 - t;
            1.0 - inv * inv * inv
        }
    }
}

/// Values a tween can interpolate.
pub trait Lerp: Copy + PartialEq {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Color32 {
    fn lerp(self, to: Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        let [r0, g0, b0, a0] = self.to_srgba_unmultiplied();
        let [r1, g1, b1, a1] = to.to_srgba_unmultiplied();
        Color32::from_rgba_unmultiplied(
            channel(r0, r1),
            channel(g0, g1),
            channel(b0, b1),
            channel(a0, a1),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
}

impl<T: Lerp> Tween<T> {
    /// A tween already at rest on `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    pub fn new(from: T, to: T, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
        }
    }

    pub fn value_at(&self, now_ms: f64) -> T {
        if self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from.lerp(self.to, ease(ANIMATION.easing, t))
    }

    pub fn target(&self) -> T {
        self.to
    }

    /// Redirect toward `to`, starting from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, to: T, now_ms: f64, duration_ms: f64) {
        let current = self.value_at(now_ms);
        *self = Self::new(current, to, now_ms, duration_ms);
    }

    pub fn is_running(&self, now_ms: f64) -> bool {
        self.from != self.to && now_ms < self.start_ms + self.duration_ms
    }
}

/// Retargets an optional tween. A missing target makes the value undefined;
/// a defined target on an undefined value is placed directly.
pub fn retarget_optional<T: Lerp>(
    slot: &mut Option<Tween<T>>,
    target: Option<T>,
    now_ms: f64,
    duration_ms: f64,
) {
    match (slot.as_mut(), target) {
        (Some(tween), Some(value)) => tween.retarget(value, now_ms, duration_ms),
        (None, Some(value)) => *slot = Some(Tween::settled(value)),
        (_, None) => *slot = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_out_is_fast_then_slow() {
        assert_eq!(ease(Easing::CubicOut, 0.0), 0.0);
        assert_eq!(ease(Easing::CubicOut, 1.0), 1.0);
        assert!((ease(Easing::CubicOut, 0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease(Easing::CubicOut, 2.0), 1.0);
    }

    #[test]
    fn tween_samples_endpoints_and_middle() {
        let tween = Tween::new(0.0, 10.0, 100.0, 600.0);
        assert_eq!(tween.value_at(50.0), 0.0);
        assert_eq!(tween.value_at(400.0), 8.75);
        assert_eq!(tween.value_at(700.0), 10.0);
        assert!(tween.is_running(400.0));
        assert!(!tween.is_running(700.0));
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let mut tween = Tween::new(0.0, 10.0, 0.0, 600.0);
        let midway = tween.value_at(300.0);
        tween.retarget(-4.0, 300.0, 600.0);
        assert_eq!(tween.value_at(300.0), midway);
        assert_eq!(tween.target(), -4.0);
        assert_eq!(tween.value_at(900.0), -4.0);
    }

    #[test]
    fn optional_tween_tracks_undefined_values() {
        let mut slot = None;
        retarget_optional(&mut slot, Some(3.0), 0.0, 600.0);
        assert_eq!(slot.map(|t: Tween<f64>| t.value_at(0.0)), Some(3.0));
        retarget_optional(&mut slot, None, 10.0, 600.0);
        assert!(slot.is_none());
    }

    #[test]
    fn colors_blend_per_channel() {
        let mid = Color32::from_rgb(0, 0, 0).lerp(Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}

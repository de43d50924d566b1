//! Transition timing

/// Easing curves available to tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Fast start, slow settle: 1 - (1 - t)^3
    #[default]
    CubicOut,
}

pub struct AnimationConfig {
    /// Steady-state repositioning, enter/exit, and the fade-in half of label swaps (ms)
    pub long_ms: f64,
    /// Highlight changes and the fade-out half of label swaps (ms)
    pub fast_ms: f64,
    pub easing: Easing,
}

pub const ANIMATION: AnimationConfig = AnimationConfig {
    long_ms: 600.0,
    fast_ms: 200.0,
    easing: Easing::CubicOut,
};

//! Scene reconciler.
//!
//! Keeps one `Entity` per rendered ticker and drives it toward the current
//! visible subset: new tickers enter, surviving tickers update in place, and
//! missing tickers fade out before they are dropped. Entities are keyed by
//! ticker, so a record that survives a re-filter is never destroyed and
//! recreated.

use eframe::egui::Color32;
use std::collections::HashMap;

use crate::config::{ANIMATION, PLOT_CONFIG};
use crate::models::transition::{Tween, retarget_optional};

/// Where an entity should end up, as computed from the current scales.
/// `None` means the value is undefined for this record (missing field).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityTarget {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: Option<f64>,
    pub fill: Option<Color32>,
}

/// Outcome of one reconciliation pass, ids in visible order (exits in z-order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub entered: Vec<String>,
    pub updated: Vec<String>,
    pub exited: Vec<String>,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.updated.is_empty() && self.exited.is_empty()
    }
}

/// On-screen representation of one visible record.
#[derive(Debug, Clone)]
pub struct Entity {
    pub ticker: String,
    x: Option<Tween<f64>>,
    y: Option<Tween<f64>>,
    radius: Option<Tween<f64>>,
    fill: Option<Tween<Color32>>,
    opacity: Tween<f64>,
    stroke_width: Tween<f64>,
    label_opacity: Tween<f64>,
    /// When set, the entity is leaving and disappears at this time
    removal_at: Option<f64>,
}

impl Entity {
    /// Placed at its target directly; radius and opacity grow in from zero.
    fn enter(ticker: &str, target: &EntityTarget, now_ms: f64) -> Self {
        let long = ANIMATION.long_ms;
        Self {
            ticker: ticker.to_string(),
            x: target.x.map(Tween::settled),
            y: target.y.map(Tween::settled),
            radius: target.radius.map(|r| Tween::new(0.0, r, now_ms, long)),
            fill: target.fill.map(Tween::settled),
            opacity: Tween::new(0.0, PLOT_CONFIG.resting_opacity, now_ms, long),
            stroke_width: Tween::settled(0.0),
            label_opacity: Tween::settled(0.0),
            removal_at: None,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.removal_at.is_some()
    }

    fn is_running(&self, now_ms: f64) -> bool {
        let running = |tween: &Option<Tween<f64>>| tween.is_some_and(|t| t.is_running(now_ms));
        running(&self.x)
            || running(&self.y)
            || running(&self.radius)
            || self.fill.is_some_and(|t| t.is_running(now_ms))
            || self.opacity.is_running(now_ms)
            || self.stroke_width.is_running(now_ms)
            || self.label_opacity.is_running(now_ms)
    }

    fn sample(&self, now_ms: f64) -> BubbleFrame {
        let center = match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x.value_at(now_ms), y.value_at(now_ms))),
            _ => None,
        };
        BubbleFrame {
            ticker: self.ticker.clone(),
            center,
            radius: self.radius.map(|r| r.value_at(now_ms)),
            fill: self.fill.map(|f| f.value_at(now_ms)),
            opacity: self.opacity.value_at(now_ms),
            stroke: PLOT_CONFIG.highlight_stroke,
            stroke_width: self.stroke_width.value_at(now_ms),
            label_opacity: self.label_opacity.value_at(now_ms),
            exiting: self.is_exiting(),
        }
    }
}

/// Snapshot of one bubble for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleFrame {
    pub ticker: String,
    /// Pixel position inside the plot rect; `None` when a coordinate is undefined
    pub center: Option<(f64, f64)>,
    pub radius: Option<f64>,
    pub fill: Option<Color32>,
    pub opacity: f64,
    pub stroke: Color32,
    pub stroke_width: f64,
    pub label_opacity: f64,
    pub exiting: bool,
}

impl BubbleFrame {
    /// Drawable only when both position and size are defined.
    pub fn is_drawable(&self) -> bool {
        self.center.is_some() && self.radius.is_some_and(|r| r > 0.0)
    }

    pub fn contains(&self, point: (f64, f64)) -> bool {
        match (self.center, self.radius) {
            (Some((cx, cy)), Some(r)) if r > 0.0 => {
                let (dx, dy) = (point.0 - cx, point.1 - cy);
                dx * dx + dy * dy <= r * r
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    entities: HashMap<String, Entity>,
    /// Paint order, bottom to top
    order: Vec<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diffs `visible` against what is on screen and starts the transitions.
    ///
    /// A ticker that is still fading out counts as present: it is revived as an
    /// update. The persisted ticker keeps the enlarged radius on update.
    pub fn reconcile(
        &mut self,
        visible: &[(String, EntityTarget)],
        persisted: Option<&str>,
        now_ms: f64,
    ) -> Reconciliation {
        let long = ANIMATION.long_ms;
        let mut result = Reconciliation::default();

        let next: HashMap<&str, ()> = visible.iter().map(|(t, _)| (t.as_str(), ())).collect();

        for (ticker, target) in visible {
            match self.entities.get_mut(ticker) {
                Some(entity) => {
                    retarget_optional(&mut entity.x, target.x, now_ms, long);
                    retarget_optional(&mut entity.y, target.y, now_ms, long);
                    let radius = if persisted == Some(ticker.as_str()) {
                        Some(PLOT_CONFIG.highlight_radius)
                    } else {
                        target.radius
                    };
                    retarget_optional(&mut entity.radius, radius, now_ms, long);
                    retarget_optional(&mut entity.fill, target.fill, now_ms, long);
                    if entity.removal_at.take().is_some() {
                        entity
                            .opacity
                            .retarget(PLOT_CONFIG.resting_opacity, now_ms, long);
                    }
                    result.updated.push(ticker.clone());
                }
                None => {
                    self.entities
                        .insert(ticker.clone(), Entity::enter(ticker, target, now_ms));
                    self.order.push(ticker.clone());
                    result.entered.push(ticker.clone());
                }
            }
        }

        for ticker in &self.order {
            if next.contains_key(ticker.as_str()) {
                continue;
            }
            if let Some(entity) = self.entities.get_mut(ticker) {
                if entity.removal_at.is_none() {
                    entity.opacity.retarget(0.0, now_ms, long);
                    entity.removal_at = Some(now_ms + long);
                    result.exited.push(ticker.clone());
                }
            }
        }

        result
    }

    /// Drops entities whose exit has finished. Returns their tickers.
    pub fn prune(&mut self, now_ms: f64) -> Vec<String> {
        let finished: Vec<String> = self
            .entities
            .values()
            .filter(|e| e.removal_at.is_some_and(|at| now_ms >= at))
            .map(|e| e.ticker.clone())
            .collect();

        if !finished.is_empty() {
            for ticker in &finished {
                self.entities.remove(ticker);
            }
            self.order.retain(|t| self.entities.contains_key(t));
        }
        finished
    }

    /// Enlarge, accent fill, white stroke, raise to the top, fade the ticker label in.
    pub fn highlight(&mut self, ticker: &str, now_ms: f64) {
        let (fast, long) = (ANIMATION.fast_ms, ANIMATION.long_ms);
        let Some(entity) = self.entities.get_mut(ticker) else {
            return;
        };
        entity.label_opacity = Tween::new(0.0, 1.0, now_ms, long);
        retarget_optional(&mut entity.radius, Some(PLOT_CONFIG.highlight_radius), now_ms, fast);
        retarget_optional(&mut entity.fill, Some(PLOT_CONFIG.highlight_fill), now_ms, fast);
        entity
            .opacity
            .retarget(PLOT_CONFIG.highlight_opacity, now_ms, fast);
        entity
            .stroke_width
            .retarget(PLOT_CONFIG.highlight_stroke_width, now_ms, fast);
        self.raise(ticker);
    }

    /// Back to the scale-derived look, label faded out, sunk to the bottom.
    /// With no target (record no longer in the data) radius and fill stay as they are.
    pub fn remove_highlight(&mut self, ticker: &str, target: Option<&EntityTarget>, now_ms: f64) {
        let fast = ANIMATION.fast_ms;
        let Some(entity) = self.entities.get_mut(ticker) else {
            return;
        };
        entity.label_opacity.retarget(0.0, now_ms, fast);
        if let Some(target) = target {
            retarget_optional(&mut entity.radius, target.radius, now_ms, fast);
            retarget_optional(&mut entity.fill, target.fill, now_ms, fast);
        }
        if !entity.is_exiting() {
            entity
                .opacity
                .retarget(PLOT_CONFIG.resting_opacity, now_ms, fast);
        }
        entity.stroke_width.retarget(0.0, now_ms, fast);
        self.lower(ticker);
    }

    fn raise(&mut self, ticker: &str) {
        if let Some(pos) = self.order.iter().position(|t| t == ticker) {
            let id = self.order.remove(pos);
            self.order.push(id);
        }
    }

    fn lower(&mut self, ticker: &str) {
        if let Some(pos) = self.order.iter().position(|t| t == ticker) {
            let id = self.order.remove(pos);
            self.order.insert(0, id);
        }
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.entities
            .values()
            .any(|e| e.is_running(now_ms) || e.removal_at.is_some())
    }

    /// Bubbles bottom to top.
    pub fn frame(&self, now_ms: f64) -> Vec<BubbleFrame> {
        self.order
            .iter()
            .filter_map(|t| self.entities.get(t))
            .map(|e| e.sample(now_ms))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(x: f64, y: f64) -> EntityTarget {
        EntityTarget {
            x: Some(x),
            y: Some(y),
            radius: Some(PLOT_CONFIG.constant_radius),
            fill: Some(PLOT_CONFIG.default_fill),
        }
    }

    fn visible(ids: &[&str]) -> Vec<(String, EntityTarget)> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), target(i as f64 * 10.0, 50.0)))
            .collect()
    }

    fn radius_of(scene: &Scene, ticker: &str, now: f64) -> Option<f64> {
        scene
            .frame(now)
            .into_iter()
            .find(|b| b.ticker == ticker)
            .and_then(|b| b.radius)
    }

    #[test]
    fn surviving_ticker_is_an_update_not_enter_and_exit() {
        let mut scene = Scene::new();
        scene.reconcile(&[("AAA".to_string(), target(30.0, 30.0))], None, 0.0);
        let second = scene.reconcile(&[("AAA".to_string(), target(50.0, 30.0))], None, 1000.0);
        assert_eq!(second.updated, ["AAA"]);
        assert!(second.entered.is_empty());
        assert!(second.exited.is_empty());
    }

    #[test]
    fn enter_update_exit_sets() {
        let mut scene = Scene::new();
        scene.reconcile(&visible(&["A", "B"]), None, 0.0);
        let result = scene.reconcile(&visible(&["B", "C"]), None, 1000.0);
        assert_eq!(result.entered, ["C"]);
        assert_eq!(result.updated, ["B"]);
        assert_eq!(result.exited, ["A"]);
    }

    #[test]
    fn entering_bubble_sits_at_target_and_grows() {
        let mut scene = Scene::new();
        scene.reconcile(&[("A".to_string(), target(12.0, 34.0))], None, 0.0);
        let frame = &scene.frame(0.0)[0];
        assert_eq!(frame.center, Some((12.0, 34.0)));
        assert_eq!(frame.radius, Some(0.0));
        assert_eq!(frame.opacity, 0.0);

        let settled = &scene.frame(ANIMATION.long_ms)[0];
        assert_eq!(settled.radius, Some(PLOT_CONFIG.constant_radius));
        assert_eq!(settled.opacity, PLOT_CONFIG.resting_opacity);
    }

    #[test]
    fn update_glides_to_new_position() {
        let mut scene = Scene::new();
        scene.reconcile(&[("A".to_string(), target(0.0, 0.0))], None, 0.0);
        scene.reconcile(&[("A".to_string(), target(100.0, 0.0))], None, 1000.0);
        let (x_mid, _) = scene.frame(1300.0)[0].center.unwrap();
        assert!(x_mid > 50.0 && x_mid < 100.0);
        assert_eq!(scene.frame(1600.0)[0].center, Some((100.0, 0.0)));
    }

    #[test]
    fn new_update_mid_flight_redirects_from_current_position() {
        let mut scene = Scene::new();
        scene.reconcile(&[("A".to_string(), target(0.0, 0.0))], None, 0.0);
        scene.reconcile(&[("A".to_string(), target(100.0, 0.0))], None, 1000.0);
        let (x_at_switch, _) = scene.frame(1100.0)[0].center.unwrap();
        scene.reconcile(&[("A".to_string(), target(-50.0, 0.0))], None, 1100.0);
        assert_eq!(scene.frame(1100.0)[0].center, Some((x_at_switch, 0.0)));
        assert_eq!(scene.frame(1700.0)[0].center, Some((-50.0, 0.0)));
    }

    #[test]
    fn exit_fades_then_removes() {
        let mut scene = Scene::new();
        scene.reconcile(&visible(&["A"]), None, 0.0);
        scene.reconcile(&[], None, 1000.0);
        assert_eq!(scene.frame(1000.0).len(), 1);
        assert!(scene.frame(1000.0)[0].exiting);
        assert!(scene.prune(1599.0).is_empty());
        assert_eq!(scene.prune(1600.0), ["A"]);
        assert!(scene.frame(1600.0).is_empty());
    }

    #[test]
    fn returning_during_exit_revives_the_same_entity() {
        let mut scene = Scene::new();
        scene.reconcile(&visible(&["A"]), None, 0.0);
        scene.reconcile(&[], None, 1000.0);
        let result = scene.reconcile(&visible(&["A"]), None, 1200.0);
        assert_eq!(result.updated, ["A"]);
        assert!(result.entered.is_empty());
        assert!(scene.prune(5000.0).is_empty());
        assert_eq!(scene.frame(5000.0)[0].opacity, PLOT_CONFIG.resting_opacity);
    }

    #[test]
    fn persisted_update_forces_enlarged_radius() {
        let mut scene = Scene::new();
        scene.reconcile(&visible(&["T"]), None, 0.0);
        scene.reconcile(&visible(&["T"]), Some("T"), 1000.0);
        assert_eq!(radius_of(&scene, "T", 2000.0), Some(PLOT_CONFIG.highlight_radius));
        scene.reconcile(&visible(&["T"]), None, 3000.0);
        assert_eq!(radius_of(&scene, "T", 4000.0), Some(PLOT_CONFIG.constant_radius));
    }

    #[test]
    fn undefined_coordinates_leave_the_bubble_unplaced() {
        let mut scene = Scene::new();
        let missing = EntityTarget {
            x: None,
            ..target(1.0, 2.0)
        };
        scene.reconcile(&[("M".to_string(), missing), ("OK".to_string(), target(1.0, 2.0))], None, 0.0);
        let frame = scene.frame(1000.0);
        assert!(!frame[0].is_drawable());
        assert!(frame[1].is_drawable());
    }

    #[test]
    fn highlight_raises_and_remove_highlight_lowers() {
        let mut scene = Scene::new();
        scene.reconcile(&visible(&["A", "B", "C"]), None, 0.0);
        scene.highlight("A", 1000.0);
        let order: Vec<String> = scene.frame(1000.0).into_iter().map(|b| b.ticker).collect();
        assert_eq!(order, ["B", "C", "A"]);

        let settled = scene.frame(2000.0);
        let a = settled.last().unwrap();
        assert_eq!(a.radius, Some(PLOT_CONFIG.highlight_radius));
        assert_eq!(a.stroke_width, PLOT_CONFIG.highlight_stroke_width);
        assert_eq!(a.label_opacity, 1.0);

        scene.remove_highlight("A", Some(&target(0.0, 50.0)), 2000.0);
        let restored = scene.frame(3000.0);
        assert_eq!(restored[0].ticker, "A");
        assert_eq!(restored[0].radius, Some(PLOT_CONFIG.constant_radius));
        assert_eq!(restored[0].label_opacity, 0.0);
        assert_eq!(restored[0].opacity, PLOT_CONFIG.resting_opacity);
    }

    #[test]
    fn hit_testing_uses_sampled_radius() {
        let mut scene = Scene::new();
        scene.reconcile(&[("A".to_string(), target(100.0, 100.0))], None, 0.0);
        let bubble = &scene.frame(1000.0)[0];
        assert!(bubble.contains((103.0, 100.0)));
        assert!(!bubble.contains((106.0, 100.0)));
    }
}

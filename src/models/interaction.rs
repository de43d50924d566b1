//! Interaction dispatcher.
//!
//! One dispatch table keyed by ticker holds every entity's pointer state; the
//! persisted ticker lives beside it as the single source of truth. Handlers
//! return the visual and external effects to run instead of touching the scene.

use log::debug;
use std::collections::HashMap;

use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Normal,
    Hovered,
    Persisted,
}

/// What the chart has to do in response to a pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Highlight(String),
    RemoveHighlight(String),
    RequestDetail(String),
    ClearDetail,
}

#[derive(Debug, Default)]
pub struct Interaction {
    states: HashMap<String, PointerState>,
    persisted: Option<String>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once when an entity enters the scene.
    pub fn register(&mut self, ticker: &str) {
        let state = if self.persisted.as_deref() == Some(ticker) {
            PointerState::Persisted
        } else {
            PointerState::Normal
        };
        self.states.entry(ticker.to_string()).or_insert(state);
    }

    /// Called when an entity has left the scene for good. The persisted marker
    /// is kept so the selection survives a filter round trip.
    pub fn unregister(&mut self, ticker: &str) {
        self.states.remove(ticker);
    }

    pub fn persisted(&self) -> Option<&str> {
        self.persisted.as_deref()
    }

    pub fn entity_state(&self, ticker: &str) -> Option<PointerState> {
        self.states.get(ticker).copied()
    }

    pub fn pointer_enter(&mut self, ticker: &str) -> Vec<Effect> {
        if self.persisted.is_some() {
            if DF.log_interaction {
                debug!("Hover on {} ignored while {:?} is persisted", ticker, self.persisted);
            }
            return Vec::new();
        }
        match self.states.get_mut(ticker) {
            Some(state) if *state == PointerState::Normal => {
                *state = PointerState::Hovered;
                vec![Effect::Highlight(ticker.to_string())]
            }
            _ => Vec::new(),
        }
    }

    pub fn pointer_leave(&mut self, ticker: &str) -> Vec<Effect> {
        match self.states.get_mut(ticker) {
            Some(state) if *state == PointerState::Hovered => {
                *state = PointerState::Normal;
                vec![Effect::RemoveHighlight(ticker.to_string())]
            }
            _ => Vec::new(),
        }
    }

    pub fn click(&mut self, ticker: &str) -> Vec<Effect> {
        let Some(current) = self.states.get(ticker).copied() else {
            return Vec::new();
        };
        if current == PointerState::Persisted {
            debug!("{} is already persisted", ticker);
            return Vec::new();
        }

        let mut effects = Vec::new();
        if let Some(previous) = self.persisted.take() {
            if let Some(state) = self.states.get_mut(&previous) {
                *state = PointerState::Normal;
            }
            effects.push(Effect::RemoveHighlight(previous));
        }
        if current == PointerState::Normal {
            effects.push(Effect::Highlight(ticker.to_string()));
        }
        self.states
            .insert(ticker.to_string(), PointerState::Persisted);
        self.persisted = Some(ticker.to_string());
        effects.push(Effect::RequestDetail(ticker.to_string()));

        if DF.log_interaction {
            debug!("Persisted {}: {:?}", ticker, effects);
        }
        effects
    }

    /// Background click: nothing stays persisted and the detail panel is emptied.
    pub fn clear_persisted(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(previous) = self.persisted.take() {
            if let Some(state) = self.states.get_mut(&previous) {
                *state = PointerState::Normal;
                effects.push(Effect::RemoveHighlight(previous));
            }
        }
        effects.push(Effect::ClearDetail);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(tickers: &[&str]) -> Interaction {
        let mut interaction = Interaction::new();
        for t in tickers {
            interaction.register(t);
        }
        interaction
    }

    fn highlight(t: &str) -> Effect {
        Effect::Highlight(t.to_string())
    }

    fn remove(t: &str) -> Effect {
        Effect::RemoveHighlight(t.to_string())
    }

    #[test]
    fn hover_and_leave_round_trip() {
        let mut interaction = with(&["A"]);
        assert_eq!(interaction.pointer_enter("A"), [highlight("A")]);
        assert_eq!(interaction.entity_state("A"), Some(PointerState::Hovered));
        assert_eq!(interaction.pointer_leave("A"), [remove("A")]);
        assert_eq!(interaction.entity_state("A"), Some(PointerState::Normal));
    }

    #[test]
    fn click_on_hovered_persists_without_second_highlight() {
        let mut interaction = with(&["A"]);
        interaction.pointer_enter("A");
        assert_eq!(
            interaction.click("A"),
            [Effect::RequestDetail("A".to_string())]
        );
        assert!(interaction.pointer_leave("A").is_empty());
        assert_eq!(interaction.persisted(), Some("A"));
    }

    #[test]
    fn persisting_a_second_entity_clears_the_first() {
        let mut interaction = with(&["A", "B"]);
        interaction.click("A");
        let effects = interaction.click("B");
        assert_eq!(
            effects,
            [remove("A"), highlight("B"), Effect::RequestDetail("B".to_string())]
        );
        assert_eq!(interaction.entity_state("A"), Some(PointerState::Normal));
        assert_eq!(interaction.persisted(), Some("B"));
        let persisted = ["A", "B"]
            .iter()
            .filter(|t| interaction.entity_state(t) == Some(PointerState::Persisted))
            .count();
        assert_eq!(persisted, 1);
    }

    #[test]
    fn hover_is_ignored_while_something_is_persisted() {
        let mut interaction = with(&["A", "B"]);
        interaction.click("A");
        assert!(interaction.pointer_enter("B").is_empty());
        assert!(interaction.pointer_leave("B").is_empty());
        assert!(interaction.pointer_enter("A").is_empty());
    }

    #[test]
    fn re_click_on_persisted_is_a_no_op() {
        let mut interaction = with(&["A"]);
        interaction.click("A");
        assert!(interaction.click("A").is_empty());
        assert_eq!(interaction.persisted(), Some("A"));
    }

    #[test]
    fn background_click_clears_everything() {
        let mut interaction = with(&["A"]);
        interaction.click("A");
        assert_eq!(interaction.clear_persisted(), [remove("A"), Effect::ClearDetail]);
        assert_eq!(interaction.persisted(), None);
        assert_eq!(interaction.pointer_enter("A"), [highlight("A")]);
        assert_eq!(interaction.clear_persisted(), [Effect::ClearDetail]);
    }

    #[test]
    fn unknown_tickers_are_ignored() {
        let mut interaction = with(&["A"]);
        assert!(interaction.pointer_enter("Z").is_empty());
        assert!(interaction.click("Z").is_empty());
    }

    #[test]
    fn persisted_marker_survives_exit_and_reentry() {
        let mut interaction = with(&["A"]);
        interaction.click("A");
        interaction.unregister("A");
        assert_eq!(interaction.persisted(), Some("A"));
        interaction.register("A");
        assert_eq!(interaction.entity_state("A"), Some(PointerState::Persisted));
    }
}

//! PreviewState - the ViewState Actor and the relays that feed it

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select};
use shared::{Control, HexColor, PreviewConfig, PreviewStyles, ShadowMatrix, ViewEvent, ViewState};
use zoon::*;

/// Owns the single `ViewState` of the preview.
///
/// Every control has its own relay; the actor applies one event at a time,
/// each replacing exactly one field.
#[derive(Clone, Debug)]
pub struct PreviewState {
    pub view_state: Actor<ViewState>,
    pub shadow_matrix: ShadowMatrix,

    // === EVENT-SOURCE RELAYS ===
    pub background_color_changed_relay: Relay<HexColor>,
    pub card_color_changed_relay: Relay<HexColor>,
    pub shadow_color_changed_relay: Relay<HexColor>,
    pub shadow_spread_changed_relay: Relay<u8>,
    pub shadow_weight_changed_relay: Relay<u8>,
}

impl PreviewState {
    pub fn new(config: &PreviewConfig) -> Self {
        let (background_color_changed_relay, mut background_color_changed_stream) = relay();
        let (card_color_changed_relay, mut card_color_changed_stream) = relay();
        let (shadow_color_changed_relay, mut shadow_color_changed_stream) = relay();
        let (shadow_spread_changed_relay, mut shadow_spread_changed_stream) = relay();
        let (shadow_weight_changed_relay, mut shadow_weight_changed_stream) = relay();

        let view_state = Actor::new(config.defaults.clone(), async move |state| {
            loop {
                let event = select! {
                    color = background_color_changed_stream.next() => {
                        color.map(ViewEvent::BackgroundColorChanged)
                    }
                    color = card_color_changed_stream.next() => {
                        color.map(ViewEvent::CardColorChanged)
                    }
                    color = shadow_color_changed_stream.next() => {
                        color.map(ViewEvent::ShadowColorChanged)
                    }
                    spread = shadow_spread_changed_stream.next() => {
                        spread.map(ViewEvent::ShadowSpreadChanged)
                    }
                    weight = shadow_weight_changed_stream.next() => {
                        weight.map(ViewEvent::ShadowWeightChanged)
                    }
                    complete => break,
                };
                if let Some(event) = event {
                    state.lock_mut().apply(event);
                }
            }
        });

        Self {
            view_state,
            shadow_matrix: config.shadow.matrix,
            background_color_changed_relay,
            card_color_changed_relay,
            shadow_color_changed_relay,
            shadow_spread_changed_relay,
            shadow_weight_changed_relay,
        }
    }

    /// Entry point for raw `input.value` strings coming from a control.
    ///
    /// Widgets only emit well-formed values, anything else is logged and
    /// leaves the state untouched.
    pub fn input_received(&self, control: Control, raw: &str) {
        match control.parse(raw) {
            Ok(event) => self.dispatch(event),
            Err(error) => {
                zoon::eprintln!("🎛️ INPUT: Ignoring {} value: {error}", control.label());
            }
        }
    }

    fn dispatch(&self, event: ViewEvent) {
        match event {
            ViewEvent::BackgroundColorChanged(color) => {
                self.background_color_changed_relay.send(color)
            }
            ViewEvent::CardColorChanged(color) => self.card_color_changed_relay.send(color),
            ViewEvent::ShadowColorChanged(color) => self.shadow_color_changed_relay.send(color),
            ViewEvent::ShadowSpreadChanged(spread) => {
                self.shadow_spread_changed_relay.send(spread)
            }
            ViewEvent::ShadowWeightChanged(weight) => {
                self.shadow_weight_changed_relay.send(weight)
            }
        }
    }

    /// Current value of a control, formatted for its input element.
    pub fn control_value_signal(&self, control: Control) -> impl Signal<Item = String> + use<> {
        self.view_state.signal_ref(move |state| control.value(state))
    }

    pub fn styles_signal(&self) -> impl Signal<Item = PreviewStyles> + use<> {
        let matrix = self.shadow_matrix;
        self.view_state.signal_ref(move |state| state.styles(&matrix))
    }

    pub fn css_snippet_signal(&self) -> impl Signal<Item = String> + use<> {
        let matrix = self.shadow_matrix;
        self.view_state
            .signal_ref(move |state| state.styles(&matrix).css_snippet())
    }
}

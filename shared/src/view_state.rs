use crate::color::{ColorError, HexColor};
use crate::shadow::{ShadowMatrix, shadow_styles};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use thiserror::Error;

pub const SHADOW_SPREAD_MAX: u8 = 100;
pub const SHADOW_WEIGHT_MAX: u8 = 40;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("`{raw}` is not a whole number: {source}")]
    Number { raw: String, source: ParseIntError },
}

// ===== VIEW STATE =====

/// Everything the preview renders from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewState {
    pub background_color: HexColor,
    pub card_color: HexColor,
    pub shadow_color: HexColor,
    pub shadow_spread: u8,
    pub shadow_weight: u8,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            background_color: HexColor::new(0xdd, 0xdd, 0xdd),
            card_color: HexColor::WHITE,
            shadow_color: HexColor::BLACK,
            shadow_spread: 50,
            shadow_weight: 10,
        }
    }
}

impl ViewState {
    /// Replace exactly the field named by the event.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::BackgroundColorChanged(color) => self.background_color = color,
            ViewEvent::CardColorChanged(color) => self.card_color = color,
            ViewEvent::ShadowColorChanged(color) => self.shadow_color = color,
            ViewEvent::ShadowSpreadChanged(spread) => {
                self.shadow_spread = spread.min(SHADOW_SPREAD_MAX)
            }
            ViewEvent::ShadowWeightChanged(weight) => {
                self.shadow_weight = weight.min(SHADOW_WEIGHT_MAX)
            }
        }
    }

    /// Keep numeric fields inside their slider ranges.
    pub fn clamped(mut self) -> Self {
        self.shadow_spread = self.shadow_spread.min(SHADOW_SPREAD_MAX);
        self.shadow_weight = self.shadow_weight.min(SHADOW_WEIGHT_MAX);
        self
    }

    /// Weight is a percentage of full opacity.
    pub fn shadow_opacity(&self) -> f64 {
        f64::from(self.shadow_weight) / 100.0
    }

    pub fn shadow_rgba(&self) -> String {
        self.shadow_color.to_rgba(self.shadow_opacity())
    }

    pub fn box_shadow(&self, matrix: &ShadowMatrix) -> String {
        shadow_styles(f64::from(self.shadow_spread), &self.shadow_rgba(), matrix)
    }

    pub fn styles(&self, matrix: &ShadowMatrix) -> PreviewStyles {
        PreviewStyles {
            sandbox_background: self.background_color.to_string(),
            card_background: self.card_color.to_string(),
            shadow_color: self.shadow_rgba(),
            box_shadow: self.box_shadow(matrix),
        }
    }
}

// ===== EVENTS =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    BackgroundColorChanged(HexColor),
    CardColorChanged(HexColor),
    ShadowColorChanged(HexColor),
    ShadowSpreadChanged(u8),
    ShadowWeightChanged(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Range { min: u8, max: u8 },
    Color,
}

/// One input of the control panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ShadowSpread,
    ShadowWeight,
    ShadowColor,
    CardColor,
    BackgroundColor,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::ShadowSpread,
        Control::ShadowWeight,
        Control::ShadowColor,
        Control::CardColor,
        Control::BackgroundColor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::ShadowSpread => "Amount",
            Control::ShadowWeight => "Weight",
            Control::ShadowColor => "Color",
            Control::CardColor => "Card Color",
            Control::BackgroundColor => "Background Color",
        }
    }

    pub fn kind(self) -> ControlKind {
        match self {
            Control::ShadowSpread => ControlKind::Range { min: 0, max: SHADOW_SPREAD_MAX },
            Control::ShadowWeight => ControlKind::Range { min: 0, max: SHADOW_WEIGHT_MAX },
            Control::ShadowColor | Control::CardColor | Control::BackgroundColor => {
                ControlKind::Color
            }
        }
    }

    /// Current value as the string the input element expects.
    pub fn value(self, state: &ViewState) -> String {
        match self {
            Control::ShadowSpread => state.shadow_spread.to_string(),
            Control::ShadowWeight => state.shadow_weight.to_string(),
            Control::ShadowColor => state.shadow_color.to_string(),
            Control::CardColor => state.card_color.to_string(),
            Control::BackgroundColor => state.background_color.to_string(),
        }
    }

    /// Turn a raw `input.value` into the event for this control.
    ///
    /// Range values outside the slider bounds saturate to the bound.
    pub fn parse(self, raw: &str) -> Result<ViewEvent, InputError> {
        match self.kind() {
            ControlKind::Color => {
                let color = raw.parse::<HexColor>()?;
                Ok(match self {
                    Control::ShadowColor => ViewEvent::ShadowColorChanged(color),
                    Control::CardColor => ViewEvent::CardColorChanged(color),
                    _ => ViewEvent::BackgroundColorChanged(color),
                })
            }
            ControlKind::Range { min, max } => {
                let value = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|source| InputError::Number { raw: raw.to_string(), source })?
                    .clamp(i64::from(min), i64::from(max)) as u8;
                Ok(match self {
                    Control::ShadowSpread => ViewEvent::ShadowSpreadChanged(value),
                    _ => ViewEvent::ShadowWeightChanged(value),
                })
            }
        }
    }
}

// ===== DERIVED STYLES =====

/// Style strings derived from one `ViewState`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PreviewStyles {
    pub sandbox_background: String,
    pub card_background: String,
    pub shadow_color: String,
    pub box_shadow: String,
}

impl PreviewStyles {
    /// CSS rule for the card, as shown in the snippet panel.
    pub fn css_snippet(&self) -> String {
        format!(
            ".card {{\n  background-color: {};\n  box-shadow: {};\n}}\n",
            self.card_background, self.box_shadow
        )
    }
}

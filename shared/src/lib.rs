//! Shadow preview domain: colors, layered box-shadows and the view state
//! the frontend renders from. Everything here is pure and runs natively.

pub mod color;
pub mod config;
pub mod shadow;
pub mod view_state;

pub use color::{ColorError, HexColor, Rgb, hex_to_rgb, rgba, shadow_color};
pub use config::{AppSection, ConfigError, PreviewConfig, ShadowSection};
pub use shadow::{
    DEFAULT_SHADOW_COLOR, DEFAULT_SHADOW_MATRIX, ShadowMatrix, default_shadow_styles,
    shadow_offsets, shadow_styles,
};
pub use view_state::{
    Control, ControlKind, InputError, PreviewStyles, SHADOW_SPREAD_MAX, SHADOW_WEIGHT_MAX,
    ViewEvent, ViewState,
};

//! ShadowPreviewApp - wires config, state and views together

use crate::clipboard::SnippetClipboard;
use crate::config::load_preview_config;
use crate::preview_state::PreviewState;
use zoon::*;

pub struct ShadowPreviewApp {
    pub preview_state: PreviewState,
    pub snippet_clipboard: SnippetClipboard,
}

impl ShadowPreviewApp {
    pub fn new() -> Self {
        let config = load_preview_config();
        let preview_state = PreviewState::new(&config);
        let snippet_clipboard = SnippetClipboard::new(&preview_state);

        Self {
            preview_state,
            snippet_clipboard,
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        Row::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(Font::new().family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .item(crate::preview::sandbox(&self.preview_state))
            .item(crate::controls::controls_panel(
                &self.preview_state,
                &self.snippet_clipboard,
            ))
    }
}

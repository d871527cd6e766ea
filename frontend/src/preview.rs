//! Sandbox with the shadowed card

use crate::preview_state::PreviewState;
use zoon::*;

const CARD_SIZE: u32 = 200;

pub fn sandbox(preview_state: &PreviewState) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el({
            let styles = preview_state.styles_signal();
            move |raw_el| {
                raw_el.style_signal(
                    "background-color",
                    styles.map(|styles| styles.sandbox_background),
                )
            }
        })
        .child(card(preview_state))
}

fn card(preview_state: &PreviewState) -> impl Element {
    El::new()
        .s(Width::exact(CARD_SIZE))
        .s(Height::exact(CARD_SIZE))
        .s(Align::center())
        .s(RoundedCorners::all(4))
        .update_raw_el({
            let card_background = preview_state
                .styles_signal()
                .map(|styles| styles.card_background);
            let box_shadow = preview_state.styles_signal().map(|styles| styles.box_shadow);
            move |raw_el| {
                raw_el
                    .style_signal("background-color", card_background)
                    .style_signal("box-shadow", box_shadow)
            }
        })
}

//! Control panel: sliders, color pickers and the CSS snippet

use crate::clipboard::SnippetClipboard;
use crate::preview_state::PreviewState;
use shared::{Control, ControlKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::*;

pub fn controls_panel(
    preview_state: &PreviewState,
    snippet_clipboard: &SnippetClipboard,
) -> impl Element {
    Column::new()
        .s(Width::exact(320))
        .s(Height::fill())
        .s(Padding::all(24))
        .s(Gap::new().y(18))
        .s(Background::new().color("oklch(98% 0.01 250)"))
        .s(Scrollbars::y_and_clip_x())
        .items(Control::ALL.map(|control| control_row(preview_state, control)))
        .item(css_snippet(preview_state, snippet_clipboard))
}

fn control_row(preview_state: &PreviewState, control: Control) -> impl Element {
    Column::new()
        .s(Gap::new().y(6))
        .item(
            El::new()
                .s(Font::new().size(14).weight(FontWeight::Bold))
                .child(control.label()),
        )
        .item(control_input(preview_state, control))
}

/// Native `<input>` for a control, kept in sync with the ViewState.
fn control_input(preview_state: &PreviewState, control: Control) -> impl Element {
    let input = match control.kind() {
        ControlKind::Range { min, max } => RawHtmlEl::new("input")
            .attr("type", "range")
            .attr("min", &min.to_string())
            .attr("max", &max.to_string())
            .style("width", "100%"),
        ControlKind::Color => RawHtmlEl::new("input")
            .attr("type", "color")
            .style("width", "64px")
            .style("height", "32px"),
    };

    let input = input
        .attr("aria-label", control.label())
        .attr_signal("value", preview_state.control_value_signal(control));

    let input_closure = Closure::wrap(Box::new({
        let preview_state = preview_state.clone();
        move |event: web_sys::Event| {
            let Some(input) = event
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            preview_state.input_received(control, &input.value());
        }
    }) as Box<dyn FnMut(_)>);

    if let Err(error) = input
        .dom_element()
        .add_event_listener_with_callback("input", input_closure.as_ref().unchecked_ref())
    {
        zoon::eprintln!("🎛️ INPUT: Failed to attach {} listener: {error:?}", control.label());
    }
    input_closure.forget();
    input
}

fn css_snippet(preview_state: &PreviewState, snippet_clipboard: &SnippetClipboard) -> impl Element {
    Column::new()
        .s(Gap::new().y(8))
        .item(
            El::new()
                .s(Font::new().size(14).weight(FontWeight::Bold))
                .child("CSS"),
        )
        .item(
            El::new()
                .s(Width::fill())
                .s(Padding::all(12))
                .s(RoundedCorners::all(6))
                .s(Background::new().color("oklch(20% 0.01 250)"))
                .s(Font::new()
                    .size(12)
                    .color("oklch(95% 0.01 250)")
                    .family([FontFamily::new("Fira Code"), FontFamily::Monospace]))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("white-space", "pre-wrap")
                        .style("word-break", "break-all")
                        .style("user-select", "text")
                })
                .child_signal(preview_state.css_snippet_signal().map(|snippet| Text::new(snippet))),
        )
        .item(copy_button(snippet_clipboard))
}

fn copy_button(snippet_clipboard: &SnippetClipboard) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(6))
        .s(Background::new().color_signal(
            hovered_signal.map_bool(|| "oklch(45% 0.16 250)", || "oklch(55% 0.16 250)"),
        ))
        .s(Font::new().size(14).color("oklch(98% 0.01 250)"))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label_signal(
            snippet_clipboard
                .copied
                .signal()
                .map_bool(|| "Copied!", || "Copy CSS"),
        )
        .on_press({
            let snippet_clipboard = snippet_clipboard.clone();
            move || snippet_clipboard.copy_button_pressed_relay.send(())
        })
}

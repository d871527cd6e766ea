//! Copying the generated CSS snippet to the system clipboard

use crate::dataflow::{Actor, Relay, relay};
use crate::preview_state::PreviewState;
use futures::{StreamExt, select};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
#[cfg(web_sys_unstable_apis)]
use wasm_bindgen_futures::JsFuture;
use zoon::*;

const COPIED_FEEDBACK_MS: u32 = 1_500;

/// Tracks the latest snippet and whether it was just copied.
#[derive(Clone, Debug)]
pub struct SnippetClipboard {
    /// `true` for a short while after a successful copy
    pub copied: Actor<bool>,
    pub copy_button_pressed_relay: Relay<()>,
}

impl SnippetClipboard {
    pub fn new(preview_state: &PreviewState) -> Self {
        let (copy_button_pressed_relay, mut copy_button_pressed_stream) = relay();
        let (copy_succeeded_relay, mut copy_succeeded_stream) = relay::<()>();
        let (copied_feedback_expired_relay, mut copied_feedback_expired_stream) = relay::<()>();
        let mut snippet_stream = preview_state.css_snippet_signal().to_stream().boxed().fuse();

        let copied = Actor::new(false, async move |state| {
            let mut latest_snippet = String::new();
            loop {
                select! {
                    snippet = snippet_stream.next() => {
                        if let Some(snippet) = snippet {
                            latest_snippet = snippet;
                        }
                    }
                    pressed = copy_button_pressed_stream.next() => {
                        if pressed.is_some() {
                            let text = latest_snippet.clone();
                            let copy_succeeded_relay = copy_succeeded_relay.clone();
                            spawn_local(async move {
                                match write_to_clipboard(&text).await {
                                    Ok(()) => copy_succeeded_relay.send(()),
                                    Err(error) => {
                                        zoon::eprintln!("📋 CLIPBOARD: {error}");
                                    }
                                }
                            });
                        }
                    }
                    succeeded = copy_succeeded_stream.next() => {
                        if succeeded.is_some() {
                            state.set_neq(true);
                            let copied_feedback_expired_relay = copied_feedback_expired_relay.clone();
                            spawn_local(async move {
                                TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                                copied_feedback_expired_relay.send(());
                            });
                        }
                    }
                    expired = copied_feedback_expired_stream.next() => {
                        if expired.is_some() {
                            state.set_neq(false);
                        }
                    }
                    complete => break,
                }
            }
        });

        Self {
            copied,
            copy_button_pressed_relay,
        }
    }
}

#[cfg(web_sys_unstable_apis)]
async fn write_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window available")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|error| format!("write failed: {error:?}"))
}

#[cfg(not(web_sys_unstable_apis))]
async fn write_to_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard API requires unstable APIs flag".to_string())
}

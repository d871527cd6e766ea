//! Shadow Preview entry point

use std::sync::OnceLock;
use zoon::*;

/// Keeps the startup task alive for the lifetime of the page.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod app;
mod clipboard;
mod config;
mod controls;
mod dataflow;
mod preview;
mod preview_state;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::ShadowPreviewApp::new();
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}

//! Blocking Browser Dialogs

use leptos::logging::warn;

/// `window.alert(message)`; logs instead when there is no window
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(win) => {
            let _ = win.alert_with_message(message);
        }
        None => warn!("[DIALOG] {}", message),
    }
}

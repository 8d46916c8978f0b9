//! Blocking browser dialogs.
//!
//! Thin wrappers over `window.alert` / `window.confirm`. Outside the browser
//! the notice is logged and confirmations are declined, so nothing
//! destructive runs without a user.

/// Show a blocking notice to the user.
pub fn notify(message: &str) {
    log::info!("notice: {message}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert dialog was blocked");
            }
        }
    }
}

/// Ask a yes/no question. Returns `true` only on an explicit yes.
pub fn confirm(question: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = question;
        false
    }
}

//! Browser navigation bridge.
//!
//! Submitting a search navigates the page to the `/stays` results URL via
//! `window.location`. Outside a browser (tests, SSR) this degrades to a log
//! line.

/// Navigate the current page to `url`.
pub fn navigate_to(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.location().set_href(url).is_err() {
                log::warn!("[Yatra] nav: failed to navigate to {}", url);
            }
        }
        None => log::warn!("[Yatra] nav: no window, skipping navigation to {}", url),
    }
}

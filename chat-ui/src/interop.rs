//! Small browser helpers. All of them degrade to no-ops outside a page.

/// Hostname of the page the app was served from.
pub fn page_hostname() -> Option<String> {
    web_sys::window().and_then(|w| w.location().hostname().ok())
}

/// Scroll the element with `id` into view, aligned to the bottom of its scroll container.
pub fn scroll_into_view_by_id(id: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            element.scroll_into_view_with_bool(false);
        }
    }
}

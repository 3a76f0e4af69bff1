//! Browser Helpers
//!
//! Thin lookups over `window`/`document`. Missing pieces yield `None`
//! instead of panicking so a page without them simply skips the feature.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// `content` of `<meta name="...">`
pub fn meta_content(name: &str) -> Option<String> {
    document()
        .and_then(|doc| doc.query_selector(&format!("meta[name=\"{}\"]", name)).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
}

/// Element by id, cast to `HtmlElement`
pub fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Parse the JSON text of an embedded `<script type="application/json">`
pub fn embedded_json<T: DeserializeOwned>(id: &str) -> Option<T> {
    let text = document()?.get_element_by_id(id)?.text_content()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("embedded data #{} is not valid JSON: {}", id, e);
            None
        }
    }
}

/// Value of a query parameter in the current page URL
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_query_param(&search, name)
}

fn parse_query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            percent_encoding::percent_decode_str(&value.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
}

/// Add or remove a class on `<body>`
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let list = body.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        if result.is_err() {
            tracing::warn!("could not toggle body class {}", class);
        }
    }
}

/// Navigate the page
pub fn navigate(href: &str) {
    if let Some(win) = web_sys::window() {
        if win.location().set_href(href).is_err() {
            tracing::error!("navigation to {} failed", href);
        }
    }
}

/// Today's local date from the browser clock
pub fn today() -> Option<chrono::NaiveDate> {
    let now = js_sys::Date::new_0();
    chrono::NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

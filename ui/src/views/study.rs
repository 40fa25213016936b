use dioxus::prelude::*;

use crate::session::StudyView;

#[component]
pub fn Study() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders when the locale changes from the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-study",
            StudyView {}
        }
    }
}

use dioxus::prelude::*;

use crate::core::format;
use crate::core::platform::Platform;
use crate::history::HISTORY_LIMIT;
use crate::session::{DocumentKind, MAX_UPLOAD_BYTES};

#[cfg(debug_assertions)]
fn log_about_render(lang: &str) {
    tracing::debug!(lang, "about page render");
}

#[component]
pub fn About() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_about_render(&_lang_current);
    }

    let formats = DocumentKind::ALL
        .iter()
        .map(|kind| format!(".{}", kind.extension()))
        .collect::<Vec<_>>()
        .join(", ");
    let max_size = format::format_file_size(MAX_UPLOAD_BYTES);
    let limit = HISTORY_LIMIT.to_string();
    let storage_note = match Platform::current() {
        Platform::Web => crate::t!("about-storage-web"),
        Platform::Desktop => crate::t!("about-storage-desktop"),
    };

    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-intro")} }

            ol { class: "page-about__steps",
                li { {crate::t!("about-step-upload")} }
                li { {crate::t!("about-step-generate")} }
                li { {crate::t!("about-step-study")} }
            }

            h2 { {crate::t!("about-limits-title")} }
            ul { class: "page-about__limits",
                li { {crate::t!("about-limit-formats", formats = formats)} }
                li { {crate::t!("about-limit-size", size = max_size)} }
                li { {crate::t!("about-limit-history", limit = limit)} }
            }
            p { class: "page-about__storage", "{storage_note}" }
        }
    }
}

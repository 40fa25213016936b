use dioxus::prelude::*;

use crate::session::AppController;
use crate::t;

/// Collapsible list of stored decks pinned below the study area.
#[component]
pub fn HistoryPanel(controller: Signal<AppController>) -> Element {
    let mut expanded = use_signal(|| false);

    let (entries, degraded) = {
        let ctrl = controller.read();
        let entries: Vec<PanelEntry> = ctrl
            .history()
            .entries()
            .iter()
            .map(|entry| PanelEntry {
                id: entry.id,
                filename: entry.filename.clone(),
                date: entry.date.clone(),
                cards: entry.card_count(),
            })
            .collect();
        (entries, ctrl.history().persist_error().is_some())
    };

    let chevron = if expanded() { "▾" } else { "▴" };

    rsx! {
        section { class: "history",
            button {
                r#type: "button",
                class: "history__toggle",
                aria_expanded: "{expanded()}",
                onclick: move |_| expanded.toggle(),
                span { class: "history__title", {t!("history-title")} }
                if !entries.is_empty() {
                    span { class: "history__count", "{entries.len()}" }
                }
                span { class: "history__chevron", aria_hidden: "true", "{chevron}" }
            }

            if expanded() {
                div { class: "history__body",
                    if degraded {
                        p { class: "history__notice", {t!("history-not-saved")} }
                    }
                    if entries.is_empty() {
                        p { class: "history__placeholder", {t!("history-empty")} }
                    } else {
                        ul { class: "history__items",
                            for entry in entries.into_iter() {
                                {render_entry(entry, controller)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct PanelEntry {
    id: i64,
    filename: String,
    date: String,
    cards: usize,
}

fn render_entry(entry: PanelEntry, mut controller: Signal<AppController>) -> Element {
    let PanelEntry {
        id,
        filename,
        date,
        cards,
    } = entry;
    let cards_label = t!("history-card-count", count = cards.to_string());
    let delete_label = t!("history-delete");

    rsx! {
        li { key: "{id}", class: "history__item",
            button {
                r#type: "button",
                class: "history__load",
                onclick: move |_| {
                    controller.with_mut(|c| c.load_history(id));
                },
                span { class: "history__filename", "{filename}" }
                span { class: "history__meta", "{date} • {cards_label}" }
            }
            button {
                r#type: "button",
                class: "history__delete",
                title: "{delete_label}",
                aria_label: "{delete_label}",
                onclick: move |_| {
                    controller.with_mut(|c| c.remove_history(id));
                },
                "✕"
            }
        }
    }
}

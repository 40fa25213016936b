use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::{Direction, Flashcard};

/// Two-sided card; clicking (or Space/Enter while focused) asks to flip it.
#[component]
pub fn FlashCard(card: Flashcard, on_flip: EventHandler<()>) -> Element {
    let inner_class = if card.show_answer {
        "flashcard__inner flashcard__inner--flipped"
    } else {
        "flashcard__inner"
    };
    let links = card.links().to_vec();

    rsx! {
        div {
            class: "flashcard",
            tabindex: 0,
            role: "button",
            aria_pressed: "{card.show_answer}",
            onclick: move |_| on_flip.call(()),
            onkeydown: move |evt| {
                let key = evt.key().to_string().to_lowercase();
                if key == " " || key == "spacebar" || key == "enter" {
                    evt.prevent_default();
                    on_flip.call(());
                }
            },
            div { class: "{inner_class}",
                div { class: "flashcard__face flashcard__face--front",
                    h3 { class: "flashcard__question", "{card.question}" }
                    p { class: "flashcard__hint", {t!("card-reveal-hint")} }
                }
                div { class: "flashcard__face flashcard__face--back",
                    p { class: "flashcard__answer", "{card.answer}" }
                    if !links.is_empty() {
                        div { class: "flashcard__links",
                            span { class: "flashcard__links-label", {t!("card-context-links")} }
                            ul {
                                for link in links {
                                    li { key: "{link}",
                                        a {
                                            href: "{link}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            onclick: move |evt| evt.stop_propagation(),
                                            "{link}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "flashcard__hint", {t!("card-question-hint")} }
                }
            }
        }
    }
}

/// The current card with its header (deck title, position) and navigation.
#[component]
pub fn CardDeck(
    card: Flashcard,
    index: usize,
    total: usize,
    title: String,
    slide_class: String,
    on_flip: EventHandler<usize>,
    on_navigate: EventHandler<Direction>,
) -> Element {
    let progress = format::format_progress(index, total);

    rsx! {
        section {
            class: "deck",
            onkeydown: move |evt| {
                match evt.key().to_string().to_lowercase().as_str() {
                    "arrowright" => on_navigate.call(Direction::Next),
                    "arrowleft" => on_navigate.call(Direction::Previous),
                    _ => {}
                }
            },
            div { class: "deck__header",
                span { class: "deck__title", "{title}" }
                span { class: "deck__progress", "{progress}" }
            }

            div { class: "deck__stage",
                div { class: "deck__card {slide_class}",
                    FlashCard { card, on_flip: move |_| on_flip.call(index) }
                }
            }

            div { class: "deck__controls",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_navigate.call(Direction::Previous),
                    {t!("deck-previous")}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_navigate.call(Direction::Next),
                    {t!("deck-next")}
                }
            }
        }
    }
}

use dioxus::prelude::*;
use tracing::warn;

use api::GenerationService;

use crate::core::{format, timing};
use crate::deck::{CardDeck, Direction, Flashcard, SlidePhase, SlideTransition, SLIDE_PHASE_MS};
use crate::history::HistoryPanel;
use crate::t;

use super::upload::ACCEPT_ATTR;
use super::{error_hint, error_text, notice_text, open_app_controller, AppController, Notice, SessionError};

/// Upload form, banners, the current deck and the history panel.
#[component]
pub fn StudyView() -> Element {
    let mut controller = use_signal(open_app_controller);
    let mut slide = use_signal(SlideTransition::default);

    let view = StudySnapshot::capture(&controller.read());

    let on_file_change = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };

        if let Some(size) = engine.file_size(&name).await {
            let checked = controller.with_mut(|c| c.session_mut().check_candidate(&name, size, None));
            if checked.is_err() {
                return;
            }
        }

        match engine.read_file(&name).await {
            Some(bytes) => {
                let _ = controller.with_mut(|c| c.session_mut().select_file(name, None, bytes));
            }
            None => warn!(file = %name, "selected file could not be read"),
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok((ticket, service)) = controller.with_mut(|c| c.begin_submit()) else {
            return;
        };
        spawn(async move {
            let outcome = service.generate(ticket.payload.clone()).await;
            let _ = controller.with_mut(|c| c.complete_submit(&ticket, outcome));
        });
    };

    let mut navigate = move |direction: Direction| {
        if !slide.with_mut(|s| s.start(direction)) {
            return;
        }
        spawn(async move {
            timing::sleep_ms(SLIDE_PHASE_MS).await;
            if let SlidePhase::IndexChanged(dir) = slide.with_mut(|s| s.advance()) {
                controller.with_mut(|c| c.navigate(dir));
            }
            // One frame in the entering position before sliding in.
            timing::sleep_ms(16).await;
            slide.with_mut(|s| s.advance());
            timing::sleep_ms(SLIDE_PHASE_MS).await;
            slide.with_mut(|s| s.advance());
        });
    };

    let slide_class = slide.read().css_class().to_string();

    rsx! {
        div { class: "study",
            if view.loading {
                div { class: "study__overlay", role: "status",
                    div { class: "study__overlay-card",
                        div { class: "spinner", aria_hidden: "true" }
                        p { class: "study__overlay-title", {t!("study-processing")} }
                        p { class: "study__overlay-detail", {t!("study-processing-detail")} }
                    }
                }
            }

            header { class: "study__header",
                h1 { {t!("study-title")} }
                p { class: "study__tagline", {t!("study-tagline")} }
                if !view.show_upload {
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| controller.with_mut(|c| c.session_mut().open_upload()),
                        {t!("study-upload-new")}
                    }
                }
            }

            if view.show_upload {
                form { class: "upload", onsubmit: on_submit,
                    label { class: "upload__label", r#for: "upload-file", {t!("upload-label")} }
                    input {
                        id: "upload-file",
                        class: "upload__input",
                        r#type: "file",
                        accept: ACCEPT_ATTR,
                        required: true,
                        onchange: on_file_change,
                    }
                    if let Some((name, size)) = view.selected.as_ref() {
                        p { class: "upload__selected", "{name} · {size}" }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary upload__submit",
                        disabled: view.loading,
                        {t!("upload-submit")}
                    }
                }
            }

            if let Some(err) = view.error.as_ref() {
                {render_error(err, controller)}
            }

            if let Some(notice) = view.success.as_ref() {
                if !view.show_upload {
                    div { class: "banner banner--success", role: "status", {notice_text(notice)} }
                }
            }

            if let Some(card) = view.card.clone() {
                CardDeck {
                    card,
                    index: view.index,
                    total: view.total,
                    title: view.title.clone(),
                    slide_class,
                    on_flip: move |index: usize| controller.with_mut(|c| c.flip(index)),
                    on_navigate: move |direction: Direction| navigate(direction),
                }
            }

            HistoryPanel { controller }
        }
    }
}

fn render_error(err: &SessionError, mut controller: Signal<AppController>) -> Element {
    let hint = error_hint(err.kind());
    let message = error_text(err);

    rsx! {
        div { class: "banner banner--error", role: "alert",
            div { class: "banner__body",
                p { "{message}" }
                if let Some(hint) = hint {
                    p { class: "banner__hint", "{hint}" }
                }
            }
            button {
                r#type: "button",
                class: "banner__dismiss",
                aria_label: t!("banner-dismiss"),
                onclick: move |_| controller.with_mut(|c| c.session_mut().dismiss_error()),
                "✕"
            }
        }
    }
}

/// Everything the page renders, copied out of the controller once per render.
struct StudySnapshot {
    loading: bool,
    show_upload: bool,
    error: Option<SessionError>,
    success: Option<Notice>,
    selected: Option<(String, String)>,
    card: Option<Flashcard>,
    index: usize,
    total: usize,
    title: String,
}

impl StudySnapshot {
    fn capture(controller: &AppController) -> Self {
        let session = controller.session();
        let card = if session.is_studying() {
            session.current_card().cloned()
        } else {
            None
        };

        Self {
            loading: session.is_loading(),
            show_upload: session.show_upload(),
            error: session.error().cloned(),
            success: session.success().cloned(),
            selected: session
                .file()
                .map(|file| (file.name().to_string(), format::format_file_size(file.size()))),
            card,
            index: session.current_index(),
            total: session.cards().len(),
            title: session.deck_title().unwrap_or_default().to_string(),
        }
    }
}

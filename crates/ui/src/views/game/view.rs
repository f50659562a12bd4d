use dioxus::prelude::*;
use guess_core::{GameAction, Transition};

use crate::context::AppContext;
use crate::vm::{GameIntent, ScreenMode, map_game_screen};

use super::effects::{commit, run_effects};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const PLACEHOLDER_IMAGE: Asset = asset!("/assets/placeholder.svg");
const RELOAD_ICON: Asset = asset!("/assets/reload.svg");
const DOWNLOAD_ICON: Asset = asset!("/assets/download.svg");
const CLOSE_ICON: Asset = asset!("/assets/close.svg");

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let game_loop = ctx.game_loop();
    let show_target_hint = ctx.show_target_hint();

    let session = {
        let game_loop = game_loop.clone();
        use_hook(move || {
            let Transition { session, effects } = game_loop.start_game();
            let signal = Signal::new(session);
            run_effects(signal, &game_loop, effects);
            signal
        })
    };

    let dispatch_intent = {
        let game_loop = game_loop.clone();
        use_callback(move |intent: GameIntent| {
            let transition = {
                let current = session.peek();
                match intent {
                    GameIntent::EditGuess(text) => current.reduce(GameAction::EditGuess(text)),
                    GameIntent::Submit => game_loop.submit_guess(&current),
                    GameIntent::NewRound => game_loop.start_new_round(&current),
                    GameIntent::Download => current.reduce(GameAction::RequestDownload),
                    GameIntent::DismissNotice => current.reduce(GameAction::DismissNotice),
                }
            };
            commit(session, &game_loop, transition);
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let vm = map_game_screen(&session.read(), show_target_hint);
    let image_src = vm
        .image_src
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let image_style = vm.opacity_style();
    let notice_class = match vm.notice.as_ref() {
        Some(notice) if notice.is_failure => "game-notice game-notice--failure",
        _ => "game-notice",
    };

    rsx! {
        div { class: "page game-page",
            h1 { class: "game-title", "Guess the Number Game" }
            p { class: "game-subtitle", "Guess a number between 1 and 10:" }

            if let Some(notice) = vm.notice.clone() {
                div {
                    class: notice_class,
                    id: "game-notice",
                    role: "alert",
                    span { "{notice.message}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(GameIntent::DismissNotice),
                        "OK"
                    }
                }
            }

            match vm.mode.clone() {
                ScreenMode::Guessing { input } => rsx! {
                    div { class: "game-input",
                        input {
                            id: "guess-input",
                            r#type: "text",
                            inputmode: "numeric",
                            value: "{input}",
                            oninput: move |evt| dispatch_intent.call(GameIntent::EditGuess(evt.value())),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    dispatch_intent.call(GameIntent::Submit);
                                }
                            },
                        }
                    }
                    div { class: "game-options",
                        button {
                            class: "btn btn-primary",
                            id: "guess-submit",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(GameIntent::Submit),
                            "Guess"
                        }
                    }
                },
                ScreenMode::Revealed { can_download, downloading } => {
                    let download_label = if downloading { "Downloading" } else { "Download" };
                    rsx! {
                        div { class: "game-options",
                            IconButton {
                                id: "game-reload",
                                label: "Play again",
                                icon: RELOAD_ICON.to_string(),
                                disabled: false,
                                on_press: move |()| dispatch_intent.call(GameIntent::NewRound),
                            }
                            IconButton {
                                id: "game-download",
                                label: download_label,
                                icon: DOWNLOAD_ICON.to_string(),
                                disabled: !can_download,
                                on_press: move |()| dispatch_intent.call(GameIntent::Download),
                            }
                            IconButton {
                                id: "game-close",
                                label: "Close",
                                icon: CLOSE_ICON.to_string(),
                                disabled: false,
                                on_press: move |()| dispatch_intent.call(GameIntent::NewRound),
                            }
                        }
                    }
                }
            }

            div { class: "game-image", style: "{image_style}",
                img { id: "game-image", src: "{image_src}", alt: "Reward" }
            }

            p { class: "game-hint", "{vm.hint_label}" }
        }
    }
}

#[component]
fn IconButton(
    id: &'static str,
    label: &'static str,
    icon: String,
    disabled: bool,
    on_press: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "icon-btn",
            id: "{id}",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}",
            disabled: disabled,
            onclick: move |_| on_press.call(()),
            img { src: "{icon}", alt: "{label}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    session: Rc<RefCell<Option<Signal<guess_core::GameSession>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<GameIntent>,
        session: Signal<guess_core::GameSession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<guess_core::GameSession> {
        (*self.session.borrow()).expect("game session registered")
    }
}

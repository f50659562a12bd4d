use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use guess_core::model::RoundId;
use guess_core::{GameEffect, GameSession, Transition};
use services::GameLoopService;
use tracing::debug;

/// Delay between fade-in frames.
pub(super) const REVEAL_FRAME: Duration = Duration::from_millis(16);

/// Store the next session and start the effects it asked for.
pub(super) fn commit(
    mut session: Signal<GameSession>,
    game_loop: &Arc<GameLoopService>,
    transition: Transition,
) {
    let Transition {
        session: next,
        effects,
    } = transition;
    if *session.peek() != next {
        session.set(next);
    }
    run_effects(session, game_loop, effects);
}

/// Spawn the tasks for `effects`; their results flow back through `commit`.
pub(super) fn run_effects(
    session: Signal<GameSession>,
    game_loop: &Arc<GameLoopService>,
    effects: Vec<GameEffect>,
) {
    for effect in effects {
        run_effect(session, Arc::clone(game_loop), effect);
    }
}

fn run_effect(session: Signal<GameSession>, game_loop: Arc<GameLoopService>, effect: GameEffect) {
    match effect {
        GameEffect::AnimateReveal(round) => {
            spawn(animate_reveal(session, game_loop, round));
        }
        effect => {
            spawn(async move {
                let Some(action) = game_loop.perform(&effect).await else {
                    return;
                };
                let transition = session.peek().reduce(action);
                commit(session, &game_loop, transition);
            });
        }
    }
}

async fn animate_reveal(
    session: Signal<GameSession>,
    game_loop: Arc<GameLoopService>,
    round: RoundId,
) {
    loop {
        tokio::time::sleep(REVEAL_FRAME).await;
        let transition = {
            let current = session.peek();
            if current.round() != round || !current.is_revealed() {
                debug!(%round, "reveal animation superseded");
                return;
            }
            game_loop.tick(&current)
        };
        let complete = transition.session.reveal_progress().is_complete();
        commit(session, &game_loop, transition);
        if complete {
            return;
        }
    }
}

use std::sync::Arc;

use services::GameLoopService;

pub trait UiApp: Send + Sync {
    fn game_loop(&self) -> Arc<GameLoopService>;

    /// Whether the hint label should print the round's target.
    fn show_target_hint(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    game_loop: Arc<GameLoopService>,
    show_target_hint: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            game_loop: app.game_loop(),
            show_target_hint: app.show_target_hint(),
        }
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    #[must_use]
    pub fn show_target_hint(&self) -> bool {
        self.show_target_hint
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

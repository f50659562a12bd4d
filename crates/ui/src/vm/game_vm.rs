use guess_core::GameSession;

/// Everything the player can do on the game screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    EditGuess(String),
    Submit,
    /// Reload or close on the reveal screen. Both start over.
    NewRound,
    Download,
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenMode {
    Guessing { input: String },
    Revealed { can_download: bool, downloading: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub message: &'static str,
    pub is_failure: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameScreenVm {
    pub mode: ScreenMode,
    /// `None` means the placeholder image.
    pub image_src: Option<String>,
    pub image_opacity: f32,
    pub hint_label: String,
    pub notice: Option<NoticeVm>,
}

impl GameScreenVm {
    #[must_use]
    pub fn opacity_style(&self) -> String {
        format!("opacity: {:.2};", self.image_opacity)
    }
}

#[must_use]
pub fn map_game_screen(session: &GameSession, show_target_hint: bool) -> GameScreenVm {
    let mode = if session.is_revealed() {
        ScreenMode::Revealed {
            can_download: session.can_download(),
            downloading: session.is_downloading(),
        }
    } else {
        ScreenMode::Guessing {
            input: session.guess_input().to_string(),
        }
    };

    let image_opacity = if session.is_revealed() {
        session.reveal_progress().value()
    } else {
        0.0
    };

    // The first release printed the target here; it is opt-in now.
    let hint_label = if show_target_hint {
        format!("You have {} tries", session.target())
    } else {
        format!("Attempts: {}", session.attempts())
    };

    GameScreenVm {
        mode,
        image_src: session.image_url().map(ToString::to_string),
        image_opacity,
        hint_label,
        notice: session.notice().map(|notice| NoticeVm {
            message: notice.message(),
            is_failure: notice.is_failure(),
        }),
    }
}

use chrono::{DateTime, Duration, Utc};

use crate::model::{ImageState, ImageUrl, Notice, RoundId, Target, parse_guess};

/// Fade-in duration used when nothing else is configured.
pub const DEFAULT_REVEAL_MILLIS: i64 = 1_000;

//
// ─── PHASE & PROGRESS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Guessing,
    Revealed,
}

/// Fade-in progress of the revealed image, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RevealProgress(f32);

impl RevealProgress {
    pub const HIDDEN: Self = Self(0.0);
    pub const COMPLETE: Self = Self(1.0);

    /// Progress after `elapsed` out of `duration`, clamped to `[0, 1]`.
    ///
    /// A zero (or negative) duration is complete immediately.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration, duration: Duration) -> Self {
        let total = duration.num_milliseconds();
        if total <= 0 {
            return Self::COMPLETE;
        }
        let done = elapsed.num_milliseconds().clamp(0, total);
        #[allow(clippy::cast_precision_loss)]
        let ratio = done as f64 / total as f64;
        #[allow(clippy::cast_possible_truncation)]
        Self(ratio as f32)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}

//
// ─── ACTIONS & EFFECTS ─────────────────────────────────────────────────────────
//

/// Terminal status of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved,
    Failed,
}

/// Everything that can change a `GameSession`.
///
/// Randomness and time come in as data (`next_target`, `now`), which keeps
/// every transition deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    EditGuess(String),
    /// Submit the current input. `next_target` is used only if the guess is wrong.
    SubmitGuess {
        next_target: Target,
        now: DateTime<Utc>,
    },
    /// Player-initiated fresh round (reload or dismiss on the reveal screen).
    StartNewRound {
        target: Target,
    },
    ImageFetched {
        round: RoundId,
        image: Option<ImageUrl>,
    },
    Tick {
        now: DateTime<Utc>,
    },
    RequestDownload,
    DownloadFinished {
        outcome: DownloadOutcome,
    },
    DismissNotice,
}

/// Work the runtime must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEffect {
    /// Fetch a random image for the given round.
    FetchImage(RoundId),
    /// Keep ticking the fade-in of the given round until it completes.
    AnimateReveal(RoundId),
    Download(ImageUrl),
}

/// Result of applying an action: the next session plus requested effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: GameSession,
    pub effects: Vec<GameEffect>,
}

impl Transition {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            effects: Vec::new(),
        }
    }

    fn unchanged(session: &GameSession) -> Self {
        Self::new(session.clone())
    }

    fn with_effect(mut self, effect: GameEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of the game screen.
///
/// Values are never mutated in place: each operation returns a `Transition`
/// holding the next session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    target: Target,
    round: RoundId,
    guess_input: String,
    phase: GamePhase,
    reveal_started_at: Option<DateTime<Utc>>,
    reveal_progress: RevealProgress,
    reveal_duration: Duration,
    image: ImageState,
    attempts: u32,
    notice: Option<Notice>,
    downloading: bool,
}

impl GameSession {
    /// Creates the session of a freshly mounted screen and requests the first image.
    #[must_use]
    pub fn start(target: Target, reveal_duration: Duration) -> Transition {
        let round = RoundId::first();
        let session = Self {
            target,
            round,
            guess_input: String::new(),
            phase: GamePhase::Guessing,
            reveal_started_at: None,
            reveal_progress: RevealProgress::HIDDEN,
            reveal_duration,
            image: ImageState::Loading,
            attempts: 0,
            notice: None,
            downloading: false,
        };
        Transition::new(session).with_effect(GameEffect::FetchImage(round))
    }

    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn guess_input(&self) -> &str {
        &self.guess_input
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase == GamePhase::Revealed
    }

    #[must_use]
    pub fn reveal_progress(&self) -> RevealProgress {
        self.reveal_progress
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&ImageUrl> {
        self.image.url()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn is_downloading(&self) -> bool {
        self.downloading
    }

    /// True when the download affordance should accept a press.
    #[must_use]
    pub fn can_download(&self) -> bool {
        self.is_revealed() && !self.downloading
    }

    /// Applies any action.
    #[must_use]
    pub fn reduce(&self, action: GameAction) -> Transition {
        match action {
            GameAction::EditGuess(text) => self.edit_guess(text),
            GameAction::SubmitGuess { next_target, now } => {
                let input = self.guess_input.clone();
                self.submit_guess(&input, next_target, now)
            }
            GameAction::StartNewRound { target } => self.start_new_round(target),
            GameAction::ImageFetched { round, image } => self.image_fetched(round, image),
            GameAction::Tick { now } => self.tick(now),
            GameAction::RequestDownload => self.request_download(),
            GameAction::DownloadFinished { outcome } => self.download_finished(outcome),
            GameAction::DismissNotice => self.dismiss_notice(),
        }
    }

    #[must_use]
    pub fn edit_guess(&self, text: impl Into<String>) -> Transition {
        if self.is_revealed() {
            return Transition::unchanged(self);
        }
        let mut next = self.clone();
        next.guess_input = text.into();
        Transition::new(next)
    }

    /// Checks `input` against the target.
    ///
    /// A wrong or unparsable guess moves to a new round with `next_target`.
    /// Submissions while the image is revealed are ignored.
    #[must_use]
    pub fn submit_guess(&self, input: &str, next_target: Target, now: DateTime<Utc>) -> Transition {
        if self.is_revealed() {
            return Transition::unchanged(self);
        }

        if self.target.matches(parse_guess(input)) {
            let mut next = self.clone();
            next.attempts = next.attempts.saturating_add(1);
            next.guess_input.clear();
            next.notice = None;
            next.phase = GamePhase::Revealed;
            next.reveal_started_at = Some(now);
            next.reveal_progress =
                RevealProgress::from_elapsed(Duration::zero(), self.reveal_duration);
            let round = next.round;
            let transition = Transition::new(next);
            if transition.session.reveal_progress.is_complete() {
                return transition;
            }
            return transition.with_effect(GameEffect::AnimateReveal(round));
        }

        let mut next = self.next_round(next_target);
        next.attempts = self.attempts.saturating_add(1);
        next.notice = Some(Notice::IncorrectGuess);
        let round = next.round;
        Transition::new(next).with_effect(GameEffect::FetchImage(round))
    }

    /// Starts a fresh round on the player's request and resets the attempt count.
    #[must_use]
    pub fn start_new_round(&self, target: Target) -> Transition {
        let mut next = self.next_round(target);
        next.attempts = 0;
        next.notice = None;
        let round = next.round;
        Transition::new(next).with_effect(GameEffect::FetchImage(round))
    }

    fn next_round(&self, target: Target) -> Self {
        Self {
            target,
            round: self.round.next(),
            guess_input: String::new(),
            phase: GamePhase::Guessing,
            reveal_started_at: None,
            reveal_progress: RevealProgress::HIDDEN,
            reveal_duration: self.reveal_duration,
            image: ImageState::Loading,
            attempts: self.attempts,
            notice: self.notice,
            downloading: self.downloading,
        }
    }

    /// Applies a fetch result, unless it belongs to an earlier round.
    #[must_use]
    pub fn image_fetched(&self, round: RoundId, image: Option<ImageUrl>) -> Transition {
        if round != self.round {
            return Transition::unchanged(self);
        }
        let mut next = self.clone();
        next.image = image.map_or(ImageState::Unavailable, ImageState::Ready);
        Transition::new(next)
    }

    /// Advances the fade-in. Progress never moves backwards.
    #[must_use]
    pub fn tick(&self, now: DateTime<Utc>) -> Transition {
        let Some(started_at) = self.reveal_started_at else {
            return Transition::unchanged(self);
        };
        if !self.is_revealed() {
            return Transition::unchanged(self);
        }
        let computed = RevealProgress::from_elapsed(now - started_at, self.reveal_duration);
        if computed <= self.reveal_progress {
            return Transition::unchanged(self);
        }
        let mut next = self.clone();
        next.reveal_progress = computed;
        Transition::new(next)
    }

    /// Hands the current image to the downloader.
    ///
    /// Does nothing unless the image is revealed and no download is running.
    /// Without an image for this round the failure notice is shown instead.
    #[must_use]
    pub fn request_download(&self) -> Transition {
        if !self.can_download() {
            return Transition::unchanged(self);
        }
        let mut next = self.clone();
        match self.image.url() {
            Some(url) => {
                next.downloading = true;
                next.notice = None;
                Transition::new(next).with_effect(GameEffect::Download(url.clone()))
            }
            None => {
                next.notice = Some(Notice::DownloadFailed);
                Transition::new(next)
            }
        }
    }

    #[must_use]
    pub fn download_finished(&self, outcome: DownloadOutcome) -> Transition {
        let mut next = self.clone();
        next.downloading = false;
        next.notice = Some(match outcome {
            DownloadOutcome::Saved => Notice::DownloadSucceeded,
            DownloadOutcome::Failed => Notice::DownloadFailed,
        });
        Transition::new(next)
    }

    #[must_use]
    pub fn dismiss_notice(&self) -> Transition {
        if self.notice.is_none() {
            return Transition::unchanged(self);
        }
        let mut next = self.clone();
        next.notice = None;
        Transition::new(next)
    }
}

use std::sync::Arc;

use chrono::Duration;
use guess_core::model::{ImageUrl, RoundId};
use guess_core::{
    Clock, DEFAULT_REVEAL_MILLIS, DownloadOutcome, GameAction, GameEffect, GameSession, Transition,
};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::downloader::{Downloader, HttpDownloader};
use crate::image_provider::{HttpImageProvider, ImageProvider};
use crate::targets::{RandomTargets, TargetSource};

/// Drives a `GameSession`: supplies randomness and time to its transitions
/// and performs the effects they request.
#[derive(Clone)]
pub struct GameLoopService {
    clock: Clock,
    reveal_duration: Duration,
    targets: Arc<dyn TargetSource>,
    images: Arc<dyn ImageProvider>,
    downloads: Arc<dyn Downloader>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        targets: Arc<dyn TargetSource>,
        images: Arc<dyn ImageProvider>,
        downloads: Arc<dyn Downloader>,
    ) -> Self {
        Self {
            clock,
            reveal_duration: Duration::milliseconds(DEFAULT_REVEAL_MILLIS),
            targets,
            images,
            downloads,
        }
    }

    /// Wire the HTTP collaborators and random targets described by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let images = HttpImageProvider::new(config.image_endpoint.clone());
        let downloads = HttpDownloader::new(
            config.download_dir.clone(),
            config.download_file_name.clone(),
        );
        Self::new(
            Clock::default_clock(),
            Arc::new(RandomTargets),
            Arc::new(images),
            Arc::new(downloads),
        )
        .with_reveal_duration(config.reveal_duration)
    }

    #[must_use]
    pub fn with_reveal_duration(mut self, reveal_duration: Duration) -> Self {
        self.reveal_duration = reveal_duration;
        self
    }

    /// Session for a freshly mounted screen.
    #[must_use]
    pub fn start_game(&self) -> Transition {
        let transition = GameSession::start(self.targets.next_target(), self.reveal_duration);
        debug!(round = %transition.session.round(), "game started");
        transition
    }

    /// Submit whatever the player has typed so far.
    #[must_use]
    pub fn submit_guess(&self, session: &GameSession) -> Transition {
        session.reduce(GameAction::SubmitGuess {
            next_target: self.targets.next_target(),
            now: self.clock.now(),
        })
    }

    #[must_use]
    pub fn start_new_round(&self, session: &GameSession) -> Transition {
        let transition = session.reduce(GameAction::StartNewRound {
            target: self.targets.next_target(),
        });
        debug!(round = %transition.session.round(), "new round");
        transition
    }

    #[must_use]
    pub fn tick(&self, session: &GameSession) -> Transition {
        session.reduce(GameAction::Tick {
            now: self.clock.now(),
        })
    }

    /// Fetch the image of `round`. Failures are logged and reported as "no image".
    pub async fn fetch_image(&self, round: RoundId) -> GameAction {
        let image = match self.images.fetch_random_image().await {
            Ok(url) => {
                debug!(%round, %url, "image fetched");
                Some(url)
            }
            Err(err) => {
                warn!(%round, error = %err, "image fetch failed, keeping placeholder");
                None
            }
        };
        GameAction::ImageFetched { round, image }
    }

    pub async fn download(&self, url: &ImageUrl) -> GameAction {
        let outcome = match self.downloads.download(url).await {
            Ok(receipt) => {
                info!(path = %receipt.path.display(), bytes = receipt.bytes, "image downloaded");
                DownloadOutcome::Saved
            }
            Err(err) => {
                warn!(%url, error = %err, "image download failed");
                DownloadOutcome::Failed
            }
        };
        GameAction::DownloadFinished { outcome }
    }

    /// Perform a network effect and return the action that reports its result.
    ///
    /// `AnimateReveal` is frame driven and left to the caller; it yields `None`.
    pub async fn perform(&self, effect: &GameEffect) -> Option<GameAction> {
        match effect {
            GameEffect::FetchImage(round) => Some(self.fetch_image(*round).await),
            GameEffect::Download(url) => Some(self.download(url).await),
            GameEffect::AnimateReveal(_) => None,
        }
    }
}

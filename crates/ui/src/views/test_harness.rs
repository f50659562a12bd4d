use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use guess_core::model::{ImageUrl, ImageUrlError, Target};
use guess_core::time::fixed_clock;
use guess_core::GameSession;
use services::{
    Clock, DownloadError, DownloadReceipt, Downloader, FetchError, GameLoopService, ImageProvider,
    ScriptedTargets,
};

use crate::context::{UiApp, build_app_context};
use crate::vm::GameIntent;
use crate::views::GameView;
use crate::views::game::GameTestHandles;

pub const TEST_IMAGE: &str = "https://images.example.com/reward-42.jpg";

pub struct TestImages {
    fail: bool,
}

#[async_trait]
impl ImageProvider for TestImages {
    async fn fetch_random_image(&self) -> Result<ImageUrl, FetchError> {
        if self.fail {
            return Err(FetchError::InvalidUrl(ImageUrlError::Empty));
        }
        Ok(ImageUrl::parse(TEST_IMAGE)?)
    }
}

#[derive(Default)]
pub struct TestDownloads {
    fail: bool,
    pub seen: Mutex<Vec<String>>,
}

#[async_trait]
impl Downloader for TestDownloads {
    async fn download(&self, url: &ImageUrl) -> Result<DownloadReceipt, DownloadError> {
        self.seen.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(DownloadError::Io(std::io::Error::other("read-only storage")));
        }
        Ok(DownloadReceipt {
            path: "/tmp/image.jpg".into(),
            bytes: 42,
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HarnessOptions {
    pub fail_fetch: bool,
    pub fail_download: bool,
    pub show_target_hint: bool,
    /// Fade-in length. Zero completes the reveal on the guess itself on a
    /// fixed clock; anything longer runs the frame loop on wall-clock time.
    pub reveal_ms: i64,
}

struct TestApp {
    game_loop: Arc<GameLoopService>,
    show_target_hint: bool,
}

impl UiApp for TestApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    fn show_target_hint(&self) -> bool {
        self.show_target_hint
    }
}

#[derive(Props, Clone)]
struct GameHarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for GameHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for GameHarnessProps {}

#[component]
fn GameHarness(props: GameHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub downloads: Arc<TestDownloads>,
    handles: GameTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until spawned fetch/download tasks have reported back.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Drive frames until `done` holds for the session, or give up after `rounds`.
    pub async fn drive_until(&mut self, rounds: usize, done: impl Fn(&GameSession) -> bool) {
        for _ in 0..rounds {
            if done(&self.session()) {
                return;
            }
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> GameSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(targets: &[i64], options: HarnessOptions) -> ViewHarness {
    let script = targets
        .iter()
        .map(|value| Target::new(*value).expect("valid target"))
        .collect();
    let downloads = Arc::new(TestDownloads {
        fail: options.fail_download,
        ..TestDownloads::default()
    });
    let clock = if options.reveal_ms > 0 {
        Clock::default_clock()
    } else {
        fixed_clock()
    };
    let game_loop = GameLoopService::new(
        clock,
        Arc::new(ScriptedTargets::new(script)),
        Arc::new(TestImages {
            fail: options.fail_fetch,
        }),
        Arc::clone(&downloads) as Arc<dyn Downloader>,
    )
    .with_reveal_duration(chrono::Duration::milliseconds(options.reveal_ms));

    let app = Arc::new(TestApp {
        game_loop: Arc::new(game_loop),
        show_target_hint: options.show_target_hint,
    });
    let handles = GameTestHandles::default();
    let dom = VirtualDom::new_with_props(
        GameHarness,
        GameHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        downloads,
        handles,
    }
}

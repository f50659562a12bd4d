use guess_core::RevealProgress;

use crate::vm::GameIntent;

use super::test_harness::{HarnessOptions, TEST_IMAGE, ViewHarness, setup_view_harness};

async fn guess(harness: &mut ViewHarness, text: &str) {
    harness.dispatch(GameIntent::EditGuess(text.to_string()));
    harness.dispatch(GameIntent::Submit);
    harness.settle().await;
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_guessing_screen() {
    let mut harness = setup_view_harness(&[7], HarnessOptions::default());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for expected in [
        "Guess the Number Game",
        "Guess a number between 1 and 10:",
        "guess-input",
        "guess-submit",
        "Attempts: 0",
        "alt=\"Reward\"",
        "opacity: 0.00;",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("game-download"), "unexpected reveal controls in {html}");
    assert!(!html.contains("game-notice"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_reveals_image_on_correct_guess() {
    let mut harness = setup_view_harness(&[7], HarnessOptions::default());
    harness.rebuild();
    harness.settle().await;

    guess(&mut harness, "7").await;

    let session = harness.session();
    assert!(session.is_revealed());
    let html = harness.render();
    for expected in [
        "game-reload",
        "game-download",
        "game-close",
        TEST_IMAGE,
        "opacity: 1.00;",
        "Attempts: 1",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("guess-submit"), "guess button still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_shows_notice_on_wrong_guess() {
    let mut harness = setup_view_harness(&[3, 8], HarnessOptions::default());
    harness.rebuild();
    harness.settle().await;

    guess(&mut harness, "5").await;

    let session = harness.session();
    assert!(!session.is_revealed());
    assert_eq!(session.target().value(), 8);
    assert_eq!(session.guess_input(), "");
    let html = harness.render();
    assert!(
        html.contains("Incorrect guess. Try again!"),
        "missing notice in {html}"
    );
    assert!(html.contains("Attempts: 1"), "missing attempts in {html}");

    harness.dispatch(GameIntent::DismissNotice);
    let html = harness.render();
    assert!(!html.contains("Incorrect guess"), "notice not dismissed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_keeps_placeholder_when_fetch_fails() {
    let mut harness = setup_view_harness(
        &[4],
        HarnessOptions {
            fail_fetch: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;

    guess(&mut harness, "4").await;

    let session = harness.session();
    assert!(session.is_revealed());
    assert!(session.image_url().is_none());
    let html = harness.render();
    assert!(!html.contains(TEST_IMAGE), "unexpected image in {html}");
    assert!(!html.contains("game-notice"), "fetch failure must stay silent: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_downloads_revealed_image() {
    let mut harness = setup_view_harness(&[2], HarnessOptions::default());
    harness.rebuild();
    harness.settle().await;
    guess(&mut harness, "2").await;

    harness.dispatch(GameIntent::Download);
    harness.settle().await;

    let seen = harness.downloads.seen.lock().unwrap().clone();
    assert_eq!(seen, vec![TEST_IMAGE.to_string()]);
    let html = harness.render();
    assert!(
        html.contains("Image downloaded successfully!"),
        "missing success notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_reports_failed_download() {
    let mut harness = setup_view_harness(
        &[2],
        HarnessOptions {
            fail_download: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;
    guess(&mut harness, "2").await;

    harness.dispatch(GameIntent::Download);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to download image!"),
        "missing failure notice in {html}"
    );
    assert!(html.contains("game-notice--failure"), "missing failure style in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_play_again_starts_over() {
    // A correct guess still draws a target, so the script repeats the first one.
    let mut harness = setup_view_harness(&[6, 6, 9], HarnessOptions::default());
    harness.rebuild();
    harness.settle().await;
    guess(&mut harness, "6").await;

    harness.dispatch(GameIntent::NewRound);
    harness.settle().await;

    let session = harness.session();
    assert!(!session.is_revealed());
    assert_eq!(session.target().value(), 9);
    assert_eq!(session.attempts(), 0);
    let html = harness.render();
    assert!(html.contains("guess-submit"), "missing guess button in {html}");
    assert!(html.contains("Attempts: 0"), "missing reset attempts in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_shows_target_hint_when_enabled() {
    let mut harness = setup_view_harness(
        &[7],
        HarnessOptions {
            show_target_hint: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("You have 7 tries"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_fades_in_until_fully_visible() {
    let mut harness = setup_view_harness(
        &[5],
        HarnessOptions {
            reveal_ms: 40,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(GameIntent::EditGuess("5".to_string()));
    harness.dispatch(GameIntent::Submit);
    let started = harness.session().reveal_progress();
    assert!(!started.is_complete(), "fade-in should start hidden");

    harness
        .drive_until(40, |session| session.reveal_progress().is_complete())
        .await;

    let session = harness.session();
    assert!(session.is_revealed());
    assert_eq!(session.reveal_progress(), RevealProgress::COMPLETE);
    let html = harness.render();
    assert!(html.contains("opacity: 1.00;"), "image not fully visible in {html}");

    // The frame loop stops at completion, so later frames change nothing.
    let settled = harness.session();
    harness.settle().await;
    assert_eq!(harness.session(), settled);
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_new_round_cancels_fade_in() {
    let mut harness = setup_view_harness(
        &[6, 6, 9],
        HarnessOptions {
            reveal_ms: 2_000,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(GameIntent::EditGuess("6".to_string()));
    harness.dispatch(GameIntent::Submit);
    harness
        .drive_until(20, |session| session.reveal_progress() > RevealProgress::HIDDEN)
        .await;
    let midway = harness.session().reveal_progress();
    assert!(midway > RevealProgress::HIDDEN && !midway.is_complete());

    harness.dispatch(GameIntent::NewRound);
    for _ in 0..6 {
        harness.drive_async().await;
        let session = harness.session();
        assert!(!session.is_revealed());
        assert_eq!(session.reveal_progress(), RevealProgress::HIDDEN);
    }
    let html = harness.render();
    assert!(html.contains("opacity: 0.00;"), "image still visible in {html}");
}

use std::sync::Arc;

use kanji_core::model::{AggregateStats, ModuleId, StatsDelta};
use storage::repository::{InMemoryRepository, StatsRepository, Storage};

use super::test_harness::{
    setup_handle_harness, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::{PromptKind, SessionIntent};

fn finish_test(correct: usize, total: usize) -> Vec<SessionIntent> {
    (0..total)
        .flat_map(|i| [SessionIntent::Reveal, SessionIntent::Grade(i < correct)])
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_lists_modules_and_guides() {
    let mut harness = setup_view_harness(Vec::new()).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Kanji Drill"), "missing title in {html}");
    assert!(html.contains("N5 Basics: Numbers 1-10"), "missing module in {html}");
    assert!(html.contains("Start custom test"), "missing custom start in {html}");
    assert!(html.contains("Hiragana"), "missing guide tab in {html}");
    assert!(html.contains("Reviews"), "missing stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_shows_persisted_stats() {
    let stored = AggregateStats::default().apply(StatsDelta::new(10, 8));
    let storage = Storage {
        stats: Arc::new(InMemoryRepository::with_stats(stored)),
    };
    let mut harness = setup_view_harness_with_storage(storage, Vec::new()).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("80%"), "missing accuracy in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn overview_view_smoke_renders_character_grid() {
    let mut harness = setup_view_harness(vec![SessionIntent::ViewModule(ModuleId::new(2))]).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("N5 Basics: Numbers 1-10"), "missing title in {html}");
    assert!(html.contains('一') && html.contains('十'), "missing glyphs in {html}");
    assert!(html.contains("Start"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_card_details() {
    let mut harness =
        setup_view_harness(vec![SessionIntent::Launch(ModuleId::new(6), 1)]).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("2 / 10"), "missing position in {html}");
    assert!(html.contains("School"), "missing gloss in {html}");
    assert!(html.contains("こう"), "missing reading in {html}");
    assert!(html.contains('校'), "missing glyph in {html}");
    assert!(html.contains("Show mnemonic"), "missing disclosure in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_hides_answer_until_revealed() {
    let mut harness = setup_view_harness(vec![
        SessionIntent::StartStudy(ModuleId::new(1)),
        SessionIntent::StartTest,
    ])
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Day / Sun"), "missing prompt in {html}");
    assert!(html.contains("Reveal answer"), "missing reveal in {html}");
    assert!(!html.contains("Incorrect"), "grade buttons shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_shows_grades_after_reveal() {
    let mut harness = setup_view_harness(vec![
        SessionIntent::StartStudy(ModuleId::new(1)),
        SessionIntent::StartTest,
        SessionIntent::Reveal,
    ])
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("にち / ひ"), "missing readings in {html}");
    assert!(html.contains("Incorrect"), "missing grade in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_smoke_renders_score() {
    let mut script = vec![
        SessionIntent::StartStudy(ModuleId::new(2)),
        SessionIntent::StartTest,
    ];
    script.extend(finish_test(7, 10));
    let mut harness = setup_view_harness(script).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("You scored 7 / 10"), "missing score in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert_eq!(harness.services.stats().snapshot().modules_completed(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn dispatch_persists_committed_totals() {
    let repo = Arc::new(InMemoryRepository::new());
    let storage = Storage {
        stats: repo.clone(),
    };
    let (mut harness, handles) = setup_handle_harness(storage).await;
    harness.rebuild();

    handles.dispatch(SessionIntent::StartStudy(ModuleId::new(2)));
    handles.dispatch(SessionIntent::StartTest);
    for intent in finish_test(7, 10) {
        handles.dispatch(intent);
    }
    harness.drive_async().await;

    let expected = AggregateStats::default().apply(StatsDelta::new(10, 7));
    assert_eq!(repo.load_stats().await.unwrap(), Some(expected));
    let html = harness.render();
    assert!(html.contains("You scored 7 / 10"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn entering_a_test_resets_prompt_to_meaning() {
    let (mut harness, handles) = setup_handle_harness(Storage::in_memory()).await;
    harness.rebuild();

    handles.dispatch(SessionIntent::StartStudy(ModuleId::new(1)));
    handles.dispatch(SessionIntent::StartTest);
    handles.set_prompt(PromptKind::Readings);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains(PromptKind::Readings.instruction()),
        "readings prompt not applied in {html}"
    );

    handles.dispatch(SessionIntent::ExitToMenu);
    handles.dispatch(SessionIntent::StartStudy(ModuleId::new(1)));
    handles.dispatch(SessionIntent::StartTest);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains(PromptKind::Meaning.instruction()),
        "prompt not reset in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn stroke_slot_follows_displayed_glyph() {
    let (mut harness, handles) = setup_handle_harness(Storage::in_memory()).await;
    harness.rebuild();
    assert_eq!(handles.stroke_glyph(), None);

    handles.dispatch(SessionIntent::StartStudy(ModuleId::new(1)));
    assert_eq!(handles.stroke_glyph(), Some('日'));
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Loading..."), "offline lookup never settled in {html}");
    assert!(html.contains("glyph-large"), "missing glyph fallback in {html}");

    handles.dispatch(SessionIntent::Advance);
    assert_eq!(handles.stroke_glyph(), Some('木'));

    handles.dispatch(SessionIntent::ExitToMenu);
    assert_eq!(handles.stroke_glyph(), None);
}

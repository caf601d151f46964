use dioxus::prelude::*;
use kanji_core::Phase;

use super::handle::SessionHandle;
use super::menu::MenuView;
use super::overview::OverviewView;
use super::study::StudyView;
use super::summary::SummaryView;
use super::test_mode::TestView;

/// Renders the screen for the current session phase.
#[component]
pub fn SessionRoot() -> Element {
    let handle = use_context::<SessionHandle>();
    let phase = handle.state().phase();

    match phase {
        Phase::Menu => rsx! { MenuView {} },
        Phase::Overview => rsx! { OverviewView {} },
        Phase::Study => rsx! { StudyView {} },
        Phase::Test => rsx! { TestView {} },
        Phase::Summary => rsx! { SummaryView {} },
    }
}

mod guide;
mod handle;
mod lookup;
mod menu;
mod overview;
mod practice_pad;
mod session;
mod stroke_viewer;
mod study;
mod summary;
mod test_mode;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use guide::GuidePanel;
pub use handle::{SessionHandle, use_session_handle, use_session_handle_with};
pub use lookup::LookupPanel;
pub use menu::MenuView;
pub use overview::OverviewView;
pub use practice_pad::PracticePad;
pub use session::SessionRoot;
pub use stroke_viewer::{StrokePanel, StrokeViewer};
pub use study::StudyView;
pub use summary::SummaryView;
pub use test_mode::TestView;

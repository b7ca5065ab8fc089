pub mod page;
pub mod status_bar;

pub use page::PageWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;

/// Full-frame layout: the page view with a one-line status bar under it.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
    PageWidget::render(frame, chunks[0], app);
    StatusBarWidget::render(frame, chunks[1], app);
}

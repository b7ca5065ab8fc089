use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use bouncekit_core::Direction;

use crate::app::App;
use crate::theme::Palette;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let bound_str = if app.bouncer.is_bound() {
            "BOUND"
        } else {
            "IDLE"
        };
        let direction_str = match app.bouncer.direction() {
            Direction::Down => "v",
            Direction::Up => "^",
        };
        let limits_str = match app.bouncer.limits() {
            Some(limits) => format!(
                "top {:.0} rev {:.0} bottom {:.0}",
                limits.top, limits.top_reverse, limits.bottom
            ),
            None => "limits unresolved".to_string(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(
                " {} | {} {:.0}/{:.0} | {}",
                bound_str,
                direction_str,
                app.page.position(),
                app.page.max_scroll(),
                limits_str
            )
        };

        let help_hint = " q:quit j/k:scroll d/u:half g/G:ends b:bind x:unbind ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Palette::FG).bg(Palette::STATUS_BG),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(Palette::STATUS_BG),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(Palette::DIM).bg(Palette::STATUS_BG),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use bouncekit_core::ClassMutator;

use crate::app::App;
use crate::theme::Palette;

/// Renders the visible slice of the simulated page. Sections are drawn as
/// filled bands scaled from document pixels to terminal rows; a section
/// currently carrying the bounce class is highlighted and labeled with it.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" simulated page ")
            .style(Style::default().fg(Palette::DIM).bg(Palette::BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let position = app.page.position();
        let viewport = app.page.viewport_height();
        let rows_per_px = f64::from(inner.height) / viewport;
        let class = app.bouncer.options().bounce_class.as_str();

        let mut doc_top = 0.0;
        for (index, section) in app.page.sections().iter().enumerate() {
            let doc_bottom = doc_top + section.height;
            let visible_top = doc_top.max(position);
            let visible_bottom = doc_bottom.min(position + viewport);
            doc_top = doc_bottom;
            if visible_bottom <= visible_top {
                continue;
            }

            let row_top = ((visible_top - position) * rows_per_px).round() as u16;
            let row_bottom = (((visible_bottom - position) * rows_per_px).round() as u16)
                .min(inner.height);
            if row_bottom <= row_top {
                continue;
            }

            let rect = Rect {
                x: inner.x,
                y: inner.y + row_top,
                width: inner.width,
                height: row_bottom - row_top,
            };

            let bounced = app.page.has_class(section.handle(), class);
            let base = if index % 2 == 0 {
                Palette::PANEL
            } else {
                Palette::PANEL_ALT
            };
            let style = if bounced {
                Style::default()
                    .fg(Palette::BG)
                    .bg(Palette::BOUNCE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Palette::FG).bg(base)
            };
            let label = if bounced {
                format!(" #{} .{}", section.name, class)
            } else {
                format!(" #{}", section.name)
            };

            frame.render_widget(Paragraph::new(label).style(style), rect);
        }
    }
}

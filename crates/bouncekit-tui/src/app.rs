use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use bouncekit_core::{ScrollBouncer, Targets};

use crate::config::DemoConfig;
use crate::sim::SimulatedPage;

/// Demo application state: the simulated page plus the bouncer driven
/// against it. The event loop forwards every actual position change to the
/// bouncer, which is exactly what a scroll feed on a real document does.
pub struct App {
    pub page: SimulatedPage,
    pub bouncer: ScrollBouncer,
    scroll_step: f64,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the page and an already-bound bouncer from the demo config.
    pub fn new(config: &DemoConfig) -> Result<Self> {
        let mut page = SimulatedPage::new(
            config.page.viewport_height,
            config
                .page
                .sections
                .iter()
                .map(|section| (section.name.clone(), section.height)),
        );

        let targets = Targets::from(config.page.targets.clone());
        let mut bouncer = ScrollBouncer::new(&page, targets, config.bounce.clone())?;
        bouncer.bounce(&mut page);

        Ok(Self {
            page,
            bouncer,
            scroll_step: config.ui.scroll_step,
            status_message: None,
            should_quit: false,
        })
    }

    pub fn bind(&mut self) {
        self.bouncer.bounce(&mut self.page);
        info!("bouncer bound");
        self.status_message = Some("bound to scroll feed".into());
    }

    pub fn unbind(&mut self) {
        self.bouncer.unbind(&mut self.page);
        info!("bouncer unbound");
        self.status_message = Some("unbound, scrolling is inert".into());
    }

    /// Scroll the page and, when the position actually moved, deliver the
    /// event to the bouncer.
    pub fn scroll_by(&mut self, delta: f64) {
        if self.page.scroll_by(delta) {
            self.bouncer.on_scroll(&mut self.page);
        }
    }

    pub fn wheel(&mut self, steps: i32) {
        self.scroll_by(f64::from(steps) * self.scroll_step);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(self.scroll_step),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-self.scroll_step),
            KeyCode::Char('d') | KeyCode::PageDown => {
                self.scroll_by(self.page.viewport_height() / 2.0)
            }
            KeyCode::Char('u') | KeyCode::PageUp => {
                self.scroll_by(-self.page.viewport_height() / 2.0)
            }
            KeyCode::Char(' ') => self.scroll_by(self.page.viewport_height()),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_by(-self.page.position()),
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll_by(self.page.max_scroll() - self.page.position())
            }
            KeyCode::Char('b') => self.bind(),
            KeyCode::Char('x') => self.unbind(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use bouncekit_core::{ClassMutator, ElementResolver};

    use super::*;

    #[test]
    fn test_scrolling_the_demo_page_toggles_the_class() {
        let config = DemoConfig::default();
        let mut app = App::new(&config).unwrap();
        let header = app.page.resolve("#header").unwrap();

        // Default top limit equals the viewport height (800).
        app.scroll_by(900.0);
        assert!(app.page.has_class(header, "bounce"));

        // Back up past the reverse limit (400).
        app.scroll_by(-600.0);
        assert!(!app.page.has_class(header, "bounce"));
    }

    #[test]
    fn test_unbound_app_ignores_scrolling() {
        let config = DemoConfig::default();
        let mut app = App::new(&config).unwrap();
        let header = app.page.resolve("#header").unwrap();

        app.unbind();
        app.scroll_by(900.0);
        assert!(!app.page.has_class(header, "bounce"));
        assert_eq!(app.page.subscriber_count(), 0);
    }
}

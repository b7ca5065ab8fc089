//! Simulated page: an in-memory stand-in for a scrolling document.
//!
//! The page is a vertical stack of named sections measured in document
//! pixels, with a viewport, a scroll offset, and a class set per section.
//! It implements all four host capabilities the core consumes, so a
//! [`bouncekit_core::ScrollBouncer`] can be driven against it exactly as it
//! would be against a real document.

use std::collections::{BTreeSet, HashMap, HashSet};

use bouncekit_core::{
    ClassMutator, DocumentGeometry, ElementHandle, ElementResolver, ScrollBinding, ScrollFeed,
    Viewport,
};

/// One named vertical section, in document pixels.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub height: f64,
    handle: ElementHandle,
}

impl Section {
    pub fn handle(&self) -> ElementHandle {
        self.handle
    }
}

pub struct SimulatedPage {
    sections: Vec<Section>,
    classes: HashMap<ElementHandle, BTreeSet<String>>,
    viewport_height: f64,
    scroll_top: f64,
    next_binding: u64,
    subscribers: HashSet<ScrollBinding>,
}

impl SimulatedPage {
    pub fn new(viewport_height: f64, sections: impl IntoIterator<Item = (String, f64)>) -> Self {
        let sections = sections
            .into_iter()
            .enumerate()
            .map(|(index, (name, height))| Section {
                name,
                height: height.max(0.0),
                handle: ElementHandle(index as u64 + 1),
            })
            .collect();

        Self {
            sections,
            classes: HashMap::new(),
            viewport_height: viewport_height.max(1.0),
            scroll_top: 0.0,
            next_binding: 0,
            subscribers: HashSet::new(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn total_height(&self) -> f64 {
        self.sections.iter().map(|s| s.height).sum()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    /// Current scroll offset (same value the `Viewport` impl reports).
    pub fn position(&self) -> f64 {
        self.scroll_top
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Move by `delta` pixels, clamped to the scrollable range. Returns
    /// whether the position actually changed; hosts only emit scroll
    /// events for real movement.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.scroll_to(self.scroll_top + delta)
    }

    pub fn scroll_to(&mut self, position: f64) -> bool {
        let clamped = position.clamp(0.0, self.max_scroll());
        let changed = clamped != self.scroll_top;
        self.scroll_top = clamped;
        changed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl ElementResolver for SimulatedPage {
    /// `"#name"` or bare `"name"`, first match wins.
    fn resolve(&self, descriptor: &str) -> Option<ElementHandle> {
        let name = descriptor.trim().trim_start_matches('#');
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| section.handle)
    }
}

impl ClassMutator for SimulatedPage {
    fn has_class(&self, element: ElementHandle, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|set| set.contains(class))
    }

    fn add_class(&mut self, element: ElementHandle, class: &str) {
        self.classes
            .entry(element)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&mut self, element: ElementHandle, class: &str) {
        if let Some(set) = self.classes.get_mut(&element) {
            set.remove(class);
        }
    }
}

impl Viewport for SimulatedPage {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn geometry(&self) -> DocumentGeometry {
        let total = self.total_height();
        DocumentGeometry {
            body_scroll_height: total,
            root_scroll_height: total,
            body_offset_height: total,
            root_offset_height: total,
            body_client_height: self.viewport_height,
            root_client_height: self.viewport_height,
            viewport_height: self.viewport_height,
        }
    }
}

impl ScrollFeed for SimulatedPage {
    fn subscribe(&mut self) -> ScrollBinding {
        self.next_binding += 1;
        let binding = ScrollBinding(self.next_binding);
        self.subscribers.insert(binding);
        binding
    }

    fn unsubscribe(&mut self, binding: ScrollBinding) {
        self.subscribers.remove(&binding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SimulatedPage {
        SimulatedPage::new(
            800.0,
            [("header".to_string(), 200.0), ("body".to_string(), 2600.0)],
        )
    }

    #[test]
    fn test_resolve_with_and_without_hash() {
        let page = page();
        let header = page.resolve("#header").unwrap();
        assert_eq!(page.resolve("header"), Some(header));
        assert_eq!(page.resolve("#missing"), None);
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut page = page();
        assert_eq!(page.max_scroll(), 2000.0);

        assert!(!page.scroll_by(-50.0));
        assert_eq!(page.position(), 0.0);

        assert!(page.scroll_by(5000.0));
        assert_eq!(page.position(), 2000.0);

        // Already at the bottom edge, no movement to report.
        assert!(!page.scroll_by(10.0));
    }

    #[test]
    fn test_subscription_registry() {
        let mut page = page();
        let first = page.subscribe();
        let second = page.subscribe();
        assert_ne!(first, second);
        assert_eq!(page.subscriber_count(), 2);

        page.unsubscribe(first);
        assert_eq!(page.subscriber_count(), 1);
        page.unsubscribe(first);
        assert_eq!(page.subscriber_count(), 1);
    }

    #[test]
    fn test_class_mutation() {
        let mut page = page();
        let header = page.resolve("#header").unwrap();

        assert!(!page.has_class(header, "bounce"));
        page.add_class(header, "bounce");
        assert!(page.has_class(header, "bounce"));
        page.remove_class(header, "bounce");
        assert!(!page.has_class(header, "bounce"));
    }
}

//! Host capabilities consumed by the bouncer.
//!
//! The core never touches a real document. Everything it needs from the
//! embedding environment is expressed as four small traits: element lookup,
//! class mutation, geometry/position reads, and the scroll subscription.
//! A host implements all four; `BounceHost` bundles them for convenience.

/// Opaque reference to a document element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub u64);

/// Token returned by [`ScrollFeed::subscribe`]. The bouncer stores the token
/// it received at activation and hands back that exact token on unbind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollBinding(pub u64);

/// Raw height readings for one document, as reported by the host.
///
/// Browsers disagree on which of the scroll/offset/client heights reflects
/// the full document, so the host reports all six and the bouncer takes the
/// maximum. `viewport_height` is the visible client height.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentGeometry {
    pub body_scroll_height: f64,
    pub root_scroll_height: f64,
    pub body_offset_height: f64,
    pub root_offset_height: f64,
    pub body_client_height: f64,
    pub root_client_height: f64,
    pub viewport_height: f64,
}

/// Single-result element lookup ("first match or none").
pub trait ElementResolver {
    fn resolve(&self, descriptor: &str) -> Option<ElementHandle>;
}

/// Class membership reads and mutations on host elements.
pub trait ClassMutator {
    fn has_class(&self, element: ElementHandle, class: &str) -> bool;
    fn add_class(&mut self, element: ElementHandle, class: &str);
    fn remove_class(&mut self, element: ElementHandle, class: &str);
}

/// Scroll position and geometry reads.
pub trait Viewport {
    /// Current vertical scroll position, in document units.
    fn scroll_top(&self) -> f64;

    /// Height snapshot. Read once at activation; the bouncer does not track
    /// later document growth.
    fn geometry(&self) -> DocumentGeometry;
}

/// Registration for scroll-position-changed notifications.
///
/// The host owns the delivery mechanism; the bouncer only keeps the token so
/// that unsubscription targets the registration made at bind time.
pub trait ScrollFeed {
    fn subscribe(&mut self) -> ScrollBinding;
    fn unsubscribe(&mut self, binding: ScrollBinding);
}

/// Everything a [`crate::bounce::ScrollBouncer`] needs from its host.
pub trait BounceHost: ElementResolver + ClassMutator + Viewport + ScrollFeed {}

impl<T: ElementResolver + ClassMutator + Viewport + ScrollFeed> BounceHost for T {}

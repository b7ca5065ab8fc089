//! Scroll bouncer: toggles a class on target elements from scroll position.
//!
//! A [`ScrollBouncer`] is constructed with a target descriptor and an options
//! patch, then activated with [`ScrollBouncer::bounce`]. Activation measures
//! the document once, resolves targets and limits, and registers with the
//! host's scroll feed. From then on the host forwards every scroll event to
//! [`ScrollBouncer::on_scroll`], which applies two rules per element:
//!
//! - add the class when the position reaches the `top` limit;
//! - remove it when moving up past `top_reverse`, or moving down once the
//!   viewport bottom edge (plus correction) reaches the `bottom` limit.
//!
//! Both rules are evaluated on every event, apply first. When both fire in
//! the same pass, remove wins.
//!
//! The whole thing is synchronous and single-threaded: the host hands itself
//! in by mutable borrow, so one invocation always completes before the next
//! can start.

pub mod dimensions;

pub use dimensions::{Dimensions, ResolvedLimits};

use tracing::{debug, trace, warn};

use crate::config::{merge_options, BounceOptions, Direction, OptionsPatch, TargetRef, Targets};
use crate::error::Result;
use crate::host::{BounceHost, ClassMutator, ElementHandle, ElementResolver, ScrollBinding, ScrollFeed, Viewport};

/// Everything taken at activation time: the geometry snapshot, the limits
/// resolved against it, and the scroll subscription token.
#[derive(Debug, Clone, Copy)]
struct Attachment {
    dimensions: Dimensions,
    limits: ResolvedLimits,
    binding: ScrollBinding,
}

/// Scroll-position-to-class-state mapper.
pub struct ScrollBouncer {
    targets: Targets,
    patch: OptionsPatch,
    options: BounceOptions,
    /// Resolved once per activation; `None` entries are unresolvable
    /// descriptors, kept in sequence but inert.
    resolved: Vec<Option<ElementHandle>>,
    attached: Option<Attachment>,
    last_scroll_top: f64,
    direction: Direction,
}

impl ScrollBouncer {
    /// Validates the target descriptor and caches the host's current scroll
    /// position as the starting comparison value.
    pub fn new<H: Viewport>(host: &H, targets: impl Into<Targets>, patch: OptionsPatch) -> Result<Self> {
        let targets = targets.into();
        targets.validate()?;

        Ok(Self {
            targets,
            patch,
            options: BounceOptions::default(),
            resolved: Vec::new(),
            attached: None,
            last_scroll_top: host.scroll_top(),
            direction: Direction::default(),
        })
    }

    /// Activate: measure the document, resolve targets, merge options,
    /// resolve limits, and subscribe to the scroll feed, in that order,
    /// since the limit defaults depend on the measurement.
    ///
    /// A patch that fails to merge is logged and dropped; activation
    /// proceeds on defaults. Re-activating an already-bound bouncer
    /// refreshes the snapshot but keeps the existing subscription.
    pub fn bounce<H: BounceHost>(&mut self, host: &mut H) {
        let dimensions = Dimensions::measure(&host.geometry());

        self.resolved = match &self.targets {
            Targets::One(target) => vec![resolve_ref(host, target)],
            Targets::Many(targets) => targets.iter().map(|t| resolve_ref(host, t)).collect(),
        };

        self.options = match merge_options(&BounceOptions::default(), &self.patch) {
            Ok(options) => options,
            Err(error) => {
                warn!(%error, "options merge failed, keeping defaults");
                BounceOptions::default()
            }
        };
        self.direction = self.options.direction;

        let limits = ResolvedLimits::resolve(&self.options.limits, &dimensions);
        let binding = match self.attached.take() {
            Some(previous) => previous.binding,
            None => host.subscribe(),
        };
        self.attached = Some(Attachment {
            dimensions,
            limits,
            binding,
        });

        debug!(
            class = %self.options.bounce_class,
            top = limits.top,
            top_reverse = limits.top_reverse,
            bottom = limits.bottom,
            targets = self.resolved.len(),
            unresolved = self.resolved.iter().filter(|t| t.is_none()).count(),
            "scroll bouncer bound"
        );
    }

    /// Detach from the scroll feed, returning the exact token taken at
    /// [`bounce`](Self::bounce) time. Idempotent: a bouncer that was never
    /// bound, or was already unbound, is left untouched.
    pub fn unbind<H: ScrollFeed>(&mut self, host: &mut H) {
        if let Some(attachment) = self.attached.take() {
            host.unsubscribe(attachment.binding);
            debug!("scroll bouncer unbound");
        }
    }

    /// Handle one scroll-position-changed event. No-op while unbound.
    pub fn on_scroll<H: BounceHost>(&mut self, host: &mut H) {
        let Some(attachment) = self.attached else {
            return;
        };

        let pos_top = host.scroll_top();
        // Strictly-greater comparison: an equal read counts as "up".
        self.direction = if pos_top > self.last_scroll_top {
            Direction::Down
        } else {
            Direction::Up
        };
        self.last_scroll_top = pos_top;
        trace!(pos_top, direction = ?self.direction, "scroll event");

        for target in &self.resolved {
            let Some(element) = *target else { continue };
            self.apply_class_rules(host, element, pos_top, &attachment);
        }
    }

    fn apply_class_rules<H: ClassMutator>(
        &self,
        host: &mut H,
        element: ElementHandle,
        pos_top: f64,
        attachment: &Attachment,
    ) {
        let class = self.options.bounce_class.as_str();
        let limits = attachment.limits;
        let bottom_point = pos_top + attachment.dimensions.current_height + self.options.bottom_correction;

        if !host.has_class(element, class) && pos_top >= limits.top {
            host.add_class(element, class);
            trace!(?element, class, pos_top, "class applied");
        }

        let reverse_hit = self.direction == Direction::Up && pos_top <= limits.top_reverse;
        let bottom_hit =
            limits.bottom_enabled() && self.direction == Direction::Down && bottom_point >= limits.bottom;
        if reverse_hit || bottom_hit {
            host.remove_class(element, class);
            trace!(?element, class, pos_top, reverse_hit, bottom_hit, "class removed");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.attached.is_some()
    }

    /// Options in effect. Defaults until the first [`bounce`](Self::bounce).
    pub fn options(&self) -> &BounceOptions {
        &self.options
    }

    /// Limits resolved at the last activation, if any.
    pub fn limits(&self) -> Option<ResolvedLimits> {
        self.attached.map(|a| a.limits)
    }

    /// Dimensions measured at the last activation, if any.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.attached.map(|a| a.dimensions)
    }

    /// Resolution outcome per target, in descriptor order.
    pub fn resolved(&self) -> &[Option<ElementHandle>] {
        &self.resolved
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }
}

fn resolve_ref<H: ElementResolver>(host: &H, target: &TargetRef) -> Option<ElementHandle> {
    match target {
        TargetRef::Element(element) => Some(*element),
        TargetRef::Selector(selector) => {
            let element = host.resolve(selector);
            if element.is_none() {
                debug!(selector = %selector, "target selector did not resolve");
            }
            element
        }
    }
}

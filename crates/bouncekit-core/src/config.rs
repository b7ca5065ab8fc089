use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::host::ElementHandle;

/// Scroll movement sense, inferred from consecutive position reads.
///
/// Also usable as the "initial assumed direction" option: nothing has moved
/// yet when a bouncer is constructed, so the configured value stands in
/// until the first scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Down
    }
}

/// Scroll-position thresholds controlling when the class is applied and
/// removed. Unset fields are derived from the dimensions snapshot at
/// activation, see [`crate::bounce::ResolvedLimits`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Limits {
    /// Position at/above which the class is applied.
    #[serde(default)]
    pub top: Option<f64>,
    /// Position at/below which the class is removed while moving up.
    #[serde(default)]
    pub top_reverse: Option<f64>,
    /// Position at/above which the class is removed while moving down.
    /// Values ≤ 0 disable the bottom rule entirely.
    #[serde(default)]
    pub bottom: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BounceOptions {
    /// Class toggled on the target elements.
    #[serde(default = "default_bounce_class")]
    pub bounce_class: String,
    /// Offset added to the viewport bottom edge before comparing against the
    /// bottom limit.
    #[serde(default)]
    pub bottom_correction: f64,
    /// Assumed direction before the first scroll event.
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub limits: Limits,
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            bounce_class: default_bounce_class(),
            bottom_correction: 0.0,
            direction: Direction::default(),
            limits: Limits::default(),
        }
    }
}

fn default_bounce_class() -> String {
    "bounce".to_string()
}

/// Caller-supplied overrides, merged over [`BounceOptions::default`] at
/// activation. Every field is optional so the patch can be deserialized
/// from a partial config table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsPatch {
    #[serde(default)]
    pub bounce_class: Option<String>,
    #[serde(default)]
    pub bottom_correction: Option<f64>,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub limits: Option<Limits>,
}

/// Overlay `patch` on `base`.
///
/// Fails when the patch cannot form a usable configuration (empty class
/// name, non-finite correction). Callers that must not abort on a bad patch
/// keep `base`; [`crate::bounce::ScrollBouncer::bounce`] does exactly that.
pub fn merge_options(base: &BounceOptions, patch: &OptionsPatch) -> Result<BounceOptions> {
    let mut merged = base.clone();

    if let Some(class) = &patch.bounce_class {
        let class = class.trim();
        if class.is_empty() {
            return Err(Error::InvalidOptions("bounce class is empty".into()));
        }
        if class.split_whitespace().count() > 1 {
            return Err(Error::InvalidOptions(format!(
                "bounce class contains whitespace: {class:?}"
            )));
        }
        merged.bounce_class = class.to_string();
    }
    if let Some(correction) = patch.bottom_correction {
        if !correction.is_finite() {
            return Err(Error::InvalidOptions(format!(
                "bottom correction is not finite: {correction}"
            )));
        }
        merged.bottom_correction = correction;
    }
    if let Some(direction) = patch.direction {
        merged.direction = direction;
    }
    if let Some(limits) = &patch.limits {
        merged.limits = limits.clone();
    }

    Ok(merged)
}

/// One element to toggle: either a lookup key resolved against the host
/// document, or an already-concrete handle that passes through unchanged.
#[derive(Debug, Clone)]
pub enum TargetRef {
    Selector(String),
    Element(ElementHandle),
}

impl From<&str> for TargetRef {
    fn from(selector: &str) -> Self {
        TargetRef::Selector(selector.to_string())
    }
}

impl From<String> for TargetRef {
    fn from(selector: String) -> Self {
        TargetRef::Selector(selector)
    }
}

impl From<ElementHandle> for TargetRef {
    fn from(element: ElementHandle) -> Self {
        TargetRef::Element(element)
    }
}

/// The elements descriptor: a single target or an ordered sequence.
#[derive(Debug, Clone)]
pub enum Targets {
    One(TargetRef),
    Many(Vec<TargetRef>),
}

impl Targets {
    /// Construction-time validation. An empty sequence or a blank selector
    /// can never resolve to anything and is rejected up front.
    pub fn validate(&self) -> Result<()> {
        match self {
            Targets::One(target) => validate_ref(target),
            Targets::Many(targets) => {
                if targets.is_empty() {
                    return Err(Error::InvalidElements("empty target sequence".into()));
                }
                for target in targets {
                    validate_ref(target)?;
                }
                Ok(())
            }
        }
    }
}

fn validate_ref(target: &TargetRef) -> Result<()> {
    match target {
        TargetRef::Selector(selector) if selector.trim().is_empty() => {
            Err(Error::InvalidElements("blank selector".into()))
        }
        _ => Ok(()),
    }
}

impl From<TargetRef> for Targets {
    fn from(target: TargetRef) -> Self {
        Targets::One(target)
    }
}

impl From<&str> for Targets {
    fn from(selector: &str) -> Self {
        Targets::One(selector.into())
    }
}

impl From<String> for Targets {
    fn from(selector: String) -> Self {
        Targets::One(selector.into())
    }
}

impl From<ElementHandle> for Targets {
    fn from(element: ElementHandle) -> Self {
        Targets::One(element.into())
    }
}

impl<T: Into<TargetRef>> From<Vec<T>> for Targets {
    fn from(targets: Vec<T>) -> Self {
        Targets::Many(targets.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = BounceOptions::default();
        assert_eq!(options.bounce_class, "bounce");
        assert_eq!(options.bottom_correction, 0.0);
        assert_eq!(options.direction, Direction::Down);
        assert!(options.limits.top.is_none());
        assert!(options.limits.top_reverse.is_none());
        assert!(options.limits.bottom.is_none());
    }

    #[test]
    fn test_merge_overrides_fields() {
        let patch = OptionsPatch {
            bounce_class: Some("sticky".into()),
            bottom_correction: Some(-40.0),
            direction: Some(Direction::Up),
            limits: Some(Limits {
                top: Some(800.0),
                top_reverse: None,
                bottom: Some(0.0),
            }),
        };
        let merged = merge_options(&BounceOptions::default(), &patch).unwrap();
        assert_eq!(merged.bounce_class, "sticky");
        assert_eq!(merged.bottom_correction, -40.0);
        assert_eq!(merged.direction, Direction::Up);
        assert_eq!(merged.limits.top, Some(800.0));
        assert_eq!(merged.limits.bottom, Some(0.0));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let patch = OptionsPatch {
            bottom_correction: Some(12.0),
            ..Default::default()
        };
        let merged = merge_options(&BounceOptions::default(), &patch).unwrap();
        assert_eq!(merged.bounce_class, "bounce");
        assert_eq!(merged.bottom_correction, 12.0);
        assert_eq!(merged.direction, Direction::Down);
    }

    #[test]
    fn test_merge_rejects_blank_class() {
        let patch = OptionsPatch {
            bounce_class: Some("   ".into()),
            ..Default::default()
        };
        assert!(merge_options(&BounceOptions::default(), &patch).is_err());
    }

    #[test]
    fn test_merge_rejects_non_finite_correction() {
        let patch = OptionsPatch {
            bottom_correction: Some(f64::NAN),
            ..Default::default()
        };
        assert!(merge_options(&BounceOptions::default(), &patch).is_err());
    }

    #[test]
    fn test_targets_validation() {
        assert!(Targets::from("#header").validate().is_ok());
        assert!(Targets::from(vec!["#header", "#footer"]).validate().is_ok());
        assert!(Targets::from(ElementHandle(3)).validate().is_ok());

        assert!(Targets::from("  ").validate().is_err());
        assert!(Targets::Many(Vec::new()).validate().is_err());
        assert!(Targets::from(vec!["#header", ""]).validate().is_err());
    }
}

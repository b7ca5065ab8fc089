pub mod bounce;
pub mod config;
pub mod error;
pub mod host;

pub use bounce::{Dimensions, ResolvedLimits, ScrollBouncer};
pub use config::{merge_options, BounceOptions, Direction, Limits, OptionsPatch, TargetRef, Targets};
pub use error::{Error, Result};
pub use host::{
    BounceHost, ClassMutator, DocumentGeometry, ElementHandle, ElementResolver, ScrollBinding,
    ScrollFeed, Viewport,
};

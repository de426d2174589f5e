pub use serde_json::Value;

pub use crate::arguments::{Argument, ArgumentList};
pub use crate::context::{Context, ScopeGuard};
pub use crate::error::{Error, Result};
pub use crate::stem::Stem;
pub use crate::tags::{Else, If, IfError, Interpolate, InterpolateError, Loop, LoopError, Tag, Tags};
pub use crate::value::{is_truthy, stringify};

mod arguments;
mod context;
mod error;
mod stem;
mod tags;
mod value;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

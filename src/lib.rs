//! Tag based text templates.
//!
//! A template is plain text with tags in it:
//!
//! ```text
//! <ul>
//! #loop(friends, "friend") {
//!   <li>#(friend.name)#if(friend.online) { (online) }</li>
//! }
//! </ul>
//! ```
//!
//! `#(path)` writes a value, `#name(arguments) { body }` runs a tag and
//! `#@@name(...)` continues a chain (`#if(a) { .. } #@@else() { .. }`).
//! Arguments are either dotted paths or quoted strings, where the string is
//! itself a template.
//!
//! ```
//! use leaflet::{Context, Document};
//! use serde_json::json;
//!
//! let document = Document::default();
//! let leaf = document.spawn_leaf_raw("#loop(names, \"name\") { Hello, #(name)! }").unwrap();
//! let context = Context::new(json!({"names": "Rick"}));
//! assert_eq!(document.render(&leaf, &context).unwrap(), "Hello, Rick!");
//! ```
pub use leaflet_render::{
    Argument, ArgumentList, Context, Else, If, IfError, Interpolate, InterpolateError, Loop, LoopError, ScopeGuard,
    Stem, Tag, Tags, Value, is_truthy, stringify,
};
pub use leaflet_render::{Error as RenderError, Result as RenderResult};
pub use leaflet_templates::{Component, Leaf, Parameter, ParseError, ParseErrorKind, TagTemplate, parse};

pub use crate::config::Config;
pub use crate::document::Document;
pub use crate::error::{Error, Result};

mod config;
mod document;
mod error;

#[cfg(feature = "testing")]
pub use leaflet_render::testing;

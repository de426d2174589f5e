use leaflet_templates::TagTemplate;
use serde_json::Value;

use super::Tag;
use crate::arguments::ArgumentList;
use crate::error::{Error, Result};
use crate::value::is_truthy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IfError {
    #[error("expected one argument")]
    ExpectedOneArgument,
}

/// `#if(value) { body }`
/// Renders if the value is truthy. Chain it with `#@@if` and `#@@else`.
#[derive(Debug, Default, Clone, Copy)]
pub struct If;

impl Tag for If {
    fn run(&self, tag: &TagTemplate, arguments: &ArgumentList<'_>) -> Result<Option<Value>> {
        if arguments.len() != 1 {
            return Err(Error::tag(tag, IfError::ExpectedOneArgument));
        }
        arguments.value(0)
    }

    fn should_render(&self, _: &TagTemplate, _: &ArgumentList<'_>, value: Option<&Value>) -> bool {
        value.is_some_and(is_truthy)
    }
}

/// `#@@else() { body }`
/// Always renders, so it catches whatever the rest of the chain didn't.
#[derive(Debug, Default, Clone, Copy)]
pub struct Else;

impl Tag for Else {
    fn run(&self, _: &TagTemplate, _: &ArgumentList<'_>) -> Result<Option<Value>> {
        Ok(None)
    }

    fn should_render(&self, _: &TagTemplate, _: &ArgumentList<'_>, _: Option<&Value>) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{Context, Stem};

    fn render(src: &str, context: Value) -> Result<String> {
        Stem::new().render_str(src, &Context::new(context))
    }

    #[test]
    fn if_else() {
        let src = "#if(admin) { admin } #@@else() { guest }";
        assert_eq!(render(src, json!({"admin": true})).unwrap(), "admin");
        assert_eq!(render(src, json!({"admin": false})).unwrap(), "guest");
        assert_eq!(render(src, json!({})).unwrap(), "guest");
    }

    #[test]
    fn else_if() {
        let src = "#if(a) {a} #@@if(b) {b} #@@else() {neither}";
        assert_eq!(render(src, json!({"a": 1, "b": 1})).unwrap(), "a");
        assert_eq!(render(src, json!({"a": 0, "b": 1})).unwrap(), "b");
        assert_eq!(render(src, json!({"a": 0, "b": 0})).unwrap(), "neither");
    }

    #[test]
    fn no_match_renders_nothing() {
        let src = "[#if(a) {a} #@@if(b) {b}]";
        assert_eq!(render(src, json!({})).unwrap(), "[]");
    }

    #[test]
    fn constant_condition() {
        let src = "#if(\"#(name)\") {named} #@@else() {anonymous}";
        assert_eq!(render(src, json!({"name": "Rick"})).unwrap(), "named");
        assert_eq!(render(src, json!({})).unwrap(), "anonymous");
    }

    #[test]
    fn arity() {
        let err = render("#if(a, b) { }", json!({})).unwrap_err();
        assert_eq!(err.tag_error::<IfError>(), Some(&IfError::ExpectedOneArgument));
    }
}

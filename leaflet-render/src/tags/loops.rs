use leaflet_templates::{Leaf, TagTemplate};
use serde_json::Value;

use super::Tag;
use crate::arguments::{Argument, ArgumentList};
use crate::error::{Error, Result};
use crate::value::stringify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoopError {
    #[error("expected two arguments")]
    ExpectedTwoArguments,
    #[error("expected the first argument to be a variable")]
    ExpectedVariable,
    #[error("expected the second argument to be a constant")]
    ExpectedConstant,
}

/// `#loop(collection, "binding") { body }`
///
/// Render the body once for every element in the collection, with the element
/// bound to `binding`, one iteration per line. A collection that isn't a list is
/// treated as a list of one, and a missing (or null) collection renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Loop;

impl Loop {
    fn check(tag: &TagTemplate, arguments: &ArgumentList<'_>) -> Result<()> {
        if arguments.len() != 2 {
            return Err(Error::tag(tag, LoopError::ExpectedTwoArguments));
        }

        if !matches!(arguments.get(0), Some(Argument::Variable { .. })) {
            return Err(Error::tag(tag, LoopError::ExpectedVariable));
        }

        if !matches!(arguments.get(1), Some(Argument::Constant(_))) {
            return Err(Error::tag(tag, LoopError::ExpectedConstant));
        }

        Ok(())
    }
}

impl Tag for Loop {
    fn run(&self, tag: &TagTemplate, arguments: &ArgumentList<'_>) -> Result<Option<Value>> {
        Self::check(tag, arguments)?;
        Ok(None)
    }

    fn should_render(&self, _: &TagTemplate, _: &ArgumentList<'_>, _: Option<&Value>) -> bool {
        true
    }

    fn render(&self, _: &TagTemplate, arguments: &ArgumentList<'_>, _: Option<Value>, body: &Leaf) -> Result<String> {
        let elements = match arguments.value(0)? {
            None | Some(Value::Null) => return Ok(String::new()),
            Some(Value::Array(elements)) => elements,
            Some(value) => vec![value],
        };

        let binding = arguments.value(1)?.as_ref().map(stringify).unwrap_or_default();
        log::trace!("loop over {} element(s) as `{binding}`", elements.len());

        let (stem, context) = (arguments.stem(), arguments.context());
        let mut iterations = Vec::with_capacity(elements.len());
        for element in elements {
            let scope = context.push_binding(binding.as_str(), element);
            iterations.push(stem.render(body, &scope)?);
        }

        Ok(iterations.join("\n"))
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

    fn loop_error(src: &str) -> LoopError {
        let err = render(src, json!({"too": "", "many": "", "arguments": ""})).unwrap_err();
        *err.tag_error::<LoopError>().unwrap()
    }

    #[test]
    fn basic_loop() {
        let src = "#loop(friends, \"friend\") {Hello, #(friend)\n}";
        let context = json!({"friends": ["asdf", "🐌", "8###z0-1", 12]});
        let output = render(src, context).unwrap();
        assert_eq!(output, "Hello, asdf\nHello, 🐌\nHello, 8###z0-1\nHello, 12");
    }

    #[test]
    fn empty_list() {
        let output = render("#loop(list, \"x\") { #(x) }", json!({"list": []})).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn skip_nil() {
        let output = render("#loop(find-nil, \"inner-name\") { asdfasdfasdfsdf }", json!({})).unwrap();
        assert_eq!(output, "");

        let output = render("#loop(null, \"x\") { never }", json!({"null": null})).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn fuzzy_single() {
        let output = render("#loop(names, \"name\") { Hello, #(name)! }", json!({"names": "Rick"})).unwrap();
        assert_eq!(output, "Hello, Rick!");
    }

    #[test]
    fn singleton_renders_like_a_list_of_one() {
        let src = "#loop(value, \"v\") {[#(v.a)]}";
        let single = render(src, json!({"value": {"a": 1}})).unwrap();
        let list = render(src, json!({"value": [{"a": 1}]})).unwrap();
        assert_eq!(single, list);
        assert_eq!(single, "[1]");
    }

    #[test]
    fn binding_is_a_rendered_constant() {
        let src = "#loop(list, \"#(name)\") {#(item)}";
        let output = render(src, json!({"list": [1, 2], "name": "item"})).unwrap();
        assert_eq!(output, "1\n2");
    }

    #[test]
    fn one_line_per_iteration() {
        let src = "#loop(list, \"x\") {\n  <li>#(x)</li>\n}";
        let output = render(src, json!({"list": ["a", "b", "c"]})).unwrap();
        assert_eq!(output, "<li>a</li>\n<li>b</li>\n<li>c</li>");

        let output = render(src, json!({"list": ["a"]})).unwrap();
        assert_eq!(output, "<li>a</li>");
    }

    #[test]
    fn nested_loop() {
        let src = "#loop(data, \"each\") { type: #(each.type)\n#loop(each.sub, \"sub\") { Hello, #(sub)\n } }";
        let context = json!({"data": [{"type": "foo", "sub": ["a", "b", "c"]}, {"type": "bar"}]});
        let output = render(src, context).unwrap();
        assert_eq!(output, "type: foo\nHello, a\nHello, b\nHello, c\ntype: bar\n");
    }

    #[test]
    fn no_body() {
        let output = render("[#loop(list, \"x\")]", json!({"list": [1, 2]})).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn wrong_number_of_arguments() {
        assert_eq!(loop_error("#loop(too, many, arguments)"), LoopError::ExpectedTwoArguments);
        assert_eq!(loop_error("#loop(too)"), LoopError::ExpectedTwoArguments);
        assert_eq!(loop_error("#loop()"), LoopError::ExpectedTwoArguments);
    }

    #[test]
    fn invalid_signature() {
        assert_eq!(loop_error("#loop(\"invalid\", \"signature\")"), LoopError::ExpectedVariable);
        assert_eq!(loop_error("#loop(invalid, signature)"), LoopError::ExpectedConstant);
    }

    #[test]
    fn errors_are_reported_before_the_body() {
        // The collection is missing, but the signature is still checked
        assert_eq!(loop_error("#loop(missing, other) { body }"), LoopError::ExpectedConstant);
    }

    #[test]
    fn scopes_do_not_leak() {
        let stem = Stem::new();
        let context = Context::new(json!({"list": [{"a": 1}, {"b": 2}]}));
        let output = stem.render_str("#loop(list, \"x\") {(#(x.a))}", &context).unwrap();
        assert_eq!(output, "(1)\n()");
        assert_eq!(context.depth(), 0);
        assert_eq!(stem.render_str("#(x)", &context).unwrap(), "");
    }

    #[test]
    fn scope_is_popped_on_error() {
        let stem = Stem::new();
        let context = Context::new(json!({"list": [1, 2]}));
        let err = stem.render_str("#loop(list, \"x\") { #unknown() }", &context).unwrap_err();
        assert!(matches!(err, Error::UnknownTag(_)));
        assert_eq!(context.depth(), 0);
    }
}

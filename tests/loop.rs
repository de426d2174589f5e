use leaflet::{Config, Context, Document, LoopError};
use serde_json::json;

fn document() -> Document {
    Document::new(Config::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/templates")))
}

fn render(src: &str, context: serde_json::Value) -> leaflet::Result<String> {
    let document = document();
    let leaf = document.spawn_leaf_raw(src)?;
    document.render(&leaf, &Context::new(context))
}

fn loop_error(src: &str, context: serde_json::Value) -> LoopError {
    let err = render(src, context).unwrap_err();
    *err.tag_error::<LoopError>().expect("loop error")
}

#[test]
fn basic_loop() -> anyhow::Result<()> {
    let document = document();
    let template = document.spawn_leaf("basic-loop")?;
    let context = Context::new(json!({"friends": ["asdf", "🐌", "8###z0-1", 12]}));

    let rendered = document.render(&template, &context)?;
    assert_eq!(rendered, "Hello, asdf\nHello, 🐌\nHello, 8###z0-1\nHello, 12");
    Ok(())
}

#[test]
fn complex_loop() -> anyhow::Result<()> {
    let context = Context::new(json!({
        "friends": [
            {"name": "Venus", "age": 12345},
            {"name": "Pluto", "age": 888},
            {"name": "Mercury", "age": 9000},
        ]
    }));

    let rendered = document().render_template("complex-loop", &context)?;
    let expected = "<li><b>Venus</b>: 12345</li>\n<li><b>Pluto</b>: 888</li>\n<li><b>Mercury</b>: 9000</li>";
    assert_eq!(rendered, expected);
    Ok(())
}

#[test]
fn number_throw() {
    let context = json!({"too": "", "many": "", "arguments": ""});
    assert_eq!(loop_error("#loop(too, many, arguments)", context), LoopError::ExpectedTwoArguments);
}

#[test]
fn invalid_signature_constant_collection() {
    assert_eq!(loop_error("#loop(\"invalid\", \"signature\")", json!({})), LoopError::ExpectedVariable);
}

#[test]
fn invalid_signature_variable_binding() {
    assert_eq!(loop_error("#loop(invalid, signature)", json!({})), LoopError::ExpectedConstant);
}

#[test]
fn skip_nil() -> anyhow::Result<()> {
    let rendered = render("#loop(find-nil, \"inner-name\") { asdfasdfasdfsdf }", json!({}))?;
    assert_eq!(rendered, "");
    Ok(())
}

#[test]
fn fuzzy_single() -> anyhow::Result<()> {
    let rendered = render("#loop(names, \"name\") { Hello, #(name)! }", json!({"names": "Rick"}))?;
    assert_eq!(rendered, "Hello, Rick!");
    Ok(())
}

#[test]
fn nested_loop() -> anyhow::Result<()> {
    let raw = "#loop(data, \"each\") { type: #(each.type)\n#loop(each.sub, \"sub\") { Hello, #(sub)\n } }";
    let context = json!({"data": [{"type": "foo", "sub": ["a", "b", "c"]}, {"type": "bar"}]});
    let rendered = render(raw, context)?;

    let mut expectation = String::new();
    expectation += "type: foo\n";
    expectation += "Hello, a\n";
    expectation += "Hello, b\n";
    expectation += "Hello, c\n";
    expectation += "type: bar\n";
    assert_eq!(expectation, rendered);
    Ok(())
}

#[test]
fn one_body_per_element_joined_by_newline() -> anyhow::Result<()> {
    let elements = [json!("a"), json!(1), json!(true), json!({"k": "v"})];
    let body = "<#(e)>";

    let mut iterations = vec![];
    for element in &elements {
        iterations.push(render(body, json!({"e": element}))?);
    }
    let expected = iterations.join("\n");

    let rendered = render(&format!("#loop(list, \"e\") {{{body}}}"), json!({"list": elements}))?;
    assert_eq!(rendered, expected);
    assert_eq!(rendered, "<a>\n<1>\n<true>\n<{\"k\":\"v\"}>");
    Ok(())
}

#[test]
fn no_stale_bindings_between_iterations() -> anyhow::Result<()> {
    let raw = "#loop(list, \"item\") {[#(item.only_first)]}";
    let rendered = render(raw, json!({"list": [{"only_first": 1}, {}, {"other": 2}]}))?;
    assert_eq!(rendered, "[1]\n[]\n[]");
    Ok(())
}

#[test]
fn inner_binding_shadows_outer() -> anyhow::Result<()> {
    let raw = "#loop(outer, \"x\") {#loop(x.inner, \"x\") {#(x)}|#(x.name);}";
    let context = json!({"outer": [{"name": "a", "inner": [1, 2]}, {"name": "b", "inner": 3}]});
    assert_eq!(render(raw, context)?, "1\n2|a;\n3|b;");
    Ok(())
}

#[test]
fn binding_is_invisible_after_the_loop() -> anyhow::Result<()> {
    let rendered = render("#loop(list, \"item\") {#(item)}-#(item)", json!({"list": [1, 2]}))?;
    assert_eq!(rendered, "1\n2-");
    Ok(())
}

use std::sync::Arc;
use std::thread;

use leaflet::{Context, Stem, parse};
use serde_json::json;

#[test]
fn one_stem_many_threads() -> anyhow::Result<()> {
    let stem = Arc::new(Stem::new());
    let leaf = Arc::new(parse("#loop(items, \"item\") {#(id):#(item);}")?);

    let handles = (0..8)
        .map(|id| {
            let stem = Arc::clone(&stem);
            let leaf = Arc::clone(&leaf);
            thread::spawn(move || {
                let context = Context::new(json!({"id": id, "items": (0..id).collect::<Vec<_>>()}));
                stem.render(&leaf, &context)
            })
        })
        .collect::<Vec<_>>();

    for (id, handle) in handles.into_iter().enumerate() {
        let output = handle.join().expect("render thread panicked")?;
        let expected = (0..id).map(|item| format!("{id}:{item};")).collect::<Vec<_>>().join("\n");
        assert_eq!(output, expected);
    }

    Ok(())
}

#[test]
fn scoped_threads_share_by_reference() -> anyhow::Result<()> {
    let stem = Stem::new();
    let leaf = parse("#if(admin) {admin} #@@else() {#(name)}")?;

    let outputs = thread::scope(|scope| {
        let admin = scope.spawn(|| stem.render(&leaf, &Context::new(json!({"admin": true}))));
        let guest = scope.spawn(|| stem.render(&leaf, &Context::new(json!({"name": "guest"}))));
        (admin.join(), guest.join())
    });

    assert_eq!(outputs.0.expect("admin thread panicked")?, "admin");
    assert_eq!(outputs.1.expect("guest thread panicked")?, "guest");
    Ok(())
}

use std::cell::RefCell;
use std::iter::once;
use std::ops::Deref;

use serde_json::{Map, Value};

// Take one step down a path.
// Maps are indexed by key and lists by a non-negative integer,
// anything else is a dead end.
fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(list) => list.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// The data a template is rendered against.
///
/// The root value sits at the bottom of a stack of scopes.
/// Tags push scopes for the duration of their body (see [`Context::push_scope`]),
/// and a lookup consults the innermost scope first.
///
/// A context belongs to a single render. It can not be shared between threads.
#[derive(Debug, Clone)]
pub struct Context {
    root: Value,
    scopes: RefCell<Vec<Value>>,
}

impl Context {
    pub fn new(root: impl Into<Value>) -> Self {
        Self {
            root: root.into(),
            scopes: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Map::new())
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Number of scopes pushed on top of the root
    pub fn depth(&self) -> usize {
        self.scopes.borrow().len()
    }

    /// Look up a value by path.
    ///
    /// The first scope (innermost first, root last) that contains the first
    /// segment of the path is the one the rest of the path is resolved in.
    /// A missing key, an index out of range or a path through a value that is
    /// neither a map nor a list is `None`.
    /// ```
    /// # use leaflet_render::Context;
    /// # use serde_json::json;
    /// let context = Context::new(json!({"friends": [{"name": "Venus"}]}));
    /// assert_eq!(context.get(&["friends", "0", "name"]), Some(json!("Venus")));
    /// assert_eq!(context.get(&["friends", "1", "name"]), None);
    /// ```
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<Value> {
        let (first, rest) = path.split_first()?;
        let scopes = self.scopes.borrow();

        let base = scopes
            .iter()
            .rev()
            .chain(once(&self.root))
            .find_map(|scope| step(scope, first.as_ref()))?;

        let value = rest.iter().try_fold(base, |node, segment| step(node, segment.as_ref()))?;
        Some(value.clone())
    }

    /// Push a scope. The scope is popped when the guard is dropped,
    /// regardless of how the guard goes out of scope.
    pub fn push_scope(&self, scope: impl Into<Value>) -> ScopeGuard<'_> {
        let mut scopes = self.scopes.borrow_mut();
        scopes.push(scope.into());
        let depth = scopes.len();
        log::trace!("push scope (depth {depth})");
        ScopeGuard { context: self, depth }
    }

    /// Push a single `key: value` scope
    pub fn push_binding(&self, key: impl Into<String>, value: Value) -> ScopeGuard<'_> {
        let mut scope = Map::new();
        scope.insert(key.into(), value);
        self.push_scope(scope)
    }

    /// Run `f` with `scope` pushed onto the context
    pub fn with_scope<F, T>(&self, scope: impl Into<Value>, f: F) -> T
    where
        F: FnOnce(&Context) -> T,
    {
        let guard = self.push_scope(scope);
        f(&guard)
    }
}

impl From<Value> for Context {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// A scope pushed onto a [`Context`].
/// Dropping the guard restores the context to what it was before the push.
#[must_use = "the scope is popped as soon as the guard is dropped"]
pub struct ScopeGuard<'ctx> {
    context: &'ctx Context,
    depth: usize,
}

impl Deref for ScopeGuard<'_> {
    type Target = Context;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        let mut scopes = self.context.scopes.borrow_mut();
        debug_assert_eq!(scopes.len(), self.depth, "scopes popped out of order");
        scopes.truncate(self.depth - 1);
        log::trace!("pop scope (depth {})", self.depth - 1);
    }
}

use leaflet_templates::TagTemplate;
use serde_json::Value;

use crate::arguments::ArgumentList;
use crate::error::Result;
use crate::tags::Tag;

/// A tag that always returns the same value and always makes the same
/// render decision. Useful for testing chains.
#[derive(Debug, Clone)]
pub struct TestTag {
    value: Option<Value>,
    should_render: bool,
}

impl TestTag {
    pub fn new(value: Option<Value>, should_render: bool) -> Self {
        Self { value, should_render }
    }
}

impl Tag for TestTag {
    fn run(&self, _: &TagTemplate, _: &ArgumentList<'_>) -> Result<Option<Value>> {
        Ok(self.value.clone())
    }

    fn should_render(&self, _: &TagTemplate, _: &ArgumentList<'_>, _: Option<&Value>) -> bool {
        self.should_render
    }
}

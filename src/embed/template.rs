//! Template types for typed variable injection.

use std::marker::PhantomData;

/// A set of values substituted into a template's placeholders.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;

    /// Compact representation of the values, mixed into content hashes.
    ///
    /// Override this when rendering the full content just to hash it would
    /// be wasteful.
    fn hash_input(&self) -> String {
        String::new()
    }
}

/// Templates without placeholders.
impl TemplateVars for () {
    fn apply(&self, content: &str) -> String {
        content.to_string()
    }
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting<'a> {
        name: &'a str,
    }

    impl TemplateVars for Greeting<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__NAME__", self.name)
        }
    }

    #[test]
    fn test_render_substitutes() {
        let template: Template<Greeting<'_>> = Template::new("hello __NAME__");
        assert_eq!(template.render(&Greeting { name: "Ada" }), "hello Ada");
        assert_eq!(template.content(), "hello __NAME__");
    }

    #[test]
    fn test_unit_vars_keep_content() {
        let template: Template<()> = Template::new("body {}");
        assert_eq!(template.render(&()), "body {}");
    }
}

//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
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

    #[cfg(test)]
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

    struct NameVars<'a> {
        name: &'a str,
    }

    impl TemplateVars for NameVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__NAME__", self.name)
        }
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        const GREETING: Template<NameVars<'static>> = Template::new("hi __NAME__, bye __NAME__");
        let out = GREETING.render(&NameVars { name: "otp" });
        assert_eq!(out, "hi otp, bye otp");
        assert_eq!(GREETING.content(), "hi __NAME__, bye __NAME__");
    }
}

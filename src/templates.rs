use minijinja::Environment;
use serde::Serialize;

/// Thin wrapper around the minijinja environment.
///
/// Templates are embedded at compile time so the binary is self-contained.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        env.set_debug(cfg!(debug_assertions));

        env.add_template("chat.html", include_str!("../templates/chat.html"))?;

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, template_name: &str, context: S) -> anyhow::Result<String> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(context)?)
    }
}

//! Page templates, compiled into the binary.

use serde::Serialize;
use tera::{Context, Tera};

pub const INDEX_TEMPLATE: &str = "polls/index.html";
pub const DETAIL_TEMPLATE: &str = "polls/detail.html";
pub const RESULTS_TEMPLATE: &str = "polls/results.html";

/// Tera engine holding every page of the site. HTML output is autoescaped.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            (INDEX_TEMPLATE, include_str!("../templates/polls/index.html")),
            (DETAIL_TEMPLATE, include_str!("../templates/polls/detail.html")),
            (RESULTS_TEMPLATE, include_str!("../templates/polls/results.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render `name` with a serializable context struct.
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String, tera::Error> {
        let context = Context::from_serialize(context)?;
        self.tera.render(name, &context)
    }
}

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::core::error::AppResult;

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/partials/header.hbs")),
    ("footer", include_str!("../../templates/partials/footer.hbs")),
];

const TEMPLATES: &[(&str, &str)] = &[
    ("index", include_str!("../../templates/index.hbs")),
    ("board/save-form", include_str!("../../templates/board/save-form.hbs")),
    ("board/detail", include_str!("../../templates/board/detail.hbs")),
    ("board/update-form", include_str!("../../templates/board/update-form.hbs")),
];

/// Handlebars registry with every page template compiled in.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(name, data)?))
    }
}

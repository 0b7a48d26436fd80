use std::fmt;

use crate::error::Result;

const HOME: &str = include_str!("templates/home.liquid");

const PARTIALS: &[(&str, &str)] = &[
    ("navbar.html", include_str!("templates/navbar.liquid")),
    ("navbar_item.html", include_str!("templates/navbar_item.liquid")),
    ("features.html", include_str!("templates/features.liquid")),
    ("install.html", include_str!("templates/install.liquid")),
    ("footer.html", include_str!("templates/footer.liquid")),
];

type Partials = liquid::partials::EagerCompiler<liquid::partials::InMemorySource>;

#[derive(Debug, Clone, Default)]
pub struct LiquidBuilder {
    partials: Vec<(String, String)>,
}

impl LiquidBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides a bundled partial, e.g. `footer.html`.
    pub fn partial(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.partials.push((name.into(), source.into()));
        self
    }

    pub fn build(self) -> Result<Liquid> {
        let mut source = liquid::partials::InMemorySource::new();
        for (name, content) in PARTIALS {
            source.add(*name, *content);
        }
        for (name, content) in self.partials {
            log::debug!("Overriding partial `{name}`");
            source.add(name, content);
        }
        let partials = Partials::new(source);
        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(partials)
            .build()?;
        let home = parser.parse(HOME)?;
        Ok(Liquid { parser, home })
    }
}

pub struct Liquid {
    parser: liquid::Parser,
    home: liquid::Template,
}

impl Liquid {
    pub fn parse(&self, template: &str) -> Result<liquid::Template> {
        let template = self.parser.parse(template)?;
        Ok(template)
    }

    /// Render a one-off template such as the footer copyright.
    pub fn render_str(&self, template: &str, globals: &liquid::Object) -> Result<String> {
        let template = self.parse(template)?;
        Ok(template.render(globals)?)
    }

    pub fn render_home(&self, globals: &liquid::Object) -> Result<String> {
        Ok(self.home.render(globals)?)
    }
}

impl fmt::Debug for Liquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Liquid{{}}")
    }
}

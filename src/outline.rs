use super::*;

/// Normalized article markup together with sections whose identifiers are
/// guaranteed to resolve to anchors in that markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
  pub content: String,
  pub sections: Vec<TocSection>,
}

/// Runs heading normalization and section listing as one pass over a single
/// parsed document.
pub struct Outliner {
  base_url: Option<Url>,
  html: dom_query::Document,
  options: OutlineOptions,
}

impl Outliner {
  pub fn new(
    html: &str,
    base_url: Option<&str>,
    options: OutlineOptions,
  ) -> Result<Self> {
    Ok(Self {
      base_url: base_url.map(Url::parse).transpose()?,
      html: dom_query::Document::from(html),
      options,
    })
  }

  pub fn parse(&mut self) -> Result<Outline> {
    let context =
      Context::new(&mut self.html, self.base_url.as_ref(), &self.options);

    let mut context = Pipeline::with_default_stages(context).run()?;

    let sections = context.take_sections();

    debug!(sections = sections.len(), "outlined document");

    Ok(Outline {
      content: context.document().body_markup(),
      sections,
    })
  }
}

use super::*;

/// A navigable entry in a document's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocSection {
  pub id: String,
  pub label: String,
  pub level: u8,
  pub href: String,
}

impl TocSection {
  pub(crate) fn new(id: String, label: String, level: HeadingLevel) -> Self {
    Self {
      href: format!("#{id}"),
      id,
      label,
      level: level.as_u8(),
    }
  }

  /// Rewrites `href` into an absolute link pointing at this section of the
  /// page served from `base_url`.
  #[must_use]
  pub fn with_base_url(self, base_url: &Url) -> Self {
    let mut url = base_url.clone();

    url.set_fragment(Some(&self.id));

    Self {
      href: url.into(),
      ..self
    }
  }
}

use super::*;

pub(crate) struct Context<'a> {
  base_url: Option<&'a Url>,
  html: &'a mut dom_query::Document,
  options: &'a OutlineOptions,
  sections: Vec<TocSection>,
}

impl<'a> Context<'a> {
  pub(crate) fn base_url(&self) -> Option<&'a Url> {
    self.base_url
  }

  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut *self.html)
  }

  pub(crate) fn new(
    html: &'a mut dom_query::Document,
    base_url: Option<&'a Url>,
    options: &'a OutlineOptions,
  ) -> Self {
    Self {
      base_url,
      html,
      options,
      sections: Vec::new(),
    }
  }

  pub(crate) fn options(&self) -> &OutlineOptions {
    self.options
  }

  pub(crate) fn set_sections(&mut self, sections: Vec<TocSection>) {
    self.sections = sections;
  }

  pub(crate) fn take_sections(&mut self) -> Vec<TocSection> {
    mem::take(&mut self.sections)
  }
}

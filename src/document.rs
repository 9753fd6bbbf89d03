use super::*;

pub(crate) struct Document<'a> {
  document: &'a mut dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn body_markup(&self) -> String {
    self.document.select("body").inner_html().to_string()
  }

  pub(crate) fn element_count(&self) -> usize {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  pub(crate) fn headings(&self, level: HeadingLevel) -> Vec<HeadingNode> {
    self
      .document
      .root()
      .descendants()
      .iter()
      .filter_map(HeadingNode::from_node)
      .filter(|heading| heading.level == level)
      .collect()
  }

  pub(crate) fn new(document: &'a mut dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn normalize_heading_ids(&mut self) {
    normalize_heading_ids(&self.document.root());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_element_nodes_only_once() {
    let mut document = dom_query::Document::from(
      r#"
      <html>
        <head><meta charset="utf-8" /></head>
        <body>
          <div>
            <h2>One</h2>
            <span>Two</span>
          </div>
          <img src="image.png" />
        </body>
      </html>
      "#,
    );

    let document = Document::new(&mut document);

    assert_eq!(document.element_count(), 8);
  }

  #[test]
  fn lists_headings_by_level_in_order() {
    let mut document = dom_query::Document::from(
      r#"<h2>First</h2><h1>Title</h1><section><h2 id="s">Second</h2></section>"#,
    );

    let document = Document::new(&mut document);

    let labels = document
      .headings(HeadingLevel::H2)
      .into_iter()
      .map(|heading| heading.text)
      .collect::<Vec<_>>();

    assert_eq!(labels, vec!["First", "Second"]);
    assert_eq!(document.headings(HeadingLevel::H1).len(), 1);
  }

  #[test]
  fn body_markup_excludes_document_wrapper() {
    let mut document = dom_query::Document::from("<h2>Hi</h2>");

    let mut document = Document::new(&mut document);

    document.normalize_heading_ids();

    assert_eq!(document.body_markup(), r#"<h2 id="hi">Hi</h2>"#);
  }
}

use super::*;

static HEADING_SELECTOR: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("h1, h2").unwrap());

/// Lists the level-2 sections of `html` in document order.
///
/// Identifiers are computed here rather than read from the markup, so they
/// only match the live anchors when the headings arrive with no explicit
/// ids. Use [`Outliner`] when links must resolve against normalized markup.
///
/// Repeated labels are listed once. `None` or empty input yields no sections.
#[must_use]
pub fn extract_toc<'a>(html: impl Into<Option<&'a str>>) -> Vec<TocSection> {
  let Some(html) = html.into().filter(|html| !html.trim().is_empty()) else {
    return Vec::new();
  };

  let fragment = Html::parse_fragment(html);

  let mut seen_labels = HashSet::new();
  let mut assigned_ids = HashSet::new();
  let mut sections = Vec::new();

  for heading in fragment
    .select(&HEADING_SELECTOR)
    .filter_map(HeadingNode::from_element)
  {
    if heading.text.is_empty() || heading.level != HeadingLevel::H2 {
      continue;
    }

    if !seen_labels.insert(heading.text.clone()) {
      continue;
    }

    let base = slugify(&heading.text);

    if base.is_empty() {
      debug!(text = %heading.text, "skipping section without a slug");
      continue;
    }

    let id = uniquify(&base, &assigned_ids);

    assigned_ids.insert(id.clone());

    sections.push(TocSection::new(id, heading.text, heading.level));
  }

  sections
}

#[cfg(test)]
mod tests {
  use super::*;

  fn labels(sections: &[TocSection]) -> Vec<&str> {
    sections
      .iter()
      .map(|section| section.label.as_str())
      .collect()
  }

  fn ids(sections: &[TocSection]) -> Vec<&str> {
    sections.iter().map(|section| section.id.as_str()).collect()
  }

  #[test]
  fn empty_input_yields_nothing() {
    assert!(extract_toc("").is_empty());
    assert!(extract_toc(None).is_empty());
    assert!(extract_toc("   ").is_empty());
  }

  #[test]
  fn duplicate_labels_are_listed_once() {
    let sections = extract_toc(
      "<h2>Overview</h2><p>a</p><h2>Overview</h2><h2>Risks</h2>",
    );

    assert_eq!(labels(&sections), vec!["Overview", "Risks"]);
    assert_eq!(ids(&sections), vec!["overview", "risks"]);
  }

  #[test]
  fn only_level_two_headings_are_emitted() {
    assert!(extract_toc("<h1>Title</h1><h1>Other</h1>").is_empty());

    let sections = extract_toc("<h1>Title</h1><h2>Body</h2><h3>Deep</h3>");

    assert_eq!(labels(&sections), vec!["Body"]);
    assert_eq!(sections[0].level, 2);
  }

  #[test]
  fn distinct_labels_with_equal_slugs_are_disambiguated() {
    let sections = extract_toc("<h2>Q&amp;A</h2><h2>QA</h2><h2>Q.A.</h2>");

    assert_eq!(labels(&sections), vec!["Q&A", "QA", "Q.A."]);
    assert_eq!(ids(&sections), vec!["qa", "qa-1", "qa-2"]);
  }

  #[test]
  fn skips_blank_and_unslugifiable_headings() {
    let sections = extract_toc("<h2>  </h2><h2>✨</h2><h2>Next</h2>");

    assert_eq!(labels(&sections), vec!["Next"]);
  }

  #[test]
  fn label_is_trimmed_visible_text() {
    let sections =
      extract_toc("<h2>\n  Chips <em>and</em> AI \n</h2><div><h2>Deep</h2></div>");

    assert_eq!(labels(&sections), vec!["Chips and AI", "Deep"]);
    assert_eq!(sections[0].href, "#chips-and-ai");
  }

  #[test]
  fn ignores_explicit_ids() {
    let sections = extract_toc(r#"<h2 id="custom">Intro</h2>"#);

    assert_eq!(ids(&sections), vec!["intro"]);
  }

  #[test]
  fn is_deterministic() {
    let html = "<h2>A</h2><h2>B</h2><h2>A</h2><h2>a</h2>";

    assert_eq!(extract_toc(html), extract_toc(html));
    assert_eq!(ids(&extract_toc(html)), vec!["a", "b", "a-1"]);
  }
}

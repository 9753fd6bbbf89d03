use super::*;

/// Gives every second-level heading in the document a stable anchor.
pub struct NormalizeHeadingIdsStage;

impl Stage for NormalizeHeadingIdsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    context.document().normalize_heading_ids();
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn assigns_ids_to_live_document() {
    let mut document = dom_query::Document::from(
      r#"<h2>Overview</h2><h2 id="keep">Overview</h2><h2>Overview</h2>"#,
    );

    let options = OutlineOptions::default();

    let mut context = Context::new(&mut document, None, &options);

    NormalizeHeadingIdsStage.run(&mut context).unwrap();

    let ids = document
      .select("h2")
      .nodes()
      .iter()
      .filter_map(|node| node.attr("id"))
      .map(|id| id.to_string())
      .collect::<Vec<_>>();

    assert_eq!(ids, vec!["overview", "keep", "overview-1"]);
  }
}

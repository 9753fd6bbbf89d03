use super::*;

/// Lists second-level headings using the identifiers they carry in the live
/// document, so every section links to an anchor that exists.
///
/// Runs after [`NormalizeHeadingIdsStage`]; headings still lacking an
/// identifier at this point have no slug and are left out.
pub struct CollectSectionsStage;

impl Stage for CollectSectionsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let base_url = context.base_url();

    let headings = context.document().headings(HeadingLevel::H2);

    let sections = Self::collect(headings)
      .into_iter()
      .map(|section| match base_url {
        Some(base_url) => section.with_base_url(base_url),
        None => section,
      })
      .collect();

    context.set_sections(sections);

    Ok(())
  }
}

impl CollectSectionsStage {
  fn collect(headings: Vec<HeadingNode>) -> Vec<TocSection> {
    let mut seen_labels = HashSet::new();
    let mut seen_ids = HashSet::new();

    let mut sections = Vec::new();

    for heading in headings {
      if heading.text.is_empty() || seen_labels.contains(&heading.text) {
        continue;
      }

      let Some(id) = heading.existing_id else {
        debug!(text = %heading.text, "heading has no anchor; leaving it out");
        continue;
      };

      if !seen_ids.insert(id.clone()) {
        debug!(%id, "duplicate anchor in source markup; leaving it out");
        continue;
      }

      seen_labels.insert(heading.text.clone());

      sections.push(TocSection::new(id, heading.text, heading.level));
    }

    sections
  }
}

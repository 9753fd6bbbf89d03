use super::*;

/// Assigns slug identifiers to every `<h2>` under `root` that lacks one.
///
/// Existing identifiers are reserved up front and never altered, so a
/// generated slug can't collide with an anchor that appears later in the
/// document. Headings whose text slugifies to nothing are left without an
/// identifier. Running the pass again over its own output changes nothing,
/// so callers re-run it after every content replacement instead of tracking
/// which nodes were visited.
pub fn normalize_heading_ids(root: &NodeRef<'_>) {
  let headings = root
    .descendants()
    .into_iter()
    .filter_map(|node| {
      HeadingNode::from_node(&node)
        .filter(|heading| heading.level == HeadingLevel::H2)
        .map(|heading| (node, heading))
    })
    .collect::<Vec<_>>();

  let mut used = headings
    .iter()
    .filter_map(|(_, heading)| heading.existing_id.clone())
    .collect::<HashSet<String>>();

  for (node, heading) in headings {
    if heading.existing_id.is_some() {
      continue;
    }

    let base = slugify(&heading.text);

    if base.is_empty() {
      debug!(text = %heading.text, "skipping heading without a slug");
      continue;
    }

    let id = uniquify(&base, &used);

    trace!(%id, "assigning heading id");

    node.set_attr("id", &id);

    used.insert(id);
  }
}

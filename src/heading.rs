use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum HeadingLevel {
  H1,
  H2,
}

impl HeadingLevel {
  pub(crate) fn as_u8(self) -> u8 {
    match self {
      Self::H1 => 1,
      Self::H2 => 2,
    }
  }

  pub(crate) fn from_tag_name(name: &str) -> Option<Self> {
    match name {
      name if name.eq_ignore_ascii_case("h1") => Some(Self::H1),
      name if name.eq_ignore_ascii_case("h2") => Some(Self::H2),
      _ => None,
    }
  }
}

/// One heading as seen during a single normalization or extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeadingNode {
  pub(crate) existing_id: Option<String>,
  pub(crate) level: HeadingLevel,
  pub(crate) text: String,
}

impl HeadingNode {
  pub(crate) fn from_element(element: ElementRef<'_>) -> Option<Self> {
    let level = HeadingLevel::from_tag_name(element.value().name())?;

    Some(Self {
      existing_id: Self::non_empty(element.value().attr("id")),
      level,
      text: element.text().collect::<String>().trim().to_string(),
    })
  }

  pub(crate) fn from_node(node: &NodeRef<'_>) -> Option<Self> {
    let level = HeadingLevel::from_tag_name(&node.node_name()?)?;

    Some(Self {
      existing_id: Self::non_empty(node.attr("id").as_deref()),
      level,
      text: node.text().trim().to_string(),
    })
  }

  fn non_empty(value: Option<&str>) -> Option<String> {
    value
      .filter(|value| !value.trim().is_empty())
      .map(str::to_string)
  }
}

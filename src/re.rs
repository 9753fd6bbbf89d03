use super::*;

pub(crate) static DISALLOWED_SLUG_CHARACTERS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());

pub(crate) static HYPHEN_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn disallowed_characters_exclude_slug_alphabet() {
    assert!(!DISALLOWED_SLUG_CHARACTERS.is_match("abc-123 xyz"));
    assert!(DISALLOWED_SLUG_CHARACTERS.is_match("A"));
    assert!(DISALLOWED_SLUG_CHARACTERS.is_match("—"));
    assert!(DISALLOWED_SLUG_CHARACTERS.is_match("_"));
  }

  #[test]
  fn hyphen_runs_require_two_or_more() {
    assert!(!HYPHEN_RUNS.is_match("a-b"));
    assert!(HYPHEN_RUNS.is_match("a--b"));
  }

  #[test]
  fn whitespace_runs_match_unicode_whitespace() {
    assert_eq!(WHITESPACE_RUNS.replace_all("a \t\n b\u{a0}c", "-"), "a-b-c");
  }
}

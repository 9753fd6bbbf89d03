use super::*;

/// Derives an anchor-safe, lowercase, hyphen-delimited slug from free text.
///
/// Returns an empty string when nothing survives (emoji or punctuation only);
/// callers treat that as "no identifier assignable".
#[must_use]
pub fn slugify(text: &str) -> String {
  let lowered = text.to_lowercase();

  let stripped = re::DISALLOWED_SLUG_CHARACTERS.replace_all(&lowered, "");

  let hyphenated = re::WHITESPACE_RUNS.replace_all(&stripped, "-");

  re::HYPHEN_RUNS
    .replace_all(&hyphenated, "-")
    .trim_matches('-')
    .to_string()
}

/// Returns `base` if unused, otherwise the first of `base-1`, `base-2`, …
/// that is absent from `used`.
///
/// The set is never modified; inserting the result is the caller's job.
#[must_use]
pub fn uniquify(base: &str, used: &HashSet<String>) -> String {
  if !used.contains(base) {
    return base.to_string();
  }

  (1..)
    .map(|suffix: usize| format!("{base}-{suffix}"))
    .find(|candidate| !used.contains(candidate))
    .unwrap_or_else(|| base.to_string())
}

use super::*;

/// The fields of an article or brief that related-content ranking reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
  pub id: String,
  pub category: String,
  #[serde(default)]
  pub tags: Vec<String>,
  pub author: String,
  #[serde(default)]
  pub featured: bool,
}

/// Points awarded per matching feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
  pub author: u32,
  pub category: u32,
  pub featured: u32,
  pub shared_tag: u32,
}

impl Default for ScoringWeights {
  fn default() -> Self {
    Self {
      author: 3,
      category: 10,
      featured: 2,
      shared_tag: 5,
    }
  }
}

impl ScoringWeights {
  #[must_use]
  pub fn builder() -> ScoringWeightsBuilder {
    ScoringWeightsBuilder::default()
  }
}

#[derive(Default)]
pub struct ScoringWeightsBuilder {
  inner: ScoringWeights,
}

impl ScoringWeightsBuilder {
  #[must_use]
  pub fn author(self, author: u32) -> Self {
    Self {
      inner: ScoringWeights {
        author,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ScoringWeights {
    self.inner
  }

  #[must_use]
  pub fn category(self, category: u32) -> Self {
    Self {
      inner: ScoringWeights {
        category,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn featured(self, featured: u32) -> Self {
    Self {
      inner: ScoringWeights {
        featured,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn shared_tag(self, shared_tag: u32) -> Self {
    Self {
      inner: ScoringWeights {
        shared_tag,
        ..self.inner
      },
    }
  }
}

/// Relevance of `candidate` to `target`. Every candidate tag found among the
/// target's tags earns `shared_tag` points; `featured` is a flat boost.
#[must_use]
pub fn score(
  target: &ContentItem,
  candidate: &ContentItem,
  weights: &ScoringWeights,
) -> u32 {
  let mut total = 0u32;

  if candidate.category == target.category {
    total = total.saturating_add(weights.category);
  }

  let shared_tags = candidate
    .tags
    .iter()
    .filter(|tag| target.tags.contains(tag))
    .count();

  total = total.saturating_add(
    weights
      .shared_tag
      .saturating_mul(u32::try_from(shared_tags).unwrap_or(u32::MAX)),
  );

  if candidate.author == target.author {
    total = total.saturating_add(weights.author);
  }

  if candidate.featured {
    total = total.saturating_add(weights.featured);
  }

  total
}

/// Ranks `candidates` against `target` with the default weights and keeps
/// the best `limit`.
#[must_use]
pub fn score_and_rank(
  target: &ContentItem,
  candidates: Vec<ContentItem>,
  limit: usize,
) -> Vec<ContentItem> {
  score_and_rank_with(target, candidates, limit, &ScoringWeights::default())
}

/// Like [`score_and_rank`] with custom weights.
///
/// The sort is stable, so equal scores keep the pool's incoming order
/// (recency, as fetched). Candidates carrying the target's own id are dropped.
#[must_use]
pub fn score_and_rank_with(
  target: &ContentItem,
  candidates: Vec<ContentItem>,
  limit: usize,
  weights: &ScoringWeights,
) -> Vec<ContentItem> {
  let mut scored = candidates
    .into_iter()
    .filter(|candidate| candidate.id != target.id)
    .map(|candidate| (score(target, &candidate, weights), candidate))
    .collect::<Vec<_>>();

  scored.sort_by_key(|(score, _)| Reverse(*score));

  trace!(
    scores = ?scored
      .iter()
      .map(|(score, candidate)| (candidate.id.as_str(), *score))
      .collect::<Vec<_>>(),
    "ranked related content"
  );

  scored
    .into_iter()
    .take(limit)
    .map(|(_, candidate)| candidate)
    .collect()
}

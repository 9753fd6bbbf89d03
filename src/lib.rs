use {
  context::Context,
  document::Document,
  dom_query::NodeRef,
  heading::{HeadingLevel, HeadingNode},
  pipeline::Pipeline,
  regex::Regex,
  scraper::{ElementRef, Html, Selector},
  serde::{Deserialize, Serialize},
  stage::{
    CollectSectionsStage, ElementLimitStage, NormalizeHeadingIdsStage, Stage,
  },
  std::{cmp::Reverse, collections::HashSet, mem, sync::LazyLock},
  tracing::{debug, trace},
  url::Url,
};

pub use crate::{
  error::Error,
  normalizer::normalize_heading_ids,
  options::{OutlineOptions, OutlineOptionsBuilder},
  outline::{Outline, Outliner},
  scorer::{
    ContentItem, ScoringWeights, ScoringWeightsBuilder, score, score_and_rank,
    score_and_rank_with,
  },
  section::TocSection,
  slug::{slugify, uniquify},
  toc::extract_toc,
};

mod context;
mod document;
mod error;
mod heading;
mod normalizer;
mod options;
mod outline;
mod pipeline;
mod re;
mod scorer;
mod section;
mod slug;
mod stage;
mod toc;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

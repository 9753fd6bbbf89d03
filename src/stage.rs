use super::*;

mod collect_sections;
mod element_limit;
mod normalize_heading_ids;

pub use {
  collect_sections::CollectSectionsStage, element_limit::ElementLimitStage,
  normalize_heading_ids::NormalizeHeadingIdsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}

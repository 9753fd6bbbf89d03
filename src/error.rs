#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting parsing document; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("invalid base url: {source}")]
  InvalidBaseUrl {
    #[from]
    source: url::ParseError,
  },
}

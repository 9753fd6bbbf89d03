use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  content_pipeline::{
    ContentItem, OutlineOptions, Outliner, ScoringWeights, extract_toc,
    normalize_heading_ids, score_and_rank_with,
  },
  serde::{Serialize, de::DeserializeOwned},
  std::{
    fs, io,
    path::{Path, PathBuf},
    process,
  },
  subcommand::Subcommand,
  tracing_subscriber::EnvFilter,
  url::Url,
};

mod arguments;
mod subcommand;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}

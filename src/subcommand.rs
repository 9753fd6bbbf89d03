use super::*;

#[derive(clap::Subcommand)]
pub(crate) enum Subcommand {
  #[command(about = "Print the table of contents of an HTML file as JSON")]
  Toc {
    #[arg(value_name = "FILE", help = "Path to the HTML file")]
    input: PathBuf,
    #[arg(long, help = "Page URL used to build absolute section links")]
    base_url: Option<Url>,
  },
  #[command(about = "Print HTML with anchors assigned to second-level headings")]
  Normalize {
    #[arg(value_name = "FILE", help = "Path to the HTML file")]
    input: PathBuf,
  },
  #[command(about = "Print normalized HTML and its resolvable sections as JSON")]
  Outline {
    #[arg(value_name = "FILE", help = "Path to the HTML file")]
    input: PathBuf,
    #[arg(long, help = "Page URL used to build absolute section links")]
    base_url: Option<Url>,
    #[arg(long, help = "Abort when the document has more elements than this")]
    max_elems: Option<usize>,
  },
  #[command(about = "Rank candidate items by relevance to a target item")]
  Related {
    #[arg(long, value_name = "FILE", help = "JSON file holding the target item")]
    target: PathBuf,
    #[arg(
      long,
      value_name = "FILE",
      help = "JSON file holding an array of candidate items, newest first"
    )]
    candidates: PathBuf,
    #[arg(long, default_value_t = 3, help = "Number of items to keep")]
    limit: usize,
    #[command(flatten)]
    weights: WeightArguments,
  },
}

#[derive(clap::Args, Debug, Default)]
pub(crate) struct WeightArguments {
  #[arg(long, help = "Points for a matching category")]
  category_weight: Option<u32>,
  #[arg(long, help = "Points per shared tag")]
  tag_weight: Option<u32>,
  #[arg(long, help = "Points for a matching author")]
  author_weight: Option<u32>,
  #[arg(long, help = "Points for featured items")]
  featured_weight: Option<u32>,
}

impl WeightArguments {
  pub(crate) fn weights(&self) -> ScoringWeights {
    let defaults = ScoringWeights::default();

    ScoringWeights::builder()
      .category(self.category_weight.unwrap_or(defaults.category))
      .shared_tag(self.tag_weight.unwrap_or(defaults.shared_tag))
      .author(self.author_weight.unwrap_or(defaults.author))
      .featured(self.featured_weight.unwrap_or(defaults.featured))
      .build()
  }
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::Toc { input, base_url } => {
        let sections = extract_toc(read(&input)?.as_str())
          .into_iter()
          .map(|section| match &base_url {
            Some(base_url) => section.with_base_url(base_url),
            None => section,
          })
          .collect::<Vec<_>>();

        print_json(&sections)
      }
      Self::Normalize { input } => {
        let document = dom_query::Document::from(read(&input)?.as_str());

        normalize_heading_ids(&document.root());

        println!("{}", document.select("body").inner_html());

        Ok(())
      }
      Self::Outline {
        input,
        base_url,
        max_elems,
      } => {
        let options = OutlineOptions::builder()
          .max_elems_to_parse(max_elems)
          .build();

        let mut outliner = Outliner::new(
          &read(&input)?,
          base_url.as_ref().map(Url::as_str),
          options,
        )
        .context("failed to create outliner")?;

        print_json(&outliner.parse().context("failed to outline document")?)
      }
      Self::Related {
        target,
        candidates,
        limit,
        weights,
      } => {
        let weights = weights.weights();

        let target = read_json::<ContentItem>(&target)?;

        let candidates = read_json::<Vec<ContentItem>>(&candidates)?;

        print_json(&score_and_rank_with(&target, candidates, limit, &weights))
      }
    }
  }
}

fn print_json<T: Serialize>(value: &T) -> Result {
  println!(
    "{}",
    serde_json::to_string_pretty(value).context("failed to serialize output")?
  );

  Ok(())
}

fn read(path: &Path) -> Result<String> {
  fs::read_to_string(path)
    .with_context(|| format!("failed to read file from `{}`", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
  serde_json::from_str(&read(path)?)
    .with_context(|| format!("failed to parse JSON from `{}`", path.display()))
}

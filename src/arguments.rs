use super::*;

#[derive(Parser)]
#[command(name = "content-pipeline")]
#[command(
  about = "Heading anchors, tables of contents, and related-content ranking",
  long_about = None
)]
pub(crate) struct Arguments {
  #[command(subcommand)]
  subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    self.subcommand.run()
  }
}

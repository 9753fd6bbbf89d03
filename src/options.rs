#[derive(Debug, Clone, Default)]
pub struct OutlineOptions {
  pub max_elems_to_parse: Option<usize>,
}

impl OutlineOptions {
  #[must_use]
  pub fn builder() -> OutlineOptionsBuilder {
    OutlineOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct OutlineOptionsBuilder {
  inner: OutlineOptions,
}

impl OutlineOptionsBuilder {
  #[must_use]
  pub fn build(self) -> OutlineOptions {
    self.inner
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: OutlineOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }
}

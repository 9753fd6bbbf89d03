use super::*;

pub struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if let Some(limit) = context.options().max_elems_to_parse {
      let found = context.document().element_count();

      if found > limit {
        return Err(Error::ElementLimitExceeded { found, limit });
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn passes_without_limit() {
    let mut document = dom_query::Document::from("<h2>A</h2><h2>B</h2>");

    let options = OutlineOptions::default();

    let mut context = Context::new(&mut document, None, &options);

    assert!(ElementLimitStage.run(&mut context).is_ok());
  }

  #[test]
  fn rejects_documents_over_limit() {
    let mut document = dom_query::Document::from("<h2>A</h2><h2>B</h2>");

    let options = OutlineOptions::builder()
      .max_elems_to_parse(Some(3))
      .build();

    let mut context = Context::new(&mut document, None, &options);

    assert!(matches!(
      ElementLimitStage.run(&mut context),
      Err(Error::ElementLimitExceeded { found: 5, limit: 3 })
    ));
  }
}

//! Vocab command - list the facet vocabularies

use crate::facets::Vocabulary;
use crate::ui::OutputWriter;

/// List one vocabulary, or all three when `which` is `None`
pub fn execute(which: Option<Vocabulary>, quiet: bool, out: &dyn OutputWriter) {
    let vocabularies = which.map_or_else(|| Vocabulary::ALL.to_vec(), |v| vec![v]);

    for vocabulary in vocabularies {
        if !quiet {
            out.info(&format!("{} ({vocabulary}):", vocabulary.title()));
        }
        for term in vocabulary.terms() {
            if quiet {
                out.write(term);
            } else {
                out.write(&format!("  {term}"));
            }
        }
    }
}

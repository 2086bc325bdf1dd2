use crate::ports::AddressLookup;
use hostd_domain::{Question, ResolvedName};
use std::sync::Arc;
use tracing::debug;

pub struct ResolveNamesUseCase {
    lookup: Arc<dyn AddressLookup>,
}

impl ResolveNamesUseCase {
    pub fn new(lookup: Arc<dyn AddressLookup>) -> Self {
        Self { lookup }
    }

    /// Looks up every question name, in order.
    ///
    /// Names without an entry are left out of the result; a miss is not an
    /// error, the reply just carries fewer answers than questions.
    pub fn execute(&self, questions: &[Question]) -> Vec<ResolvedName> {
        questions
            .iter()
            .filter_map(|question| match self.lookup.lookup(&question.name) {
                Some(address) => {
                    debug!(domain = %question.name, address = %address, "Name resolved");
                    Some(ResolvedName::new(question.name.clone(), address))
                }
                None => {
                    debug!(domain = %question.name, "No entry for name");
                    None
                }
            })
            .collect()
    }
}

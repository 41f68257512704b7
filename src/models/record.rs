use serde::{Deserialize, Serialize};

/// Body shape the tabular store expects for create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordPayload<F> {
    pub fields: F,
}

impl<F> RecordPayload<F> {
    pub fn new(fields: F) -> Self {
        Self { fields }
    }
}

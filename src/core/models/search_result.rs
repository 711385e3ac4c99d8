use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// What the caller renders after one utterance has been searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub interpretation: String,
    pub results: Vec<ResultRecord>,
}

impl SearchOutcome {
    pub fn new(interpretation: String, results: Vec<ResultRecord>) -> Self {
        Self {
            interpretation,
            results,
        }
    }
}

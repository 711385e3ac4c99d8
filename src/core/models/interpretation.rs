use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentLabel {
    Searching,
    Information,
    Tutorial,
    Weather,
    News,
    General,
}

impl IntentLabel {
    pub fn prefix(&self) -> &'static str {
        match self {
            IntentLabel::Searching => "Searching for: ",
            IntentLabel::Information => "Information query: ",
            IntentLabel::Tutorial => "Tutorial search: ",
            IntentLabel::Weather => "Weather information for: ",
            IntentLabel::News => "Latest news about: ",
            IntentLabel::General => "General search: ",
        }
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// The classified form of one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    label: IntentLabel,
    query: String,
}

impl Interpretation {
    pub fn new(label: IntentLabel, query: String) -> Self {
        Self { label, query }
    }

    pub fn label(&self) -> IntentLabel {
        self.label
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Human-readable form: the label prefix followed by the query.
    pub fn interpretation(&self) -> String {
        format!("{}{}", self.label.prefix(), self.query)
    }
}

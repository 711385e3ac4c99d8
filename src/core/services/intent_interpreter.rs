use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::{IntentLabel, Interpretation};
use crate::core::services::trim_query;
use crate::global_constants::LOG_TAG_INTERPRETER;

// Matching is ASCII case-insensitive and purely literal, so "in" is also
// removed from inside words such as "bin".
static SEARCH_FILLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)find|search for|look for|please|can you").expect("valid regex")
});

static WEATHER_FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)weather|in|for").expect("valid regex"));

static NEWS_FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)news|about").expect("valid regex"));

enum QueryRewrite {
    Unmodified,
    StripFiller(&'static Lazy<Regex>),
}

impl QueryRewrite {
    fn apply(&self, text: &str) -> String {
        match self {
            QueryRewrite::Unmodified => text.to_string(),
            QueryRewrite::StripFiller(filler) => {
                trim_query(&filler.replace_all(text, "")).to_string()
            }
        }
    }
}

struct IntentRule {
    keywords: &'static [&'static str],
    label: IntentLabel,
    rewrite: QueryRewrite,
}

impl IntentRule {
    fn matches(&self, lower_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lower_text.contains(keyword))
    }
}

/// Evaluated top to bottom; the first matching rule wins.
static INTENT_RULES: [IntentRule; 5] = [
    IntentRule {
        keywords: &["find", "search for", "look for"],
        label: IntentLabel::Searching,
        rewrite: QueryRewrite::StripFiller(&SEARCH_FILLER),
    },
    IntentRule {
        keywords: &["what is", "who is", "where is"],
        label: IntentLabel::Information,
        rewrite: QueryRewrite::Unmodified,
    },
    IntentRule {
        keywords: &["how to"],
        label: IntentLabel::Tutorial,
        rewrite: QueryRewrite::Unmodified,
    },
    IntentRule {
        keywords: &["weather"],
        label: IntentLabel::Weather,
        rewrite: QueryRewrite::StripFiller(&WEATHER_FILLER),
    },
    IntentRule {
        keywords: &["news"],
        label: IntentLabel::News,
        rewrite: QueryRewrite::StripFiller(&NEWS_FILLER),
    },
];

/// Classifies an utterance and derives the query to search for.
///
/// When stripping filler words leaves nothing behind, the utterance is
/// searched as-is under [`IntentLabel::General`] so the query is never empty.
pub fn interpret(text: &str) -> Interpretation {
    let lower_text = text.to_lowercase();

    let Some(rule) = INTENT_RULES.iter().find(|rule| rule.matches(&lower_text)) else {
        log::debug!("{} No intent rule matched: {}", LOG_TAG_INTERPRETER, text);
        return Interpretation::new(IntentLabel::General, text.to_string());
    };

    let query = rule.rewrite.apply(text);
    if query.is_empty() {
        log::debug!(
            "{} Rule {:?} stripped everything from {:?}, falling back to general search",
            LOG_TAG_INTERPRETER,
            rule.label,
            text
        );
        return Interpretation::new(IntentLabel::General, text.to_string());
    }

    log::debug!(
        "{} Matched {:?}, query: {}",
        LOG_TAG_INTERPRETER,
        rule.label,
        query
    );
    Interpretation::new(rule.label, query)
}

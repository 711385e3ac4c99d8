use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::core::interfaces::adapters::SearchProvider;
use crate::core::models::ResultRecord;
use crate::core::services::slugify;
use crate::global_constants::LOG_TAG_MOCK_SEARCH;

struct ResultTemplate {
    title: &'static str,
    url: &'static str,
    snippet: &'static str,
}

const QUERY_PLACEHOLDER: &str = "{query}";
const SLUG_PLACEHOLDER: &str = "{slug}";

const RESULT_TEMPLATES: [ResultTemplate; 5] = [
    ResultTemplate {
        title: "{query} - Complete Guide",
        url: "https://example.com/{slug}",
        snippet: "Everything you need to know about {query}. Comprehensive information and latest updates...",
    },
    ResultTemplate {
        title: "Top 10 {query} Resources",
        url: "https://example.com/top-{slug}",
        snippet: "Discover the best resources and information about {query}. Expert recommendations and guides...",
    },
    ResultTemplate {
        title: "{query} - Latest News and Updates",
        url: "https://news.example.com/{slug}",
        snippet: "Stay updated with the latest developments regarding {query}. Breaking news and analysis...",
    },
    ResultTemplate {
        title: "Understanding {query}",
        url: "https://learn.example.com/{slug}",
        snippet: "Learn everything about {query} with our comprehensive tutorials and expert insights...",
    },
    ResultTemplate {
        title: "{query} Community Forum",
        url: "https://forum.example.com/{slug}",
        snippet: "Join the discussion about {query}. Connect with experts and enthusiasts from around the world...",
    },
];

/// Stands in for a real search engine: every query yields the same five
/// templated listings after a simulated network delay.
pub struct MockSearchProvider {
    simulated_latency: Duration,
}

impl MockSearchProvider {
    pub fn new(simulated_latency: Duration) -> Self {
        Self { simulated_latency }
    }

    #[allow(dead_code)]
    pub fn without_latency() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn synthesize_results(query: &str) -> Vec<ResultRecord> {
        let slug = slugify(query);

        RESULT_TEMPLATES
            .iter()
            .map(|template| ResultRecord {
                title: template.title.replace(QUERY_PLACEHOLDER, query),
                url: template.url.replace(SLUG_PLACEHOLDER, &slug),
                snippet: template.snippet.replace(QUERY_PLACEHOLDER, query),
            })
            .collect()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn perform_search(&self, query: &str) -> Result<Vec<ResultRecord>> {
        log::info!("{} Searching for: {}", LOG_TAG_MOCK_SEARCH, query);

        if !self.simulated_latency.is_zero() {
            log::debug!(
                "{} Simulating {}ms of latency",
                LOG_TAG_MOCK_SEARCH,
                self.simulated_latency.as_millis()
            );
            tokio::time::sleep(self.simulated_latency).await;
        }

        let results = Self::synthesize_results(query);
        log::debug!(
            "{} Synthesized {} results",
            LOG_TAG_MOCK_SEARCH,
            results.len()
        );

        Ok(results)
    }
}

mod mock_search_provider;

pub use mock_search_provider::MockSearchProvider;

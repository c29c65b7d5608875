pub mod mock_fetcher;

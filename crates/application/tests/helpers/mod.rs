pub mod mock_providers;

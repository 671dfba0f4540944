// Infrastructure layer - External dependencies and adapters
pub mod api_client;
pub mod canvas;
pub mod config;
pub mod markup;

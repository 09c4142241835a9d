//! Integration tests with mock HTTP server

pub mod fetch_chain;
pub mod mock_server;
pub mod pipeline;

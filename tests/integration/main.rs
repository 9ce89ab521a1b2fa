//! Integration tests against a mock analysis service

mod controller_flow;
mod mock_server;
mod request_client;

pub mod blocking_timeout_tokio;

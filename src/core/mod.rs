pub mod aggregator;
pub mod controller;
pub mod fetcher;
pub mod filter;
pub mod render;
pub mod suggestions;
pub mod utils;

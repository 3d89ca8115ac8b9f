//! 应用服务

pub mod aggregator;
pub mod env_service;
pub mod fetcher;
pub mod renderer;

pub use aggregator::Aggregator;
pub use env_service::{EnvService, LoadPlan};
pub use fetcher::fetch_all;

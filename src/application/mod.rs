//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 获取、聚合、渲染以及串联它们的用例服务

pub mod services;

pub use services::{EnvService, LoadPlan};

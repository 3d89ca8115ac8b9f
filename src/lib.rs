//! ssm-env - 把 AWS Parameter Store 参数导出为环境变量
//!
//! 分层结构：
//! 路径解析 → 分页获取 → 变量名推导/值转义 → 聚合 → 渲染 → (可选) 进程替换

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use domain::{
    DomainError, EnvironmentMapping, FormattingOptions, OutputFormat, ParameterStore, Result,
};

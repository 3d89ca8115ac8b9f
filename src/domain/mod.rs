//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体
//! - repositories: 外部能力接口（输出端口）
//! - path_resolver / naming / sanitize: 纯函数规则
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod naming;
pub mod path_resolver;
pub mod repositories;
pub mod sanitize;

pub use error::{DomainError, Result};
pub use models::{
    BasePath, CaseMode, EnvironmentMapping, FetchOptions, FormattingOptions, OutputFormat,
    ParameterRecord, PathMode, PathSelector, RenderOrder,
};
pub use repositories::{EnvTable, ParameterStore};

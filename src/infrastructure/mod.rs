//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - ssm: AWS Parameter Store 实现
//! - process_env: 进程环境变量表
//! - executor: 进程替换
//! - output: 输出目标
//! - config_file: TOML 配置文件
//! - paths: 路径工具

pub mod config_file;
pub mod executor;
pub mod output;
pub mod paths;
pub mod process_env;
pub mod ssm;

pub use config_file::FileConfig;
pub use executor::CommandExecutor;
pub use output::OutputSink;
pub use process_env::ProcessEnvTable;
pub use ssm::{SsmConfig, SsmParameterStore};

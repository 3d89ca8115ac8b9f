//! 领域层错误类型

use miette::Diagnostic;
use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
///
/// 所有错误均为致命错误：不重试，不容忍部分结果。
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DomainError {
    #[error("无效参数: {0}")]
    #[diagnostic(
        code(ssm_env::invalid_argument),
        help("有效格式: exports, dotenv, json；有效大小写: upper, lower, none；有效路径模式: prefix, wildcard, hierarchy")
    )]
    InvalidArgument(String),

    #[error("获取参数失败 ({path}): {message}")]
    #[diagnostic(
        code(ssm_env::remote_fetch),
        help("检查 AWS 凭证、区域以及对该路径的 ssm:GetParametersByPath 权限")
    )]
    RemoteFetch { path: String, message: String },

    #[error("参数不存在: {0}")]
    #[diagnostic(code(ssm_env::parameter_not_found))]
    ParameterNotFound(String),

    #[error("未找到任何参数: {0}")]
    #[diagnostic(
        code(ssm_env::empty_result),
        help("确认路径正确，或去掉 --require-results")
    )]
    EmptyResult(String),

    #[error("命令未找到: {0}")]
    #[diagnostic(code(ssm_env::command_not_found), help("确保命令在 PATH 中或使用完整路径"))]
    CommandNotFound(String),

    #[error("命令执行失败: {0}")]
    #[diagnostic(code(ssm_env::command_execution))]
    CommandExecutionFailed(String),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(ssm_env::io))]
    Io(String),

    #[error("文件不存在: {0}")]
    #[diagnostic(code(ssm_env::file_not_found))]
    FileNotFound(PathBuf),

    #[error("配置错误: {0}")]
    #[diagnostic(code(ssm_env::config))]
    Config(String),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(ssm_env::serialization))]
    Serialization(String),
}

impl DomainError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 错误信息 + 诊断代码 + 帮助 + 错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        if !verbose {
            eprintln!("错误: {}", self);
            return;
        }

        eprintln!("❌ 错误: {}", self);
        if let Some(code) = self.code() {
            eprintln!("  代码: {}", code);
        }
        if let Some(help) = self.help() {
            eprintln!("  提示: {}", help);
        }

        let mut current = self.source();
        while let Some(next) = current {
            eprintln!("  └─ 原因: {}", next);
            current = next.source();
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Config(err.to_string())
    }
}

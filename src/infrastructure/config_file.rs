//! TOML 配置文件
//!
//! 为命令行参数提供默认值，例如：
//!
//! ```toml
//! path = "/common:/production"
//! format = "dotenv"
//! case = "upper"
//! recursive = true
//! sort = true
//! ```
//!
//! 区域不从文件读取，是否"已部署"只由环境决定。

use crate::domain::error::{DomainError, Result};
use crate::infrastructure::paths::{default_config_file, file_exists, read_file};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 配置文件内容，所有键可选
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub path: Option<String>,
    pub path_mode: Option<String>,
    pub recursive: Option<bool>,
    pub format: Option<String>,
    pub case: Option<String>,
    pub strip_path: Option<bool>,
    pub sort: Option<bool>,
    pub require_results: Option<bool>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    /// 加载配置文件
    ///
    /// - 显式指定的文件必须存在
    /// - 默认文件 (~/.ssm-env/config.toml) 不存在时返回空配置
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !file_exists(path) {
                return Err(DomainError::FileNotFound(path.to_path_buf()));
            }
            return Self::load_file(path);
        }

        match default_config_file() {
            Ok(path) if file_exists(&path) => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "读取配置文件");
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full() {
        let config = FileConfig::parse(
            r#"
path = "/common:/production"
path_mode = "prefix"
recursive = true
format = "dotenv"
case = "upper"
strip_path = false
sort = true
require_results = true
output = "/ssm/.env"
"#,
        )
        .unwrap();

        assert_eq!(config.path.as_deref(), Some("/common:/production"));
        assert_eq!(config.recursive, Some(true));
        assert_eq!(config.strip_path, Some(false));
        assert_eq!(config.output, Some(PathBuf::from("/ssm/.env")));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = FileConfig::parse("region = \"us-east-1\"");
        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_explicit_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = FileConfig::load(Some(temp.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(DomainError::FileNotFound(_))));
    }

    #[test]
    fn test_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "format = \"json\"\n").unwrap();

        let config = FileConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_invalid_file_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "recursive = \"yes please\"\n").unwrap();

        let result = FileConfig::load(Some(path.as_path()));
        assert!(matches!(result, Err(DomainError::Config(msg)) if msg.contains("config.toml")));
    }
}

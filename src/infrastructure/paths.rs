//! 路径与文件工具

use crate::domain::error::{DomainError, Result};
use std::fs::OpenOptions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// 获取配置目录：~/.ssm-env
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".ssm-env"))
        .ok_or_else(|| DomainError::Config("无法确定主目录".to_string()))
}

/// 默认配置文件路径：~/.ssm-env/config.toml
pub fn default_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 读取文件内容，返回错误时提供详细信息
pub fn read_file(path: &Path) -> Result<String> {
    if !file_exists(path) {
        return Err(DomainError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| DomainError::Io(format!("读取文件 {} 失败: {}", path.display(), e)))
}

/// 安全写入文件 (使用临时文件 + 原子替换)
///
/// 输出可能包含解密后的参数值：unix 下文件权限为 0600。
/// 任何一步失败都会删除临时文件。
pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    // 确保父目录存在
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Io(format!("创建目录 {} 失败: {}", parent.display(), e)))?;
        }
    }

    let temp_path = path.with_extension("tmp");
    let result = write_private(&temp_path, content)
        .map_err(|e| DomainError::Io(format!("写入文件 {} 失败: {}", temp_path.display(), e)))
        .and_then(|()| {
            std::fs::rename(&temp_path, path)
                .map_err(|e| DomainError::Io(format!("替换文件 {} 失败: {}", path.display(), e)))
        });

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
}

/// 创建（或截断）文件并写入，unix 下只允许所有者读写
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path)?;
    // 已存在的临时文件不受 mode 影响，显式收紧权限
    #[cfg(unix)]
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

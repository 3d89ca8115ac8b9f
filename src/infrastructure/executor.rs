//! 进程替换执行器
//!
//! Unix 使用 exec 直接替换当前进程映像，成功时不返回。
//! 其他平台没有 exec，退化为启动子进程并透传退出码。
//!
//! 新进程继承当前进程（已写入参数的）环境变量和标准流。

use crate::domain::error::{DomainError, Result};
use std::convert::Infallible;
use std::path::PathBuf;
use std::process::Command;

/// 跨平台命令执行器
pub struct CommandExecutor;

impl CommandExecutor {
    /// 在 PATH 中查找程序（含路径分隔符时直接检查该文件）
    pub fn resolve(program: &str) -> Result<PathBuf> {
        which::which(program)
            .map_err(|e| DomainError::CommandNotFound(format!("{}: {}", program, e)))
    }

    /// 用目标程序替换当前进程
    ///
    /// # 参数
    /// - `command`: 命令和参数，如 `["python", "app.py"]`
    pub fn exec_replace(command: &[String]) -> Result<Infallible> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| DomainError::CommandExecutionFailed("命令不能为空".to_string()))?;

        let path = Self::resolve(program)?;
        tracing::debug!(program = %path.display(), args = ?args, "替换当前进程");

        Self::exec_platform(path, program, args)
    }

    /// Unix 实现 (Linux/macOS)
    #[cfg(unix)]
    fn exec_platform(path: PathBuf, program: &str, args: &[String]) -> Result<Infallible> {
        use std::os::unix::process::CommandExt;

        // exec 只在失败时返回
        let err = Command::new(&path).arg0(program).args(args).exec();
        Err(DomainError::CommandExecutionFailed(format!(
            "{}: {}",
            path.display(),
            err
        )))
    }

    /// Windows 实现
    #[cfg(not(unix))]
    fn exec_platform(path: PathBuf, _program: &str, args: &[String]) -> Result<Infallible> {
        use std::process::Stdio;

        let status = Command::new(&path)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                DomainError::CommandExecutionFailed(format!("{}: {}", path.display(), e))
            })?;

        std::process::exit(status.code().unwrap_or(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command() {
        let result = CommandExecutor::exec_replace(&[]);
        assert!(matches!(result, Err(DomainError::CommandExecutionFailed(_))));
    }

    #[test]
    fn test_missing_program() {
        let command = vec!["ssm-env-definitely-missing-program".to_string()];
        let result = CommandExecutor::exec_replace(&command);
        assert!(matches!(result, Err(DomainError::CommandNotFound(msg)) if msg.contains("ssm-env-definitely-missing-program")));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_on_path() {
        let path = CommandExecutor::resolve("sh").unwrap();
        assert!(path.is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_non_executable_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-executable");
        std::fs::write(&file, "echo hi").unwrap();

        let result = CommandExecutor::resolve(file.to_str().unwrap());
        assert!(matches!(result, Err(DomainError::CommandNotFound(_))));
    }
}

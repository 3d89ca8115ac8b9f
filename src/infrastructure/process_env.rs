//! 当前进程的环境变量表

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::EnvTable;
use std::env;

/// 直接读写当前进程的环境变量
///
/// 只能在 current_thread 运行时中使用，且写入期间不能有其他线程读取环境。
#[derive(Debug, Default)]
pub struct ProcessEnvTable;

impl ProcessEnvTable {
    /// `set_var` 遇到这些输入会 panic，提前拒绝
    fn validate(name: &str, value: &str) -> Result<()> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return Err(DomainError::InvalidArgument(format!(
                "无法写入进程环境的变量名: {:?}",
                name
            )));
        }
        if value.contains('\0') {
            return Err(DomainError::InvalidArgument(format!(
                "变量 {} 的值包含 NUL 字符，无法写入进程环境",
                name
            )));
        }
        Ok(())
    }
}

impl EnvTable for ProcessEnvTable {
    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        Self::validate(name, value)?;
        // SAFETY: 运行时为 current_thread，所有任务都在本线程上执行。
        // SDK 可能通过 spawn_blocking 留下空闲的阻塞线程（如 DNS 解析），
        // 但远程调用全部结束后才会写入，这些线程此时不会读取环境变量。
        unsafe {
            env::set_var(name, value);
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

//! exec 命令处理器
//!
//! 把参数写入当前进程环境后，用目标程序替换当前进程。

use super::{CommandContext, CommandHandler};
use crate::application::services::{EnvService, LoadPlan};
use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::EnvTable;
use crate::infrastructure::executor::CommandExecutor;
use crate::infrastructure::process_env::ProcessEnvTable;
use async_trait::async_trait;
use std::sync::Arc;

/// exec 命令
pub struct ExecCommand {
    env_service: Option<Arc<EnvService>>,
    plan: LoadPlan,
    command: Vec<String>,
}

impl ExecCommand {
    pub fn new(env_service: Option<Arc<EnvService>>, plan: LoadPlan, command: Vec<String>) -> Self {
        Self {
            env_service,
            plan,
            command,
        }
    }

    /// 加载参数到环境变量表；未请求或未部署时什么也不做
    pub async fn populate(&self, table: &mut dyn EnvTable) -> Result<usize> {
        match &self.env_service {
            Some(env_service) => env_service.load_into(&self.plan, table).await,
            None => Ok(0),
        }
    }
}

#[async_trait]
impl CommandHandler for ExecCommand {
    async fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        if self.command.is_empty() {
            return Err(DomainError::InvalidArgument("未指定要执行的命令".to_string()));
        }

        // 先确认程序存在，避免加载完参数后才失败
        CommandExecutor::resolve(&self.command[0])?;

        let mut table = ProcessEnvTable;
        let count = self.populate(&mut table).await?;
        tracing::debug!(count, "已写入进程环境变量");

        match CommandExecutor::exec_replace(&self.command)? {}
    }
}

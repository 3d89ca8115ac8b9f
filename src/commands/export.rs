//! export 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::{EnvService, LoadPlan};
use crate::domain::error::Result;
use crate::infrastructure::output::OutputSink;
use async_trait::async_trait;
use std::sync::Arc;

/// export 命令：获取参数并渲染为文本
pub struct ExportCommand {
    env_service: Option<Arc<EnvService>>,
    plan: LoadPlan,
    sink: OutputSink,
}

impl ExportCommand {
    pub fn new(env_service: Option<Arc<EnvService>>, plan: LoadPlan, sink: OutputSink) -> Self {
        Self {
            env_service,
            plan,
            sink,
        }
    }
}

#[async_trait]
impl CommandHandler for ExportCommand {
    async fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        // 未请求或未部署：不输出任何内容
        let Some(env_service) = &self.env_service else {
            return Ok(());
        };

        let output = env_service.export(&self.plan).await?;
        self.sink.write(&output)
    }
}

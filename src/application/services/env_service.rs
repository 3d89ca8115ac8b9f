//! 参数加载应用服务
//!
//! 路径选择器 → 分页获取 → 推导变量名/转义值 → 聚合 → 渲染

use crate::application::services::aggregator::Aggregator;
use crate::application::services::fetcher::fetch_all;
use crate::application::services::renderer;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{
    EnvironmentMapping, FetchOptions, FormattingOptions, PathSelector, RenderOrder,
};
use crate::domain::repositories::{EnvTable, ParameterStore};
use futures::TryStreamExt;
use std::pin::pin;
use std::sync::Arc;

/// 一次运行的完整请求
#[derive(Debug, Clone, Default)]
pub struct LoadPlan {
    pub selectors: Vec<PathSelector>,
    pub formatting: FormattingOptions,
    pub fetch: FetchOptions,
    pub order: RenderOrder,
}

impl LoadPlan {
    /// 没有请求任何路径
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// 参数加载服务
pub struct EnvService {
    store: Arc<dyn ParameterStore>,
}

impl EnvService {
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    /// 按顺序获取所有路径并聚合
    ///
    /// 任一远程调用失败立即返回错误，已聚合的部分结果被丢弃。
    pub async fn collect(&self, plan: &LoadPlan) -> Result<EnvironmentMapping> {
        let mut aggregator = Aggregator::new(&plan.formatting);

        for selector in &plan.selectors {
            let before = aggregator.record_count();

            match selector {
                PathSelector::Prefix { base, recursive } => {
                    tracing::info!(path = %base, recursive = *recursive, "正在获取路径下的参数");
                    let mut records = pin!(fetch_all(self.store.as_ref(), base, *recursive));
                    while let Some(record) = records.try_next().await? {
                        aggregator.absorb(selector, record);
                    }
                }
                PathSelector::Single(name) => {
                    tracing::info!(name = %name, "正在获取单个参数");
                    let record = self.store.get_parameter(name.as_str()).await?;
                    aggregator.absorb(selector, record);
                }
            }

            tracing::debug!(
                selector = %selector,
                records = aggregator.record_count() - before,
                "路径处理完成"
            );
        }

        if plan.fetch.require_results && aggregator.record_count() == 0 {
            let paths = plan
                .selectors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DomainError::EmptyResult(paths));
        }

        Ok(aggregator.finish())
    }

    /// 获取并渲染为文本
    pub async fn export(&self, plan: &LoadPlan) -> Result<String> {
        let mapping = self.collect(plan).await?;
        renderer::render(&mapping, plan.formatting.output_format, plan.order)
    }

    /// 获取并写入环境变量表，返回写入数量
    pub async fn load_into(&self, plan: &LoadPlan, table: &mut dyn EnvTable) -> Result<usize> {
        let mapping = self.collect(plan).await?;
        renderer::apply(&mapping, table)
    }
}

//! 应用程序容器
//!
//! 负责依赖注入：只有在请求了路径且已部署（有区域）时才创建远程客户端。

use crate::application::services::{EnvService, LoadPlan};
use crate::infrastructure::output::OutputSink;
use crate::infrastructure::ssm::{SsmConfig, SsmParameterStore};
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub plan: LoadPlan,
    pub sink: OutputSink,
}

/// 运行环境状态
pub enum Deployment {
    /// 路径说明符为空
    NotRequested,
    /// 缺少区域，视为不在目标部署环境中
    NotDeployed,
    Ready(Arc<EnvService>),
}

impl Deployment {
    /// 可用的服务；不可用时记录原因
    pub fn service(&self) -> Option<Arc<EnvService>> {
        match self {
            Deployment::NotRequested => {
                tracing::info!("未指定参数路径，跳过参数加载");
                None
            }
            Deployment::NotDeployed => {
                tracing::info!("AWS_REGION 未设置，不在部署环境中，跳过参数加载");
                None
            }
            Deployment::Ready(service) => Some(Arc::clone(service)),
        }
    }
}

/// 应用程序容器
pub struct Application {
    pub config: AppConfig,
    pub deployment: Deployment,
}

impl Application {
    /// 创建应用程序实例
    pub async fn new(config: AppConfig) -> Self {
        let deployment = match (&config.region, config.plan.is_noop()) {
            (_, true) => Deployment::NotRequested,
            (None, false) => Deployment::NotDeployed,
            (Some(region), false) => {
                let store = SsmParameterStore::connect(&SsmConfig {
                    region: region.clone(),
                    endpoint_url: config.endpoint_url.clone(),
                })
                .await;
                Deployment::Ready(Arc::new(EnvService::new(Arc::new(store))))
            }
        };

        Self { config, deployment }
    }
}

//! AWS Systems Manager Parameter Store 实现

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{PageRequest, ParameterPage, ParameterRecord};
use crate::domain::repositories::ParameterStore;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::Parameter;

/// 连接配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsmConfig {
    pub region: String,
    pub endpoint_url: Option<String>,
}

/// SSM 参数存储，所有读取都开启解密
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    /// 按默认凭证链加载配置并创建客户端
    pub async fn connect(config: &SsmConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared_config = loader.load().await;

        tracing::debug!(region = %config.region, endpoint = ?config.endpoint_url, "SSM 客户端已创建");
        Self::from_client(Client::new(&shared_config))
    }

    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn list_page(&self, request: &PageRequest) -> Result<ParameterPage> {
        let output = self
            .client
            .get_parameters_by_path()
            .path(&request.path)
            .recursive(request.recursive)
            .with_decryption(true)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(|err| DomainError::RemoteFetch {
                path: request.path.clone(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let records = output.parameters().iter().filter_map(to_record).collect();
        Ok(ParameterPage::new(
            records,
            output.next_token().map(str::to_string),
        ))
    }

    async fn get_parameter(&self, name: &str) -> Result<ParameterRecord> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|service| service.is_parameter_not_found())
                {
                    DomainError::ParameterNotFound(name.to_string())
                } else {
                    DomainError::RemoteFetch {
                        path: name.to_string(),
                        message: DisplayErrorContext(&err).to_string(),
                    }
                }
            })?;

        output
            .parameter()
            .and_then(to_record)
            .ok_or_else(|| DomainError::ParameterNotFound(name.to_string()))
    }
}

fn to_record(parameter: &Parameter) -> Option<ParameterRecord> {
    match (parameter.name(), parameter.value()) {
        (Some(name), Some(value)) => Some(ParameterRecord::new(name, value)),
        (name, _) => {
            tracing::warn!(name = ?name, "忽略缺少名称或值的参数");
            None
        }
    }
}

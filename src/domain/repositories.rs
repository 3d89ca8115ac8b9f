//! 外部能力接口（输出端口）

use crate::domain::error::Result;
use crate::domain::models::{PageRequest, ParameterPage, ParameterRecord};
use async_trait::async_trait;

/// 远程参数存储
///
/// 实现必须开启解密，并把传输、鉴权、不存在等错误区分返回。
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// 列举路径下的一页参数
    async fn list_page(&self, request: &PageRequest) -> Result<ParameterPage>;

    /// 获取单个参数
    async fn get_parameter(&self, name: &str) -> Result<ParameterRecord>;
}

/// 可写的环境变量表
pub trait EnvTable: Send {
    /// 写入变量，覆盖同名旧值；变量名或值无法写入时返回错误
    fn set(&mut self, name: &str, value: &str) -> Result<()>;

    fn get(&self, name: &str) -> Option<String>;
}

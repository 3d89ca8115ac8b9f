//! 测试工具模块
//!
//! 提供内存参数存储、内存环境变量表，以及进程环境变量守卫

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{PageRequest, ParameterPage, ParameterRecord};
use crate::domain::repositories::{EnvTable, ParameterStore};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::env;
use std::sync::Mutex;

/// 内存参数存储
///
/// 每个路径预置若干页；续页令牌为下一页的序号。
#[derive(Default)]
pub struct FakeParameterStore {
    pages: HashMap<String, Vec<Vec<ParameterRecord>>>,
    singles: HashMap<String, String>,
    failing: HashSet<String>,
    calls: Mutex<Vec<PageRequest>>,
    single_calls: Mutex<Vec<String>>,
}

impl FakeParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置某路径下的分页结果
    pub fn with_pages(mut self, path: &str, pages: Vec<Vec<(&str, &str)>>) -> Self {
        let pages: Vec<Vec<ParameterRecord>> = pages
            .into_iter()
            .map(|page| {
                page.into_iter()
                    .map(|(name, value)| ParameterRecord::new(name, value))
                    .collect()
            })
            .collect();
        self.pages.insert(path.to_string(), pages);
        self
    }

    /// 预置单个参数
    pub fn with_single(mut self, name: &str, value: &str) -> Self {
        self.singles.insert(name.to_string(), value.to_string());
        self
    }

    /// 让某路径的请求失败
    pub fn failing_on(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    /// 已发出的分页请求
    pub fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// 已发出的单参数请求
    pub fn single_calls(&self) -> Vec<String> {
        self.single_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParameterStore for FakeParameterStore {
    async fn list_page(&self, request: &PageRequest) -> Result<ParameterPage> {
        self.calls.lock().unwrap().push(request.clone());

        if self.failing.contains(&request.path) {
            return Err(DomainError::RemoteFetch {
                path: request.path.clone(),
                message: "AccessDeniedException".to_string(),
            });
        }

        let Some(pages) = self.pages.get(&request.path) else {
            return Ok(ParameterPage::default());
        };

        let index: usize = match &request.next_token {
            Some(token) => token.parse().unwrap(),
            None => 0,
        };
        let records = pages.get(index).cloned().unwrap_or_default();
        let next_token = (index + 1 < pages.len()).then(|| (index + 1).to_string());

        Ok(ParameterPage::new(records, next_token))
    }

    async fn get_parameter(&self, name: &str) -> Result<ParameterRecord> {
        self.single_calls.lock().unwrap().push(name.to_string());

        if self.failing.contains(name) {
            return Err(DomainError::RemoteFetch {
                path: name.to_string(),
                message: "AccessDeniedException".to_string(),
            });
        }

        self.singles
            .get(name)
            .map(|value| ParameterRecord::new(name, value.clone()))
            .ok_or_else(|| DomainError::ParameterNotFound(name.to_string()))
    }
}

/// 内存环境变量表
#[derive(Debug, Default)]
pub struct MemoryEnvTable {
    pub vars: HashMap<String, String>,
}

impl MemoryEnvTable {
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvTable for MemoryEnvTable {
    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        for (key, value) in &self.original_vars {
            if env::var(key).ok().as_deref() != Some(value.as_str()) {
                self.set_var(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    async fn test_fake_store_paginates() {
        let store = FakeParameterStore::new()
            .with_pages("/p", vec![vec![("/p/a", "1")], vec![("/p/b", "2")]]);

        let first = store
            .list_page(&PageRequest {
                path: "/p".to_string(),
                recursive: false,
                next_token: None,
            })
            .await
            .unwrap();
        assert_eq!(first.next_token.as_deref(), Some("1"));

        let second = store
            .list_page(&PageRequest {
                path: "/p".to_string(),
                recursive: false,
                next_token: first.next_token,
            })
            .await
            .unwrap();
        assert_eq!(second.records[0].full_path, "/p/b");
        assert_eq!(second.next_token, None);
    }

    #[test]
    #[serial]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("SSM_ENV_TEST_CLEANUP_VAR", "cleanup_test");
            assert_eq!(env::var("SSM_ENV_TEST_CLEANUP_VAR").unwrap(), "cleanup_test");
        }
        assert!(env::var("SSM_ENV_TEST_CLEANUP_VAR").is_err());
    }
}

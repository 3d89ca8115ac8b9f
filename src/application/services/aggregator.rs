//! 聚合器：把多个基础路径的参数合并为一个有序映射
//!
//! 同名变量后写覆盖先写（后处理的基础路径优先，同一路径内后一页优先）。
//! 结果只依赖基础路径和页的固定处理顺序，与哈希无关。

use crate::domain::models::{EnvironmentMapping, FormattingOptions, ParameterRecord, PathSelector};
use crate::domain::naming::{derive_name, is_shell_identifier};
use crate::domain::sanitize::sanitize;
use std::collections::HashMap;

/// 聚合器，独占一次运行的映射
pub struct Aggregator<'a> {
    options: &'a FormattingOptions,
    mapping: EnvironmentMapping,
    origins: HashMap<String, String>,
    records: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(options: &'a FormattingOptions) -> Self {
        Self {
            options,
            mapping: EnvironmentMapping::new(),
            origins: HashMap::new(),
            records: 0,
        }
    }

    /// 推导变量名、转义值并写入映射
    pub fn absorb(&mut self, selector: &PathSelector, record: ParameterRecord) {
        self.records += 1;

        let name = derive_name(&record.full_path, selector, self.options);
        if !is_shell_identifier(&name) {
            tracing::warn!(name = %name, path = %record.full_path, "变量名不是合法的 shell 标识符");
        }

        let value = sanitize(&record.value, self.options.output_format.quote_style()).into_owned();

        if self.mapping.insert(name.clone(), value).is_some() {
            let previous = self.origins.get(&name).map(String::as_str).unwrap_or("?");
            tracing::debug!(
                name = %name,
                previous = %previous,
                current = %record.full_path,
                "变量名冲突，后写覆盖"
            );
        }
        self.origins.insert(name, record.full_path);
    }

    /// 已处理的记录总数（含被覆盖的）
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records
    }

    #[must_use]
    pub fn finish(self) -> EnvironmentMapping {
        self.mapping
    }
}

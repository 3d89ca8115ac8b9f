//! 参数路径 → 环境变量名

use crate::domain::models::path::last_segment;
use crate::domain::models::{BasePath, FormattingOptions, PathSelector, SEPARATOR};
use regex::Regex;
use std::sync::OnceLock;

static SHELL_IDENTIFIER: OnceLock<Regex> = OnceLock::new();

/// 由参数完整路径推导变量名
///
/// 规则：
/// - 单个参数：取最后一段
/// - 前缀：按 `strip_base_path` 去掉基础路径（否则只去掉根），
///   去掉首尾 `/`，其余 `/` 替换为 `_`
/// - 最后应用大小写转换
///
/// 不检查唯一性，冲突由聚合器处理。
#[must_use]
pub fn derive_name(full_path: &str, selector: &PathSelector, options: &FormattingOptions) -> String {
    let name = match selector {
        PathSelector::Single(_) => last_segment(full_path).to_string(),
        PathSelector::Prefix { base, .. } => flatten(full_path, base, options),
    };

    options.case_mode.apply(&name)
}

fn flatten(full_path: &str, base: &BasePath, options: &FormattingOptions) -> String {
    let relative = if options.strip_base_path {
        strip_base(full_path, base)
    } else {
        full_path
    };

    let trimmed = relative.trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        // 参数名与基础路径相同
        return last_segment(full_path).to_string();
    }

    trimmed.replace(SEPARATOR, &options.separator_replacement.to_string())
}

/// 只在路径段边界上去掉前缀：`/app` 不会吃掉 `/application` 的开头
fn strip_base<'a>(full_path: &'a str, base: &BasePath) -> &'a str {
    if base.is_root() {
        return full_path;
    }

    match full_path.strip_prefix(base.as_str()) {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => rest,
        _ => full_path,
    }
}

/// 名称能否直接作为 shell 变量名
#[must_use]
pub fn is_shell_identifier(name: &str) -> bool {
    SHELL_IDENTIFIER
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap_or_else(|e| panic!("正则无效: {e}"))
        })
        .is_match(name)
}

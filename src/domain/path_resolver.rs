//! 路径说明符解析
//!
//! 说明符用 `:` 分隔多个条目，按 [`PathMode`] 解释为有序的 [`PathSelector`] 列表。
//! 空说明符得到空列表，调用方将其视为"未请求任何配置"。

use crate::domain::models::{BasePath, PathMode, PathSelector, SEPARATOR};

/// 多路径分隔符
pub const LIST_DELIMITER: char = ':';

/// 通配后缀
pub const WILDCARD_SUFFIX: &str = "/*";

/// 解析路径说明符
#[must_use]
pub fn resolve(path_list: &str, mode: PathMode, recursive: bool) -> Vec<PathSelector> {
    let mut selectors = Vec::new();

    for entry in path_list.split(LIST_DELIMITER) {
        match mode {
            PathMode::Prefix => {
                if let Some(selector) = resolve_prefix(entry, recursive) {
                    selectors.push(selector);
                }
            }
            PathMode::Wildcard => {
                if let Some(selector) = resolve_wildcard(entry) {
                    selectors.push(selector);
                }
            }
            PathMode::Hierarchy => {
                selectors.extend(
                    hierarchy_prefixes(entry)
                        .into_iter()
                        .map(|base| PathSelector::Prefix { base, recursive }),
                );
            }
        }
    }

    selectors
}

/// 前缀条目；`/*` 结尾时去掉后缀并强制递归
fn resolve_prefix(entry: &str, recursive: bool) -> Option<PathSelector> {
    let entry = entry.trim();
    match entry.strip_suffix(WILDCARD_SUFFIX) {
        Some(prefix) => Some(PathSelector::Prefix {
            base: BasePath::parse(prefix).unwrap_or_else(BasePath::root),
            recursive: true,
        }),
        None => BasePath::parse(entry).map(|base| PathSelector::Prefix { base, recursive }),
    }
}

/// `/*` 结尾 ⇒ 递归前缀；否则 ⇒ 单个参数
fn resolve_wildcard(entry: &str) -> Option<PathSelector> {
    let entry = entry.trim();
    match entry.strip_suffix(WILDCARD_SUFFIX) {
        Some(prefix) => {
            // `/*` 本身指向根
            let base = BasePath::parse(prefix).unwrap_or_else(BasePath::root);
            Some(PathSelector::Prefix {
                base,
                recursive: true,
            })
        }
        None => BasePath::parse(entry).map(PathSelector::Single),
    }
}

/// 由短到长列出路径的所有前缀：`/a/b/c` ⇒ `/a`, `/a/b`, `/a/b/c`
#[must_use]
pub fn hierarchy_prefixes(entry: &str) -> Vec<BasePath> {
    let entry = entry.trim();
    let entry = entry.strip_suffix(WILDCARD_SUFFIX).unwrap_or(entry);
    if entry.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = entry
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return vec![BasePath::root()];
    }

    let leading = entry.starts_with(SEPARATOR);
    let mut current = String::new();
    let mut prefixes = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        if leading || index > 0 {
            current.push(SEPARATOR);
        }
        current.push_str(segment);
        if let Some(base) = BasePath::parse(&current) {
            prefixes.push(base);
        }
    }

    prefixes
}

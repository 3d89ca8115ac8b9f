//! 参数路径模型

use std::fmt;

/// 路径分隔符
pub const SEPARATOR: char = '/';

/// 规范化的层级基础路径，如 `/production/db`
///
/// 非空，去掉末尾的 `/`（根路径 `/` 除外）。创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// 规范化原始路径；空字符串返回 `None`
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let trimmed = raw.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            // 只由 `/` 组成
            return Some(Self::root());
        }

        Some(Self(trimmed.to_string()))
    }

    /// 根路径 `/`
    #[must_use]
    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1 && self.0.starts_with(SEPARATOR)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 取完整路径的最后一段（忽略末尾分隔符）
#[must_use]
pub fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    trimmed.rsplit(SEPARATOR).next().unwrap_or(trimmed)
}

/// 一个配置来源的取值方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSelector {
    /// 按前缀分页列举
    Prefix { base: BasePath, recursive: bool },
    /// 精确获取单个参数
    Single(BasePath),
}

impl PathSelector {
    #[must_use]
    pub fn base(&self) -> &BasePath {
        match self {
            PathSelector::Prefix { base, .. } => base,
            PathSelector::Single(base) => base,
        }
    }
}

impl fmt::Display for PathSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSelector::Prefix {
                base,
                recursive: true,
            } => write!(f, "{}/*", base.as_str().trim_end_matches(SEPARATOR)),
            PathSelector::Prefix { base, .. } => write!(f, "{}", base),
            PathSelector::Single(base) => write!(f, "{} (单个参数)", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_trailing_separator() {
        let path = BasePath::parse("/production/db/").unwrap();
        assert_eq!(path.as_str(), "/production/db");
    }

    #[test]
    fn test_parse_keeps_root() {
        let path = BasePath::parse("///").unwrap();
        assert_eq!(path.as_str(), "/");
        assert!(path.is_root());
    }

    #[test]
    fn test_parse_empty() {
        assert!(BasePath::parse("").is_none());
        assert!(BasePath::parse("   ").is_none());
    }

    #[test]
    fn test_parse_keeps_leading_slash() {
        assert_eq!(BasePath::parse("/a").unwrap().as_str(), "/a");
        assert_eq!(BasePath::parse("a/b").unwrap().as_str(), "a/b");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/production/db/password"), "password");
        assert_eq!(last_segment("/production/db/"), "db");
        assert_eq!(last_segment("token"), "token");
    }

    #[test]
    fn test_selector_display() {
        let base = BasePath::parse("/app").unwrap();
        let recursive = PathSelector::Prefix {
            base: base.clone(),
            recursive: true,
        };
        assert_eq!(recursive.to_string(), "/app/*");
        assert_eq!(PathSelector::Single(base).to_string(), "/app (单个参数)");
    }
}

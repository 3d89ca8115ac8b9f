//! 远程参数记录

/// 一条远程参数：完整路径 + 原始值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    pub full_path: String,
    pub value: String,
}

impl ParameterRecord {
    #[must_use]
    pub fn new(full_path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            value: value.into(),
        }
    }
}

/// 一次分页列举请求
///
/// 解密始终开启，由存储实现负责。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub path: String,
    pub recursive: bool,
    pub next_token: Option<String>,
}

/// 一页列举结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub records: Vec<ParameterRecord>,
    pub next_token: Option<String>,
}

impl ParameterPage {
    #[must_use]
    pub fn new(records: Vec<ParameterRecord>, next_token: Option<String>) -> Self {
        Self {
            records,
            next_token,
        }
    }

    /// 续页令牌；空字符串视为没有下一页
    #[must_use]
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_no_continuation() {
        let page = ParameterPage::new(vec![], Some(String::new()));
        assert_eq!(page.continuation(), None);

        let page = ParameterPage::new(vec![], Some("abc".to_string()));
        assert_eq!(page.continuation(), Some("abc"));
    }
}

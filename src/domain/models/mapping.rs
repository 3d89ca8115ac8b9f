//! 变量名 → 值 的有序映射

use indexmap::IndexMap;

/// 按插入顺序保存的环境变量映射
///
/// 键唯一；同名写入覆盖旧值但保留原位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMapping {
    entries: IndexMap<String, String>,
}

impl EnvironmentMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入变量，返回被覆盖的旧值
    pub fn insert(&mut self, name: String, value: String) -> Option<String> {
        self.entries.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// 按变量名字典序遍历
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(String, String)> for EnvironmentMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}

//! 格式化与获取选项

use std::fmt;

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `export NAME=$'VALUE'`
    #[default]
    Exports,
    /// `NAME="VALUE"`
    Dotenv,
    /// `{"NAME": "VALUE"}`
    Json,
    /// 直接写入进程环境变量表
    ProcessEnv,
}

impl OutputFormat {
    /// 从字符串解析（仅文本格式；ProcessEnv 由 exec 子命令选择）
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "exports" | "export" | "shell" => Some(OutputFormat::Exports),
            "dotenv" | "env" => Some(OutputFormat::Dotenv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// 该格式下值的转义方式
    #[must_use]
    pub fn quote_style(&self) -> QuoteStyle {
        match self {
            OutputFormat::Exports => QuoteStyle::DollarQuoted,
            OutputFormat::Dotenv | OutputFormat::Json | OutputFormat::ProcessEnv => {
                QuoteStyle::Plain
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Exports => write!(f, "exports"),
            OutputFormat::Dotenv => write!(f, "dotenv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::ProcessEnv => write!(f, "process-env"),
        }
    }
}

/// 值嵌入目标语法的引用方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// 仅转义换行
    Plain,
    /// `$'...'`：转义换行和单引号
    DollarQuoted,
}

/// 变量名大小写转换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    None,
    Upper,
    Lower,
}

impl CaseMode {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Some(CaseMode::None),
            "upper" => Some(CaseMode::Upper),
            "lower" => Some(CaseMode::Lower),
            _ => None,
        }
    }

    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseMode::None => name.to_string(),
            CaseMode::Upper => name.to_uppercase(),
            CaseMode::Lower => name.to_lowercase(),
        }
    }
}

/// 路径说明符的解释方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// 每个条目都是前缀
    #[default]
    Prefix,
    /// `/*` 结尾为递归前缀，否则为单个参数
    Wildcard,
    /// 展开为路径的所有前缀，由短到长
    Hierarchy,
}

impl PathMode {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Some(PathMode::Prefix),
            "wildcard" => Some(PathMode::Wildcard),
            "hierarchy" => Some(PathMode::Hierarchy),
            _ => None,
        }
    }
}

/// 渲染顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderOrder {
    /// 聚合时的插入顺序
    #[default]
    Insertion,
    /// 按变量名字典序，便于比较差异
    Sorted,
}

/// 变量名与值的格式化选项，构造一次后只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingOptions {
    pub output_format: OutputFormat,
    pub strip_base_path: bool,
    pub case_mode: CaseMode,
    pub separator_replacement: char,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strip_base_path: true,
            case_mode: CaseMode::default(),
            separator_replacement: '_',
        }
    }
}

impl FormattingOptions {
    #[must_use]
    pub fn with_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    #[must_use]
    pub fn with_case(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    #[must_use]
    pub fn with_strip_base_path(mut self, strip: bool) -> Self {
        self.strip_base_path = strip;
        self
    }
}

/// 获取行为选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchOptions {
    /// 结果为空时报错
    pub require_results: bool,
}

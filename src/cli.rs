//! CLI 参数定义
//!
//! 每个选项都可以由环境变量提供；优先级：命令行 > 环境变量 > 配置文件 > 默认值。

use crate::app::AppConfig;
use crate::application::services::LoadPlan;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{
    CaseMode, FetchOptions, FormattingOptions, OutputFormat, PathMode, RenderOrder,
};
use crate::domain::path_resolver::resolve;
use crate::infrastructure::config_file::FileConfig;
use crate::infrastructure::output::OutputSink;
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ssm-env - 把 AWS Parameter Store 参数导出为环境变量
#[derive(Parser, Debug)]
#[command(
    name = "ssm-env",
    version,
    about = "把 AWS Parameter Store 参数导出为环境变量",
    long_about = "按路径前缀获取 AWS Parameter Store 参数，输出 shell export 语句、.env 行或 JSON，\n或写入进程环境后执行目标程序。\n\n示例：eval \"$(ssm-env --path /production --case upper)\""
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 参数路径，多个路径用 ':' 分隔
    #[arg(short, long, global = true, env = "AWS_ENV_PATH")]
    pub path: Option<String>,

    /// AWS 区域；未设置时视为不在部署环境中，直接跳过
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// 自定义 SSM 端点（如 LocalStack）
    #[arg(long, global = true, env = "AWS_ENV_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// 递归获取子路径
    #[arg(short, long, global = true, env = "AWS_ENV_RECURSIVE", value_parser = FalseyValueParser::new())]
    pub recursive: bool,

    /// 路径模式 (prefix/wildcard/hierarchy)
    #[arg(long, global = true, env = "AWS_ENV_PATH_MODE")]
    pub path_mode: Option<String>,

    /// 输出格式 (exports/dotenv/json)
    #[arg(short, long, global = true, env = "AWS_ENV_FORMAT")]
    pub format: Option<String>,

    /// 变量名大小写 (upper/lower/none)
    #[arg(short, long, global = true, env = "AWS_ENV_CASE")]
    pub case: Option<String>,

    /// 变量名保留完整路径，不去掉基础路径
    #[arg(long, global = true, env = "AWS_ENV_NO_STRIP_PATH", value_parser = FalseyValueParser::new())]
    pub no_strip_path: bool,

    /// 按变量名排序输出
    #[arg(long, global = true, env = "AWS_ENV_SORT", value_parser = FalseyValueParser::new())]
    pub sort: bool,

    /// 未找到任何参数时报错
    #[arg(long, global = true, env = "AWS_ENV_REQUIRE_RESULTS", value_parser = FalseyValueParser::new())]
    pub require_results: bool,

    /// 输出到文件而不是标准输出
    #[arg(short, long, global = true, env = "AWS_ENV_OUTPUT", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 配置文件 (默认 ~/.ssm-env/config.toml)
    #[arg(long, global = true, env = "AWS_ENV_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 输出环境变量（默认）
    Export,

    /// 写入环境变量后执行命令（替换当前进程）
    Exec {
        /// 要执行的命令
        #[arg(required = true, last = true)]
        command: Vec<String>,
    },
}

impl Cli {
    /// 是否为 exec 模式
    #[must_use]
    pub fn is_exec(&self) -> bool {
        matches!(self.command, Some(Commands::Exec { .. }))
    }
}

/// 解析输出格式
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::parse(format)
        .ok_or_else(|| DomainError::InvalidArgument(format!("不支持的输出格式: {}", format)))
}

/// 解析大小写模式
pub fn parse_case(case: &str) -> Result<CaseMode> {
    CaseMode::parse(case)
        .ok_or_else(|| DomainError::InvalidArgument(format!("不支持的大小写模式: {}", case)))
}

/// 解析路径模式
pub fn parse_path_mode(mode: &str) -> Result<PathMode> {
    PathMode::parse(mode)
        .ok_or_else(|| DomainError::InvalidArgument(format!("不支持的路径模式: {}", mode)))
}

/// 合并命令行与配置文件，得到应用配置
///
/// 所有选项在这里校验，任何远程调用之前失败。
pub fn build_config(cli: &Cli, file: FileConfig) -> Result<AppConfig> {
    let output_format = if cli.is_exec() {
        // exec 模式下仍校验 --format，但不使用
        if let Some(format) = cli.format.as_deref().or(file.format.as_deref()) {
            parse_format(format)?;
        }
        OutputFormat::ProcessEnv
    } else {
        cli.format
            .as_deref()
            .or(file.format.as_deref())
            .map(parse_format)
            .transpose()?
            .unwrap_or_default()
    };

    let case_mode = cli
        .case
        .as_deref()
        .or(file.case.as_deref())
        .map(parse_case)
        .transpose()?
        .unwrap_or_default();

    let path_mode = cli
        .path_mode
        .as_deref()
        .or(file.path_mode.as_deref())
        .map(parse_path_mode)
        .transpose()?
        .unwrap_or_default();

    let strip_base_path = !cli.no_strip_path && file.strip_path.unwrap_or(true);
    let recursive = cli.recursive || file.recursive.unwrap_or(false);
    let sort = cli.sort || file.sort.unwrap_or(false);
    let require_results = cli.require_results || file.require_results.unwrap_or(false);

    let path_list = cli.path.clone().or(file.path).unwrap_or_default();
    let selectors = resolve(&path_list, path_mode, recursive);

    let plan = LoadPlan {
        selectors,
        formatting: FormattingOptions::default()
            .with_format(output_format)
            .with_case(case_mode)
            .with_strip_base_path(strip_base_path),
        fetch: FetchOptions { require_results },
        order: if sort {
            RenderOrder::Sorted
        } else {
            RenderOrder::Insertion
        },
    };

    Ok(AppConfig {
        verbose: cli.verbose,
        region: cli.region.clone().filter(|region| !region.trim().is_empty()),
        endpoint_url: cli.endpoint_url.clone(),
        plan,
        sink: OutputSink::from_path(cli.output.clone().or(file.output)),
    })
}

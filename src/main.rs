//! ssm-env 主程序入口
//!
//! 设计原则：
//! - 标准输出只用于渲染结果，日志写到标准错误
//! - 任何错误都以非零退出码结束，不输出部分结果
//! - 未部署（缺少区域）或未指定路径时静默成功

use clap::Parser;
use ssm_env::app::Application;
use ssm_env::cli::{self, Cli, Commands};
use ssm_env::commands::{CommandContext, CommandHandler, ExecCommand, ExportCommand};
use ssm_env::domain::error::Result;
use ssm_env::infrastructure::config_file::FileConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// 进程环境写入要求单线程运行时
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let verbose = cli.verbose;
    if let Err(e) = run(cli).await {
        e.report(verbose);
        std::process::exit(1);
    }
}

/// 初始化日志：写到标准错误，RUST_LOG 优先
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,ssm_env={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// 运行具体命令
async fn run(cli: Cli) -> Result<()> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let config = cli::build_config(&cli, file)?;
    let ctx = CommandContext {
        verbose: config.verbose,
    };

    let app = Application::new(config).await;
    let env_service = app.deployment.service();
    let plan = app.config.plan.clone();

    let handler: Box<dyn CommandHandler> = match cli.command {
        None | Some(Commands::Export) => {
            Box::new(ExportCommand::new(env_service, plan, app.config.sink.clone()))
        }
        Some(Commands::Exec { command }) => Box::new(ExecCommand::new(env_service, plan, command)),
    };

    handler.execute(&ctx).await
}

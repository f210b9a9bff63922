//! 积分兑换命令行入口
//!
//! 加载分层配置，初始化日志，构建国家策略表后执行子命令。

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use loyalty_shared::config::{AppConfig, ConfigLoader};
use loyalty_shared::observability;
use points_redemption::SERVICE_NAME;
use points_redemption::cli::{Cli, CommandRunner, Commands};
use points_redemption::strategy::{CountryStrategyTable, RewardTableConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new(SERVICE_NAME);
    if let Some(env) = &cli.env {
        loader = loader.with_environment(env);
    }
    if let Some(dir) = &cli.config_dir {
        loader = loader.with_config_dir(dir);
    }
    let source = loader.build().context("加载配置失败")?;

    let mut app_config = AppConfig::from_source(&source).unwrap_or_else(|e| {
        eprintln!("配置解析失败，使用默认配置: {e}");
        AppConfig {
            service_name: SERVICE_NAME.to_string(),
            environment: loader.environment().to_string(),
            ..AppConfig::default()
        }
    });
    if let Some(level) = cli.log_level.clone() {
        app_config.observability = app_config.observability.with_log_level(level);
    }

    observability::init(&app_config.service_name, &app_config.observability)?;
    if app_config.is_production() {
        warn!(environment = %app_config.environment, "使用日志支付网关运行在生产环境");
    }

    let rewards = RewardTableConfig::load(&source).context("读取奖励表配置失败")?;
    let table = CountryStrategyTable::from_config(&rewards).context("构建兑换策略表失败")?;
    let runner = CommandRunner::new(table);

    match cli.command {
        Commands::Redeem {
            user_id,
            country,
            points,
            account,
            times,
        } => {
            runner.run_redeem(&user_id, country, points, account.as_deref(), times)?;
        }
        Commands::Table => runner.run_table(),
    }

    Ok(())
}

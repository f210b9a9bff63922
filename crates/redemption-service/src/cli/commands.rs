//! CLI 命令定义

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{CountryCode, Points};

/// 积分兑换命令行工具
#[derive(Parser, Debug)]
#[command(name = "points-redemption")]
#[command(version, about = "积分兑换策略引擎")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// 配置目录，覆盖 CONFIG_DIR
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// 运行环境，覆盖 LOYALTY_ENV
    #[arg(long)]
    pub env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 为用户执行兑换
    ///
    /// 使用仅记录日志的支付网关，每次兑换都基于当前余额独立判断。
    Redeem {
        /// 用户 ID
        #[arg(short, long)]
        user_id: String,

        /// 国家代码 (DE, FR, IN)
        #[arg(short, long)]
        country: CountryCode,

        /// 初始积分
        #[arg(short, long)]
        points: Points,

        /// 收款账号（银行转账需要）
        #[arg(short, long)]
        account: Option<String>,

        /// 兑换次数
        #[arg(short, long, default_value = "1")]
        times: usize,
    },

    /// 打印国家策略表
    Table,
}

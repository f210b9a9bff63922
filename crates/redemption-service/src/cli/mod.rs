//! CLI 模块
//!
//! - `redeem` - 为单个用户执行一次或多次兑换
//! - `table` - 打印当前配置的国家策略表
//!
//! # 使用示例
//!
//! ```bash
//! # 德国用户银行转账兑换
//! points-redemption redeem --user-id u-001 --country DE --points 1000 --account 00000000000000000042
//!
//! # 连续兑换三次
//! points-redemption redeem -u u-002 -c IN -p 1600 --times 3
//!
//! # 查看策略表
//! points-redemption table
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;

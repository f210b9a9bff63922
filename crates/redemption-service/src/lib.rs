//! 积分兑换策略引擎
//!
//! 根据用户所在国家选择兑换策略，在积分达到门槛时发放奖励并扣减积分。
//!
//! ## 模块结构
//!
//! - `models`: 国家代码、积分、用户等领域模型
//! - `strategy`: 兑换策略及国家策略表
//! - `gateway`: 支付网关接口
//! - `reporter`: 结构化兑换结果上报
//! - `service`: 兑换服务
//! - `cli`: 命令行入口
//!
//! ## 支持的奖励
//!
//! | 国家 | 奖励 | 默认门槛 | 默认奖励 |
//! |------|------|----------|----------|
//! | DE | 银行转账 | 1000 | 50 |
//! | FR | 礼品卡 | 2000 | 100 |
//! | IN | 电影票 | 500 | 2 张 |

pub mod cli;
pub mod error;
pub mod gateway;
pub mod models;
pub mod reporter;
pub mod service;
pub mod strategy;

pub use error::{RedemptionError, Result};
pub use gateway::{GatewayError, LoggingPaymentGateway, PaymentGateway};
pub use models::{AccountNo, CountryCode, Points, RewardKind, User, UserId};
pub use reporter::{OutcomeReporter, RecordingReporter, RedemptionOutcome, TracingReporter};
pub use service::{RedeemResponse, RedemptionService};
pub use strategy::{CountryStrategyTable, RedemptionStrategy, RewardTableConfig};

/// 服务名，用于配置文件查找和日志
pub const SERVICE_NAME: &str = "points-redemption";

//! 兑换策略模块
//!
//! ## 模块结构
//!
//! - `context`: 单次兑换的上下文与支付信息
//! - `handler`: RedemptionStrategy trait 定义
//! - `handlers`: 各奖励类型的具体实现
//! - `table`: 国家到策略的映射表
//!
//! ## 设计说明
//!
//! 兑换采用策略模式，`RedemptionStrategy` 定义统一接口，不同奖励类型各自实现。
//! 国家策略表在启动时构建一次，用户构造时按国家绑定策略。

pub mod context;
pub mod handler;
pub mod handlers;
pub mod table;

pub use context::{PaymentDetails, RedemptionContext};
pub use handler::{RedemptionStrategy, RewardTerms};
pub use handlers::{BankTransferStrategy, CinemaTicketsStrategy, GiftCardStrategy};
pub use table::{CountryStrategyTable, RewardEntry, RewardTableConfig};

//! 兑换策略实现
//!
//! - `BankTransferStrategy`: 银行转账（需要支付网关与收款账号）
//! - `GiftCardStrategy`: 礼品卡
//! - `CinemaTicketsStrategy`: 电影票（奖励数额为票数）

mod bank_transfer;
mod cinema_tickets;
mod gift_card;

pub use bank_transfer::BankTransferStrategy;
pub use cinema_tickets::CinemaTicketsStrategy;
pub use gift_card::GiftCardStrategy;

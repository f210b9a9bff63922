//! 兑换结果上报
//!
//! 所有面向用户的文本输出都经由 `OutcomeReporter`。测试可以直接断言结构化结果，
//! 而不必解析日志字符串。

use std::fmt;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::models::{AccountNo, Points, UserId};

/// 结构化兑换结果
///
/// `Display` 输出固定文本，便于日志检索
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedemptionOutcome {
    /// 积分不足，未做任何变更
    InsufficientPoints {
        user_id: UserId,
        points: Points,
        required_points: Points,
    },
    /// 银行转账已发出
    BankTransferSent {
        account_no: AccountNo,
        amount: Decimal,
        required_points: Points,
    },
    /// 礼品卡已发放
    GiftCardIssued {
        amount: Decimal,
        required_points: Points,
    },
    /// 电影票已发放（数量，非金额）
    CinemaTicketsIssued {
        quantity: Decimal,
        required_points: Points,
    },
    /// 兑换完成并已扣减积分
    Redeemed {
        user_id: UserId,
        deducted: Points,
        balance: Points,
    },
}

impl fmt::Display for RedemptionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints {
                points,
                required_points,
                ..
            } => write!(
                f,
                "Not enough points, got {} out of {}",
                points, required_points
            ),
            Self::BankTransferSent {
                account_no,
                amount,
                required_points,
            } => write!(
                f,
                "Transferred {} to account {} for {} points",
                amount, account_no, required_points
            ),
            Self::GiftCardIssued {
                amount,
                required_points,
            } => write!(
                f,
                "Issued gift card worth {} for {} points",
                amount, required_points
            ),
            Self::CinemaTicketsIssued {
                quantity,
                required_points,
            } => write!(
                f,
                "Issued {} cinema tickets for {} points",
                quantity, required_points
            ),
            Self::Redeemed {
                user_id, deducted, ..
            } => write!(f, "Redeemed {} points, for user {}", deducted, user_id),
        }
    }
}

/// 结果上报接口
pub trait OutcomeReporter: Send + Sync {
    fn report(&self, outcome: &RedemptionOutcome);
}

/// 通过 tracing 输出结果
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl OutcomeReporter for TracingReporter {
    fn report(&self, outcome: &RedemptionOutcome) {
        match outcome {
            RedemptionOutcome::InsufficientPoints {
                user_id,
                points,
                required_points,
            } => warn!(
                user_id = %user_id,
                points = %points,
                required_points = %required_points,
                "{}",
                outcome
            ),
            RedemptionOutcome::Redeemed {
                user_id,
                deducted,
                balance,
            } => info!(
                user_id = %user_id,
                deducted = %deducted,
                balance = %balance,
                "{}",
                outcome
            ),
            _ => info!("{}", outcome),
        }
    }
}

/// 在内存中记录结果
#[derive(Debug, Default)]
pub struct RecordingReporter {
    outcomes: Mutex<Vec<RedemptionOutcome>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录结果的快照
    pub fn outcomes(&self) -> Vec<RedemptionOutcome> {
        self.outcomes.lock().clone()
    }

    pub fn last(&self) -> Option<RedemptionOutcome> {
        self.outcomes.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.outcomes.lock().clear();
    }
}

impl OutcomeReporter for RecordingReporter {
    fn report(&self, outcome: &RedemptionOutcome) {
        self.outcomes.lock().push(outcome.clone());
    }
}

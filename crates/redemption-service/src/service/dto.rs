//! 服务层数据传输对象

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Points, RewardKind, UserId};

/// 单次兑换结果
///
/// `redeemed = false` 时没有兑换单号和兑换时间，积分余额保持不变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_no: Option<String>,
    pub user_id: UserId,
    pub reward_kind: RewardKind,
    pub redeemed: bool,
    /// 本次扣减的积分，未兑换时为 0
    pub deducted: Points,
    /// 兑换后的积分余额
    pub balance: Points,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl RedeemResponse {
    pub fn success(
        redemption_no: String,
        user_id: UserId,
        reward_kind: RewardKind,
        deducted: Points,
        balance: Points,
    ) -> Self {
        Self {
            redemption_no: Some(redemption_no),
            user_id,
            reward_kind,
            redeemed: true,
            deducted,
            balance,
            redeemed_at: Some(Utc::now()),
        }
    }

    /// 积分不足，未兑换
    pub fn not_redeemed(user_id: UserId, reward_kind: RewardKind, balance: Points) -> Self {
        Self {
            redemption_no: None,
            user_id,
            reward_kind,
            redeemed: false,
            deducted: Points::ZERO,
            balance,
            redeemed_at: None,
        }
    }
}

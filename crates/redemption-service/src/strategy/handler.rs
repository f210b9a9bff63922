//! 兑换策略 Trait 定义
//!
//! 提供兑换奖励的统一抽象接口，每种奖励类型（银行转账、礼品卡、电影票）
//! 各自实现。

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{RedemptionError, Result};
use crate::models::{Points, RewardKind};

use super::context::RedemptionContext;

/// 兑换条款
///
/// 策略构造后不可变，可被任意多个用户共享
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTerms {
    /// 兑换门槛（所需积分）
    pub required_points: Points,
    /// 奖励数额（货币单位或票数，取决于奖励类型）
    pub award_amount: Decimal,
}

impl RewardTerms {
    pub fn new(required_points: Points, award_amount: Decimal) -> Self {
        Self {
            required_points,
            award_amount,
        }
    }
}

/// 兑换策略 Trait
///
/// # 设计说明
///
/// - `fulfil`: 奖励副作用（转账或非货币发放），必须实现
/// - `redeem_points`: 门槛检查 + 发放，提供默认实现
/// - `validate_terms`: 条款校验，在策略表构建时调用
///
/// 策略不持有任何用户相关状态。
pub trait RedemptionStrategy: Send + Sync {
    /// 返回此策略的奖励类型
    fn reward_kind(&self) -> RewardKind;

    /// 返回兑换条款
    fn terms(&self) -> &RewardTerms;

    fn required_points(&self) -> Points {
        self.terms().required_points
    }

    fn award_amount(&self) -> Decimal {
        self.terms().award_amount
    }

    /// 执行奖励发放
    ///
    /// 只在积分满足门槛后调用。需要支付信息的策略通过
    /// `ctx.payment_details()` 获取，缺失时返回 `MissingPaymentDetails`。
    fn fulfil(&self, ctx: &RedemptionContext<'_>) -> Result<()>;

    /// 检查积分并兑换
    ///
    /// # 返回
    /// - `Ok(true)`: 积分满足门槛且发放成功
    /// - `Ok(false)`: 积分不足，未产生任何副作用，由调用方上报
    /// - `Err(RedemptionError)`: 发放失败（支付信息缺失、网关错误等）
    fn redeem_points(&self, points: Points, ctx: &RedemptionContext<'_>) -> Result<bool> {
        let required_points = self.required_points();
        if points < required_points {
            debug!(
                reward_kind = %self.reward_kind(),
                points = %points,
                required_points = %required_points,
                "积分未达到兑换门槛"
            );
            return Ok(false);
        }

        self.fulfil(ctx)?;
        Ok(true)
    }

    /// 验证兑换条款
    ///
    /// 默认要求门槛和奖励数额均大于 0
    fn validate_terms(&self) -> Result<()> {
        let terms = self.terms();
        if terms.required_points.is_zero() {
            return Err(RedemptionError::Validation(format!(
                "{}: required_points must be greater than 0",
                self.reward_kind()
            )));
        }
        if terms.award_amount <= Decimal::ZERO {
            return Err(RedemptionError::Validation(format!(
                "{}: award_amount must be greater than 0",
                self.reward_kind()
            )));
        }
        Ok(())
    }

    /// 获取策略的描述信息（用于日志）
    fn description(&self) -> &'static str {
        "Generic Redemption Strategy"
    }
}

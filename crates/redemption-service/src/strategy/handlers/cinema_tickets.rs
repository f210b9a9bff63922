//! 电影票兑换策略
//!
//! 奖励数额表示票数而非金额，不使用支付网关

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::error::{RedemptionError, Result};
use crate::models::{Points, RewardKind};
use crate::reporter::RedemptionOutcome;
use crate::strategy::context::RedemptionContext;
use crate::strategy::handler::{RedemptionStrategy, RewardTerms};

/// 电影票策略
pub struct CinemaTicketsStrategy {
    terms: RewardTerms,
}

impl CinemaTicketsStrategy {
    /// 创建电影票策略，`quantity` 为发放票数
    pub fn new(required_points: Points, quantity: Decimal) -> Self {
        Self {
            terms: RewardTerms::new(required_points, quantity),
        }
    }

    pub fn quantity(&self) -> Decimal {
        self.terms.award_amount
    }
}

impl Default for CinemaTicketsStrategy {
    fn default() -> Self {
        Self::new(Points::from(500), Decimal::from(2))
    }
}

impl RedemptionStrategy for CinemaTicketsStrategy {
    fn reward_kind(&self) -> RewardKind {
        RewardKind::CinemaTickets
    }

    fn terms(&self) -> &RewardTerms {
        &self.terms
    }

    #[instrument(
        skip(self, ctx),
        fields(user_id = %ctx.user_id(), reward_kind = "cinema_tickets")
    )]
    fn fulfil(&self, ctx: &RedemptionContext<'_>) -> Result<()> {
        // 配置中的 "2.0" 按 2 张票输出
        let quantity = self.quantity().normalize();
        info!(quantity = %quantity, "电影票已发放");

        ctx.report(&RedemptionOutcome::CinemaTicketsIssued {
            quantity,
            required_points: self.terms.required_points,
        });
        Ok(())
    }

    fn validate_terms(&self) -> Result<()> {
        if self.terms.required_points.is_zero() {
            return Err(RedemptionError::Validation(
                "cinema_tickets: required_points must be greater than 0".into(),
            ));
        }
        // 票数必须为正整数
        let quantity = self.quantity();
        if quantity <= Decimal::ZERO || !quantity.fract().is_zero() {
            return Err(RedemptionError::Validation(format!(
                "cinema_tickets: award_amount must be a positive whole ticket count, got {}",
                quantity
            )));
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "Cinema Tickets Strategy - 电影票发放"
    }
}

//! 礼品卡兑换策略
//!
//! 非货币发放，不使用支付网关

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::{Points, RewardKind};
use crate::reporter::RedemptionOutcome;
use crate::strategy::context::RedemptionContext;
use crate::strategy::handler::{RedemptionStrategy, RewardTerms};

/// 礼品卡策略
pub struct GiftCardStrategy {
    terms: RewardTerms,
}

impl GiftCardStrategy {
    /// 创建礼品卡策略，`award_amount` 为礼品卡面额
    pub fn new(required_points: Points, award_amount: Decimal) -> Self {
        Self {
            terms: RewardTerms::new(required_points, award_amount),
        }
    }
}

impl Default for GiftCardStrategy {
    fn default() -> Self {
        Self::new(Points::from(2000), Decimal::from(100))
    }
}

impl RedemptionStrategy for GiftCardStrategy {
    fn reward_kind(&self) -> RewardKind {
        RewardKind::GiftCard
    }

    fn terms(&self) -> &RewardTerms {
        &self.terms
    }

    #[instrument(
        skip(self, ctx),
        fields(user_id = %ctx.user_id(), reward_kind = "gift_card")
    )]
    fn fulfil(&self, ctx: &RedemptionContext<'_>) -> Result<()> {
        info!(amount = %self.terms.award_amount, "礼品卡已发放");

        ctx.report(&RedemptionOutcome::GiftCardIssued {
            amount: self.terms.award_amount,
            required_points: self.terms.required_points,
        });
        Ok(())
    }

    fn description(&self) -> &'static str {
        "Gift Card Strategy - 礼品卡发放"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockPaymentGateway;
    use crate::models::{AccountNo, UserId};
    use crate::reporter::RecordingReporter;

    #[test]
    fn test_gift_card_never_touches_gateway() {
        let strategy = GiftCardStrategy::default();
        let user_id = UserId::new("user-fr");
        let account = AccountNo::new("FR7630006000011234567890189");
        let reporter = RecordingReporter::new();

        let mut gateway = MockPaymentGateway::new();
        gateway.expect_transfer().times(0);

        let ctx = RedemptionContext::new(&user_id, &reporter)
            .with_gateway(&gateway)
            .with_account(&account);

        assert!(strategy.redeem_points(Points::from(2000), &ctx).unwrap());
        assert!(!strategy.redeem_points(Points::from(1999), &ctx).unwrap());

        assert_eq!(
            reporter.outcomes(),
            vec![RedemptionOutcome::GiftCardIssued {
                amount: Decimal::from(100),
                required_points: Points::from(2000),
            }]
        );
    }

    #[test]
    fn test_gift_card_without_payment_details() {
        let strategy = GiftCardStrategy::default();
        let user_id = UserId::new("user-fr");
        let reporter = RecordingReporter::new();
        let ctx = RedemptionContext::new(&user_id, &reporter);

        assert!(strategy.redeem_points(Points::from(2500), &ctx).unwrap());
        assert_eq!(
            reporter.last().unwrap().to_string(),
            "Issued gift card worth 100 for 2000 points"
        );
    }

    #[test]
    fn test_reward_kind() {
        assert_eq!(GiftCardStrategy::default().reward_kind(), RewardKind::GiftCard);
    }
}

//! 银行转账兑换策略
//!
//! 通过支付网关向用户账号转账，必须同时提供网关和收款账号

use rust_decimal::Decimal;
use tracing::{error, info, instrument};

use crate::error::Result;
use crate::models::{Points, RewardKind};
use crate::reporter::RedemptionOutcome;
use crate::strategy::context::RedemptionContext;
use crate::strategy::handler::{RedemptionStrategy, RewardTerms};

/// 银行转账策略
pub struct BankTransferStrategy {
    terms: RewardTerms,
}

impl BankTransferStrategy {
    /// 创建银行转账策略，`award_amount` 为转账金额
    pub fn new(required_points: Points, award_amount: Decimal) -> Self {
        Self {
            terms: RewardTerms::new(required_points, award_amount),
        }
    }
}

impl Default for BankTransferStrategy {
    fn default() -> Self {
        Self::new(Points::from(1000), Decimal::from(50))
    }
}

impl RedemptionStrategy for BankTransferStrategy {
    fn reward_kind(&self) -> RewardKind {
        RewardKind::BankTransfer
    }

    fn terms(&self) -> &RewardTerms {
        &self.terms
    }

    #[instrument(
        skip(self, ctx),
        fields(user_id = %ctx.user_id(), reward_kind = "bank_transfer")
    )]
    fn fulfil(&self, ctx: &RedemptionContext<'_>) -> Result<()> {
        let details = ctx.payment_details().inspect_err(|e| {
            error!(error = %e, "银行转账缺少支付信息");
        })?;

        details
            .gateway
            .transfer(details.account, self.terms.award_amount)?;

        info!(
            account_no = %details.account,
            amount = %self.terms.award_amount,
            "银行转账已发出"
        );

        ctx.report(&RedemptionOutcome::BankTransferSent {
            account_no: details.account.clone(),
            amount: self.terms.award_amount,
            required_points: self.terms.required_points,
        });
        Ok(())
    }

    fn description(&self) -> &'static str {
        "Bank Transfer Strategy - 支付网关转账"
    }
}

//! 积分兑换服务
//!
//! ## 兑换流程
//!
//! 1. 构建兑换上下文（支付网关 + 用户收款账号）
//! 2. 委托用户绑定的策略检查门槛并发放奖励
//! 3. 发放成功后扣减门槛积分
//! 4. 上报结构化结果
//!
//! 发放失败时错误直接返回，用户积分不变。

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::Result;
use crate::gateway::PaymentGateway;
use crate::models::User;
use crate::reporter::{OutcomeReporter, RedemptionOutcome};
use crate::service::dto::RedeemResponse;
use crate::strategy::RedemptionContext;

/// 积分兑换服务
///
/// 不持有任何用户状态，同一实例可处理任意多个用户
pub struct RedemptionService {
    gateway: Option<Arc<dyn PaymentGateway>>,
    reporter: Arc<dyn OutcomeReporter>,
}

impl RedemptionService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, reporter: Arc<dyn OutcomeReporter>) -> Self {
        Self {
            gateway: Some(gateway),
            reporter,
        }
    }

    /// 创建不带支付网关的服务
    ///
    /// 银行转账兑换会返回 `MissingPaymentDetails`
    pub fn without_gateway(reporter: Arc<dyn OutcomeReporter>) -> Self {
        Self {
            gateway: None,
            reporter,
        }
    }

    /// 兑换用户积分
    ///
    /// 积分不足不是错误：返回 `redeemed = false` 的结果并上报 `InsufficientPoints`
    #[instrument(
        skip(self, user),
        fields(
            user_id = %user.id(),
            country = %user.country_code(),
            points = %user.points()
        )
    )]
    pub fn redeem(&self, user: &mut User) -> Result<RedeemResponse> {
        let strategy = Arc::clone(user.strategy());
        let required_points = strategy.required_points();

        let redeemed = {
            let mut ctx = RedemptionContext::new(user.id(), &*self.reporter);
            if let Some(gateway) = self.gateway.as_deref() {
                ctx = ctx.with_gateway(gateway);
            }
            if let Some(account) = user.account_no() {
                ctx = ctx.with_account(account);
            }
            strategy.redeem_points(user.points(), &ctx)?
        };

        if !redeemed {
            self.reporter.report(&RedemptionOutcome::InsufficientPoints {
                user_id: user.id().clone(),
                points: user.points(),
                required_points,
            });
            return Ok(RedeemResponse::not_redeemed(
                user.id().clone(),
                strategy.reward_kind(),
                user.points(),
            ));
        }

        let balance = user.deduct(required_points)?;

        self.reporter.report(&RedemptionOutcome::Redeemed {
            user_id: user.id().clone(),
            deducted: required_points,
            balance,
        });

        let redemption_no = Uuid::new_v4().to_string();
        info!(
            redemption_no = %redemption_no,
            reward_kind = %strategy.reward_kind(),
            deducted = %required_points,
            balance = %balance,
            "积分兑换成功"
        );

        Ok(RedeemResponse::success(
            redemption_no,
            user.id().clone(),
            strategy.reward_kind(),
            required_points,
            balance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RedemptionError;
    use crate::gateway::{GatewayError, MockPaymentGateway};
    use crate::models::{AccountNo, CountryCode, Points, RewardKind};
    use crate::reporter::RecordingReporter;
    use crate::strategy::CountryStrategyTable;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn service_with(gateway: MockPaymentGateway) -> (RedemptionService, Arc<RecordingReporter>) {
        let reporter = Arc::new(RecordingReporter::new());
        let service = RedemptionService::new(Arc::new(gateway), reporter.clone());
        (service, reporter)
    }

    #[test]
    fn test_bank_transfer_deducts_threshold() {
        let table = CountryStrategyTable::with_defaults();
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_transfer()
            .with(eq(AccountNo::new("DE-ACC-1")), eq(Decimal::from(50)))
            .times(1)
            .returning(|_, _| Ok(()));
        let (service, reporter) = service_with(gateway);

        let mut user = User::new("u-de", Points::from(1000), CountryCode::De, &table)
            .unwrap()
            .with_account("DE-ACC-1");

        let response = service.redeem(&mut user).unwrap();

        assert!(response.redeemed);
        assert_eq!(response.reward_kind, RewardKind::BankTransfer);
        assert_eq!(response.deducted, Points::from(1000));
        assert_eq!(response.balance, Points::ZERO);
        assert!(response.redemption_no.is_some());
        assert_eq!(user.points(), Points::ZERO);
        assert_eq!(
            reporter.last().unwrap().to_string(),
            "Redeemed 1000 points, for user u-de"
        );
    }

    #[test]
    fn test_only_threshold_is_deducted() {
        let table = CountryStrategyTable::with_defaults();
        let reporter = Arc::new(RecordingReporter::new());
        let service = RedemptionService::without_gateway(reporter);

        let mut user = User::new("u-fr", Points::from(2500), CountryCode::Fr, &table).unwrap();
        let response = service.redeem(&mut user).unwrap();

        assert!(response.redeemed);
        assert_eq!(user.points(), Points::from(500));
        assert_eq!(response.balance, Points::from(500));
    }

    #[test]
    fn test_insufficient_points_reports_and_keeps_balance() {
        let table = CountryStrategyTable::with_defaults();
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_transfer().times(0);
        let (service, reporter) = service_with(gateway);

        let mut user = User::new("u-de", Points::from(999), CountryCode::De, &table)
            .unwrap()
            .with_account("DE-ACC-1");

        let response = service.redeem(&mut user).unwrap();

        assert!(!response.redeemed);
        assert!(response.redemption_no.is_none());
        assert_eq!(user.points(), Points::from(999));
        assert_eq!(reporter.len(), 1);
        assert_eq!(
            reporter.last().unwrap().to_string(),
            "Not enough points, got 999 out of 1000"
        );
    }

    #[test]
    fn test_missing_account_does_not_mutate() {
        let table = CountryStrategyTable::with_defaults();
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_transfer().times(0);
        let (service, reporter) = service_with(gateway);

        let mut user = User::new("u-de", Points::from(1200), CountryCode::De, &table).unwrap();

        let err = service.redeem(&mut user).unwrap_err();
        assert!(matches!(
            err,
            RedemptionError::MissingPaymentDetails { missing: "account" }
        ));
        assert_eq!(user.points(), Points::from(1200));
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_missing_gateway_does_not_mutate() {
        let table = CountryStrategyTable::with_defaults();
        let service = RedemptionService::without_gateway(Arc::new(RecordingReporter::new()));

        let mut user = User::new("u-de", Points::from(1000), CountryCode::De, &table)
            .unwrap()
            .with_account("DE-ACC-1");

        let err = service.redeem(&mut user).unwrap_err();
        assert!(matches!(
            err,
            RedemptionError::MissingPaymentDetails { missing: "gateway" }
        ));
        assert_eq!(user.points(), Points::from(1000));
    }

    #[test]
    fn test_missing_details_with_insufficient_points_is_not_error() {
        let table = CountryStrategyTable::with_defaults();
        let service = RedemptionService::without_gateway(Arc::new(RecordingReporter::new()));

        let mut user = User::new("u-de", Points::from(10), CountryCode::De, &table).unwrap();
        let response = service.redeem(&mut user).unwrap();

        assert!(!response.redeemed);
        assert_eq!(user.points(), Points::from(10));
    }

    #[test]
    fn test_gateway_failure_propagates() {
        let table = CountryStrategyTable::with_defaults();
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_transfer()
            .times(1)
            .returning(|_, _| Err(GatewayError::Rejected("account closed".into())));
        let (service, reporter) = service_with(gateway);

        let mut user = User::new("u-de", Points::from(1000), CountryCode::De, &table)
            .unwrap()
            .with_account("DE-ACC-1");

        let err = service.redeem(&mut user).unwrap_err();
        assert!(matches!(err, RedemptionError::Gateway(_)));
        assert!(!err.is_business_error());
        assert_eq!(user.points(), Points::from(1000));
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_repeated_redemptions() {
        let table = CountryStrategyTable::with_defaults();
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_transfer().times(3).returning(|_, _| Ok(()));
        let (service, _reporter) = service_with(gateway);

        let mut user = User::new("u-de", Points::ZERO, CountryCode::De, &table)
            .unwrap()
            .with_account("DE-ACC-1");

        for _ in 0..3 {
            user.set_points(Points::from(1000));
            let response = service.redeem(&mut user).unwrap();
            assert!(response.redeemed);
            assert_eq!(response.deducted, Points::from(1000));
            assert_eq!(user.points(), Points::ZERO);
        }
    }
}

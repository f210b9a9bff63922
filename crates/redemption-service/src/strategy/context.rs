//! 兑换上下文
//!
//! 携带一次兑换所需的外部协作方。支付信息是可选的，只有需要转账的策略
//! 才通过 `payment_details()` 把它们转换为必需参数。

use crate::error::{RedemptionError, Result};
use crate::gateway::PaymentGateway;
use crate::models::{AccountNo, UserId};
use crate::reporter::{OutcomeReporter, RedemptionOutcome};

/// 完整的支付信息（网关与收款账号均存在）
#[derive(Clone, Copy)]
pub struct PaymentDetails<'a> {
    pub gateway: &'a dyn PaymentGateway,
    pub account: &'a AccountNo,
}

/// 单次兑换的上下文
#[derive(Clone, Copy)]
pub struct RedemptionContext<'a> {
    user_id: &'a UserId,
    gateway: Option<&'a dyn PaymentGateway>,
    account: Option<&'a AccountNo>,
    reporter: &'a dyn OutcomeReporter,
}

impl<'a> RedemptionContext<'a> {
    pub fn new(user_id: &'a UserId, reporter: &'a dyn OutcomeReporter) -> Self {
        Self {
            user_id,
            gateway: None,
            account: None,
            reporter,
        }
    }

    pub fn with_gateway(mut self, gateway: &'a dyn PaymentGateway) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn with_account(mut self, account: &'a AccountNo) -> Self {
        self.account = Some(account);
        self
    }

    pub fn user_id(&self) -> &'a UserId {
        self.user_id
    }

    /// 上报结果
    pub fn report(&self, outcome: &RedemptionOutcome) {
        self.reporter.report(outcome);
    }

    /// 取得完整支付信息
    ///
    /// 网关或账号缺失时返回 `MissingPaymentDetails`，并指明缺失项
    pub fn payment_details(&self) -> Result<PaymentDetails<'a>> {
        match (self.gateway, self.account) {
            (Some(gateway), Some(account)) => Ok(PaymentDetails { gateway, account }),
            (None, Some(_)) => Err(RedemptionError::MissingPaymentDetails { missing: "gateway" }),
            (Some(_), None) => Err(RedemptionError::MissingPaymentDetails { missing: "account" }),
            (None, None) => Err(RedemptionError::MissingPaymentDetails {
                missing: "gateway and account",
            }),
        }
    }
}

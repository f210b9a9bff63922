//! 支付网关
//!
//! 银行转账策略依赖的外部协作方。失败处理、重试和网络语义由真实网关负责，
//! 兑换核心只透传其错误。

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::models::AccountNo;

/// 支付网关错误
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// 支付网关接口
///
/// 同步调用，成功返回 `Ok(())`。
#[cfg_attr(test, mockall::automock)]
pub trait PaymentGateway: Send + Sync {
    /// 向指定账号转账
    fn transfer(&self, account: &AccountNo, amount: Decimal) -> Result<(), GatewayError>;
}

/// 仅记录日志的网关实现，始终成功
///
/// 用于命令行演示和本地开发环境。
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPaymentGateway;

impl PaymentGateway for LoggingPaymentGateway {
    fn transfer(&self, account: &AccountNo, amount: Decimal) -> Result<(), GatewayError> {
        info!(
            account_no = %account,
            amount = %amount,
            "Successfully transferred {} to {}",
            amount,
            account
        );
        Ok(())
    }
}

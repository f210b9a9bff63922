//! 兑换服务错误类型
//!
//! 积分不足不是错误：它通过 `redeem_points` 返回 `false` 表达。
//! 这里只定义需要向调用方传播的失败。

use rust_decimal::Decimal;
use thiserror::Error;

use crate::gateway::GatewayError;

/// 兑换服务错误类型
#[derive(Debug, Error)]
pub enum RedemptionError {
    // === 调用方前置条件 ===
    #[error("Missing payment details: {missing} required for bank transfer")]
    MissingPaymentDetails { missing: &'static str },

    #[error("Unsupported country: {0}")]
    UnsupportedCountry(String),

    #[error("Points must not be negative, got {0}")]
    NegativePoints(Decimal),

    #[error("Invalid reward configuration: {0}")]
    Validation(String),

    // === 外部依赖 ===
    #[error("Payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// 兑换服务 Result 类型别名
pub type Result<T> = std::result::Result<T, RedemptionError>;

impl RedemptionError {
    /// 检查是否为业务/调用方错误（非外部系统错误）
    pub fn is_business_error(&self) -> bool {
        !matches!(self, Self::Gateway(_) | Self::Config(_))
    }

    /// 获取错误码（用于 CLI 输出和日志）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPaymentDetails { .. } => "MISSING_PAYMENT_DETAILS",
            Self::UnsupportedCountry(_) => "UNSUPPORTED_COUNTRY",
            Self::NegativePoints(_) => "NEGATIVE_POINTS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Gateway(_) => "GATEWAY_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_business_error() {
        assert!(RedemptionError::MissingPaymentDetails { missing: "account" }.is_business_error());
        assert!(RedemptionError::UnsupportedCountry("US".into()).is_business_error());
        assert!(
            !RedemptionError::Gateway(GatewayError::Rejected("closed".into())).is_business_error()
        );
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            RedemptionError::MissingPaymentDetails { missing: "gateway" }.error_code(),
            "MISSING_PAYMENT_DETAILS"
        );
        assert_eq!(
            RedemptionError::Validation("bad".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            RedemptionError::Gateway(GatewayError::Unavailable("down".into())).error_code(),
            "GATEWAY_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = RedemptionError::MissingPaymentDetails {
            missing: "gateway and account",
        };
        assert!(err.to_string().contains("gateway and account"));

        let err = RedemptionError::NegativePoints(Decimal::new(-5, 0));
        assert!(err.to_string().contains("-5"));
    }
}

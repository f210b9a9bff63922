//! 积分数量
//!
//! 积分使用精确十进制运算，不允许为负数。

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RedemptionError, Result};

/// 积分数量（非负，精确十进制）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Points(Decimal);

impl Points {
    pub const ZERO: Points = Points(Decimal::ZERO);

    /// 创建积分数量，负数返回 `NegativePoints`
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(RedemptionError::NegativePoints(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// 扣减，结果为负时返回 None
    pub fn checked_sub(self, other: Points) -> Option<Points> {
        let remaining = self.0.checked_sub(other.0)?;
        if remaining.is_sign_negative() && !remaining.is_zero() {
            return None;
        }
        Some(Self(remaining))
    }

    pub fn checked_add(self, other: Points) -> Option<Points> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<u32> for Points {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl TryFrom<Decimal> for Points {
    type Error = RedemptionError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Points> for Decimal {
    fn from(points: Points) -> Self {
        points.0
    }
}

impl FromStr for Points {
    type Err = RedemptionError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| RedemptionError::Validation(format!("invalid points '{}': {}", s, e)))?;
        Self::new(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//! 兑换领域枚举类型定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RedemptionError;

/// 国家代码
///
/// 封闭集合，决定用户绑定的兑换策略
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    /// 德国 - 银行转账
    De,
    /// 法国 - 礼品卡
    Fr,
    /// 印度 - 电影票
    In,
}

impl CountryCode {
    pub const ALL: [CountryCode; 3] = [Self::De, Self::Fr, Self::In];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::De => "DE",
            Self::Fr => "FR",
            Self::In => "IN",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = RedemptionError;

    /// 大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DE" => Ok(Self::De),
            "FR" => Ok(Self::Fr),
            "IN" => Ok(Self::In),
            _ => Err(RedemptionError::UnsupportedCountry(s.to_string())),
        }
    }
}

/// 奖励类型
///
/// 配置文件中的策略判别字段，同时用于日志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// 银行转账 - 奖励金额为货币单位，需要支付网关
    BankTransfer,
    /// 礼品卡 - 奖励金额为货币单位
    GiftCard,
    /// 电影票 - 奖励金额为票数
    CinemaTickets,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankTransfer => "bank_transfer",
            Self::GiftCard => "gift_card",
            Self::CinemaTickets => "cinema_tickets",
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

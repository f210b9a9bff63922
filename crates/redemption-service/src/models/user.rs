//! 用户模型
//!
//! 用户在构造时按国家代码绑定兑换策略，之后不再重新查找。

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{RedemptionError, Result};
use crate::models::{CountryCode, Points};
use crate::strategy::{CountryStrategyTable, RedemptionStrategy};

/// 用户 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// 收款账号，不做格式校验
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNo(String);

impl AccountNo {
    pub fn new(account_no: impl Into<String>) -> Self {
        Self(account_no.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNo {
    fn from(account_no: &str) -> Self {
        Self::new(account_no)
    }
}

impl From<String> for AccountNo {
    fn from(account_no: String) -> Self {
        Self(account_no)
    }
}

/// 积分用户
///
/// `points` 只会被兑换服务修改（或由调用方充值），其余字段构造后不可变。
pub struct User {
    id: UserId,
    points: Points,
    account_no: Option<AccountNo>,
    country_code: CountryCode,
    strategy: Arc<dyn RedemptionStrategy>,
}

impl User {
    /// 创建用户并绑定国家对应的兑换策略
    ///
    /// 国家未在策略表中配置时返回 `UnsupportedCountry`
    pub fn new(
        id: impl Into<UserId>,
        points: Points,
        country_code: CountryCode,
        table: &CountryStrategyTable,
    ) -> Result<Self> {
        let strategy = table.resolve(country_code)?;
        Ok(Self {
            id: id.into(),
            points,
            account_no: None,
            country_code,
            strategy,
        })
    }

    /// 设置收款账号
    pub fn with_account(mut self, account_no: impl Into<AccountNo>) -> Self {
        self.account_no = Some(account_no.into());
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn account_no(&self) -> Option<&AccountNo> {
        self.account_no.as_ref()
    }

    pub fn country_code(&self) -> CountryCode {
        self.country_code
    }

    pub fn strategy(&self) -> &Arc<dyn RedemptionStrategy> {
        &self.strategy
    }

    /// 直接设置积分余额（积分发放由外部系统负责）
    pub fn set_points(&mut self, points: Points) {
        self.points = points;
    }

    /// 扣减积分，返回扣减后的余额
    pub(crate) fn deduct(&mut self, amount: Points) -> Result<Points> {
        let remaining = self.points.checked_sub(amount).ok_or_else(|| {
            RedemptionError::NegativePoints(self.points.value() - amount.value())
        })?;
        self.points = remaining;
        Ok(remaining)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("points", &self.points)
            .field("account_no", &self.account_no)
            .field("country_code", &self.country_code)
            .field("strategy", &self.strategy.reward_kind())
            .finish()
    }
}

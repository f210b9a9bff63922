//! 国家策略表
//!
//! 管理国家代码到兑换策略的映射。进程启动时构建一次，之后只读。
//!
//! ## 使用示例
//!
//! ```ignore
//! use points_redemption::strategy::CountryStrategyTable;
//! use points_redemption::models::CountryCode;
//!
//! let table = CountryStrategyTable::with_defaults();
//! let strategy = table.resolve(CountryCode::De)?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{RedemptionError, Result};
use crate::models::{CountryCode, Points, RewardKind};
use crate::strategy::handler::RedemptionStrategy;
use crate::strategy::handlers::{BankTransferStrategy, CinemaTicketsStrategy, GiftCardStrategy};

/// 配置文件中 `rewards` 段的 key
pub const REWARDS_CONFIG_KEY: &str = "rewards";

/// 单个国家的奖励配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewardEntry {
    pub kind: RewardKind,
    pub required_points: Points,
    pub award_amount: Decimal,
}

impl RewardEntry {
    pub fn new(kind: RewardKind, required_points: Points, award_amount: Decimal) -> Self {
        Self {
            kind,
            required_points,
            award_amount,
        }
    }

    /// 构建对应的策略实例并校验条款
    pub fn build_strategy(&self) -> Result<Arc<dyn RedemptionStrategy>> {
        let strategy: Arc<dyn RedemptionStrategy> = match self.kind {
            RewardKind::BankTransfer => Arc::new(BankTransferStrategy::new(
                self.required_points,
                self.award_amount,
            )),
            RewardKind::GiftCard => {
                Arc::new(GiftCardStrategy::new(self.required_points, self.award_amount))
            }
            RewardKind::CinemaTickets => Arc::new(CinemaTicketsStrategy::new(
                self.required_points,
                self.award_amount,
            )),
        };
        strategy.validate_terms()?;
        Ok(strategy)
    }
}

/// 奖励表配置
///
/// TOML 示例：
///
/// ```toml
/// [rewards.de]
/// kind = "bank_transfer"
/// required_points = 1000
/// award_amount = 50
/// ```
///
/// key 为小写国家代码，环境变量覆盖（`LOYALTY_REWARDS__DE__REQUIRED_POINTS`）
/// 会被转为小写，只有小写 key 才能与文件中的条目合并。
/// 解析时大小写不敏感，同一国家出现多次视为配置错误。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RewardTableConfig {
    pub entries: BTreeMap<String, RewardEntry>,
}

impl RewardTableConfig {
    /// 内置默认奖励表
    pub fn defaults() -> Self {
        let entries = BTreeMap::from([
            (
                config_key(CountryCode::De),
                RewardEntry::new(RewardKind::BankTransfer, Points::from(1000), Decimal::from(50)),
            ),
            (
                config_key(CountryCode::Fr),
                RewardEntry::new(RewardKind::GiftCard, Points::from(2000), Decimal::from(100)),
            ),
            (
                config_key(CountryCode::In),
                RewardEntry::new(RewardKind::CinemaTickets, Points::from(500), Decimal::from(2)),
            ),
        ]);
        Self { entries }
    }

    /// 从分层配置源读取 `rewards` 段，缺失时使用默认奖励表
    pub fn load(source: &config::Config) -> Result<Self> {
        let section = loyalty_shared::config::load_section::<Self>(source, REWARDS_CONFIG_KEY)?;
        Ok(section.unwrap_or_else(|| {
            debug!("未配置 rewards 段，使用默认奖励表");
            Self::defaults()
        }))
    }
}

/// 国家代码在配置中的 key
fn config_key(country: CountryCode) -> String {
    country.as_str().to_ascii_lowercase()
}

/// 国家策略表
///
/// 策略实例通过 Arc 共享，可被任意多个用户同时引用
pub struct CountryStrategyTable {
    strategies: HashMap<CountryCode, Arc<dyn RedemptionStrategy>>,
}

impl CountryStrategyTable {
    /// 创建空表
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// 为国家注册策略，已存在时替换
    pub fn register(
        &mut self,
        country: CountryCode,
        strategy: Arc<dyn RedemptionStrategy>,
    ) -> &mut Self {
        debug!(
            country = %country,
            reward_kind = %strategy.reward_kind(),
            description = strategy.description(),
            "注册兑换策略"
        );
        self.strategies.insert(country, strategy);
        self
    }

    pub fn get(&self, country: CountryCode) -> Option<Arc<dyn RedemptionStrategy>> {
        self.strategies.get(&country).cloned()
    }

    /// 查找策略，未配置时返回 `UnsupportedCountry`
    pub fn resolve(&self, country: CountryCode) -> Result<Arc<dyn RedemptionStrategy>> {
        self.get(country)
            .ok_or_else(|| RedemptionError::UnsupportedCountry(country.to_string()))
    }

    pub fn contains(&self, country: CountryCode) -> bool {
        self.strategies.contains_key(&country)
    }

    /// 已配置的国家（有序）
    pub fn countries(&self) -> Vec<CountryCode> {
        let mut countries: Vec<CountryCode> = self.strategies.keys().copied().collect();
        countries.sort();
        countries
    }

    /// 按国家排序的 (国家, 策略) 列表
    pub fn entries(&self) -> Vec<(CountryCode, Arc<dyn RedemptionStrategy>)> {
        self.countries()
            .into_iter()
            .filter_map(|country| self.get(country).map(|strategy| (country, strategy)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// 创建包含默认策略的表
    ///
    /// - DE: 银行转账（1000 积分 -> 50）
    /// - FR: 礼品卡（2000 积分 -> 100）
    /// - IN: 电影票（500 积分 -> 2 张）
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        table
            .register(CountryCode::De, Arc::new(BankTransferStrategy::default()))
            .register(CountryCode::Fr, Arc::new(GiftCardStrategy::default()))
            .register(CountryCode::In, Arc::new(CinemaTicketsStrategy::default()));

        table
    }

    /// 根据配置构建策略表
    ///
    /// 任一条目的国家代码无效、重复或条款校验失败时整体失败
    pub fn from_config(config: &RewardTableConfig) -> Result<Self> {
        let mut table = Self::new();

        for (code, entry) in &config.entries {
            let country: CountryCode = code.parse()?;
            if table.contains(country) {
                return Err(RedemptionError::Validation(format!(
                    "rewards: country {} is configured more than once (key '{}')",
                    country, code
                )));
            }
            let strategy = entry.build_strategy()?;
            table.register(country, strategy);
        }

        info!(
            country_count = table.len(),
            countries = ?table.countries(),
            "兑换策略表初始化完成"
        );

        Ok(table)
    }
}

impl Default for CountryStrategyTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

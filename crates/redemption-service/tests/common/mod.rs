//! 集成测试公共工具

#![allow(dead_code)]

use std::sync::Arc;

use fake::faker::internet::en::Username;
use fake::{Fake, Faker};
use parking_lot::Mutex;
use rust_decimal::Decimal;

use points_redemption::gateway::{GatewayError, PaymentGateway};
use points_redemption::models::{AccountNo, CountryCode, Points, User};
use points_redemption::reporter::RecordingReporter;
use points_redemption::service::RedemptionService;
use points_redemption::strategy::CountryStrategyTable;

/// 记录所有转账请求的网关
#[derive(Default)]
pub struct RecordingGateway {
    transfers: Mutex<Vec<(AccountNo, Decimal)>>,
    fail_with: Option<String>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次转账都返回 Unavailable
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            transfers: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    pub fn transfers(&self) -> Vec<(AccountNo, Decimal)> {
        self.transfers.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.transfers.lock().len()
    }
}

impl PaymentGateway for RecordingGateway {
    fn transfer(&self, account: &AccountNo, amount: Decimal) -> Result<(), GatewayError> {
        self.transfers.lock().push((account.clone(), amount));
        match &self.fail_with {
            Some(reason) => Err(GatewayError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

/// 测试夹具：默认策略表 + 记录网关 + 记录上报
pub struct Harness {
    pub table: CountryStrategyTable,
    pub gateway: Arc<RecordingGateway>,
    pub reporter: Arc<RecordingReporter>,
    pub service: RedemptionService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_gateway(RecordingGateway::new())
    }

    pub fn with_gateway(gateway: RecordingGateway) -> Self {
        let gateway = Arc::new(gateway);
        let reporter = Arc::new(RecordingReporter::new());
        let service = RedemptionService::new(gateway.clone(), reporter.clone());
        Self {
            table: CountryStrategyTable::with_defaults(),
            gateway,
            reporter,
            service,
        }
    }

    /// 不带支付网关的夹具
    pub fn without_gateway() -> Self {
        let reporter = Arc::new(RecordingReporter::new());
        let service = RedemptionService::without_gateway(reporter.clone());
        Self {
            table: CountryStrategyTable::with_defaults(),
            gateway: Arc::new(RecordingGateway::new()),
            reporter,
            service,
        }
    }

    pub fn users(&self) -> UserFactory<'_> {
        UserFactory { table: &self.table }
    }
}

/// 随机用户工厂
pub struct UserFactory<'a> {
    table: &'a CountryStrategyTable,
}

impl UserFactory<'_> {
    /// 带随机收款账号的用户
    pub fn with_account(&self, country: CountryCode, points: u32) -> User {
        self.without_account(country, points)
            .with_account(random_account_no())
    }

    pub fn without_account(&self, country: CountryCode, points: u32) -> User {
        self.with_balance(country, Points::from(points))
    }

    /// 任意（可含小数）余额、无收款账号的用户
    pub fn with_balance(&self, country: CountryCode, points: Points) -> User {
        User::new(random_user_id(), points, country, self.table)
            .expect("默认策略表包含所有国家")
    }
}

pub fn random_user_id() -> String {
    Username().fake()
}

/// 20 位数字账号
pub fn random_account_no() -> AccountNo {
    let n: u64 = Faker.fake();
    AccountNo::new(format!("{:020}", n))
}

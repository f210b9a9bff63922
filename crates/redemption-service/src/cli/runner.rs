//! 命令执行器
//!
//! 将命令行参数转化为兑换服务调用，并打印结果。

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::gateway::{LoggingPaymentGateway, PaymentGateway};
use crate::models::{CountryCode, Points, User};
use crate::reporter::{OutcomeReporter, TracingReporter};
use crate::service::{RedeemResponse, RedemptionService};
use crate::strategy::CountryStrategyTable;

/// 命令执行器
///
/// 持有启动时构建的策略表和兑换服务
pub struct CommandRunner {
    table: CountryStrategyTable,
    service: RedemptionService,
}

impl CommandRunner {
    /// 使用日志网关和 tracing 上报创建执行器
    pub fn new(table: CountryStrategyTable) -> Self {
        Self::with_collaborators(
            table,
            Arc::new(LoggingPaymentGateway),
            Arc::new(TracingReporter),
        )
    }

    pub fn with_collaborators(
        table: CountryStrategyTable,
        gateway: Arc<dyn PaymentGateway>,
        reporter: Arc<dyn OutcomeReporter>,
    ) -> Self {
        Self {
            table,
            service: RedemptionService::new(gateway, reporter),
        }
    }

    pub fn table(&self) -> &CountryStrategyTable {
        &self.table
    }

    /// 执行 redeem 命令
    ///
    /// 连续执行 `times` 次兑换，每次都基于当前余额独立判断
    pub fn run_redeem(
        &self,
        user_id: &str,
        country: CountryCode,
        points: Points,
        account: Option<&str>,
        times: usize,
    ) -> Result<Vec<RedeemResponse>> {
        info!(user_id, country = %country, points = %points, times, "开始兑换");

        let mut user = User::new(user_id, points, country, &self.table)
            .with_context(|| format!("无法为国家 {} 创建用户", country))?;
        if let Some(account) = account {
            user = user.with_account(account);
        }

        let mut responses = Vec::with_capacity(times);
        for attempt in 1..=times {
            let response = self
                .service
                .redeem(&mut user)
                .with_context(|| format!("第 {} 次兑换失败", attempt))?;
            print_response(attempt, &response);
            responses.push(response);
        }

        let redeemed = responses.iter().filter(|r| r.redeemed).count();
        if redeemed < responses.len() {
            warn!(
                redeemed,
                attempts = responses.len(),
                "部分兑换因积分不足未执行"
            );
        }

        println!("\n兑换汇总:");
        println!("{}", "-".repeat(40));
        println!("用户: {}", user.id());
        println!("国家: {}", user.country_code());
        println!("成功次数: {} / {}", redeemed, responses.len());
        println!("剩余积分: {}", user.points());
        println!("{}", "-".repeat(40));

        Ok(responses)
    }

    /// 执行 table 命令
    pub fn run_table(&self) {
        println!("\n兑换策略表:");
        println!("{}", "-".repeat(60));
        for (country, strategy) in self.table.entries() {
            println!(
                "  {}  {:<16} 门槛 {:>8}  奖励 {:>8}  {}",
                country,
                strategy.reward_kind(),
                strategy.required_points(),
                strategy.award_amount(),
                strategy.description()
            );
        }
        println!("{}", "-".repeat(60));
    }
}

fn print_response(attempt: usize, response: &RedeemResponse) {
    if response.redeemed {
        println!(
            "[{}] {} 兑换成功: 扣减 {} 积分，余额 {}，单号 {}",
            attempt,
            response.reward_kind,
            response.deducted,
            response.balance,
            response.redemption_no.as_deref().unwrap_or("-")
        );
    } else {
        println!(
            "[{}] {} 积分不足，余额 {}",
            attempt, response.reward_kind, response.balance
        );
    }
}

//! 服务层
//!
//! 协调用户、兑换策略、支付网关与结果上报。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `redemption_service`: 积分兑换服务

pub mod dto;
pub mod redemption_service;

pub use dto::*;
pub use redemption_service::RedemptionService;

//! 领域模型定义

mod enums;
mod points;
mod user;

pub use enums::{CountryCode, RewardKind};
pub use points::Points;
pub use user::{AccountNo, User, UserId};

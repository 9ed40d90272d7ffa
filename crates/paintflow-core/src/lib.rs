//! # PaintFlow Core
//!
//! 情境模擬的資料模型與類型定義

pub mod catalog;
pub mod dealer;
pub mod region;
pub mod registry;
pub mod scenario;
pub mod sku;
pub mod transfer;
pub mod warehouse;

// Re-export 主要類型
pub use catalog::{Shade, ShadeFamily};
pub use dealer::{
    AlertsBundle, DealerDashboard, DealerPipeline, DealerSkuItem, PipelineCounts, StockoutAlert,
    TrendPoint, TrendSeries,
};
pub use region::Region;
pub use registry::{ScenarioListing, ScenarioRegistry};
pub use scenario::{ScenarioDefinition, ScenarioId, MAX_MULTIPLIER, MIN_MULTIPLIER};
pub use sku::TopSku;
pub use transfer::{Transfer, TransferEndpoint, TransferStatus};
pub use warehouse::{StockStatus, Warehouse};

use rust_decimal::Decimal;

/// 情境錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("找不到情境定義: {0}")]
    ScenarioNotFound(String),

    #[error("未知的情境代號: {0}")]
    UnknownScenarioId(String),

    #[error("未知的區域: {0}")]
    UnknownRegion(String),

    #[error("情境 {scenario} 的 {field} 必須介於 0.01 與 100 之間，實際為 {value}")]
    InvalidMultiplier {
        scenario: String,
        field: &'static str,
        value: Decimal,
    },

    #[error("情境登錄表解析錯誤: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("情境登錄表讀取錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

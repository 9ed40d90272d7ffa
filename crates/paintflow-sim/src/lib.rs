//! # PaintFlow Scenario Engine
//!
//! 情境模擬計算引擎：把基準營運資料轉換為假設情境下的檢視

pub mod alerts;
pub mod catalog;
pub mod context;
pub mod dealer;
pub mod numeric;
pub mod simulator;
pub mod summary;
pub mod top_sku;
pub mod transfer;
pub mod visuals;
pub mod warehouse;

// Re-export 主要類型
pub use alerts::AlertAdjuster;
pub use catalog::CatalogPrioritizer;
pub use context::ScenarioContext;
pub use dealer::DealerAdjuster;
pub use simulator::{AdminBaseline, AdminView, DealerBaseline, DealerView, ScenarioSimulator};
pub use summary::overlay_summary;
pub use top_sku::TopSkuAdjuster;
pub use transfer::TransferAdjuster;
pub use visuals::ScenarioVisuals;
pub use warehouse::{ShockFactors, WarehouseAdjuster};

use serde::Serialize;

/// 情境模擬警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioWarning {
    /// 警告對象（倉庫名稱、調撥序號或情境代號）
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ScenarioWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }

    /// 情境未登錄，檢視沿用基準資料
    pub fn unregistered(scenario: paintflow_core::ScenarioId) -> Self {
        Self::warning(scenario.to_string(), "情境未登錄，檢視沿用基準資料".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Info,
    Warning,
}

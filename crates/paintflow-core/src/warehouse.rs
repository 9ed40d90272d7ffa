//! 倉庫庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Healthy,
    Low,
    Critical,
    /// 經銷商 SKU 清單拼作 `overstock`
    #[serde(alias = "overstock")]
    Overstocked,
}

impl StockStatus {
    /// 缺貨壓力等級：過量與健康同級，低庫存次之，告急最高
    pub fn stress_rank(self) -> u8 {
        match self {
            StockStatus::Overstocked | StockStatus::Healthy => 0,
            StockStatus::Low => 1,
            StockStatus::Critical => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Healthy => "healthy",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
            StockStatus::Overstocked => "overstocked",
        }
    }
}

/// 倉庫（地圖總覽的一列）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// 所在州
    #[serde(default)]
    pub state: String,

    /// 現有總庫存（公升）
    #[serde(default)]
    pub total_stock: Decimal,

    /// 容量（公升）
    #[serde(default)]
    pub capacity: Decimal,

    /// 容量使用率（%）
    #[serde(default)]
    pub capacity_pct: Decimal,

    /// 告急 SKU 數
    #[serde(default)]
    pub critical_skus: u32,

    /// 低庫存 SKU 數
    #[serde(default)]
    pub low_skus: u32,

    /// 過量 SKU 數
    #[serde(default)]
    pub overstock_skus: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,

    /// 七日內可能流失的營收
    #[serde(default)]
    pub revenue_at_risk: Decimal,

    /// 情境調整後標記：是否位於受影響區域
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_affected: Option<bool>,

    /// 其他欄位（id、名稱、座標等）原樣保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Warehouse {
    /// 創建新的倉庫記錄
    pub fn new(state: impl Into<String>, total_stock: Decimal, capacity: Decimal) -> Self {
        Self {
            state: state.into(),
            total_stock,
            capacity,
            capacity_pct: Decimal::ZERO,
            critical_skus: 0,
            low_skus: 0,
            overstock_skus: 0,
            status: None,
            revenue_at_risk: Decimal::ZERO,
            scenario_affected: None,
            extra: Map::new(),
        }
    }

    /// 建構器模式：設置 SKU 分布（告急、低庫存、過量）
    pub fn with_sku_counts(mut self, critical: u32, low: u32, overstock: u32) -> Self {
        self.critical_skus = critical;
        self.low_skus = low;
        self.overstock_skus = overstock;
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// 建構器模式：設置風險營收
    pub fn with_revenue_at_risk(mut self, revenue: Decimal) -> Self {
        self.revenue_at_risk = revenue;
        self
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.extra.insert("name".to_string(), Value::String(name.into()));
        self
    }

    /// 倉庫名稱（若有）
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

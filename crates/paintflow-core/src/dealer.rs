//! 經銷商看板模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::warehouse::StockStatus;

/// 經銷商看板關鍵指標
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealerDashboard {
    /// 待處理 AI 建議數
    #[serde(default)]
    pub ai_recommendations_pending: u32,

    /// 本月營收
    #[serde(default)]
    pub revenue_this_month: Decimal,

    /// AI 累計節省金額
    #[serde(default)]
    pub total_ai_savings: Decimal,

    /// 履約率（%）
    #[serde(default)]
    pub fulfillment_rate: Decimal,

    /// 平均交貨天數
    #[serde(default)]
    pub avg_delivery_time_days: Decimal,

    /// 健康分數（0-100）
    #[serde(default)]
    pub health_score: Decimal,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 訂單各階段計數
///
/// 未知的階段（例如退貨）保留在 `extra`，不計入 [`PipelineCounts::total`]。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineCounts {
    #[serde(default)]
    pub placed: u32,
    #[serde(default)]
    pub confirmed: u32,
    #[serde(default)]
    pub shipped: u32,
    #[serde(default)]
    pub delivered: u32,
    #[serde(default)]
    pub cancelled: u32,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipelineCounts {
    pub fn new(placed: u32, confirmed: u32, shipped: u32, delivered: u32, cancelled: u32) -> Self {
        Self {
            placed,
            confirmed,
            shipped,
            delivered,
            cancelled,
            extra: Map::new(),
        }
    }

    /// 五個階段的總數
    pub fn total(&self) -> u64 {
        [self.placed, self.confirmed, self.shipped, self.delivered, self.cancelled]
            .iter()
            .map(|&count| u64::from(count))
            .sum()
    }
}

/// 經銷商訂單管線
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealerPipeline {
    /// 本月（MTD）
    #[serde(default)]
    pub mtd: PipelineCounts,

    /// 歷來累計
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_time: Option<PipelineCounts>,

    #[serde(default)]
    pub total_mtd: u64,

    /// 本月履約率（%，一位小數）
    #[serde(default)]
    pub fulfillment_rate_mtd: Decimal,

    /// 歷來履約率（%，一位小數）
    #[serde(default)]
    pub fulfillment_rate_all_time: Decimal,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 經銷商熱銷 SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerSkuItem {
    /// 已售數量
    #[serde(default)]
    pub sold_qty: Decimal,

    /// 現有庫存
    #[serde(default)]
    pub current_stock: Decimal,

    /// 可供應天數
    #[serde(default)]
    pub days_of_cover: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DealerSkuItem {
    /// 創建新的經銷商 SKU 記錄
    pub fn new(sold_qty: Decimal, current_stock: Decimal, days_of_cover: Decimal) -> Self {
        Self {
            sold_qty,
            current_stock,
            days_of_cover,
            stock_status: None,
            extra: Map::new(),
        }
    }

    /// 建構器模式：設置庫存狀態
    pub fn with_stock_status(mut self, status: StockStatus) -> Self {
        self.stock_status = Some(status);
        self
    }
}

/// 月度趨勢點
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 月份鍵（例如 `2025-10`）
    #[serde(default)]
    pub month_key: String,

    /// 月份顯示名稱
    #[serde(default)]
    pub month: String,

    #[serde(default)]
    pub revenue: Decimal,

    #[serde(default)]
    pub health_score: Decimal,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrendPoint {
    pub fn new(month_key: impl Into<String>, revenue: Decimal, health_score: Decimal) -> Self {
        let month_key = month_key.into();
        Self {
            month: month_key.clone(),
            month_key,
            revenue,
            health_score,
            extra: Map::new(),
        }
    }
}

/// 月度趨勢序列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    #[serde(default)]
    pub points: Vec<TrendPoint>,

    /// 序列最大營收
    #[serde(default)]
    pub max_revenue: Decimal,

    /// 平均健康分數（一位小數）
    #[serde(default)]
    pub avg_health: Decimal,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrendSeries {
    /// 由趨勢點建立序列（不計算彙總值）
    pub fn from_points(points: Vec<TrendPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }
}

/// 缺貨警示
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockoutAlert {
    /// 剩餘天數
    #[serde(default)]
    pub days_remaining: Decimal,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StockoutAlert {
    pub fn new(days_remaining: Decimal) -> Self {
        Self {
            days_remaining,
            extra: Map::new(),
        }
    }
}

/// 經銷商警示彙總
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertsBundle {
    #[serde(default)]
    pub stockout_alerts: Vec<StockoutAlert>,

    /// 流行色清單（原樣透傳）
    #[serde(default)]
    pub trending: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

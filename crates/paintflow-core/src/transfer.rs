//! 調撥模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 調撥狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    /// 待審
    Pending,
    /// 已核准
    Approved,
    /// 運送中
    InTransit,
    /// 已完成
    Completed,
    /// 已駁回
    Rejected,
}

/// 調撥端點倉庫
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEndpoint {
    #[serde(default)]
    pub state: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransferEndpoint {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            extra: Map::new(),
        }
    }
}

/// 倉庫間調撥建議
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// 來源倉庫（可能缺漏）
    #[serde(default)]
    pub from_warehouse: Option<TransferEndpoint>,

    /// 目的倉庫（可能缺漏）
    #[serde(default)]
    pub to_warehouse: Option<TransferEndpoint>,

    /// 調撥數量
    #[serde(default)]
    pub quantity: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransferStatus>,

    /// 建議原因
    #[serde(default)]
    pub reason: Option<String>,

    /// 情境調整後標記：任一端點位於受影響區域
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_affected: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transfer {
    /// 創建新的調撥記錄
    pub fn new(from_state: impl Into<String>, to_state: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            from_warehouse: Some(TransferEndpoint::new(from_state)),
            to_warehouse: Some(TransferEndpoint::new(to_state)),
            quantity,
            status: None,
            reason: None,
            scenario_affected: None,
            extra: Map::new(),
        }
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: TransferStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// 建構器模式：設置原因
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// 來源州（若有）
    pub fn from_state(&self) -> Option<&str> {
        self.from_warehouse.as_ref().map(|w| w.state.as_str())
    }

    /// 目的州（若有）
    pub fn to_state(&self) -> Option<&str> {
        self.to_warehouse.as_ref().map(|w| w.state.as_str())
    }
}

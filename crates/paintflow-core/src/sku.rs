//! 熱銷 SKU 模型（管理端排行）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::ShadeFamily;

/// 熱銷 SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSku {
    #[serde(default)]
    pub shade_family: String,

    /// 累計營收
    #[serde(default)]
    pub total_revenue: Decimal,

    /// 累計銷量
    #[serde(default)]
    pub total_quantity: Decimal,

    /// 情境調整後標記：是否屬於情境重點色系
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_highlight: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TopSku {
    /// 創建新的熱銷 SKU 記錄
    pub fn new(shade_family: impl Into<String>, total_revenue: Decimal, total_quantity: Decimal) -> Self {
        Self {
            shade_family: shade_family.into(),
            total_revenue,
            total_quantity,
            scenario_highlight: None,
            extra: Map::new(),
        }
    }

    pub fn family(&self) -> Option<ShadeFamily> {
        ShadeFamily::from_name(&self.shade_family)
    }
}

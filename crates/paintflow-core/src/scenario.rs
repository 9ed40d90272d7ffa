//! 情境模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::ShadeFamily;
use crate::region::Region;
use crate::ScenarioError;

/// 倍數下限（0.01）
pub const MIN_MULTIPLIER: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// 倍數上限
pub const MAX_MULTIPLIER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// 情境代號
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioId {
    /// 正常營運（基準，不做任何調整）
    #[default]
    Normal,
    /// 卡車罷工
    TruckStrike,
    /// 熱浪
    Heatwave,
    /// 季風提早
    EarlyMonsoon,
}

impl ScenarioId {
    /// 所有情境（情境切換器的固定順序）
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::Normal,
        ScenarioId::TruckStrike,
        ScenarioId::Heatwave,
        ScenarioId::EarlyMonsoon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::Normal => "NORMAL",
            ScenarioId::TruckStrike => "TRUCK_STRIKE",
            ScenarioId::Heatwave => "HEATWAVE",
            ScenarioId::EarlyMonsoon => "EARLY_MONSOON",
        }
    }

    /// 完整標籤（管理端切換器）
    pub fn label(self) -> &'static str {
        match self {
            ScenarioId::Normal => "Normal",
            ScenarioId::TruckStrike => "Truck Strike",
            ScenarioId::Heatwave => "Heatwave",
            ScenarioId::EarlyMonsoon => "Early Monsoon",
        }
    }

    /// 短標籤（顧客端切換器）
    pub fn short_label(self) -> &'static str {
        match self {
            ScenarioId::Normal => "Normal",
            ScenarioId::TruckStrike => "Strike",
            ScenarioId::Heatwave => "Heat",
            ScenarioId::EarlyMonsoon => "Monsoon",
        }
    }

    pub fn is_normal(self) -> bool {
        self == ScenarioId::Normal
    }

    /// 熱銷 SKU 排行中要標示的色系
    pub fn highlighted_families(self) -> &'static [ShadeFamily] {
        match self {
            ScenarioId::Normal => &[],
            ScenarioId::TruckStrike => &[ShadeFamily::Reds, ShadeFamily::Neutrals],
            ScenarioId::Heatwave => &[ShadeFamily::Whites, ShadeFamily::Yellows, ShadeFamily::Neutrals],
            ScenarioId::EarlyMonsoon => &[ShadeFamily::Blues, ShadeFamily::Greens, ShadeFamily::Neutrals],
        }
    }

    /// 色卡目錄的優先色系（依序）
    ///
    /// 與 [`ScenarioId::highlighted_families`] 不完全相同：罷工情境下白色系也排在前面。
    pub fn catalog_priority(self) -> &'static [ShadeFamily] {
        match self {
            ScenarioId::Normal => &[],
            ScenarioId::TruckStrike => &[ShadeFamily::Reds, ShadeFamily::Neutrals, ShadeFamily::Whites],
            ScenarioId::Heatwave => &[ShadeFamily::Whites, ShadeFamily::Yellows, ShadeFamily::Neutrals],
            ScenarioId::EarlyMonsoon => &[ShadeFamily::Blues, ShadeFamily::Greens, ShadeFamily::Neutrals],
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = ScenarioError;

    /// 不區分大小寫（`truck_strike` 與 `TRUCK_STRIKE` 等價）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str() == upper)
            .ok_or_else(|| ScenarioError::UnknownScenarioId(s.to_string()))
    }
}

fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// 情境定義（來自情境登錄表）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// 顯示名稱
    pub name: String,

    /// 需求倍數（基準 = 1）
    #[serde(default = "default_multiplier")]
    pub demand_multiplier: Decimal,

    /// 庫存倍數（基準 = 1）
    #[serde(default = "default_multiplier")]
    pub inventory_multiplier: Decimal,

    /// 受影響區域
    #[serde(default)]
    pub affected_regions: BTreeSet<Region>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,

    /// 管理端總覽的覆寫欄位（淺層合併）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_summary: Option<Map<String, Value>>,
}

impl ScenarioDefinition {
    /// 創建新的情境定義（不影響任何區域）
    pub fn new(name: impl Into<String>, demand_multiplier: Decimal, inventory_multiplier: Decimal) -> Self {
        Self {
            name: name.into(),
            demand_multiplier,
            inventory_multiplier,
            affected_regions: BTreeSet::new(),
            description: None,
            impact: None,
            dashboard_summary: None,
        }
    }

    /// 建構器模式：設置受影響區域
    pub fn with_affected_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.affected_regions = regions.into_iter().collect();
        self
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 建構器模式：設置影響摘要
    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    /// 建構器模式：設置總覽覆寫欄位
    pub fn with_dashboard_summary(mut self, summary: Map<String, Value>) -> Self {
        self.dashboard_summary = Some(summary);
        self
    }

    /// 實際使用的需求倍數，非正值視為 1，其餘夾限於 0.01 至 100
    pub fn demand(&self) -> Decimal {
        effective_multiplier(self.demand_multiplier)
    }

    /// 實際使用的庫存倍數，規則同 [`Self::demand`]
    pub fn inventory(&self) -> Decimal {
        effective_multiplier(self.inventory_multiplier)
    }

    /// 兩個倍數皆為 1 時等同正常營運
    pub fn is_baseline(&self) -> bool {
        self.demand() == Decimal::ONE && self.inventory() == Decimal::ONE
    }

    /// 檢查州是否位於受影響區域
    ///
    /// 受影響區域為空、州未對應任何區域時一律為 false。
    pub fn affects_state(&self, state: &str) -> bool {
        if self.affected_regions.is_empty() {
            return false;
        }
        Region::of_state(state).map_or(false, |region| self.affected_regions.contains(&region))
    }

    /// 驗證倍數必須落在 [`MIN_MULTIPLIER`] 與 [`MAX_MULTIPLIER`] 之間
    pub fn validate(&self, scenario: ScenarioId) -> crate::Result<()> {
        for (field, value) in [
            ("demand_multiplier", self.demand_multiplier),
            ("inventory_multiplier", self.inventory_multiplier),
        ] {
            if !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&value) {
                return Err(ScenarioError::InvalidMultiplier {
                    scenario: scenario.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

fn effective_multiplier(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
    } else {
        Decimal::ONE
    }
}

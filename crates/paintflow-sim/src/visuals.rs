//! 情境視覺樣式

use paintflow_core::ScenarioId;
use serde::Serialize;

/// 情境橫幅與標籤的樣式類別
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioVisuals {
    pub banner_class: &'static str,
    pub chip_class: &'static str,
    pub accent_class: &'static str,
    /// 情境切換器按鈕底色
    pub badge_class: &'static str,
    pub title: &'static str,
}

static NORMAL: ScenarioVisuals = ScenarioVisuals {
    banner_class: "from-gray-800/40 via-gray-900 to-gray-900",
    chip_class: "bg-gray-700/40 text-gray-300 border border-gray-700",
    accent_class: "text-gray-300",
    badge_class: "bg-gray-700",
    title: "Normal Operations",
};

static TRUCK_STRIKE: ScenarioVisuals = ScenarioVisuals {
    banner_class: "from-red-700/30 via-rose-900/50 to-gray-900",
    chip_class: "bg-red-500/20 text-red-300 border border-red-500/30",
    accent_class: "text-red-300",
    badge_class: "bg-red-600",
    title: "Truck Strike Shockwave",
};

static HEATWAVE: ScenarioVisuals = ScenarioVisuals {
    banner_class: "from-orange-700/30 via-amber-900/50 to-gray-900",
    chip_class: "bg-orange-500/20 text-orange-300 border border-orange-500/30",
    accent_class: "text-orange-300",
    badge_class: "bg-orange-600",
    title: "Heatwave Demand Spike",
};

static EARLY_MONSOON: ScenarioVisuals = ScenarioVisuals {
    banner_class: "from-cyan-700/30 via-blue-900/50 to-gray-900",
    chip_class: "bg-cyan-500/20 text-cyan-300 border border-cyan-500/30",
    accent_class: "text-cyan-300",
    badge_class: "bg-cyan-600",
    title: "Early Monsoon Surge",
};

impl ScenarioVisuals {
    pub fn for_scenario(scenario: ScenarioId) -> &'static ScenarioVisuals {
        match scenario {
            ScenarioId::Normal => &NORMAL,
            ScenarioId::TruckStrike => &TRUCK_STRIKE,
            ScenarioId::Heatwave => &HEATWAVE,
            ScenarioId::EarlyMonsoon => &EARLY_MONSOON,
        }
    }

    /// 依字串代號查詢，僅接受完全相符的代號（區分大小寫、不修剪空白），
    /// 其餘一律回退為正常營運樣式
    pub fn lookup(raw_id: &str) -> &'static ScenarioVisuals {
        ScenarioId::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == raw_id)
            .map_or(&NORMAL, Self::for_scenario)
    }
}

//! # PaintFlow
//!
//! 塗料供應鏈情境模擬：資料模型（[`paintflow_core`]）與情境計算引擎（[`paintflow_sim`]）

pub use paintflow_core;
pub use paintflow_sim;

pub use paintflow_core::{Region, ScenarioDefinition, ScenarioError, ScenarioId, ScenarioRegistry};
pub use paintflow_sim::{AdminBaseline, AdminView, DealerBaseline, DealerView, ScenarioSimulator, ScenarioVisuals};

/// 從 JSON 載入情境登錄表並建立模擬器
pub fn simulator_from_json(raw: &str) -> paintflow_core::Result<ScenarioSimulator> {
    ScenarioRegistry::from_json_str(raw).map(ScenarioSimulator::new)
}

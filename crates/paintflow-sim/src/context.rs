//! 情境解析

use paintflow_core::{ScenarioDefinition, ScenarioId};
use rust_decimal::Decimal;

/// 已解析的情境：一旦取得即代表需要調整
///
/// 正常營運或缺少定義時無法建立，呼叫端應原樣返回基準資料。
#[derive(Debug, Clone, Copy)]
pub struct ScenarioContext<'a> {
    pub id: ScenarioId,
    pub definition: &'a ScenarioDefinition,
    /// 需求倍數（非正值已視為 1）
    pub demand: Decimal,
    /// 庫存倍數（非正值已視為 1）
    pub inventory: Decimal,
}

impl<'a> ScenarioContext<'a> {
    pub fn resolve(id: ScenarioId, definition: Option<&'a ScenarioDefinition>) -> Option<Self> {
        if id.is_normal() {
            return None;
        }
        let definition = definition?;
        Some(Self {
            id,
            definition,
            demand: definition.demand(),
            inventory: definition.inventory(),
        })
    }

    /// 州是否受影響；缺少州資料視為未受影響
    pub fn affects(&self, state: Option<&str>) -> bool {
        state.map_or(false, |state| self.definition.affects_state(state))
    }

    /// 情境是否帶有區域限定
    pub fn is_regional(&self) -> bool {
        !self.definition.affected_regions.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

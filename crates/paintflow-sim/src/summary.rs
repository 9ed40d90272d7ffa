//! 管理端總覽覆寫

use paintflow_core::{ScenarioDefinition, ScenarioId};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// 以情境定義中的 `dashboard_summary` 淺層覆寫總覽欄位
///
/// 正常營運、缺少定義或定義未提供覆寫欄位時原樣返回。
pub fn overlay_summary<'a>(
    summary: &'a Map<String, Value>,
    scenario: ScenarioId,
    definition: Option<&ScenarioDefinition>,
) -> Cow<'a, Map<String, Value>> {
    if scenario.is_normal() {
        return Cow::Borrowed(summary);
    }
    let Some(overrides) = definition.and_then(|d| d.dashboard_summary.as_ref()) else {
        return Cow::Borrowed(summary);
    };

    let mut merged = summary.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    Cow::Owned(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn summary() -> Map<String, Value> {
        json!({"total_revenue": 4200000, "critical_alerts": 3, "forecast_accuracy": 91.2})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_overlay_merges_shallowly() {
        let overrides = json!({"critical_alerts": 11, "scenario_note": "North lanes blocked"})
            .as_object()
            .cloned()
            .unwrap();
        let def = ScenarioDefinition::new("Truck Strike", Decimal::ONE, Decimal::new(6, 1))
            .with_dashboard_summary(overrides);
        let base = summary();

        let merged = overlay_summary(&base, ScenarioId::TruckStrike, Some(&def));
        assert_eq!(merged["critical_alerts"], 11);
        assert_eq!(merged["total_revenue"], 4200000);
        assert_eq!(merged["scenario_note"], "North lanes blocked");
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_overlay_identity_cases() {
        let def = ScenarioDefinition::new("Heatwave", Decimal::ONE, Decimal::ONE);
        let base = summary();

        assert!(matches!(overlay_summary(&base, ScenarioId::Heatwave, Some(&def)), Cow::Borrowed(_)));
        assert!(matches!(overlay_summary(&base, ScenarioId::Heatwave, None), Cow::Borrowed(_)));
        assert!(matches!(overlay_summary(&base, ScenarioId::Normal, Some(&def)), Cow::Borrowed(_)));
    }
}

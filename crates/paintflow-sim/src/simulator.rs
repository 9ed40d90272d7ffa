//! 情境模擬主入口

use paintflow_core::{
    AlertsBundle, DealerDashboard, DealerPipeline, DealerSkuItem, Region, ScenarioDefinition, ScenarioId,
    ScenarioRegistry, TopSku, Transfer, TrendSeries, Warehouse,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::alerts::AlertAdjuster;
use crate::context::ScenarioContext;
use crate::dealer::DealerAdjuster;
use crate::summary::overlay_summary;
use crate::top_sku::TopSkuAdjuster;
use crate::transfer::TransferAdjuster;
use crate::visuals::ScenarioVisuals;
use crate::warehouse::WarehouseAdjuster;
use crate::ScenarioWarning;

/// 管理端基準資料（由後端 API 載入）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminBaseline {
    #[serde(default)]
    pub summary: Map<String, Value>,
    #[serde(default)]
    pub warehouses: Vec<Warehouse>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub top_skus: Vec<TopSku>,
}

/// 管理端情境檢視
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminView {
    pub scenario: ScenarioId,
    pub visuals: &'static ScenarioVisuals,
    pub summary: Map<String, Value>,
    pub warehouses: Vec<Warehouse>,
    pub transfers: Vec<Transfer>,
    pub top_skus: Vec<TopSku>,
    pub warnings: Vec<ScenarioWarning>,
}

/// 經銷商基準資料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealerBaseline {
    #[serde(default)]
    pub dashboard: DealerDashboard,
    #[serde(default)]
    pub pipeline: DealerPipeline,
    #[serde(default)]
    pub top_skus: Vec<DealerSkuItem>,
    #[serde(default)]
    pub trends: TrendSeries,
    #[serde(default)]
    pub alerts: AlertsBundle,
}

/// 經銷商情境檢視
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealerView {
    pub scenario: ScenarioId,
    pub visuals: &'static ScenarioVisuals,
    pub dashboard: DealerDashboard,
    pub pipeline: DealerPipeline,
    pub top_skus: Vec<DealerSkuItem>,
    pub trends: TrendSeries,
    pub alerts: AlertsBundle,
    pub warnings: Vec<ScenarioWarning>,
}

/// 情境模擬器
///
/// 不保存任何計算狀態：每次切換情境都從基準資料重新推導檢視。
pub struct ScenarioSimulator {
    registry: ScenarioRegistry,
}

impl ScenarioSimulator {
    /// 創建新的情境模擬器
    pub fn new(registry: ScenarioRegistry) -> Self {
        Self { registry }
    }

    /// 取得情境定義；正常營運不需要定義
    pub fn resolve(&self, scenario: ScenarioId) -> Option<&ScenarioDefinition> {
        if scenario.is_normal() {
            return None;
        }
        let definition = self.registry.find(scenario);
        if definition.is_none() {
            tracing::warn!("情境 {} 未登錄，沿用基準資料", scenario);
        }
        definition
    }

    /// 計算管理端情境檢視
    pub fn admin_view(&self, baseline: &AdminBaseline, scenario: ScenarioId) -> AdminView {
        tracing::info!(
            "開始情境模擬（管理端）：情境 {}，倉庫 {} 筆，調撥 {} 筆，熱銷 SKU {} 筆",
            scenario,
            baseline.warehouses.len(),
            baseline.transfers.len(),
            baseline.top_skus.len()
        );

        let definition = self.resolve(scenario);

        tracing::debug!("Step 1: 總覽覆寫");
        let summary = overlay_summary(&baseline.summary, scenario, definition).into_owned();

        tracing::debug!("Step 2: 倉庫調整");
        let warehouses = WarehouseAdjuster::apply(&baseline.warehouses, scenario, definition).into_owned();

        tracing::debug!("Step 3: 調撥調整");
        let transfers = TransferAdjuster::apply(&baseline.transfers, scenario, definition).into_owned();

        tracing::debug!("Step 4: 熱銷 SKU 調整");
        let top_skus = TopSkuAdjuster::apply(&baseline.top_skus, scenario, definition).into_owned();

        let warnings = Self::region_warnings(baseline, scenario, definition);
        let affected = warehouses
            .iter()
            .filter(|w| w.scenario_affected == Some(true))
            .count();
        tracing::info!(
            "情境模擬完成：受影響倉庫 {} / {}，警告 {} 筆",
            affected,
            warehouses.len(),
            warnings.len()
        );

        AdminView {
            scenario,
            visuals: ScenarioVisuals::for_scenario(scenario),
            summary,
            warehouses,
            transfers,
            top_skus,
            warnings,
        }
    }

    /// 計算經銷商情境檢視
    pub fn dealer_view(&self, baseline: &DealerBaseline, scenario: ScenarioId) -> DealerView {
        tracing::info!(
            "開始情境模擬（經銷商）：情境 {}，SKU {} 筆，趨勢點 {} 個",
            scenario,
            baseline.top_skus.len(),
            baseline.trends.points.len()
        );

        let definition = self.resolve(scenario);

        let dashboard = DealerAdjuster::dashboard(&baseline.dashboard, scenario, definition).into_owned();
        let pipeline = DealerAdjuster::pipeline(&baseline.pipeline, scenario, definition).into_owned();
        let top_skus = DealerAdjuster::top_skus(&baseline.top_skus, scenario, definition).into_owned();
        let trends = DealerAdjuster::trends(&baseline.trends, scenario, definition).into_owned();
        let alerts = AlertAdjuster::apply(&baseline.alerts, scenario, definition).into_owned();

        let mut warnings = Vec::new();
        if !scenario.is_normal() && definition.is_none() {
            warnings.push(ScenarioWarning::unregistered(scenario));
        }

        tracing::debug!("經銷商履約率（本月）: {}", pipeline.fulfillment_rate_mtd);

        DealerView {
            scenario,
            visuals: ScenarioVisuals::for_scenario(scenario),
            dashboard,
            pipeline,
            top_skus,
            trends,
            alerts,
            warnings,
        }
    }

    /// 平行計算每個情境的管理端檢視，輸出依情境固定順序排列
    pub fn admin_views_for_all(&self, baseline: &AdminBaseline) -> Vec<(ScenarioId, AdminView)> {
        ScenarioId::ALL
            .as_slice()
            .par_iter()
            .map(|&scenario| (scenario, self.admin_view(baseline, scenario)))
            .collect()
    }

    pub fn registry(&self) -> &ScenarioRegistry {
        &self.registry
    }

    /// 區域型情境下，州別無法對應區域的倉庫與調撥端點
    fn region_warnings(
        baseline: &AdminBaseline,
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Vec<ScenarioWarning> {
        let mut warnings = Vec::new();

        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            if !scenario.is_normal() {
                warnings.push(ScenarioWarning::unregistered(scenario));
            }
            return warnings;
        };
        if !ctx.is_regional() {
            return warnings;
        }

        for warehouse in &baseline.warehouses {
            if Region::of_state(&warehouse.state).is_none() {
                let subject = warehouse.name().unwrap_or(&warehouse.state).to_string();
                tracing::warn!("倉庫 {} 的州別「{}」未對應任何區域", subject, warehouse.state);
                warnings.push(ScenarioWarning::info(
                    subject,
                    format!("州別「{}」未對應任何區域，視為未受影響", warehouse.state),
                ));
            }
        }

        for (index, transfer) in baseline.transfers.iter().enumerate() {
            // 缺少端點不算未對應
            for (side, state) in [("來源", transfer.from_state()), ("目的", transfer.to_state())] {
                let Some(state) = state else { continue };
                if Region::of_state(state).is_none() {
                    warnings.push(ScenarioWarning::info(
                        format!("transfer#{index}"),
                        format!("{side}倉庫州別「{state}」未對應任何區域"),
                    ));
                }
            }
        }

        warnings
    }
}

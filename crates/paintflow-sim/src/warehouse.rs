//! 倉庫情境調整

use paintflow_core::{ScenarioDefinition, ScenarioId, StockStatus, Warehouse};
use rust_decimal::Decimal;
use std::borrow::Cow;

use crate::context::ScenarioContext;
use crate::numeric::{ratio, round1, round_non_negative, saturating_div, saturating_mul, to_count};

/// 未受影響區域感受到的需求衝擊比例
const DEMAND_SPILLOVER: Decimal = ratio(35, 2);
/// 未受影響區域感受到的供給衝擊比例
const INVENTORY_SPILLOVER: Decimal = ratio(2, 1);

const CAPACITY_PCT_MIN: Decimal = Decimal::ONE;
const CAPACITY_PCT_MAX: Decimal = ratio(130, 0);

/// 單一倉庫實際承受的衝擊係數
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShockFactors {
    pub demand: Decimal,
    pub inventory: Decimal,
}

impl ShockFactors {
    /// 受影響區域承受完整倍數，其餘區域只承受外溢部分
    pub fn for_region(ctx: &ScenarioContext<'_>, affected: bool) -> Self {
        if affected {
            Self {
                demand: ctx.demand,
                inventory: ctx.inventory,
            }
        } else {
            Self {
                demand: Decimal::ONE + (ctx.demand - Decimal::ONE) * DEMAND_SPILLOVER,
                inventory: Decimal::ONE - (Decimal::ONE - ctx.inventory) * INVENTORY_SPILLOVER,
            }
        }
    }
}

/// 倉庫情境調整器
pub struct WarehouseAdjuster;

impl WarehouseAdjuster {
    /// 對倉庫清單套用情境
    ///
    /// 正常營運或缺少情境定義時原樣返回（借用輸入）。輸出與輸入一一對應、順序不變。
    pub fn apply<'a>(
        warehouses: &'a [Warehouse],
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, [Warehouse]> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(warehouses);
        };

        Cow::Owned(warehouses.iter().map(|w| Self::adjust(w, &ctx)).collect())
    }

    fn adjust(warehouse: &Warehouse, ctx: &ScenarioContext<'_>) -> Warehouse {
        let affected = ctx.affects(Some(&warehouse.state));
        let factors = ShockFactors::for_region(ctx, affected);
        let supply_gap = Decimal::ONE - factors.inventory;

        let stock = round_non_negative(saturating_div(
            saturating_mul(warehouse.total_stock, factors.inventory),
            factors.demand,
        ));

        let critical_weight = if affected { ratio(4, 0) } else { Decimal::ONE };
        let critical_skus = to_count(
            Decimal::from(warehouse.critical_skus)
                + critical_weight * (factors.demand - ratio(9, 1))
                + supply_gap * ratio(6, 0),
        );

        let low_weight = if affected { ratio(6, 0) } else { ratio(2, 0) };
        let low_skus = to_count(
            Decimal::from(warehouse.low_skus)
                + low_weight * (factors.demand - Decimal::ONE)
                + supply_gap * ratio(4, 0),
        );

        // 供給吃緊時過量 SKU 減少，寬鬆時增加
        let overstock_factor = if factors.inventory < Decimal::ONE {
            ratio(6, 1)
        } else {
            ratio(115, 2)
        };
        let overstock_skus = to_count(Decimal::from(warehouse.overstock_skus) * overstock_factor);

        let capacity = warehouse.capacity.max(Decimal::ONE);
        let capacity_pct = round1(
            saturating_mul(stock / capacity, ratio(100, 0)).clamp(CAPACITY_PCT_MIN, CAPACITY_PCT_MAX),
        );

        let status = warehouse
            .status
            .map(|status| Self::escalate(status, factors, affected));

        let risk_factor = if affected {
            factors.demand * (ratio(2, 0) - factors.inventory)
        } else {
            Decimal::ONE + (factors.demand - Decimal::ONE) * DEMAND_SPILLOVER
        };
        let revenue_at_risk = round_non_negative(saturating_mul(warehouse.revenue_at_risk, risk_factor));

        Warehouse {
            total_stock: stock,
            critical_skus,
            low_skus,
            overstock_skus,
            capacity_pct,
            status,
            revenue_at_risk,
            scenario_affected: Some(affected),
            ..warehouse.clone()
        }
    }

    /// 壓力下的狀態升級
    ///
    /// 只在受影響區域生效，每次最多升一級，且不會回到較健康的狀態。
    pub fn escalate(status: StockStatus, factors: ShockFactors, affected: bool) -> StockStatus {
        if !affected {
            return status;
        }

        let demand_spike = factors.demand > ratio(12, 1);
        match status {
            StockStatus::Overstocked if demand_spike => StockStatus::Low,
            StockStatus::Healthy if demand_spike || factors.inventory < ratio(8, 1) => StockStatus::Low,
            StockStatus::Low if factors.demand > ratio(115, 2) || factors.inventory < ratio(85, 2) => {
                StockStatus::Critical
            }
            other => other,
        }
    }
}

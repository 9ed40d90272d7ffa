//! 熱銷 SKU 情境調整

use paintflow_core::{ScenarioDefinition, ScenarioId, TopSku};
use rust_decimal::Decimal;
use std::borrow::Cow;

use crate::context::ScenarioContext;
use crate::numeric::{ratio, round_non_negative, saturating_mul};

/// 熱銷 SKU 調整器
pub struct TopSkuAdjuster;

impl TopSkuAdjuster {
    /// 對熱銷 SKU 排行套用情境
    ///
    /// 重點色系的 SKU 依名次（index mod 3）錯開加成，避免前幾名同步變動。
    pub fn apply<'a>(
        skus: &'a [TopSku],
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, [TopSku]> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(skus);
        };

        let families = scenario.highlighted_families();
        let squeeze = if ctx.inventory < Decimal::ONE {
            ratio(9, 1) + ctx.inventory * ratio(25, 2)
        } else {
            Decimal::ONE
        };

        Cow::Owned(
            skus.iter()
                .enumerate()
                .map(|(index, sku)| {
                    let highlighted = sku.family().map_or(false, |family| families.contains(&family));

                    let ramp = if highlighted {
                        let stagger = Decimal::from(index % 3) * ratio(5, 2);
                        ctx.demand * (ratio(105, 2) + stagger)
                    } else {
                        Decimal::ONE + (ctx.demand - Decimal::ONE) * ratio(45, 2)
                    };
                    let quantity_factor = if highlighted {
                        ctx.demand
                    } else {
                        Decimal::ONE + (ctx.demand - Decimal::ONE) * ratio(4, 1)
                    };

                    TopSku {
                        total_revenue: round_non_negative(saturating_mul(sku.total_revenue, ramp * squeeze)),
                        total_quantity: round_non_negative(saturating_mul(sku.total_quantity, quantity_factor)),
                        scenario_highlight: Some(highlighted),
                        ..sku.clone()
                    }
                })
                .collect(),
        )
    }
}

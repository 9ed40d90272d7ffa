//! 經銷商看板情境調整

use paintflow_core::{
    DealerDashboard, DealerPipeline, DealerSkuItem, PipelineCounts, ScenarioDefinition, ScenarioId,
    StockStatus, TrendPoint, TrendSeries,
};
use rust_decimal::Decimal;
use std::borrow::Cow;

use crate::context::ScenarioContext;
use crate::numeric::{
    ratio, round1, round_non_negative, saturating_add, saturating_div, saturating_mul, saturating_sub, to_count,
};

const PERCENT: Decimal = ratio(100, 0);

/// 可供應天數下限
const MIN_DAYS_OF_COVER: Decimal = ratio(2, 1);
/// 低於此天數升為告急
const CRITICAL_COVER_DAYS: Decimal = ratio(25, 1);
/// 低於此天數升為低庫存
const LOW_COVER_DAYS: Decimal = ratio(7, 0);

/// 經銷商看板調整器
pub struct DealerAdjuster;

impl DealerAdjuster {
    /// 調整看板關鍵指標
    pub fn dashboard<'a>(
        dashboard: &'a DealerDashboard,
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, DealerDashboard> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(dashboard);
        };
        let (demand, inventory) = (ctx.demand, ctx.inventory);
        let demand_gap = demand - Decimal::ONE;
        let supply_gap = Decimal::ONE - inventory;
        let balance = demand * (ratio(2, 0) - inventory);

        let ai_recommendations_pending =
            to_count(Decimal::from(dashboard.ai_recommendations_pending) * balance * ratio(11, 1));
        let revenue_this_month = round_non_negative(saturating_mul(
            dashboard.revenue_this_month,
            ratio(92, 2) + demand * ratio(25, 2),
        ));
        let total_ai_savings = round_non_negative(saturating_mul(
            dashboard.total_ai_savings,
            Decimal::ONE + demand_gap * ratio(8, 1) + supply_gap * ratio(3, 1),
        ));
        // 基準指標可能落在任意範圍，位移量本身有界
        let fulfillment_rate = saturating_sub(
            dashboard.fulfillment_rate,
            supply_gap * ratio(24, 0) - demand_gap * ratio(6, 0),
        )
        .clamp(ratio(35, 0), ratio(99, 0));
        let avg_delivery_time_days = saturating_add(
            dashboard.avg_delivery_time_days,
            supply_gap * ratio(45, 1) + demand_gap * ratio(22, 1),
        )
        .max(Decimal::ONE);
        let health_score = saturating_sub(
            dashboard.health_score,
            supply_gap * ratio(20, 0) + demand_gap * ratio(9, 0),
        )
        .clamp(ratio(15, 0), ratio(99, 0));

        Cow::Owned(DealerDashboard {
            ai_recommendations_pending,
            revenue_this_month,
            total_ai_savings,
            fulfillment_rate,
            avg_delivery_time_days,
            health_score,
            extra: dashboard.extra.clone(),
        })
    }

    /// 調整本月訂單管線並重算履約率
    pub fn pipeline<'a>(
        pipeline: &'a DealerPipeline,
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, DealerPipeline> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(pipeline);
        };
        let (demand, inventory) = (ctx.demand, ctx.inventory);
        let placed_boost = Decimal::ONE + (demand - Decimal::ONE) * ratio(11, 1);
        let delivery_drop = (inventory * (ratio(2, 0) - demand)).max(ratio(5, 1));

        let mtd = &pipeline.mtd;
        let adjusted = PipelineCounts {
            placed: to_count(Decimal::from(mtd.placed) * placed_boost + ratio(2, 0)),
            confirmed: to_count(Decimal::from(mtd.confirmed) * (ratio(95, 2) + demand * ratio(22, 2))),
            shipped: to_count(Decimal::from(mtd.shipped) * (ratio(9, 1) + inventory * ratio(35, 2))),
            delivered: to_count(Decimal::from(mtd.delivered) * delivery_drop),
            cancelled: to_count(
                Decimal::from(mtd.cancelled)
                    + (Decimal::ONE - inventory) * ratio(4, 0)
                    + (demand - Decimal::ONE) * ratio(2, 0),
            ),
            extra: mtd.extra.clone(),
        };

        let total_mtd = adjusted.total();
        let fulfillment_rate_mtd =
            round1(Decimal::from(adjusted.delivered) / Decimal::from(total_mtd.max(1)) * PERCENT);

        Cow::Owned(DealerPipeline {
            mtd: adjusted,
            total_mtd,
            fulfillment_rate_mtd,
            ..pipeline.clone()
        })
    }

    /// 調整經銷商熱銷 SKU（銷量、庫存、可供應天數與狀態）
    ///
    /// 狀態只會往缺貨方向升級，不會因調整而變得更健康。
    pub fn top_skus<'a>(
        items: &'a [DealerSkuItem],
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, [DealerSkuItem]> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(items);
        };
        let (demand, inventory) = (ctx.demand, ctx.inventory);
        let sell_through = Decimal::ONE + (demand - Decimal::ONE) * ratio(8, 1);

        Cow::Owned(
            items
                .iter()
                .map(|item| {
                    let days = saturating_div(saturating_mul(item.days_of_cover, inventory), demand)
                        .max(MIN_DAYS_OF_COVER);
                    let stock = saturating_div(saturating_mul(item.current_stock, inventory), demand);
                    DealerSkuItem {
                        sold_qty: round_non_negative(saturating_mul(item.sold_qty, sell_through)),
                        current_stock: round_non_negative(stock),
                        days_of_cover: round1(days),
                        stock_status: Self::cover_status(item.stock_status, days),
                        ..item.clone()
                    }
                })
                .collect(),
        )
    }

    fn cover_status(current: Option<StockStatus>, days: Decimal) -> Option<StockStatus> {
        let pressured = if days < CRITICAL_COVER_DAYS {
            StockStatus::Critical
        } else if days < LOW_COVER_DAYS {
            StockStatus::Low
        } else {
            return current;
        };

        match current {
            Some(status) if status.stress_rank() >= pressured.stress_rank() => Some(status),
            _ => Some(pressured),
        }
    }

    /// 調整月度趨勢，越近的月份加權越重，並重算序列彙總
    pub fn trends<'a>(
        trends: &'a TrendSeries,
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, TrendSeries> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(trends);
        };
        let (demand, inventory) = (ctx.demand, ctx.inventory);
        let revenue_factor = ratio(9, 1) + demand * ratio(28, 2);
        let health_shift = (Decimal::ONE - inventory) * ratio(18, 0) + (demand - Decimal::ONE) * ratio(6, 0);
        let span = Decimal::from(trends.points.len().saturating_sub(1).max(1));

        let points: Vec<TrendPoint> = trends
            .points
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let recent_weight = Decimal::ONE + Decimal::from(idx) / span * ratio(25, 2);
                TrendPoint {
                    revenue: round_non_negative(saturating_mul(point.revenue, revenue_factor * recent_weight)),
                    health_score: saturating_sub(point.health_score, health_shift).clamp(ratio(10, 0), ratio(100, 0)),
                    ..point.clone()
                }
            })
            .collect();

        let max_revenue = points
            .iter()
            .map(|p| p.revenue)
            .fold(Decimal::ZERO, Decimal::max);
        let health_sum: Decimal = points.iter().map(|p| p.health_score).sum();
        let avg_health = round1(health_sum / Decimal::from(points.len().max(1)));

        Cow::Owned(TrendSeries {
            points,
            max_revenue,
            avg_health,
            extra: trends.extra.clone(),
        })
    }
}

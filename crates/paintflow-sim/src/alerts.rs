//! 缺貨警示情境調整

use paintflow_core::{AlertsBundle, ScenarioDefinition, ScenarioId, StockoutAlert};
use rust_decimal::Decimal;
use std::borrow::Cow;

use crate::context::ScenarioContext;
use crate::numeric::round1;

/// 警示調整器
pub struct AlertAdjuster;

impl AlertAdjuster {
    /// 需求上升縮短缺貨前的剩餘天數；需求下降不延長。流行色清單原樣保留。
    pub fn apply<'a>(
        alerts: &'a AlertsBundle,
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, AlertsBundle> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(alerts);
        };
        let divisor = ctx.demand.max(Decimal::ONE);

        let stockout_alerts = alerts
            .stockout_alerts
            .iter()
            .map(|alert| StockoutAlert {
                days_remaining: round1(alert.days_remaining / divisor),
                ..alert.clone()
            })
            .collect();

        Cow::Owned(AlertsBundle {
            stockout_alerts,
            ..alerts.clone()
        })
    }
}

//! 調撥情境調整

use paintflow_core::{ScenarioDefinition, ScenarioId, Transfer, TransferStatus};
use rust_decimal::Decimal;
use std::borrow::Cow;

use crate::context::ScenarioContext;
use crate::numeric::{ratio, round_half_up, saturating_mul};

/// 調整後的最小調撥量
const MIN_TRANSFER_QTY: Decimal = ratio(10, 0);

/// 前幾筆調撥一律重新標為待審
const URGENT_TRANSFER_COUNT: usize = 2;

/// 調撥調整器
pub struct TransferAdjuster;

impl TransferAdjuster {
    /// 對調撥建議套用情境
    ///
    /// 流向受影響區域的路線加權，自受影響區域流出的路線減量。
    pub fn apply<'a>(
        transfers: &'a [Transfer],
        scenario: ScenarioId,
        definition: Option<&ScenarioDefinition>,
    ) -> Cow<'a, [Transfer]> {
        let Some(ctx) = ScenarioContext::resolve(scenario, definition) else {
            return Cow::Borrowed(transfers);
        };

        let pressure = Decimal::ONE + (ctx.demand - ctx.inventory) * ratio(6, 1);

        Cow::Owned(
            transfers
                .iter()
                .enumerate()
                .map(|(index, transfer)| {
                    let from_affected = ctx.affects(transfer.from_state());
                    let to_affected = ctx.affects(transfer.to_state());

                    let mut weight = Decimal::ONE;
                    if to_affected {
                        weight *= ratio(13, 1);
                    }
                    if from_affected {
                        weight *= ratio(9, 1);
                    }

                    let quantity = round_half_up(saturating_mul(transfer.quantity, pressure * weight)).max(MIN_TRANSFER_QTY);
                    let status = if index < URGENT_TRANSFER_COUNT || to_affected {
                        Some(TransferStatus::Pending)
                    } else {
                        transfer.status
                    };

                    Transfer {
                        quantity,
                        status,
                        reason: Some(Self::annotate_reason(transfer.reason.as_deref(), ctx.name())),
                        scenario_affected: Some(from_affected || to_affected),
                        ..transfer.clone()
                    }
                })
                .collect(),
        )
    }

    fn annotate_reason(reason: Option<&str>, scenario_name: &str) -> String {
        match reason {
            Some(reason) if !reason.is_empty() => format!("{reason} [{scenario_name} impact]"),
            _ => format!("{scenario_name} impact adjustment"),
        }
    }
}

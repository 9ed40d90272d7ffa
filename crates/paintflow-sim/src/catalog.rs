//! 色卡目錄排序

use paintflow_core::{ScenarioId, Shade};
use std::cmp::Ordering;

/// 不在優先清單中的色系排名
const UNRANKED: usize = 99;

/// 色卡目錄排序器
pub struct CatalogPrioritizer;

impl CatalogPrioritizer {
    /// 依情境優先色系重新排序色卡（只排序，不篩選）
    ///
    /// 排序鍵：優先色系名次 → 流行色在前 → 色卡名稱（不分大小寫）。
    pub fn prioritize(shades: &[Shade], scenario: ScenarioId) -> Vec<Shade> {
        let priority = scenario.catalog_priority();
        let rank = |shade: &Shade| {
            shade
                .family()
                .and_then(|family| priority.iter().position(|p| *p == family))
                .unwrap_or(UNRANKED)
        };

        let mut ordered = shades.to_vec();
        ordered.sort_by(|a, b| {
            rank(a)
                .cmp(&rank(b))
                .then_with(|| b.is_trending.cmp(&a.is_trending))
                .then_with(|| Self::compare_names(&a.shade_name, &b.shade_name))
        });
        ordered
    }

    fn compare_names(a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

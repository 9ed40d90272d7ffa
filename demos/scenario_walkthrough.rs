//! # 情境模擬完整範例
//!
//! 載入情境登錄表與一份小型基準資料，逐一切換情境並列印調整結果。
//!
//! ```text
//! RUST_LOG=paintflow_sim=debug cargo run --example scenario_walkthrough
//! ```

use anyhow::Context;
use paintflow::paintflow_core::{ScenarioId, Shade};
use paintflow::paintflow_sim::CatalogPrioritizer;
use paintflow::{simulator_from_json, AdminBaseline, DealerBaseline};
use tracing_subscriber::EnvFilter;

const SCENARIOS: &str = include_str!("scenarios.json");

const ADMIN_BASELINE: &str = r#"{
    "summary": { "total_revenue": 4820000, "critical_alerts": 5, "pending_transfers": 3 },
    "warehouses": [
        { "name": "Delhi Central DC", "state": "Delhi", "total_stock": 42000, "capacity": 60000,
          "critical_skus": 2, "low_skus": 6, "overstock_skus": 3, "status": "healthy", "revenue_at_risk": 185000 },
        { "name": "Pune DC", "state": "Maharashtra", "total_stock": 38000, "capacity": 50000,
          "critical_skus": 1, "low_skus": 4, "overstock_skus": 5, "status": "low", "revenue_at_risk": 96000 },
        { "name": "Chennai DC", "state": "Tamil Nadu", "total_stock": 27000, "capacity": 45000,
          "critical_skus": 3, "low_skus": 7, "overstock_skus": 1, "status": "critical", "revenue_at_risk": 142000 },
        { "name": "Leh Depot", "state": "Ladakh", "total_stock": 4000, "capacity": 8000, "status": "healthy" }
    ],
    "transfers": [
        { "from_warehouse": { "state": "Maharashtra" }, "to_warehouse": { "state": "Delhi" },
          "quantity": 1200, "status": "APPROVED", "reason": "Rebalance festive stock" },
        { "from_warehouse": { "state": "Tamil Nadu" }, "to_warehouse": { "state": "Kerala" },
          "quantity": 400, "status": "APPROVED" },
        { "from_warehouse": { "state": "Gujarat" }, "to_warehouse": { "state": "Madhya Pradesh" },
          "quantity": 650, "status": "COMPLETED", "reason": "" }
    ],
    "top_skus": [
        { "shade_name": "Brick Kiln", "shade_family": "Reds", "total_revenue": 512000, "total_quantity": 3400 },
        { "shade_name": "Ivory Mist", "shade_family": "Whites", "total_revenue": 468000, "total_quantity": 4100 },
        { "shade_name": "Monsoon Teal", "shade_family": "Blues", "total_revenue": 301000, "total_quantity": 1900 }
    ]
}"#;

const DEALER_BASELINE: &str = r#"{
    "dashboard": { "ai_recommendations_pending": 6, "revenue_this_month": 284000, "total_ai_savings": 41000,
                   "fulfillment_rate": 92.5, "avg_delivery_time_days": 3.2, "health_score": 81 },
    "pipeline": { "mtd": { "placed": 14, "confirmed": 11, "shipped": 9, "delivered": 7, "cancelled": 1 },
                  "total_mtd": 42, "fulfillment_rate_mtd": 16.7 },
    "top_skus": [
        { "shade_name": "Sunlit Ochre", "sold_qty": 120, "current_stock": 60, "days_of_cover": 9.5, "stock_status": "healthy" },
        { "shade_name": "Chalk White", "sold_qty": 210, "current_stock": 40, "days_of_cover": 4.0, "stock_status": "low" }
    ],
    "trends": { "points": [
        { "month_key": "2025-07", "month": "Jul", "revenue": 240000, "health_score": 78 },
        { "month_key": "2025-08", "month": "Aug", "revenue": 262000, "health_score": 80 },
        { "month_key": "2025-09", "month": "Sep", "revenue": 284000, "health_score": 81 }
    ] },
    "alerts": { "stockout_alerts": [ { "shade_name": "Chalk White", "days_remaining": 4.0 } ], "trending": [] }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("===== PaintFlow Scenario Walkthrough =====\n");

    // 步驟 1: 載入情境登錄表
    println!("[1] Load scenario registry");
    let simulator = simulator_from_json(SCENARIOS).context("情境登錄表載入失敗")?;
    tracing::info!(scenarios = simulator.registry().len(), "情境登錄表已載入");
    for listing in simulator.registry().listings() {
        println!("    {:<14} {}", listing.id.as_str(), listing.name);
    }
    println!();

    // 步驟 2: 載入基準資料
    println!("[2] Load baseline data");
    let admin: AdminBaseline = serde_json::from_str(ADMIN_BASELINE).context("管理端基準資料解析失敗")?;
    let dealer: DealerBaseline = serde_json::from_str(DEALER_BASELINE).context("經銷商基準資料解析失敗")?;
    tracing::info!(
        warehouses = admin.warehouses.len(),
        dealer_skus = dealer.top_skus.len(),
        "基準資料已載入"
    );
    println!(
        "    Warehouses: {}  Transfers: {}  Top SKUs: {}\n",
        admin.warehouses.len(),
        admin.transfers.len(),
        admin.top_skus.len()
    );

    // 步驟 3: 逐一切換情境（平行計算）
    println!("[3] Admin views per scenario");
    for (scenario, view) in simulator.admin_views_for_all(&admin) {
        println!("--- {} ({}) ---", view.visuals.title, scenario.short_label());
        for warehouse in &view.warehouses {
            println!(
                "    {:<18} stock {:>7} cap {:>6}% status {:<9} affected {}",
                warehouse.name().unwrap_or(&warehouse.state),
                warehouse.total_stock,
                warehouse.capacity_pct,
                warehouse.status.map_or("-", |s| s.as_str()),
                warehouse.scenario_affected.unwrap_or(false)
            );
        }
        for transfer in &view.transfers {
            println!(
                "    {} -> {} qty {} [{}]",
                transfer.from_state().unwrap_or("?"),
                transfer.to_state().unwrap_or("?"),
                transfer.quantity,
                transfer.reason.as_deref().unwrap_or("")
            );
        }
        for warning in &view.warnings {
            println!("    ! {}: {}", warning.subject, warning.message);
        }
        println!();
    }

    // 步驟 4: 經銷商檢視
    println!("[4] Dealer view under heatwave");
    let view = simulator.dealer_view(&dealer, ScenarioId::Heatwave);
    println!("    Fulfillment rate: {}%", view.dashboard.fulfillment_rate);
    println!("    Pipeline MTD: {} orders, {}% delivered", view.pipeline.total_mtd, view.pipeline.fulfillment_rate_mtd);
    for item in &view.top_skus {
        println!(
            "    cover {:>5} days status {}",
            item.days_of_cover,
            item.stock_status.map_or("-", |s| s.as_str())
        );
    }
    println!("    Avg health: {}\n", view.trends.avg_health);

    // 步驟 5: 色卡排序
    println!("[5] Catalog order under early monsoon");
    let shades = vec![
        Shade::new("Ivory Mist", "Whites"),
        Shade::new("Monsoon Teal", "Blues").trending(),
        Shade::new("Fern", "Greens"),
        Shade::new("Brick Kiln", "Reds"),
    ];
    for shade in CatalogPrioritizer::prioritize(&shades, ScenarioId::EarlyMonsoon) {
        println!("    {} ({})", shade.shade_name, shade.shade_family);
    }

    tracing::info!("範例執行完畢");
    println!("\n===== Done =====");
    Ok(())
}

use paintflow_core::{
    AlertsBundle, DealerDashboard, DealerSkuItem, Region, ScenarioDefinition, ScenarioId, Shade, StockStatus,
    StockoutAlert, TopSku, Transfer, TrendPoint, TrendSeries, Warehouse,
};
use paintflow_sim::{
    AlertAdjuster, CatalogPrioritizer, DealerAdjuster, TopSkuAdjuster, TransferAdjuster, WarehouseAdjuster,
};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;
use std::borrow::Cow;

const STATES: &[&str] = &[
    "Delhi", "Punjab", "Kerala", "Tamil Nadu", "West Bengal", "Odisha", "Maharashtra", "Gujarat",
    "Madhya Pradesh", "Ladakh", "",
];

const FAMILIES: &[&str] = &["Reds", "Blues", "Greens", "Yellows", "Neutrals", "Whites", "Metallics"];

fn status_strategy() -> impl Strategy<Value = Option<StockStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(StockStatus::Healthy)),
        Just(Some(StockStatus::Low)),
        Just(Some(StockStatus::Critical)),
        Just(Some(StockStatus::Overstocked)),
    ]
}

fn warehouse_strategy() -> impl Strategy<Value = Warehouse> {
    (
        prop::sample::select(STATES),
        0_u32..200_000,
        0_u32..300_000,
        (0_u32..40, 0_u32..40, 0_u32..40),
        status_strategy(),
        0_u32..1_000_000,
    )
        .prop_map(|(state, stock, capacity, (critical, low, overstock), status, risk)| {
            let mut warehouse = Warehouse::new(state, Decimal::from(stock), Decimal::from(capacity))
                .with_sku_counts(critical, low, overstock)
                .with_revenue_at_risk(Decimal::from(risk));
            warehouse.status = status;
            warehouse
        })
}

fn transfer_strategy() -> impl Strategy<Value = Transfer> {
    (prop::sample::select(STATES), prop::sample::select(STATES), 0_u32..5_000)
        .prop_map(|(from, to, qty)| Transfer::new(from, to, Decimal::from(qty)))
}

/// 以十分位表示的倍數：0.1 ~ 3.0
fn multiplier_strategy() -> impl Strategy<Value = Decimal> {
    (1_i64..=30).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// 任意 Decimal，涵蓋 `Decimal::MAX`/`MIN` 附近與極小的正值
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0_u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn regions_strategy() -> impl Strategy<Value = Vec<Region>> {
    prop::sample::subsequence(Region::ALL.to_vec(), 0..=Region::ALL.len())
}

fn definition_strategy() -> impl Strategy<Value = ScenarioDefinition> {
    (multiplier_strategy(), multiplier_strategy(), regions_strategy()).prop_map(|(demand, inventory, regions)| {
        ScenarioDefinition::new("Stress Test", demand, inventory).with_affected_regions(regions)
    })
}

fn scenario_strategy() -> impl Strategy<Value = ScenarioId> {
    prop::sample::select(ScenarioId::ALL[1..].to_vec())
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn normal_scenario_is_identity(
        warehouses in prop::collection::vec(warehouse_strategy(), 0..20),
        transfers in prop::collection::vec(transfer_strategy(), 0..20),
        definition in definition_strategy(),
    ) {
        let adjusted = WarehouseAdjuster::apply(&warehouses, ScenarioId::Normal, Some(&definition));
        prop_assert!(matches!(adjusted, Cow::Borrowed(_)));
        prop_assert_eq!(adjusted.as_ref(), warehouses.as_slice());

        let adjusted = TransferAdjuster::apply(&transfers, ScenarioId::Normal, Some(&definition));
        prop_assert_eq!(adjusted.as_ref(), transfers.as_slice());
    }

    #[test]
    fn warehouse_adjustment_preserves_rows_and_bounds(
        warehouses in prop::collection::vec(warehouse_strategy(), 0..20),
        scenario in scenario_strategy(),
        definition in definition_strategy(),
    ) {
        let adjusted = WarehouseAdjuster::apply(&warehouses, scenario, Some(&definition));
        prop_assert_eq!(adjusted.len(), warehouses.len());

        for (before, after) in warehouses.iter().zip(adjusted.iter()) {
            prop_assert_eq!(&after.state, &before.state);
            prop_assert!(after.total_stock >= Decimal::ZERO);
            prop_assert!(after.revenue_at_risk >= Decimal::ZERO);
            prop_assert!(after.capacity_pct >= Decimal::ONE);
            prop_assert!(after.capacity_pct <= Decimal::from(130));
            prop_assert_eq!(after.scenario_affected, Some(definition.affects_state(&before.state)));

            match (before.status, after.status) {
                (None, None) => {}
                (Some(old), Some(new)) => prop_assert!(new.stress_rank() >= old.stress_rank()),
                other => prop_assert!(false, "status presence changed: {:?}", other),
            }
        }
    }

    #[test]
    fn adjustment_is_deterministic(
        warehouses in prop::collection::vec(warehouse_strategy(), 0..10),
        scenario in scenario_strategy(),
        definition in definition_strategy(),
    ) {
        let first = WarehouseAdjuster::apply(&warehouses, scenario, Some(&definition)).into_owned();
        let second = WarehouseAdjuster::apply(&warehouses, scenario, Some(&definition)).into_owned();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_positive_multipliers_behave_as_one(
        warehouses in prop::collection::vec(warehouse_strategy(), 1..10),
        regions in regions_strategy(),
        negative in -30_i64..=0,
    ) {
        let broken = ScenarioDefinition::new("Broken", Decimal::new(negative, 1), Decimal::ZERO)
            .with_affected_regions(regions.clone());
        let neutral = ScenarioDefinition::new("Broken", Decimal::ONE, Decimal::ONE)
            .with_affected_regions(regions);

        let a = WarehouseAdjuster::apply(&warehouses, ScenarioId::Heatwave, Some(&broken)).into_owned();
        let b = WarehouseAdjuster::apply(&warehouses, ScenarioId::Heatwave, Some(&neutral)).into_owned();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn transfers_keep_minimum_quantity(
        transfers in prop::collection::vec(transfer_strategy(), 0..20),
        scenario in scenario_strategy(),
        definition in definition_strategy(),
    ) {
        let adjusted = TransferAdjuster::apply(&transfers, scenario, Some(&definition));
        prop_assert_eq!(adjusted.len(), transfers.len());
        for transfer in adjusted.iter() {
            prop_assert!(transfer.quantity >= Decimal::from(10));
            prop_assert!(transfer.reason.as_deref().map_or(false, |r| r.contains("Stress Test")));
        }
    }

    #[test]
    fn dealer_sku_status_never_improves(
        rows in prop::collection::vec((0_u32..500, 0_u32..500, 0_u32..300, status_strategy()), 0..15),
        scenario in scenario_strategy(),
        definition in definition_strategy(),
    ) {
        let items: Vec<DealerSkuItem> = rows
            .into_iter()
            .map(|(sold, stock, cover_tenths, status)| {
                let mut item = DealerSkuItem::new(Decimal::from(sold), Decimal::from(stock), Decimal::new(cover_tenths.into(), 1));
                item.stock_status = status;
                item
            })
            .collect();

        let adjusted = DealerAdjuster::top_skus(&items, scenario, Some(&definition));
        for (before, after) in items.iter().zip(adjusted.iter()) {
            prop_assert!(after.days_of_cover >= Decimal::new(2, 1));
            if let Some(old) = before.stock_status {
                let new = after.stock_status.map_or(0, StockStatus::stress_rank);
                prop_assert!(new >= old.stress_rank());
            }
        }
    }

    #[test]
    fn trend_health_stays_in_band(
        points in prop::collection::vec((0_u32..1_000_000, 0_u32..=100), 0..12),
        scenario in scenario_strategy(),
        definition in definition_strategy(),
    ) {
        let series = TrendSeries::from_points(
            points
                .iter()
                .enumerate()
                .map(|(i, (revenue, health))| TrendPoint::new(format!("m{i}"), Decimal::from(*revenue), Decimal::from(*health)))
                .collect(),
        );

        let adjusted = DealerAdjuster::trends(&series, scenario, Some(&definition));
        prop_assert_eq!(adjusted.points.len(), series.points.len());
        for point in &adjusted.points {
            prop_assert!(point.health_score >= Decimal::from(10));
            prop_assert!(point.health_score <= Decimal::from(100));
            prop_assert!(point.revenue <= adjusted.max_revenue);
        }
    }

    #[test]
    fn adjusters_are_total_for_any_decimal(
        rows in prop::collection::vec(
            (prop::sample::select(STATES), any_decimal(), any_decimal(), any_decimal()),
            1..8,
        ),
        demand in any_decimal(),
        inventory in any_decimal(),
        regions in regions_strategy(),
        scenario in scenario_strategy(),
    ) {
        let definition = ScenarioDefinition::new("Stress Test", demand, inventory).with_affected_regions(regions);
        let def = Some(&definition);

        let warehouses: Vec<Warehouse> = rows
            .iter()
            .map(|(state, stock, capacity, risk)| Warehouse::new(*state, *stock, *capacity).with_revenue_at_risk(*risk))
            .collect();
        for warehouse in WarehouseAdjuster::apply(&warehouses, scenario, def).iter() {
            prop_assert!(warehouse.total_stock >= Decimal::ZERO);
            prop_assert!(warehouse.revenue_at_risk >= Decimal::ZERO);
            prop_assert!(warehouse.capacity_pct >= Decimal::ONE);
            prop_assert!(warehouse.capacity_pct <= Decimal::from(130));
        }

        let transfers: Vec<Transfer> = rows
            .iter()
            .map(|(state, qty, _, _)| Transfer::new(*state, "Delhi", *qty))
            .collect();
        for transfer in TransferAdjuster::apply(&transfers, scenario, def).iter() {
            prop_assert!(transfer.quantity >= Decimal::from(10));
        }

        let skus: Vec<TopSku> = rows
            .iter()
            .enumerate()
            .map(|(i, (_, revenue, quantity, _))| TopSku::new(FAMILIES[i % FAMILIES.len()], *revenue, *quantity))
            .collect();
        for sku in TopSkuAdjuster::apply(&skus, scenario, def).iter() {
            prop_assert!(sku.total_revenue >= Decimal::ZERO);
            prop_assert!(sku.total_quantity >= Decimal::ZERO);
        }

        let (_, a, b, c) = rows[0];
        let dashboard = DealerDashboard {
            revenue_this_month: a,
            total_ai_savings: b,
            fulfillment_rate: c,
            avg_delivery_time_days: a,
            health_score: b,
            ..DealerDashboard::default()
        };
        let adjusted = DealerAdjuster::dashboard(&dashboard, scenario, def);
        prop_assert!(adjusted.fulfillment_rate >= Decimal::from(35) && adjusted.fulfillment_rate <= Decimal::from(99));
        prop_assert!(adjusted.health_score >= Decimal::from(15) && adjusted.health_score <= Decimal::from(99));
        prop_assert!(adjusted.avg_delivery_time_days >= Decimal::ONE);

        let items: Vec<DealerSkuItem> = rows
            .iter()
            .map(|(_, sold, stock, cover)| DealerSkuItem::new(*sold, *stock, *cover))
            .collect();
        for item in DealerAdjuster::top_skus(&items, scenario, def).iter() {
            prop_assert!(item.current_stock >= Decimal::ZERO);
            prop_assert!(item.days_of_cover >= Decimal::new(2, 1));
        }

        let series = TrendSeries::from_points(
            rows.iter()
                .enumerate()
                .map(|(i, (_, revenue, health, _))| TrendPoint::new(format!("m{i}"), *revenue, *health))
                .collect(),
        );
        let trends = DealerAdjuster::trends(&series, scenario, def);
        for point in &trends.points {
            prop_assert!(point.health_score >= Decimal::from(10));
            prop_assert!(point.health_score <= Decimal::from(100));
        }

        let alerts = AlertsBundle {
            stockout_alerts: rows.iter().map(|(_, days, _, _)| StockoutAlert::new(*days)).collect(),
            ..AlertsBundle::default()
        };
        prop_assert_eq!(AlertAdjuster::apply(&alerts, scenario, def).stockout_alerts.len(), rows.len());
    }

    #[test]
    fn catalog_prioritization_is_a_permutation(
        rows in prop::collection::vec(
            ("[A-Za-z ]{1,12}", prop::sample::select(FAMILIES), any::<bool>()),
            0..20,
        ),
        scenario in prop::sample::select(ScenarioId::ALL.to_vec()),
    ) {
        let shades: Vec<Shade> = rows
            .into_iter()
            .map(|(name, family, trending)| {
                let shade = Shade::new(name, family);
                if trending { shade.trending() } else { shade }
            })
            .collect();

        let ordered = CatalogPrioritizer::prioritize(&shades, scenario);
        prop_assert_eq!(ordered.len(), shades.len());
        for shade in &shades {
            let expected = shades.iter().filter(|s| *s == shade).count();
            let actual = ordered.iter().filter(|s| *s == shade).count();
            prop_assert_eq!(actual, expected);
        }
    }
}

#[test]
fn unaffected_region_only_feels_spillover() {
    let definition = ScenarioDefinition::new("Truck Strike", Decimal::new(15, 1), Decimal::new(6, 1))
        .with_affected_regions([Region::North]);
    let warehouses = vec![Warehouse::new("Maharashtra", Decimal::from(1000), Decimal::from(2000))];

    let adjusted = WarehouseAdjuster::apply(&warehouses, ScenarioId::TruckStrike, Some(&definition));

    // 需求 1 + 0.5 × 0.35 = 1.175，庫存 1 − 0.4 × 0.2 = 0.92
    assert_eq!(adjusted[0].scenario_affected, Some(false));
    assert_eq!(adjusted[0].total_stock, Decimal::from(783));
}

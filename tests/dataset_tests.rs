use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_report::config::ReportConfig;
use sales_report::dataset::{generate, round2};

const TEST_SEED: u64 = 42;

#[test]
fn test_generation_is_deterministic() {
    let config = ReportConfig::default();

    let mut rng_a = StdRng::seed_from_u64(TEST_SEED);
    let mut rng_b = StdRng::seed_from_u64(TEST_SEED);
    let a = generate(&mut rng_a, &config);
    let b = generate(&mut rng_b, &config);

    assert_eq!(a, b, "Same seed must produce identical datasets");
}

#[test]
fn test_different_seeds_differ() {
    let config = ReportConfig::default();

    let mut rng_a = StdRng::seed_from_u64(TEST_SEED);
    let mut rng_b = StdRng::seed_from_u64(TEST_SEED + 1);
    let a = generate(&mut rng_a, &config);
    let b = generate(&mut rng_b, &config);

    assert_ne!(a, b, "Different seeds should produce different datasets");
}

#[test]
fn test_record_count() {
    let config = ReportConfig {
        record_count: 37,
        ..ReportConfig::default()
    };

    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let records = generate(&mut rng, &config);

    assert_eq!(records.len(), 37);
}

#[test]
fn test_dates_are_consecutive_from_start() {
    let config = ReportConfig::default();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let records = generate(&mut rng, &config);

    assert_eq!(
        records[0].date,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        "First record must carry the configured start date"
    );

    for pair in records.windows(2) {
        assert_eq!(
            pair[1].date - pair[0].date,
            chrono::Duration::days(1),
            "Dates must advance by exactly one day"
        );
    }
}

#[test]
fn test_field_ranges_and_membership() {
    let config = ReportConfig::default();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let records = generate(&mut rng, &config);

    for r in &records {
        assert!(config.regions.contains(&r.region), "Unknown region {}", r.region);
        assert!(
            config.products.contains(&r.product),
            "Unknown product {}",
            r.product
        );
        assert!((10..100).contains(&r.units_sold), "units={}", r.units_sold);
        assert!(
            r.unit_price >= 50.0 && r.unit_price <= 500.0,
            "price={}",
            r.unit_price
        );
        // Prices are rounded to 2 decimals at generation time
        assert_eq!(r.unit_price, round2(r.unit_price));
    }
}

#[test]
fn test_revenue_is_rounded_product() {
    let config = ReportConfig::default();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let records = generate(&mut rng, &config);

    for r in &records {
        assert_eq!(
            r.revenue,
            round2(r.units_sold as f64 * r.unit_price),
            "Revenue must equal round(units * price, 2)"
        );
    }
}

#[test]
fn test_round2() {
    assert_eq!(round2(123.4567), 123.46);
    assert_eq!(round2(99.994), 99.99);
    assert_eq!(round2(0.006), 0.01);
    assert_eq!(round2(50.0), 50.0);
}

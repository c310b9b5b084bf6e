use crate::config::ReportConfig;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

/// One synthetic sales transaction.
///
/// Field names are renamed on serialization so the CSV header matches the
/// published report format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Units_Sold")]
    pub units_sold: u32,
    #[serde(rename = "Unit_Price")]
    pub unit_price: f64,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate the mock dataset.
///
/// Deterministic for a given seed: the caller constructs the RNG with
/// `StdRng::seed_from_u64` and the draw order per record is fixed
/// (region, product, units, price). Dates are consecutive calendar days
/// starting at `config.start_date`.
pub fn generate(rng: &mut StdRng, config: &ReportConfig) -> Vec<Record> {
    let mut records = Vec::with_capacity(config.record_count);

    for i in 0..config.record_count {
        let region = config.regions[rng.gen_range(0..config.regions.len())].clone();
        let product = config.products[rng.gen_range(0..config.products.len())].clone();
        let units_sold: u32 = rng.gen_range(10..100);
        let unit_price = round2(rng.gen_range(50.0..500.0));
        let revenue = round2(units_sold as f64 * unit_price);

        records.push(Record {
            date: config.start_date + Duration::days(i as i64),
            region,
            product,
            units_sold,
            unit_price,
            revenue,
        });
    }

    records
}

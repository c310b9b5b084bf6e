use crate::dataset::{round2, Record};

/// Total revenue for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTotal {
    pub region: String,
    pub revenue: f64,
}

/// Total revenue for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTotal {
    pub product: String,
    pub revenue: f64,
}

/// Group revenue by region, in the order the regions are configured.
///
/// Every configured region appears in the result, including regions with no
/// matching records (zero revenue), so downstream chart bars keep a stable
/// order across runs.
pub fn revenue_by_region(records: &[Record], regions: &[String]) -> Vec<RegionTotal> {
    regions
        .iter()
        .map(|region| {
            let total: f64 = records
                .iter()
                .filter(|r| &r.region == region)
                .map(|r| r.revenue)
                .sum();
            RegionTotal {
                region: region.clone(),
                revenue: round2(total),
            }
        })
        .collect()
}

/// Group revenue by product, sorted by revenue descending.
///
/// Products are grouped in first-appearance order and the sort is stable, so
/// ties keep their input order.
pub fn product_ranking(records: &[Record]) -> Vec<ProductTotal> {
    let mut totals: Vec<ProductTotal> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|t| t.product == record.product) {
            Some(t) => t.revenue += record.revenue,
            None => totals.push(ProductTotal {
                product: record.product.clone(),
                revenue: record.revenue,
            }),
        }
    }

    for t in &mut totals {
        t.revenue = round2(t.revenue);
    }

    totals.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    totals
}

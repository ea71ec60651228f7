//! The single view-model derivation pipeline for the order grid.
//!
//! One pure function of `(orders, params)` produces the visible rows. The
//! derivation order is fixed: text search, then status filter, then
//! category filter, then price bucket, then sort, then pagination.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use cakeshop_core::Vnd;

use crate::bakery::Order;

/// Page size options offered by the grid.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort keys for the order grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSortKey {
    /// Sort by creation date.
    #[default]
    CreatedAt,
    /// Sort by last update.
    UpdatedAt,
    /// Sort by delivery deadline.
    DeliveryDate,
    /// Sort by order code.
    Code,
    /// Sort by customer name.
    CustomerName,
    /// Sort by final total.
    FinalPrice,
    /// Sort by status name.
    Status,
}

impl OrderSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "created_at" | "created" => Some(Self::CreatedAt),
            "updated_at" | "updated" => Some(Self::UpdatedAt),
            "delivery_date" | "deadline" => Some(Self::DeliveryDate),
            "code" => Some(Self::Code),
            "customer_name" | "customer" => Some(Self::CustomerName),
            "final_price" | "total" => Some(Self::FinalPrice),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Get the URL parameter string for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::DeliveryDate => "delivery_date",
            Self::Code => "code",
            Self::CustomerName => "customer_name",
            Self::FinalPrice => "final_price",
            Self::Status => "status",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    /// Ascending.
    Asc,
    /// Descending. Newest-first is the grid default.
    #[default]
    Desc,
}

impl SortDir {
    /// Parse a direction from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Get the URL parameter string for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Price range filter.
///
/// Two vocabularies coexist: the coarse low/medium/high buckets and the
/// grid's four explicit ranges. An order is only ever tested against the
/// one selected bucket, so the coarse buckets are allowed to overlap
/// (600 000 ₫ is both Medium and High).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBucket {
    /// Under 500 000 ₫.
    Low,
    /// 500 000 ₫ to under 1 000 000 ₫.
    Medium,
    /// 500 000 ₫ and above.
    High,
    /// Under 500 000 ₫ (grid range).
    Under500K,
    /// 500 000 ₫ to under 1 000 000 ₫ (grid range).
    K500To1M,
    /// 1 000 000 ₫ to under 2 000 000 ₫ (grid range).
    M1To2M,
    /// 2 000 000 ₫ and above (grid range).
    Over2M,
}

const K500: i64 = 500_000;
const M1: i64 = 1_000_000;
const M2: i64 = 2_000_000;

impl PriceBucket {
    /// Whether a price falls inside this bucket.
    #[must_use]
    pub const fn matches(self, price: Vnd) -> bool {
        let amount = price.amount();
        match self {
            Self::Low | Self::Under500K => amount < K500,
            Self::Medium | Self::K500To1M => amount >= K500 && amount < M1,
            Self::High => amount >= K500,
            Self::M1To2M => amount >= M1 && amount < M2,
            Self::Over2M => amount >= M2,
        }
    }

    /// Parse a bucket from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "under_500k" | "lt500" => Some(Self::Under500K),
            "500k_1m" => Some(Self::K500To1M),
            "1m_2m" => Some(Self::M1To2M),
            "over_2m" | "gt2m" => Some(Self::Over2M),
            _ => None,
        }
    }
}

/// Filter, sort, and pagination parameters for the order grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderViewParams {
    /// Free-text search over order code and customer name.
    pub search: Option<String>,
    /// Status filter: exact status id or case-insensitive name substring.
    pub status: Option<String>,
    /// Category filter over nested line items.
    pub category: Option<String>,
    /// Price bucket filter.
    pub price: Option<PriceBucket>,
    /// Sort key.
    pub sort_by: OrderSortKey,
    /// Sort direction.
    pub sort_dir: SortDir,
    /// 1-based page number.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
}

impl Default for OrderViewParams {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            category: None,
            price: None,
            sort_by: OrderSortKey::default(),
            sort_dir: SortDir::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OrderViewParams {
    /// Clamp out-of-range values: page is at least 1, per-page snaps to the
    /// nearest offered size.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.page = self.page.max(1);
        if !PAGE_SIZES.contains(&self.per_page) {
            self.per_page = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

/// One visible page of the grid, plus derivation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPage {
    /// Rows on this page, in display order.
    pub orders: Vec<Order>,
    /// Count after filtering, before pagination.
    pub filtered_len: usize,
    /// 1-based page number.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
    /// Total page count for the filtered set.
    pub total_pages: usize,
}

/// Apply the filter stages and sort, returning borrowed rows in display
/// order.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], params: &OrderViewParams) -> Vec<&'a Order> {
    let mut rows: Vec<&Order> = orders
        .iter()
        .filter(|o| matches_search(o, params.search.as_deref()))
        .filter(|o| matches_status(o, params.status.as_deref()))
        .filter(|o| matches_category(o, params.category.as_deref()))
        .filter(|o| params.price.is_none_or(|b| b.matches(o.final_price)))
        .collect();

    // Stable sort: equal keys keep their original relative order.
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, params.sort_by);
        match params.sort_dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });

    rows
}

/// The full derivation: filter, sort, paginate.
///
/// A page past the end of the filtered set yields an empty row list rather
/// than clamping back.
#[must_use]
pub fn visible_orders(orders: &[Order], params: &OrderViewParams) -> OrderPage {
    let rows = filter_orders(orders, params);
    let filtered_len = rows.len();
    let total = total_pages(filtered_len, params.per_page);

    let start = (params.page.max(1) - 1).saturating_mul(params.per_page);
    let page_rows = rows
        .into_iter()
        .skip(start)
        .take(params.per_page)
        .cloned()
        .collect();

    OrderPage {
        orders: page_rows,
        filtered_len,
        page: params.page,
        per_page: params.per_page,
        total_pages: total,
    }
}

/// Page count for a filtered set; an empty set has zero pages.
#[must_use]
pub const fn total_pages(filtered_len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        filtered_len.div_ceil(per_page)
    }
}

fn matches_search(order: &Order, search: Option<&str>) -> bool {
    let Some(needle) = non_empty(search) else {
        return true;
    };
    let needle = needle.to_lowercase();
    order.code.to_lowercase().contains(&needle)
        || order.customer_name.to_lowercase().contains(&needle)
}

fn matches_status(order: &Order, status: Option<&str>) -> bool {
    let Some(wanted) = non_empty(status) else {
        return true;
    };
    order.status.id.as_str() == wanted
        || order
            .status
            .name
            .to_lowercase()
            .contains(&wanted.to_lowercase())
}

fn matches_category(order: &Order, category: Option<&str>) -> bool {
    let Some(wanted) = non_empty(category) else {
        return true;
    };
    let wanted = wanted.to_lowercase();
    order
        .items
        .iter()
        .any(|item| item.category.to_lowercase() == wanted)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Three-way comparison on the chosen key. Date-typed keys compare as
/// timestamps, the total numerically, everything else lexicographically
/// (case-insensitive for names).
fn compare(a: &Order, b: &Order, key: OrderSortKey) -> Ordering {
    match key {
        OrderSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        OrderSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        OrderSortKey::DeliveryDate => a.delivery_date.cmp(&b.delivery_date),
        OrderSortKey::Code => a.code.cmp(&b.code),
        OrderSortKey::CustomerName => a
            .customer_name
            .to_lowercase()
            .cmp(&b.customer_name.to_lowercase()),
        OrderSortKey::FinalPrice => a.final_price.cmp(&b.final_price),
        OrderSortKey::Status => a.status.name.cmp(&b.status.name),
    }
}

#[cfg(test)]
mod tests {
    use cakeshop_core::{OrderStatus, Vnd};
    use chrono::{Duration, Utc};

    use crate::bakery::payload::RawOrder;
    use crate::bakery::normalize_order;

    use super::*;

    fn order(id: &str, code: &str, price: i64, status_name: &str) -> Order {
        let mut o = normalize_order(RawOrder::default());
        o.id = id.into();
        o.code = code.to_string();
        o.final_price = Vnd::new(price);
        o.status = OrderStatus::new(format!("st-{status_name}"), status_name);
        o
    }

    fn sample() -> Vec<Order> {
        vec![
            order("1", "DH-001", 100_000, "đã giao"),
            order("2", "DH-002", 600_000, "đã hủy"),
            order("3", "DH-003", 1_500_000, "đang làm"),
            order("4", "DH-004", 2_500_000, "đã giao"),
        ]
    }

    fn params() -> OrderViewParams {
        OrderViewParams {
            sort_by: OrderSortKey::Code,
            sort_dir: SortDir::Asc,
            ..OrderViewParams::default()
        }
    }

    #[test]
    fn low_bucket_keeps_only_cheap_orders() {
        let orders = sample();
        let p = OrderViewParams {
            price: Some(PriceBucket::Low),
            ..params()
        };
        let rows = filter_orders(&orders, &p);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "1");
    }

    #[test]
    fn high_bucket_starts_at_500k() {
        let orders = sample();
        let p = OrderViewParams {
            price: Some(PriceBucket::High),
            ..params()
        };
        let ids: Vec<&str> = filter_orders(&orders, &p)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn grid_ranges_partition_the_axis() {
        let orders = sample();
        for (bucket, expected) in [
            (PriceBucket::Under500K, vec!["1"]),
            (PriceBucket::K500To1M, vec!["2"]),
            (PriceBucket::M1To2M, vec!["3"]),
            (PriceBucket::Over2M, vec!["4"]),
        ] {
            let p = OrderViewParams {
                price: Some(bucket),
                ..params()
            };
            let ids: Vec<&str> = filter_orders(&orders, &p)
                .iter()
                .map(|o| o.id.as_str())
                .collect();
            assert_eq!(ids, expected, "bucket {bucket:?}");
        }
    }

    #[test]
    fn price_sort_asc_is_non_decreasing() {
        let orders = sample();
        let p = OrderViewParams {
            sort_by: OrderSortKey::FinalPrice,
            sort_dir: SortDir::Asc,
            ..OrderViewParams::default()
        };
        let rows = filter_orders(&orders, &p);
        for pair in rows.windows(2) {
            assert!(pair[0].final_price <= pair[1].final_price);
        }
    }

    #[test]
    fn equal_sort_keys_keep_original_order() {
        let mut orders = sample();
        for o in &mut orders {
            o.final_price = Vnd::new(100_000);
        }
        let p = OrderViewParams {
            sort_by: OrderSortKey::FinalPrice,
            sort_dir: SortDir::Asc,
            ..OrderViewParams::default()
        };
        let ids: Vec<&str> = filter_orders(&orders, &p)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn date_keys_compare_as_timestamps() {
        let mut orders = sample();
        let now = Utc::now();
        orders[0].created_at = now;
        orders[1].created_at = now - Duration::days(2);
        orders[2].created_at = now - Duration::days(1);
        orders[3].created_at = now - Duration::days(3);
        let p = OrderViewParams::default(); // created_at desc
        let ids: Vec<&str> = filter_orders(&orders, &p)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn search_matches_code_and_customer_name() {
        let mut orders = sample();
        orders[2].customer_name = "Nguyễn Văn Hòa".to_string();
        let p = OrderViewParams {
            search: Some("dh-002".to_string()),
            ..params()
        };
        assert_eq!(filter_orders(&orders, &p).len(), 1);

        let p = OrderViewParams {
            search: Some("văn hòa".to_string()),
            ..params()
        };
        let rows = filter_orders(&orders, &p);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "3");
    }

    #[test]
    fn status_filter_accepts_id_or_name_substring() {
        let orders = sample();
        let by_id = OrderViewParams {
            status: Some("st-đã hủy".to_string()),
            ..params()
        };
        assert_eq!(filter_orders(&orders, &by_id).len(), 1);

        let by_name = OrderViewParams {
            status: Some("giao".to_string()),
            ..params()
        };
        assert_eq!(filter_orders(&orders, &by_name).len(), 2);
    }

    #[test]
    fn category_filter_inspects_line_items() {
        let mut orders = sample();
        orders[1].items.push(crate::bakery::OrderItem {
            product_id: "p1".into(),
            product_name: "Bánh kem dâu".to_string(),
            category: "bánh kem".to_string(),
            quantity: 1,
            unit_price: Vnd::new(600_000),
        });
        let p = OrderViewParams {
            category: Some("Bánh kem".to_string()),
            ..params()
        };
        let rows = filter_orders(&orders, &p);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "2");
    }

    #[test]
    fn pagination_slices_after_sorting() {
        let orders = sample();
        let p = OrderViewParams {
            page: 2,
            per_page: 10,
            ..params()
        };
        // Only 4 rows, page 2 of 10-per-page is empty.
        let page = visible_orders(&orders, &p.clamped());
        assert!(page.orders.is_empty());
        assert_eq!(page.filtered_len, 4);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn per_page_snaps_to_offered_sizes() {
        let p = OrderViewParams {
            per_page: 7,
            page: 0,
            ..OrderViewParams::default()
        }
        .clamped();
        assert_eq!(p.per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn total_pages_of_empty_set_is_zero() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}

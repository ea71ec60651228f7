//! CSV export of the order grid.
//!
//! The file targets spreadsheet tools used by the shop staff: it opens
//! with a UTF-8 byte order mark so Excel decodes the Vietnamese text
//! correctly, and prices use the display format rather than raw numbers.

use std::fmt::Write;

use chrono::Utc;

use crate::bakery::Order;

/// UTF-8 BOM so Excel picks the right encoding.
const BOM: &str = "\u{feff}";

const HEADER: &str = "No,Code,Client,Deadline,Total,Status";

/// Render the given rows as a CSV document.
///
/// Rows are numbered from 1 in the order given; callers pass the already
/// filtered and sorted collection so the file matches what the grid shows.
pub fn orders_to_csv<'a, I>(orders: I) -> String
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut out = String::new();
    out.push_str(BOM);
    out.push_str(HEADER);
    out.push('\n');
    for (index, order) in orders.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            index + 1,
            csv_field(&order.code),
            csv_field(&order.customer_name),
            csv_field(&order.deadline_display()),
            csv_field(&order.final_price.to_string()),
            csv_field(&order.status.name),
        );
    }
    out
}

/// Attachment filename stamped with today's date, e.g. `orders_2025-03-01.csv`.
#[must_use]
pub fn csv_filename() -> String {
    format!("orders_{}.csv", Utc::now().format("%Y-%m-%d"))
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use cakeshop_core::{OrderStatus, Vnd};
    use chrono::{TimeZone, Utc};

    use crate::bakery::payload::RawOrder;
    use crate::bakery::normalize_order;

    use super::*;

    fn order(code: &str, customer: &str, price: i64, status: &str) -> Order {
        let mut o = normalize_order(RawOrder::default());
        o.id = code.into();
        o.code = code.to_string();
        o.customer_name = customer.to_string();
        o.final_price = Vnd::new(price);
        o.status = OrderStatus::new("s1", status);
        o.delivery_date = Utc.with_ymd_and_hms(2025, 3, 15, 9, 0, 0).single().expect("valid");
        o
    }

    #[test]
    fn starts_with_bom_and_header() {
        let csv = orders_to_csv(&[]);
        assert!(csv.starts_with('\u{feff}'));
        assert_eq!(csv.trim_start_matches('\u{feff}').lines().next(), Some(HEADER));
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let csv = orders_to_csv(&[
            order("DH-001", "Nguyễn Văn An", 1_500_000, "đã giao"),
            order("DH-002", "Trần Thị Bích", 0, "chờ xác nhận"),
        ]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "1,DH-001,Nguyễn Văn An,15/03/2025,1.500.000 ₫,đã giao");
        assert!(lines[2].starts_with("2,DH-002"));
        assert!(lines[2].contains("0 ₫"));
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let csv = orders_to_csv(&[order("DH-003", "Công ty \"Hoa Mai\", TNHH", 5_000, "đang làm")]);
        assert!(csv.contains("\"Công ty \"\"Hoa Mai\"\", TNHH\""));
    }

    #[test]
    fn filename_carries_iso_date() {
        let name = csv_filename();
        assert!(name.starts_with("orders_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "orders_2025-01-01.csv".len());
    }
}

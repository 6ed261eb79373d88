use chrono::NaiveDate;

fn format_with_commas(value: i64, indian: bool) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        let boundary = if indian {
            i == 3 || (i > 3 && i % 2 == 1)
        } else {
            i > 0 && i % 3 == 0
        };
        if boundary {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Rupee amounts use lakh grouping (`1,00,000`), everything else groups by thousands.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{} {}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100, symbol == "₹"),
        cents % 100
    )
}

/// `Jan 05, 2024`; anything that is not an ISO date is shown unchanged.
pub fn format_date(date: &str) -> String {
    let head = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(day) => day.format("%b %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_keeps_cents() {
        assert_eq!(format_currency(1234567.5, "$"), "$ 1,234,567.50");
        assert_eq!(format_currency(0.0, "$"), "$ 0.00");
        assert_eq!(format_currency(999.999, "$"), "$ 1,000.00");
    }

    #[test]
    fn rupees_group_by_lakh() {
        assert_eq!(format_currency(100000.0, "₹"), "₹ 1,00,000.00");
        assert_eq!(format_currency(1234567.5, "₹"), "₹ 12,34,567.50");
        assert_eq!(format_currency(999.0, "₹"), "₹ 999.00");
        assert_eq!(format_currency(-12345.0, "₹"), "-₹ 12,345.00");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        assert_eq!(format_currency(-250.25, "€"), "-€ 250.25");
        assert_eq!(format_currency(-0.001, "€"), "€ 0.00");
    }

    #[test]
    fn dates_render_short_month() {
        assert_eq!(format_date("2024-06-30"), "Jun 30, 2024");
        assert_eq!(format_date("2024-01-05T08:00:00Z"), "Jan 05, 2024");
        assert_eq!(format_date("tomorrow"), "tomorrow");
    }
}

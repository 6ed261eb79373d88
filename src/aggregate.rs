use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Budget, SpendingPattern, Transaction, Trend};

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn budgets_with_spent(budgets: &[Budget], transactions: &[Transaction]) -> Vec<Budget> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = transactions
                .iter()
                .filter(|tx| tx.is_expense() && tx.category == budget.category)
                .map(|tx| tx.amount)
                .sum();
            Budget {
                spent: round2(spent),
                ..budget.clone()
            }
        })
        .collect()
}

pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_income())
        .map(|tx| tx.amount)
        .sum()
}

pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_expense())
        .map(|tx| tx.amount)
        .sum()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
}

impl FinancialSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_income(transactions);
        let total_expenses = total_expenses(transactions);
        FinancialSummary {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
        }
    }
}

/// Unrounded expense totals per category, in the order each category first appears.
fn category_totals(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        if !totals.contains_key(&tx.category) {
            order.push(tx.category.clone());
        }
        *totals.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }
    order
        .into_iter()
        .map(|category| {
            let amount = totals.get(&category).copied().unwrap_or(0.0);
            (category, amount)
        })
        .collect()
}

/// Expense totals per category, in the order each category first appears.
pub fn category_spending(transactions: &[Transaction]) -> Vec<(String, f64)> {
    category_totals(transactions)
        .into_iter()
        .map(|(category, amount)| (category, round2(amount)))
        .collect()
}

/// Shares are taken from the unrounded totals; only the reported amount is rounded.
pub fn spending_patterns(transactions: &[Transaction]) -> Vec<SpendingPattern> {
    let total = total_expenses(transactions);
    if total <= 0.0 {
        return Vec::new();
    }
    let mut patterns: Vec<SpendingPattern> = category_totals(transactions)
        .into_iter()
        .map(|(category, raw)| SpendingPattern {
            percentage: (raw / total * 100.0).round(),
            category,
            amount: round2(raw),
            trend: Trend::Stable,
        })
        .collect();
    patterns.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    patterns
}

pub fn total_allocated(budgets: &[Budget]) -> f64 {
    budgets.iter().map(|b| b.allocated).sum()
}

/// `Mon YY` label for an ISO date; unparseable dates keep their raw text.
pub fn month_label(date: &str) -> String {
    let head = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(day) => day.format("%b %y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn monthly_spending(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut months: Vec<(String, f64)> = Vec::new();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        let label = month_label(&tx.date);
        match months.iter_mut().find(|(name, _)| *name == label) {
            Some((_, amount)) => *amount += tx.amount,
            None => months.push((label, tx.amount)),
        }
    }
    months
        .into_iter()
        .map(|(name, amount)| (name, round2(amount)))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthFlow {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

pub fn income_vs_expense(transactions: &[Transaction]) -> Vec<MonthFlow> {
    let mut flows: Vec<MonthFlow> = Vec::new();
    for tx in transactions {
        let label = month_label(&tx.date);
        let idx = match flows.iter().position(|f| f.month == label) {
            Some(idx) => idx,
            None => {
                flows.push(MonthFlow {
                    month: label,
                    income: 0.0,
                    expense: 0.0,
                });
                flows.len() - 1
            }
        };
        if tx.is_income() {
            flows[idx].income += tx.amount;
        } else {
            flows[idx].expense += tx.amount;
        }
    }
    for flow in flows.iter_mut() {
        flow.income = round2(flow.income);
        flow.expense = round2(flow.expense);
    }
    flows
}

/// Each category's share of the combined spending, in percent.
pub fn category_shares(spending: &[(String, f64)]) -> Vec<(String, f64)> {
    let total: f64 = spending.iter().map(|(_, amount)| amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    spending
        .iter()
        .map(|(category, amount)| (category.clone(), amount / total * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, TransactionType};

    fn tx(amount: f64, category: &str, kind: TransactionType, date: &str) -> Transaction {
        Transaction {
            id: None,
            amount,
            category: category.to_string(),
            description: format!("{} item", category),
            date: date.to_string(),
            kind,
            recurring: false,
            tags: None,
        }
    }

    fn expense(amount: f64, category: &str) -> Transaction {
        tx(amount, category, TransactionType::Expense, "2024-01-10")
    }

    fn budget(id: i64, category: &str, allocated: f64) -> Budget {
        Budget {
            id,
            category: category.to_string(),
            allocated,
            spent: 999.0,
            period: BudgetPeriod::Monthly,
        }
    }

    #[test]
    fn food_and_salary_scenario() {
        let txs = vec![
            expense(500.0, "Food"),
            tx(1000.0, "Income", TransactionType::Income, "2024-01-01"),
        ];
        let summary = FinancialSummary::from_transactions(&txs);
        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 500.0);
        assert_eq!(summary.net_balance, 500.0);

        let patterns = spending_patterns(&txs);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].category, "Food");
        assert_eq!(patterns[0].percentage, 100.0);
        assert_eq!(patterns[0].trend, Trend::Stable);
    }

    #[test]
    fn net_balance_is_income_minus_expenses() {
        let txs = vec![
            expense(12.34, "Food"),
            expense(7.66, "Shopping"),
            tx(50.0, "Income", TransactionType::Income, "2024-02-01"),
            tx(0.5, "Income", TransactionType::Income, "2024-02-03"),
        ];
        let s = FinancialSummary::from_transactions(&txs);
        assert_eq!(s.total_income - s.total_expenses, s.net_balance);
    }

    #[test]
    fn spent_only_counts_expenses_with_exact_category() {
        let txs = vec![
            expense(10.006, "Food"),
            expense(20.0, "Food"),
            expense(99.0, "food"),
            tx(40.0, "Food", TransactionType::Income, "2024-01-02"),
        ];
        let budgets = budgets_with_spent(
            &[budget(1, "Food", 100.0), budget(2, "Other", 5.0)],
            &txs,
        );
        assert_eq!(budgets[0].spent, 30.01);
        assert_eq!(budgets[1].spent, 0.0);
        assert_eq!(budgets[0].allocated, 100.0);
    }

    #[test]
    fn patterns_are_sorted_and_sum_to_totals() {
        let txs = vec![
            expense(10.0, "Food"),
            expense(30.0, "Shopping"),
            expense(25.0, "Food"),
            expense(36.0, "Utilities"),
        ];
        let patterns = spending_patterns(&txs);
        let names: Vec<&str> = patterns.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(names, vec!["Utilities", "Food", "Shopping"]);

        let amount_sum: f64 = patterns.iter().map(|p| p.amount).sum();
        assert!((amount_sum - total_expenses(&txs)).abs() < 0.01);
        let pct_sum: f64 = patterns.iter().map(|p| p.percentage).sum();
        assert!((pct_sum - 100.0).abs() <= patterns.len() as f64);
    }

    #[test]
    fn no_expenses_means_no_patterns() {
        let txs = vec![tx(10.0, "Income", TransactionType::Income, "2024-01-01")];
        assert!(spending_patterns(&txs).is_empty());
        assert!(spending_patterns(&[]).is_empty());
    }

    #[test]
    fn monthly_buckets_keep_first_seen_order() {
        let txs = vec![
            tx(5.0, "Food", TransactionType::Expense, "2024-02-14"),
            tx(7.0, "Food", TransactionType::Expense, "2024-01-03"),
            tx(1.5, "Food", TransactionType::Expense, "2024-02-01"),
            tx(100.0, "Income", TransactionType::Income, "2024-03-01"),
        ];
        assert_eq!(
            monthly_spending(&txs),
            vec![("Feb 24".to_string(), 6.5), ("Jan 24".to_string(), 7.0)]
        );
        let flows = income_vs_expense(&txs);
        assert_eq!(flows.len(), 3);
        assert_eq!(flows[2].month, "Mar 24");
        assert_eq!(flows[2].income, 100.0);
        assert_eq!(flows[2].expense, 0.0);
    }

    #[test]
    fn month_label_tolerates_timestamps_and_garbage() {
        assert_eq!(month_label("2023-11-05T10:00:00"), "Nov 23");
        assert_eq!(month_label("someday"), "someday");
    }

    #[test]
    fn allocated_total_sums_every_budget() {
        let budgets = [
            budget(1, "Food", 500.0),
            budget(2, "Income", 0.0),
            budget(3, "Other", 100.0),
        ];
        assert_eq!(total_allocated(&budgets), 600.0);
    }

    #[test]
    fn shares_are_relative_to_combined_spending() {
        let spending = vec![("Food".to_string(), 75.0), ("Other".to_string(), 25.0)];
        assert_eq!(
            category_shares(&spending),
            vec![("Food".to_string(), 75.0), ("Other".to_string(), 25.0)]
        );
        assert!(category_shares(&[]).is_empty());
    }

    #[test]
    fn sub_cent_amounts_still_split_evenly() {
        let patterns = spending_patterns(&[expense(0.125, "Food"), expense(0.125, "Other")]);
        let percentages: Vec<f64> = patterns.iter().map(|p| p.percentage).collect();
        assert_eq!(percentages, vec![50.0, 50.0]);
        assert_eq!(patterns[0].amount, round2(0.125));
    }
}

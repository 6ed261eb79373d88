use crate::models::{Transaction, TransactionType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl KindFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "income" => KindFilter::Only(TransactionType::Income),
            "expense" => KindFilter::Only(TransactionType::Expense),
            _ => KindFilter::All,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: String,
    pub kind: KindFilter,
    /// `None` matches every category.
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = tx.description.to_lowercase().contains(&needle)
            || tx.category.to_lowercase().contains(&needle);
        let matches_kind = match self.kind {
            KindFilter::All => true,
            KindFilter::Only(kind) => tx.kind == kind,
        };
        let matches_category = match &self.category {
            None => true,
            Some(category) => tx.category == *category,
        };
        matches_search && matches_kind && matches_category
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tx in transactions {
        if !seen.contains(&tx.category) {
            seen.push(tx.category.clone());
        }
    }
    seen
}

use serde::{Deserialize, Serialize};

pub const CATEGORIES: [&str; 9] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Education",
    "Healthcare",
    "Shopping",
    "Utilities",
    "Income",
    "Other",
];

pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn for_category(category: &str) -> Self {
        if category == "Income" {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: Option<i64>,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub tags: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

/// Transaction payload before the server assigns an id.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub recurring: bool,
    pub tags: Option<String>,
}

impl From<&Transaction> for NewTransaction {
    fn from(tx: &Transaction) -> Self {
        NewTransaction {
            amount: tx.amount,
            category: tx.category.clone(),
            description: tx.description.clone(),
            date: tx.date.clone(),
            kind: tx.kind,
            recurring: tx.recurring,
            tags: tx.tags.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "weekly" => BudgetPeriod::Weekly,
            "yearly" => BudgetPeriod::Yearly,
            _ => BudgetPeriod::Monthly,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub allocated: f64,
    // Whatever the server echoes here is overwritten by `aggregate::budgets_with_spent`.
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub category: String,
    pub allocated: f64,
    pub period: BudgetPeriod,
    pub spent: f64,
}

impl NewBudget {
    pub fn new(category: String, allocated: f64, period: BudgetPeriod) -> Self {
        NewBudget {
            category,
            allocated,
            period,
            spent: 0.0,
        }
    }
}

/// Body of `PUT /budgets/{id}`; also the budget shape sent for insight generation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetUpdate {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
}

impl From<&Budget> for BudgetUpdate {
    fn from(budget: &Budget) -> Self {
        BudgetUpdate {
            category: budget.category.clone(),
            allocated: budget.allocated,
            spent: budget.spent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPriority::Low => "low",
            GoalPriority::Medium => "medium",
            GoalPriority::High => "high",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "low" => GoalPriority::Low,
            "high" => GoalPriority::High,
            _ => GoalPriority::Medium,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: String,
    pub category: String,
    pub priority: GoalPriority,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: String,
    pub category: String,
    pub priority: GoalPriority,
}

impl NewGoal {
    pub fn with_id(self, id: String) -> Goal {
        Goal {
            id,
            title: self.title,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline: self.deadline,
            category: self.category,
            priority: self.priority,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Tip,
    Warning,
    Achievement,
    Prediction,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AIInsight {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub action: Option<String>,
    pub confidence: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpendingPattern {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_reads_wire_names() {
        let raw = r#"{"id":7,"amount":12.5,"category":"Food","description":"Lunch","date":"2024-05-02","type":"expense","recurring":false,"tags":null}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.id, Some(7));
        assert_eq!(tx.kind, TransactionType::Expense);
        assert!(tx.is_expense());
    }

    #[test]
    fn new_transaction_serializes_type_field() {
        let tx = NewTransaction {
            amount: 40.0,
            category: "Income".to_string(),
            description: "Gift".to_string(),
            date: "2024-05-02".to_string(),
            kind: TransactionType::Income,
            recurring: true,
            tags: None,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert!(json.get("id").is_none());
        assert!(json["tags"].is_null());
    }

    #[test]
    fn budget_without_spent_or_period_defaults() {
        let budget: Budget =
            serde_json::from_str(r#"{"id":3,"category":"Food","allocated":500.0}"#).unwrap();
        assert_eq!(budget.spent, 0.0);
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn insight_without_id_and_unknown_type_still_parses() {
        let raw = r#"[{"type":"tip","title":"Cook at home","description":"d","confidence":0.8},
                      {"type":"rumour","title":"?","description":"d","action":"Look","confidence":0.1}]"#;
        let insights: Vec<AIInsight> = serde_json::from_str(raw).unwrap();
        assert_eq!(insights[0].id, None);
        assert_eq!(insights[0].kind, InsightType::Tip);
        assert_eq!(insights[1].kind, InsightType::Other);
        assert_eq!(insights[1].action.as_deref(), Some("Look"));
    }

    #[test]
    fn income_category_maps_to_income_type() {
        assert_eq!(TransactionType::for_category("Income"), TransactionType::Income);
        assert_eq!(TransactionType::for_category("Food"), TransactionType::Expense);
        assert!(is_known_category("Utilities"));
        assert!(!is_known_category("utilities"));
    }
}

use crate::api::CategorizeResponse;
use crate::error::FormError;
use crate::models::{
    is_known_category, BudgetPeriod, GoalPriority, NewBudget, NewGoal, NewTransaction,
    TransactionType,
};

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn parse_amount(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::InvalidAmount),
    }
}

/// Category the service suggested, if it is one the form can offer.
pub fn suggestion_from_response(resp: &CategorizeResponse) -> Option<String> {
    match &resp.category {
        Some(serde_json::Value::String(category)) if is_known_category(category) => {
            Some(category.clone())
        }
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub kind: TransactionType,
    pub recurring: bool,
    pub tags: String,
}

impl TransactionDraft {
    pub fn new(date: String) -> Self {
        TransactionDraft {
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date,
            kind: TransactionType::Expense,
            recurring: false,
            tags: String::new(),
        }
    }

    pub fn apply_suggestion(&mut self, category: &str) {
        self.category = category.to_string();
        self.kind = TransactionType::for_category(category);
    }

    pub fn to_new_transaction(&self) -> Result<NewTransaction, FormError> {
        if self.amount.trim().is_empty()
            || self.category.is_empty()
            || self.description.trim().is_empty()
        {
            return Err(FormError::Incomplete);
        }
        let amount = parse_amount(&self.amount)?;
        let tags = if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.clone())
        };
        Ok(NewTransaction {
            amount,
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            kind: self.kind,
            recurring: self.recurring,
            tags,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetDraft {
    pub category: String,
    pub allocated: String,
    pub period: BudgetPeriod,
}

impl Default for BudgetDraft {
    fn default() -> Self {
        BudgetDraft {
            category: String::new(),
            allocated: String::new(),
            period: BudgetPeriod::Monthly,
        }
    }
}

impl BudgetDraft {
    pub fn to_new_budget(&self) -> Result<NewBudget, FormError> {
        let category = self.category.trim();
        if category.is_empty() || self.allocated.trim().is_empty() {
            return Err(FormError::Incomplete);
        }
        let allocated = parse_amount(&self.allocated)?;
        if allocated < 0.0 {
            return Err(FormError::InvalidAmount);
        }
        Ok(NewBudget::new(category.to_string(), allocated, self.period))
    }
}

/// Allocation typed into the budget settings modal; anything unreadable counts as 0.
pub fn parse_allocation(raw: &str) -> f64 {
    parse_amount(raw).unwrap_or(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalDraft {
    pub title: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: String,
    pub category: String,
    pub priority: GoalPriority,
}

impl Default for GoalDraft {
    fn default() -> Self {
        GoalDraft {
            title: String::new(),
            target_amount: String::new(),
            current_amount: String::new(),
            deadline: String::new(),
            category: String::new(),
            priority: GoalPriority::Medium,
        }
    }
}

impl GoalDraft {
    pub fn to_new_goal(&self) -> Result<NewGoal, FormError> {
        if self.title.trim().is_empty()
            || self.target_amount.trim().is_empty()
            || self.deadline.is_empty()
        {
            return Err(FormError::Incomplete);
        }
        let target_amount = parse_amount(&self.target_amount)?;
        let current_amount = if self.current_amount.trim().is_empty() {
            0.0
        } else {
            parse_amount(&self.current_amount)?
        };
        Ok(NewGoal {
            title: self.title.trim().to_string(),
            target_amount,
            current_amount,
            deadline: self.deadline.clone(),
            category: self.category.trim().to_string(),
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> CategorizeResponse {
        serde_json::from_value(value).unwrap()
    }

    fn filled() -> TransactionDraft {
        TransactionDraft {
            amount: "12.50".to_string(),
            category: "Food".to_string(),
            description: "Lunch".to_string(),
            ..TransactionDraft::new("2024-05-01".to_string())
        }
    }

    #[test]
    fn only_listed_categories_are_accepted() {
        assert_eq!(
            suggestion_from_response(&response(json!({"category": "Food"}))),
            Some("Food".to_string())
        );
        assert_eq!(suggestion_from_response(&response(json!({"category": "Groceries"}))), None);
        assert_eq!(suggestion_from_response(&response(json!({"category": 3}))), None);
        assert_eq!(suggestion_from_response(&response(json!({}))), None);
    }

    #[test]
    fn suggestion_sets_type_from_category() {
        let mut draft = TransactionDraft::new("2024-05-01".to_string());
        draft.apply_suggestion("Income");
        assert_eq!(draft.kind, TransactionType::Income);
        draft.apply_suggestion("Healthcare");
        assert_eq!(draft.kind, TransactionType::Expense);
        assert_eq!(draft.category, "Healthcare");
    }

    #[test]
    fn draft_with_missing_fields_is_incomplete() {
        let mut draft = filled();
        draft.description = "   ".to_string();
        assert_eq!(draft.to_new_transaction(), Err(FormError::Incomplete));

        let mut draft = filled();
        draft.category.clear();
        assert_eq!(draft.to_new_transaction(), Err(FormError::Incomplete));
    }

    #[test]
    fn draft_rejects_unreadable_amount() {
        let mut draft = filled();
        draft.amount = "twelve".to_string();
        assert_eq!(draft.to_new_transaction(), Err(FormError::InvalidAmount));
    }

    #[test]
    fn empty_tags_become_null() {
        let tx = filled().to_new_transaction().unwrap();
        assert_eq!(tx.amount, 12.5);
        assert_eq!(tx.tags, None);

        let mut tagged = filled();
        tagged.tags = "work, lunch".to_string();
        assert_eq!(
            tagged.to_new_transaction().unwrap().tags.as_deref(),
            Some("work, lunch")
        );
    }

    #[test]
    fn settings_allocation_falls_back_to_zero() {
        assert_eq!(parse_allocation("250"), 250.0);
        assert_eq!(parse_allocation(""), 0.0);
        assert_eq!(parse_allocation("abc"), 0.0);
    }

    #[test]
    fn budget_draft_needs_category_and_non_negative_amount() {
        let mut draft = BudgetDraft::default();
        assert_eq!(draft.to_new_budget(), Err(FormError::Incomplete));
        draft.category = " Travel ".to_string();
        draft.allocated = "-5".to_string();
        assert_eq!(draft.to_new_budget(), Err(FormError::InvalidAmount));
        draft.allocated = "120".to_string();
        let budget = draft.to_new_budget().unwrap();
        assert_eq!(budget.category, "Travel");
        assert_eq!(budget.spent, 0.0);
    }

    #[test]
    fn goal_draft_defaults_current_amount_to_zero() {
        let draft = GoalDraft {
            title: "Bike".to_string(),
            target_amount: "300".to_string(),
            deadline: "2025-01-01".to_string(),
            ..Default::default()
        };
        let goal = draft.to_new_goal().unwrap();
        assert_eq!(goal.current_amount, 0.0);
        assert_eq!(goal.priority, GoalPriority::Medium);
        assert_eq!(GoalDraft::default().to_new_goal(), Err(FormError::Incomplete));
    }

    #[test]
    fn today_is_iso_formatted() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}

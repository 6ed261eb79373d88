use crate::models::{Budget, Goal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetLevel {
    Healthy,
    Caution,
    Critical,
}

impl BudgetLevel {
    pub fn text_class(&self) -> &'static str {
        match self {
            BudgetLevel::Healthy => "text-green-600",
            BudgetLevel::Caution => "text-yellow-600",
            BudgetLevel::Critical => "text-red-600",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            BudgetLevel::Healthy => "bg-green-500",
            BudgetLevel::Caution => "bg-yellow-500",
            BudgetLevel::Critical => "bg-red-500",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetProgress {
    /// Unclamped share of the allocation already spent.
    pub percentage: f64,
    pub remaining: f64,
    pub level: BudgetLevel,
}

impl BudgetProgress {
    pub fn of(budget: &Budget) -> Self {
        let percentage = if budget.allocated == 0.0 {
            0.0
        } else {
            budget.spent / budget.allocated * 100.0
        };
        let level = if percentage >= 90.0 {
            BudgetLevel::Critical
        } else if percentage >= 70.0 {
            BudgetLevel::Caution
        } else {
            BudgetLevel::Healthy
        };
        BudgetProgress {
            percentage,
            remaining: budget.allocated - budget.spent,
            level,
        }
    }

    pub fn bar_width(&self) -> f64 {
        clamp_percent(self.percentage)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalProgress {
    pub percentage: f64,
    pub remaining: f64,
    pub completed: bool,
}

impl GoalProgress {
    pub fn of(goal: &Goal) -> Self {
        let completed = goal.current_amount >= goal.target_amount;
        let raw = if goal.target_amount > 0.0 {
            goal.current_amount / goal.target_amount * 100.0
        } else if completed {
            100.0
        } else {
            0.0
        };
        GoalProgress {
            percentage: clamp_percent(raw),
            remaining: (goal.target_amount - goal.current_amount).max(0.0),
            completed,
        }
    }
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

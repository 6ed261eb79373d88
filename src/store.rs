use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::aggregate::{budgets_with_spent, spending_patterns, FinancialSummary};
use crate::api::{FinanceApi, HttpApi, InsightRequest};
use crate::error::ApiError;
use crate::form::suggestion_from_response;
use crate::models::{
    AIInsight, Budget, BudgetUpdate, Goal, GoalPriority, NewBudget, NewGoal, NewTransaction,
    SpendingPattern, Transaction,
};
use crate::sequence::RequestSequencer;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetState {
    pub transactions: Vec<Transaction>,
    /// Budgets as the server returned them; `spent` is derived on read.
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub insights: Vec<AIInsight>,
}

impl BudgetState {
    pub fn seeded() -> Self {
        BudgetState {
            goals: seed_goals(),
            ..Default::default()
        }
    }
}

fn seed_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            title: "Emergency Fund".to_string(),
            target_amount: 1000.0,
            current_amount: 450.0,
            deadline: "2024-06-30".to_string(),
            category: "Savings".to_string(),
            priority: GoalPriority::High,
        },
        Goal {
            id: "2".to_string(),
            title: "New Laptop".to_string(),
            target_amount: 800.0,
            current_amount: 220.0,
            deadline: "2024-08-15".to_string(),
            category: "Technology".to_string(),
            priority: GoalPriority::Medium,
        },
    ]
}

pub enum BudgetAction {
    TransactionsLoaded(Vec<Transaction>),
    BudgetsLoaded(Vec<Budget>),
    TransactionCreated(Transaction),
    BudgetsReplaced(Vec<Budget>),
    BudgetCreated(Budget),
    GoalAdded(Goal),
    InsightsLoaded(Vec<AIInsight>),
    InsightsCleared,
}

impl Reducible for BudgetState {
    type Action = BudgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BudgetAction::TransactionsLoaded(list) => next.transactions = list,
            BudgetAction::BudgetsLoaded(list) => next.budgets = list,
            BudgetAction::TransactionCreated(tx) => next.transactions.insert(0, tx),
            BudgetAction::BudgetsReplaced(list) => next.budgets = list,
            BudgetAction::BudgetCreated(budget) => next.budgets.push(budget),
            BudgetAction::GoalAdded(goal) => next.goals.push(goal),
            BudgetAction::InsightsLoaded(list) => next.insights = list,
            BudgetAction::InsightsCleared => next.insights.clear(),
        }
        Rc::new(next)
    }
}

pub async fn load_transactions<A: FinanceApi>(api: &A) -> Option<BudgetAction> {
    match api.list_transactions().await {
        Ok(list) => Some(BudgetAction::TransactionsLoaded(list)),
        Err(err) => {
            log::error!("Error fetching transactions: {}", err);
            None
        }
    }
}

pub async fn load_budgets<A: FinanceApi>(api: &A) -> Option<BudgetAction> {
    match api.list_budgets().await {
        Ok(list) => Some(BudgetAction::BudgetsLoaded(list)),
        Err(err) => {
            log::error!("Error fetching budgets: {}", err);
            None
        }
    }
}

pub async fn create_transaction<A: FinanceApi>(
    api: &A,
    tx: &NewTransaction,
) -> Option<BudgetAction> {
    match api.create_transaction(tx).await {
        Ok(created) => Some(BudgetAction::TransactionCreated(created)),
        Err(err) => {
            log::error!("Error adding transaction: {}", err);
            None
        }
    }
}

/// Sends one PUT per budget, in order, and stops at the first failure.
/// Earlier updates are not rolled back.
pub async fn push_budget_updates<A: FinanceApi>(
    api: &A,
    budgets: &[Budget],
) -> Result<(), ApiError> {
    for budget in budgets {
        api.update_budget(budget.id, &BudgetUpdate::from(budget))
            .await?;
    }
    Ok(())
}

pub async fn replace_budgets<A: FinanceApi>(
    api: &A,
    budgets: Vec<Budget>,
) -> Option<BudgetAction> {
    match push_budget_updates(api, &budgets).await {
        Ok(()) => Some(BudgetAction::BudgetsReplaced(budgets)),
        Err(err) => {
            log::error!("Error updating budgets: {}", err);
            None
        }
    }
}

pub async fn create_budget<A: FinanceApi>(api: &A, budget: &NewBudget) -> Option<BudgetAction> {
    match api.create_budget(budget).await {
        Ok(created) => Some(BudgetAction::BudgetCreated(created)),
        Err(err) => {
            log::error!("Error adding budget: {}", err);
            None
        }
    }
}

pub async fn refresh_insights<A: FinanceApi>(api: &A, request: &InsightRequest) -> BudgetAction {
    match api.generate_insights(request).await {
        Ok(list) => BudgetAction::InsightsLoaded(list),
        Err(err) => {
            log::error!("Error fetching AI insights: {}", err);
            BudgetAction::InsightsCleared
        }
    }
}

/// Insight request for the current snapshot; `None` while there is nothing to analyse.
pub fn insight_request_for(
    transactions: &[Transaction],
    budgets: &[Budget],
) -> Option<InsightRequest> {
    if transactions.is_empty() && budgets.is_empty() {
        return None;
    }
    Some(InsightRequest::snapshot(transactions, budgets))
}

/// Passes `action` through only if `ticket` is still the latest one issued.
pub fn current_action(
    seq: &RequestSequencer,
    ticket: u64,
    action: BudgetAction,
) -> Option<BudgetAction> {
    if seq.is_current(ticket) {
        Some(action)
    } else {
        log::debug!("Dropping stale response #{}", ticket);
        None
    }
}

pub async fn suggest_category<A: FinanceApi>(api: &A, description: &str) -> Option<String> {
    if description.trim().is_empty() {
        return None;
    }
    match api.categorize(description).await {
        Ok(resp) => suggestion_from_response(&resp),
        Err(err) => {
            log::error!("Error fetching suggested category: {}", err);
            None
        }
    }
}

pub fn new_goal_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[derive(Clone, PartialEq)]
pub struct BudgetData {
    pub transactions: Rc<Vec<Transaction>>,
    pub budgets: Rc<Vec<Budget>>,
    pub goals: Rc<Vec<Goal>>,
    pub insights: Rc<Vec<AIInsight>>,
    pub spending_patterns: Rc<Vec<SpendingPattern>>,
    pub summary: FinancialSummary,
    pub add_transaction: Callback<NewTransaction>,
    pub update_budgets: Callback<Vec<Budget>>,
    pub add_budget: Callback<NewBudget>,
    pub add_goal: Callback<NewGoal>,
}

#[hook]
pub fn use_budget_data() -> BudgetData {
    let api = use_state(HttpApi::default);
    let state = use_reducer(BudgetState::seeded);
    let insight_seq = use_state(RequestSequencer::default);

    {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                {
                    let api = api.clone();
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        if let Some(action) = load_transactions(&api).await {
                            dispatcher.dispatch(action);
                        }
                    });
                }
                spawn_local(async move {
                    if let Some(action) = load_budgets(&api).await {
                        dispatcher.dispatch(action);
                    }
                });
                || ()
            },
            (),
        );
    }

    let budgets = budgets_with_spent(&state.budgets, &state.transactions);

    {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        let seq = (*insight_seq).clone();
        use_effect_with_deps(
            move |(transactions, budgets): &(Vec<Transaction>, Vec<Budget>)| {
                if let Some(request) = insight_request_for(transactions, budgets) {
                    let ticket = seq.issue();
                    spawn_local(async move {
                        let action = refresh_insights(&api, &request).await;
                        if let Some(action) = current_action(&seq, ticket, action) {
                            dispatcher.dispatch(action);
                        }
                    });
                }
                || ()
            },
            (state.transactions.clone(), budgets.clone()),
        );
    }

    let add_transaction = {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |tx: NewTransaction| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                if let Some(action) = create_transaction(&api, &tx).await {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    let update_budgets = {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |next: Vec<Budget>| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                if let Some(action) = replace_budgets(&api, next).await {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    let add_budget = {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |budget: NewBudget| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                if let Some(action) = create_budget(&api, &budget).await {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    let add_goal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |goal: NewGoal| {
            dispatcher.dispatch(BudgetAction::GoalAdded(goal.with_id(new_goal_id())));
        })
    };

    BudgetData {
        summary: FinancialSummary::from_transactions(&state.transactions),
        spending_patterns: Rc::new(spending_patterns(&state.transactions)),
        transactions: Rc::new(state.transactions.clone()),
        budgets: Rc::new(budgets),
        goals: Rc::new(state.goals.clone()),
        insights: Rc::new(state.insights.clone()),
        add_transaction,
        update_budgets,
        add_budget,
        add_goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CategorizeResponse;
    use crate::models::{BudgetPeriod, InsightType, TransactionType};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        transactions: Vec<Transaction>,
        fail_put_number: Option<usize>,
        puts_seen: Cell<usize>,
        fail_all: bool,
        category: Option<serde_json::Value>,
    }

    impl FakeApi {
        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call.clone());
            if self.fail_all {
                return Err(ApiError::status(&call, 503));
            }
            Ok(())
        }
    }

    impl FinanceApi for FakeApi {
        async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
            self.record("GET /transactions/".to_string())?;
            Ok(self.transactions.clone())
        }

        async fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
            self.record("POST /transactions/".to_string())?;
            Ok(Transaction {
                id: Some(99),
                amount: tx.amount,
                category: tx.category.clone(),
                description: tx.description.clone(),
                date: tx.date.clone(),
                kind: tx.kind,
                recurring: tx.recurring,
                tags: tx.tags.clone(),
            })
        }

        async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
            self.record("GET /budgets/".to_string())?;
            Ok(Vec::new())
        }

        async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, ApiError> {
            self.record("POST /budgets/".to_string())?;
            Ok(Budget {
                id: 42,
                category: budget.category.clone(),
                allocated: budget.allocated,
                spent: 0.0,
                period: budget.period,
            })
        }

        async fn update_budget(&self, id: i64, update: &BudgetUpdate) -> Result<Budget, ApiError> {
            let path = format!("PUT /budgets/{}", id);
            self.record(path.clone())?;
            let n = self.puts_seen.get() + 1;
            self.puts_seen.set(n);
            if self.fail_put_number == Some(n) {
                return Err(ApiError::status(&path, 500));
            }
            Ok(Budget {
                id,
                category: update.category.clone(),
                allocated: update.allocated,
                spent: update.spent,
                period: BudgetPeriod::Monthly,
            })
        }

        async fn categorize(&self, description: &str) -> Result<CategorizeResponse, ApiError> {
            self.record(format!("POST /categorize {}", description))?;
            Ok(CategorizeResponse {
                category: self.category.clone(),
            })
        }

        async fn generate_insights(
            &self,
            request: &InsightRequest,
        ) -> Result<Vec<AIInsight>, ApiError> {
            self.record(format!("POST /generate_insights {}", request.transactions.len()))?;
            Ok(vec![AIInsight {
                id: None,
                kind: InsightType::Tip,
                title: "Keep going".to_string(),
                description: "Spending is on track".to_string(),
                action: None,
                confidence: 0.9,
            }])
        }
    }

    fn budget(id: i64, category: &str, allocated: f64) -> Budget {
        Budget {
            id,
            category: category.to_string(),
            allocated,
            spent: 0.0,
            period: BudgetPeriod::Monthly,
        }
    }

    fn tx(id: i64, amount: f64) -> Transaction {
        Transaction {
            id: Some(id),
            amount,
            category: "Food".to_string(),
            description: "Snack".to_string(),
            date: "2024-02-02".to_string(),
            kind: TransactionType::Expense,
            recurring: false,
            tags: None,
        }
    }

    fn apply(state: Rc<BudgetState>, action: Option<BudgetAction>) -> Rc<BudgetState> {
        match action {
            Some(action) => state.reduce(action),
            None => state,
        }
    }

    #[tokio::test]
    async fn failed_second_put_leaves_budgets_untouched() {
        let api = FakeApi {
            fail_put_number: Some(2),
            ..Default::default()
        };
        let before = Rc::new(BudgetState {
            budgets: vec![budget(1, "Food", 500.0), budget(2, "Fun", 200.0), budget(3, "Bus", 300.0)],
            ..Default::default()
        });
        let edited = vec![budget(1, "Food", 550.0), budget(2, "Fun", 250.0), budget(3, "Bus", 350.0)];

        let after = apply(before.clone(), replace_budgets(&api, edited).await);

        assert_eq!(after.budgets, before.budgets);
        assert_eq!(
            *api.calls.borrow(),
            vec!["PUT /budgets/1".to_string(), "PUT /budgets/2".to_string()]
        );
    }

    #[tokio::test]
    async fn successful_batch_adopts_new_budgets() {
        let api = FakeApi::default();
        let edited = vec![budget(1, "Food", 550.0), budget(2, "Fun", 250.0)];
        let after = apply(
            Rc::new(BudgetState::default()),
            replace_budgets(&api, edited.clone()).await,
        );
        assert_eq!(after.budgets, edited);
        assert_eq!(api.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn empty_description_never_calls_categorize() {
        let api = FakeApi {
            category: Some(serde_json::json!("Food")),
            ..Default::default()
        };
        assert_eq!(suggest_category(&api, "").await, None);
        assert_eq!(suggest_category(&api, "   ").await, None);
        assert!(api.calls.borrow().is_empty());

        assert_eq!(suggest_category(&api, "pizza").await, Some("Food".to_string()));
    }

    #[tokio::test]
    async fn unknown_or_failed_suggestion_is_none() {
        let api = FakeApi {
            category: Some(serde_json::json!("Groceries")),
            ..Default::default()
        };
        assert_eq!(suggest_category(&api, "milk").await, None);

        let down = FakeApi {
            fail_all: true,
            ..Default::default()
        };
        assert_eq!(suggest_category(&down, "milk").await, None);
    }

    #[tokio::test]
    async fn created_transaction_is_prepended() {
        let api = FakeApi::default();
        let state = Rc::new(BudgetState {
            transactions: vec![tx(1, 5.0)],
            ..Default::default()
        });
        let new_tx = NewTransaction::from(&tx(0, 7.0));
        let state = apply(state, create_transaction(&api, &new_tx).await);
        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.transactions[0].id, Some(99));
    }

    #[tokio::test]
    async fn failed_loads_keep_last_known_state() {
        let api = FakeApi {
            fail_all: true,
            ..Default::default()
        };
        let state = Rc::new(BudgetState {
            transactions: vec![tx(1, 5.0)],
            budgets: vec![budget(1, "Food", 10.0)],
            ..Default::default()
        });
        let state = apply(state, load_transactions(&api).await);
        let state = apply(state, load_budgets(&api).await);
        let state = apply(state, create_budget(&api, &NewBudget::new("X".to_string(), 1.0, BudgetPeriod::Weekly)).await);
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.budgets.len(), 1);
    }

    #[tokio::test]
    async fn created_budget_is_appended() {
        let api = FakeApi::default();
        let state = Rc::new(BudgetState {
            budgets: vec![budget(1, "Food", 10.0)],
            ..Default::default()
        });
        let new_budget = NewBudget::new("Travel".to_string(), 80.0, BudgetPeriod::Yearly);
        let state = apply(state, create_budget(&api, &new_budget).await);
        assert_eq!(state.budgets.last().map(|b| b.id), Some(42));
        assert_eq!(state.budgets.last().map(|b| b.period), Some(BudgetPeriod::Yearly));
    }

    #[tokio::test]
    async fn insight_failure_clears_the_list() {
        let ok = FakeApi {
            transactions: vec![tx(1, 5.0)],
            ..Default::default()
        };
        let request = InsightRequest::snapshot(&ok.transactions, &[]);
        let state = Rc::new(BudgetState::default()).reduce(refresh_insights(&ok, &request).await);
        assert_eq!(state.insights.len(), 1);

        let down = FakeApi {
            fail_all: true,
            ..Default::default()
        };
        let state = state.reduce(refresh_insights(&down, &request).await);
        assert!(state.insights.is_empty());
    }

    #[test]
    fn no_insight_request_without_data() {
        assert!(insight_request_for(&[], &[]).is_none());

        let only_budgets = insight_request_for(&[], &[budget(1, "Food", 10.0)]).unwrap();
        assert_eq!(only_budgets.budgets.len(), 1);
        assert!(only_budgets.transactions.is_empty());

        let only_txs = insight_request_for(&[tx(1, 5.0)], &[]).unwrap();
        assert_eq!(only_txs.transactions.len(), 1);
    }

    #[tokio::test]
    async fn slow_insight_response_is_dropped_once_superseded() {
        let api = FakeApi::default();
        let seq = RequestSequencer::default();
        let request = insight_request_for(&[tx(1, 5.0)], &[]).unwrap();
        let state = Rc::new(BudgetState::default());

        let slow = seq.issue();
        let fast = seq.issue();
        let fast_action = current_action(&seq, fast, BudgetAction::InsightsCleared);
        let slow_action = current_action(&seq, slow, refresh_insights(&api, &request).await);

        assert!(slow_action.is_none());
        let state = apply(apply(state, fast_action), slow_action);
        assert!(state.insights.is_empty());

        let latest = seq.issue();
        let state = apply(state, current_action(&seq, latest, refresh_insights(&api, &request).await));
        assert_eq!(state.insights.len(), 1);
    }

    #[test]
    fn goals_are_local_and_appended() {
        let state = Rc::new(BudgetState::seeded());
        assert_eq!(state.goals.len(), 2);
        let goal = NewGoal {
            title: "Bike".to_string(),
            target_amount: 300.0,
            current_amount: 0.0,
            deadline: "2025-01-01".to_string(),
            category: "Travel".to_string(),
            priority: GoalPriority::Low,
        };
        let id = new_goal_id();
        let state = state.reduce(BudgetAction::GoalAdded(goal.with_id(id.clone())));
        assert_eq!(state.goals.len(), 3);
        assert_eq!(state.goals[2].id, id);
        assert!(id.parse::<i64>().is_ok());
    }
}

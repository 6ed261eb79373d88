use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::models::{AIInsight, Budget, BudgetUpdate, NewBudget, NewTransaction, Transaction};

#[derive(Serialize)]
struct CategorizeRequest<'a> {
    description: &'a str,
}

#[derive(Deserialize)]
pub struct CategorizeResponse {
    #[serde(default)]
    pub category: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct InsightRequest {
    pub transactions: Vec<NewTransaction>,
    pub budgets: Vec<BudgetUpdate>,
}

impl InsightRequest {
    pub fn snapshot(transactions: &[Transaction], budgets: &[Budget]) -> Self {
        InsightRequest {
            transactions: transactions.iter().map(NewTransaction::from).collect(),
            budgets: budgets.iter().map(BudgetUpdate::from).collect(),
        }
    }
}

/// One method per backend endpoint.
#[allow(async_fn_in_trait)]
pub trait FinanceApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
    async fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError>;
    async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError>;
    async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, ApiError>;
    async fn update_budget(&self, id: i64, update: &BudgetUpdate) -> Result<Budget, ApiError>;
    async fn categorize(&self, description: &str) -> Result<CategorizeResponse, ApiError>;
    async fn generate_insights(&self, request: &InsightRequest)
        -> Result<Vec<AIInsight>, ApiError>;
}

#[derive(Clone, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        HttpApi::new(config::api_base_url())
    }
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        HttpApi {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|source| network(path, source))?;
        decode(path, resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = Request::post(&self.url(path))
            .json(body)
            .map_err(|source| network(path, source))?
            .send()
            .await
            .map_err(|source| network(path, source))?;
        decode(path, resp).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = Request::put(&self.url(path))
            .json(body)
            .map_err(|source| network(path, source))?
            .send()
            .await
            .map_err(|source| network(path, source))?;
        decode(path, resp).await
    }
}

fn network(path: &str, source: gloo_net::Error) -> ApiError {
    ApiError::Network {
        endpoint: path.to_string(),
        source,
    }
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::status(path, resp.status()));
    }
    resp.json::<T>().await.map_err(|err| ApiError::Decode {
        endpoint: path.to_string(),
        message: err.to_string(),
    })
}

impl FinanceApi for HttpApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get("/transactions/").await
    }

    async fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        self.post("/transactions/", tx).await
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        self.get("/budgets/").await
    }

    async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, ApiError> {
        self.post("/budgets/", budget).await
    }

    async fn update_budget(&self, id: i64, update: &BudgetUpdate) -> Result<Budget, ApiError> {
        self.put(&format!("/budgets/{}", id), update).await
    }

    async fn categorize(&self, description: &str) -> Result<CategorizeResponse, ApiError> {
        self.post("/categorize", &CategorizeRequest { description })
            .await
    }

    async fn generate_insights(
        &self,
        request: &InsightRequest,
    ) -> Result<Vec<AIInsight>, ApiError> {
        self.post("/generate_insights", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, TransactionType};

    #[test]
    fn insight_snapshot_drops_ids_and_period() {
        let txs = vec![Transaction {
            id: Some(4),
            amount: 20.0,
            category: "Food".to_string(),
            description: "Tea".to_string(),
            date: "2024-03-01".to_string(),
            kind: TransactionType::Expense,
            recurring: false,
            tags: Some("daily".to_string()),
        }];
        let budgets = vec![Budget {
            id: 1,
            category: "Food".to_string(),
            allocated: 100.0,
            spent: 20.0,
            period: BudgetPeriod::Weekly,
        }];
        let body = serde_json::to_value(InsightRequest::snapshot(&txs, &budgets)).unwrap();
        assert!(body["transactions"][0].get("id").is_none());
        assert_eq!(body["transactions"][0]["tags"], "daily");
        assert_eq!(
            body["budgets"][0],
            serde_json::json!({"category": "Food", "allocated": 100.0, "spent": 20.0})
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpApi::new("http://example.test/");
        assert_eq!(api.url("/budgets/"), "http://example.test/budgets/");
    }
}

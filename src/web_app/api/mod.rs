// web_app/api/mod.rs - REST client for the storefront backend
//
// The backend is an external service; this module owns the three calls the
// UI makes against it. reqwest targets both native and wasm32, so the same
// code serves the browser build and the test suite.

use reqwest::{Client, Response};

use crate::web_app::model::{Account, AccountDraft, AccountFilters, Order, OrderRequest};

/// Backend endpoint configuration, injected once at startup.
///
/// The base URL is a build-time value (`STORE_BACKEND_URL`), falling back to
/// the local development backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: option_env!("STORE_BACKEND_URL")
                .unwrap_or("http://localhost:8000")
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
        }
    }

    pub fn accounts_url(&self) -> String {
        format!("{}/api/accounts", self.base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/api/orders", self.base_url)
    }

    /// The backend's connectivity-check page, linked from the header.
    pub fn connectivity_url(&self) -> String {
        format!("{}/test", self.base_url)
    }
}

/// Failure of a backend call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

async fn expect_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

/// Fetch the catalog with only the non-empty filter keys as query parameters.
pub async fn list_accounts(
    config: &ApiConfig,
    filters: &AccountFilters,
) -> Result<Vec<Account>, ApiError> {
    tracing::info!("Catalog request: filters={:?}", filters);

    let response = Client::new()
        .get(config.accounts_url())
        .query(&filters.query_pairs())
        .send()
        .await?;

    let accounts: Vec<Account> = expect_success(response).await?.json().await?;
    tracing::info!("Catalog response: {} listings", accounts.len());
    Ok(accounts)
}

/// Create a new listing.
pub async fn create_account(
    config: &ApiConfig,
    draft: &AccountDraft,
) -> Result<Account, ApiError> {
    tracing::info!("Create listing request: title='{}'", draft.title);

    let response = Client::new()
        .post(config.accounts_url())
        .json(draft)
        .send()
        .await?;

    let account: Account = expect_success(response).await?.json().await?;
    tracing::info!("Listing created: id={}", account.id);
    Ok(account)
}

/// Create an order for an existing listing.
pub async fn create_order(config: &ApiConfig, order: &OrderRequest) -> Result<Order, ApiError> {
    tracing::info!("Order request: account_id={}", order.account_id);

    let response = Client::new()
        .post(config.orders_url())
        .json(order)
        .send()
        .await?;

    let order: Order = expect_success(response).await?.json().await?;
    tracing::info!("Order created: id={}", order.id);
    Ok(order)
}

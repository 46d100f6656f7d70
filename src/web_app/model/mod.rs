// web_app/model/mod.rs - Shared data models for the storefront
//
// These structs mirror the wire format of the external backend and are
// used by both the WASM client and the SSR build.

use serde::{Deserialize, Serialize};

/// Rank tier of a listed account
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Grandmaster,
    #[default]
    Epic,
    Legend,
    Mythic,
}

impl Rank {
    /// All tiers, in the order they appear in select options
    pub const ALL: [Rank; 4] = [Rank::Grandmaster, Rank::Epic, Rank::Legend, Rank::Mythic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Grandmaster => "Grandmaster",
            Rank::Epic => "Epic",
            Rank::Legend => "Legend",
            Rank::Mythic => "Mythic",
        }
    }

    /// Parse a wire label back into a tier. Unknown labels are rejected.
    pub fn parse(label: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.as_str() == label)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account listing as returned by `GET /api/accounts`
///
/// Created server-side; the client never mutates one except through a
/// full catalog re-fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rank: Rank,
    pub price: f64,
    #[serde(default)]
    pub hero_count: Option<i32>,
    #[serde(default)]
    pub skin_count: Option<i32>,
    #[serde(default)]
    pub login_method: String,
    #[serde(default)]
    pub email_access: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Body of `POST /api/accounts`
///
/// `hero_count`/`skin_count` are omitted from the JSON entirely when unset,
/// never sent as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub title: String,
    pub description: String,
    pub rank: Rank,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_count: Option<i32>,
    pub login_method: String,
    pub email_access: bool,
    pub images: Vec<String>,
}

/// Raw add-account form state (free text plus one checkbox)
///
/// Holds exactly what the user typed; [`AccountFormInput::to_draft`] applies
/// the coercion rules at submit time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountFormInput {
    pub title: String,
    pub description: String,
    pub rank: Rank,
    pub price: String,
    pub hero_count: String,
    pub skin_count: String,
    pub login_method: String,
    pub email_access: bool,
    pub images: String,
}

impl Default for AccountFormInput {
    fn default() -> Self {
        AccountFormInput {
            title: String::new(),
            description: String::new(),
            rank: Rank::Epic,
            price: String::new(),
            hero_count: String::new(),
            skin_count: String::new(),
            login_method: "Moonton".to_string(),
            email_access: false,
            images: String::new(),
        }
    }
}

impl AccountFormInput {
    /// Coerce the raw field values into a POST body.
    ///
    /// - price: blank or unparseable becomes 0
    /// - hero/skin counts: blank becomes absent
    /// - images: comma-separated, each entry trimmed; blank becomes empty
    pub fn to_draft(&self) -> AccountDraft {
        let images = if self.images.trim().is_empty() {
            Vec::new()
        } else {
            self.images.split(',').map(|s| s.trim().to_string()).collect()
        };

        AccountDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            rank: self.rank,
            price: self.price.trim().parse::<f64>().unwrap_or(0.0),
            hero_count: parse_optional_count(&self.hero_count),
            skin_count: parse_optional_count(&self.skin_count),
            login_method: self.login_method.clone(),
            email_access: self.email_access,
            images,
        }
    }
}

fn parse_optional_count(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse::<i32>().ok()
    }
}

/// Catalog filter state
///
/// All fields are free text; an empty string means "not set" and is passed
/// through unchanged. Transient and client-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountFilters {
    pub q: String,
    pub rank: String,
    pub min_price: String,
    pub max_price: String,
}

impl AccountFilters {
    /// Query parameters for `GET /api/accounts`.
    ///
    /// A key with an empty value is omitted entirely, not sent as empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if !self.rank.is_empty() {
            pairs.push(("rank", self.rank.clone()));
        }
        if !self.min_price.is_empty() {
            pairs.push(("min_price", self.min_price.clone()));
        }
        if !self.max_price.is_empty() {
            pairs.push(("max_price", self.max_price.clone()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Body of `POST /api/orders`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub account_id: i64,
    pub buyer_name: String,
    pub whatsapp: String,
}

/// Order as created by the backend; only `id` is guaranteed, the echoed
/// fields are tolerated when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub account_id: i64,
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub whatsapp: String,
}

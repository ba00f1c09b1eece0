use serde::{Deserialize, Serialize};
use std::time::Duration;

const BALANCE_TIMEOUT: Duration = Duration::from_secs(10);

fn init_data_url(api_base: &str) -> String {
    format!("{}/api/user/init_data", api_base.trim_end_matches('/'))
}

#[derive(Debug, Deserialize)]
struct InitDataResponse {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Registers a freshly minted identity with the target service. The caller
/// degrades the account to `inactive` on `Err` instead of aborting.
pub async fn register(api_base: &str, id_token: &str, email: &str) -> Result<(), String> {
    let client = reqwest::Client::new();

    let response = client
        .post(init_data_url(api_base))
        .header("Referer", format!("{}/", api_base.trim_end_matches('/')))
        .json(&serde_json::json!({
            "token": id_token,
            "email": email,
            "login_type": 0,
            "current_uid": "",
        }))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!(
            "Registration failed (status {})",
            response.status().as_u16()
        ));
    }

    let parsed: InitDataResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse registration response: {}", e))?;

    if parsed.code == 1 && parsed.data.is_some() {
        Ok(())
    } else {
        Err("Registration rejected by target service".to_string())
    }
}

/// One upstream variant reports `credits`, the other `balance`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BalancePayload {
    Credits { credits: u64 },
    Balance { balance: u64 },
}

impl BalancePayload {
    fn amount(&self) -> u64 {
        match self {
            BalancePayload::Credits { credits } => *credits,
            BalancePayload::Balance { balance } => *balance,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub balance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Polls the account balance. Fails soft: every failure mode comes back as a
/// zero balance plus an advisory message, never an `Err`. This is the only
/// outbound call with a bounded timeout.
pub async fn check_balance(api_base: &str, token: Option<&str>) -> BalanceReport {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => {
            return BalanceReport {
                balance: 0,
                error: Some("No session token provided".to_string()),
            }
        }
    };

    let client = reqwest::Client::new();

    let result = client
        .post(init_data_url(api_base))
        .timeout(BALANCE_TIMEOUT)
        .header("X-Session-Token", token)
        .json(&serde_json::json!({}))
        .send()
        .await;

    let response = match result {
        Ok(r) if r.status().is_success() => r,
        _ => {
            return BalanceReport {
                balance: 0,
                error: Some("Failed to fetch balance".to_string()),
            }
        }
    };

    match response.json::<BalancePayload>().await {
        Ok(payload) => BalanceReport {
            balance: payload.amount(),
            error: None,
        },
        Err(_) => BalanceReport {
            balance: 0,
            error: Some("Failed to fetch balance".to_string()),
        },
    }
}

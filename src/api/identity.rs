use serde::Deserialize;

// The ?key= query parameter carries the provider's public web API key.
pub const DEFAULT_SIGNUP_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=set-me";

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36")
        .build()
        .unwrap()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResult {
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(rename = "localId", default)]
    pub local_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignupError {
    error: SignupErrorBody,
}

#[derive(Debug, Deserialize)]
struct SignupErrorBody {
    message: String,
}

/// Creates a new identity with the provider. The caller treats any `Err`
/// here as a hard stop for the generation attempt.
pub async fn sign_up(
    signup_url: &str,
    email: &str,
    password: &str,
) -> Result<SignupResult, String> {
    let client = build_client();

    let response = client
        .post(signup_url)
        .json(&serde_json::json!({
            "returnSecureToken": true,
            "email": email,
            "password": password,
            "clientType": "CLIENT_TYPE_WEB",
        }))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !status.is_success() {
        // Provider errors nest a message; surface it when parseable.
        if let Ok(parsed) = serde_json::from_str::<SignupError>(&body) {
            return Err(parsed.error.message);
        }
        return Err(format!("Signup failed (status {})", status.as_u16()));
    }

    serde_json::from_str::<SignupResult>(&body)
        .map_err(|_| "Signup response missing idToken".to_string())
}

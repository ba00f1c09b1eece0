use crate::api::{identity, target};
use crate::data::sessions::{Account, AccountStatus, Settings};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

const EMAIL_DOMAINS: &[&str] = &["example.com", "testmail.dev", "mailbox.org"];
const EMAIL_LOCAL_LEN: usize = 12;
const PASSWORD_LEN: usize = 16;
const FALLBACK_ID_LEN: usize = 20;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    IdentityProvider(String),
    #[error("{0}")]
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub signup_url: String,
}

fn random_from(rng: &mut impl Rng, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

pub fn random_email() -> String {
    let mut rng = rand::thread_rng();
    let alnum: Vec<u8> = [LOWER, DIGITS].concat();
    let local = random_from(&mut rng, &alnum, EMAIL_LOCAL_LEN);
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    format!("{}@{}", local, domain)
}

/// Fixed-length password with at least one character from each class.
pub fn random_password() -> String {
    let mut rng = rand::thread_rng();
    let mut chars: Vec<u8> = vec![
        LOWER[rng.gen_range(0..LOWER.len())],
        UPPER[rng.gen_range(0..UPPER.len())],
        DIGITS[rng.gen_range(0..DIGITS.len())],
        SYMBOLS[rng.gen_range(0..SYMBOLS.len())],
    ];
    let all: Vec<u8> = [LOWER, UPPER, DIGITS, SYMBOLS].concat();
    while chars.len() < PASSWORD_LEN {
        chars.push(all[rng.gen_range(0..all.len())]);
    }
    chars.shuffle(&mut rng);
    chars.into_iter().map(|c| c as char).collect()
}

fn fallback_id() -> String {
    let mut rng = rand::thread_rng();
    let alnum: Vec<u8> = [LOWER, UPPER, DIGITS].concat();
    random_from(&mut rng, &alnum, FALLBACK_ID_LEN)
}

/// Runs one end-to-end generation attempt: identity signup, target-service
/// registration, optional balance lookup. Sequential, no retries; an identity
/// failure aborts the attempt and no account record is produced.
pub async fn generate(
    config: &GeneratorConfig,
    settings: &Settings,
) -> Result<Account, GenerationError> {
    let email = random_email();
    let password = random_password();

    let signup = identity::sign_up(&config.signup_url, &email, &password)
        .await
        .map_err(GenerationError::IdentityProvider)?;

    let id = signup
        .local_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(fallback_id);

    // Registration failure does not abort: the identity exists, the account
    // is just unusable at the target service.
    let status = match target::register(&settings.api_base, &signup.id_token, &email).await {
        Ok(()) => AccountStatus::Active,
        Err(e) => {
            warn!("registration failed for {}: {}", email, e);
            AccountStatus::Inactive
        }
    };

    let balance = if status == AccountStatus::Active && !settings.session_token.is_empty() {
        target::check_balance(&settings.api_base, Some(&signup.id_token))
            .await
            .balance
    } else {
        0
    };

    info!("generated account {} ({})", email, status.as_str());

    Ok(Account {
        id,
        email,
        password,
        balance,
        status,
        created_at: Utc::now().to_rfc3339(),
    })
}

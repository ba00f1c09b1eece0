pub const MIN_REFRESH_INTERVAL_SECS: u64 = 5;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 300;

pub const DEFAULT_API_BASE: &str = "https://api.gemprovider.example";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    // Never assigned by the generation flow; kept because stored data and
    // exports may carry it.
    Pending,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password: String,
    pub balance: u64,
    pub status: AccountStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub api_base: String,
    pub session_token: String,
    pub auto_refresh: bool,
    pub refresh_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_token: String::new(),
            auto_refresh: false,
            refresh_interval: 30,
        }
    }
}

/// Partial settings update. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub api_base: Option<String>,
    pub session_token: Option<String>,
    pub auto_refresh: Option<bool>,
    pub refresh_interval: Option<u64>,
}

impl Settings {
    /// Applies a partial update. An out-of-range refresh interval is
    /// silently rejected and the stored value retained.
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(api_base) = update.api_base {
            self.api_base = api_base;
        }
        if let Some(session_token) = update.session_token {
            self.session_token = session_token;
        }
        if let Some(auto_refresh) = update.auto_refresh {
            self.auto_refresh = auto_refresh;
        }
        if let Some(interval) = update.refresh_interval {
            if (MIN_REFRESH_INTERVAL_SECS..=MAX_REFRESH_INTERVAL_SECS).contains(&interval) {
                self.refresh_interval = interval;
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub accounts: Vec<Account>,
    pub settings: Settings,
    // Last balance seen by the poll endpoint, for delta reporting.
    pub last_balance: u64,
    pub created_at: i64,
}

impl Session {
    fn new() -> Self {
        Self {
            accounts: Vec::new(),
            settings: Settings::default(),
            last_balance: 0,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

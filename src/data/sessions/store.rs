pub const SESSION_MAX_AGE_MS: i64 = 24 * 60 * 60 * 1000;

// Probability that a write also runs an expiry sweep. Staleness tolerance is
// loose (hours), so no timer task is needed.
const SWEEP_CHANCE: f64 = 0.02;

/// Process-wide session map. Not durable: contents are lost on restart, and
/// multi-instance deployments are explicitly out of scope.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the session for `session_id`, creating it with empty accounts
    /// and default settings on first access.
    pub fn get_or_create(&self, session_id: &str) -> Result<Session, String> {
        let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(Session::new);
        Ok(session.clone())
    }

    pub fn list_all(&self) -> Result<Vec<(String, Session)>, String> {
        let sessions = self.sessions.lock().map_err(|e| e.to_string())?;
        Ok(sessions
            .iter()
            .map(|(id, session)| (id.clone(), session.clone()))
            .collect())
    }

    /// Removes every session older than `max_age_ms`.
    pub fn sweep_expired(&self, max_age_ms: i64) -> Result<(), String> {
        let now = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
        sessions.retain(|_, session| now - session.created_at <= max_age_ms);
        Ok(())
    }

    fn maybe_sweep(&self) {
        if rand::random::<f64>() < SWEEP_CHANCE {
            let _ = self.sweep_expired(SESSION_MAX_AGE_MS);
        }
    }

    pub fn accounts(&self, session_id: &str) -> Result<Vec<Account>, String> {
        Ok(self.get_or_create(session_id)?.accounts)
    }

    pub fn append_account(&self, session_id: &str, account: Account) -> Result<(), String> {
        {
            let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
            let session = sessions
                .entry(session_id.to_string())
                .or_insert_with(Session::new);
            session.accounts.push(account);
        }
        self.maybe_sweep();
        Ok(())
    }

    /// Empties the session's account list. The session itself survives.
    pub fn clear_accounts(&self, session_id: &str) -> Result<usize, String> {
        let removed = {
            let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
            let session = sessions
                .entry(session_id.to_string())
                .or_insert_with(Session::new);
            let removed = session.accounts.len();
            session.accounts.clear();
            removed
        };
        self.maybe_sweep();
        Ok(removed)
    }

    pub fn last_balance(&self, session_id: &str) -> Result<u64, String> {
        Ok(self.get_or_create(session_id)?.last_balance)
    }

    /// Stores the freshly polled balance and returns the previous one.
    pub fn record_balance(&self, session_id: &str, balance: u64) -> Result<u64, String> {
        let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(Session::new);
        let previous = session.last_balance;
        session.last_balance = balance;
        Ok(previous)
    }

    pub fn settings(&self, session_id: &str) -> Result<Settings, String> {
        Ok(self.get_or_create(session_id)?.settings)
    }

    pub fn update_settings(
        &self,
        session_id: &str,
        update: SettingsUpdate,
    ) -> Result<Settings, String> {
        let settings = {
            let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
            let session = sessions
                .entry(session_id.to_string())
                .or_insert_with(Session::new);
            session.settings.apply(update);
            session.settings.clone()
        };
        self.maybe_sweep();
        Ok(settings)
    }

    #[cfg(test)]
    pub fn insert_aged(&self, session_id: &str, created_at: i64) -> Result<(), String> {
        let mut sessions = self.sessions.lock().map_err(|e| e.to_string())?;
        let mut session = Session::new();
        session.created_at = created_at;
        sessions.insert(session_id.to_string(), session);
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

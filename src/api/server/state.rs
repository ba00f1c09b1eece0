#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub generator: Arc<GeneratorConfig>,
    pub limiter: Arc<RateLimiter>,
}

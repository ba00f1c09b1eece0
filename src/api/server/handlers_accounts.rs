async fn handle_list_accounts(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Response {
    let sid = session_id(&headers);
    match state.sessions.accounts(&sid) {
        Ok(accounts) => json_reply(
            200,
            serde_json::json!({
                "accounts": accounts,
                "count": accounts.len(),
            }),
        ),
        Err(e) => internal_error("failed to read accounts", &e),
    }
}

async fn handle_generate(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    connect: Option<ConnectInfo<SocketAddr>>,
) -> Response {
    let client = connect
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string());

    if let Err(retry_after) = state.limiter.check(&client) {
        return json_reply(
            429,
            serde_json::json!({
                "error": "Rate limit exceeded",
                "retry_after": retry_after,
            }),
        );
    }

    let sid = session_id(&headers);

    let settings = match state.sessions.settings(&sid) {
        Ok(s) => s,
        Err(e) => return internal_error("failed to read settings", &e),
    };

    match generator::generate(&state.generator, &settings).await {
        Ok(account) => {
            if let Err(e) = state.sessions.append_account(&sid, account.clone()) {
                return internal_error("failed to store account", &e);
            }
            json_reply(
                200,
                serde_json::json!({
                    "success": true,
                    "account": account,
                }),
            )
        }
        // A failed attempt leaves the session's list untouched.
        Err(e) => json_reply(
            400,
            serde_json::json!({
                "success": false,
                "error": e.to_string(),
            }),
        ),
    }
}

async fn handle_clear_accounts(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Response {
    let sid = session_id(&headers);
    match state.sessions.clear_accounts(&sid) {
        Ok(removed) => json_reply(
            200,
            serde_json::json!({
                "message": format!("Cleared {} accounts", removed),
            }),
        ),
        Err(e) => internal_error("failed to clear accounts", &e),
    }
}

async fn handle_health(Extension(state): Extension<AppState>) -> Response {
    let sessions = state.sessions.list_all().map(|s| s.len()).unwrap_or(0);
    json_reply(
        200,
        serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "sessions": sessions,
        }),
    )
}

async fn handle_get_settings(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Response {
    let sid = session_id(&headers);
    match state.sessions.settings(&sid) {
        Ok(settings) => json_reply(200, serde_json::json!({ "settings": settings })),
        Err(e) => internal_error("failed to read settings", &e),
    }
}

async fn handle_update_settings(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Result<Json<SettingsUpdate>, JsonRejection>,
) -> Response {
    let Ok(Json(update)) = body else {
        return error_reply(400, "Invalid request body");
    };

    let sid = session_id(&headers);
    match state.sessions.update_settings(&sid, update) {
        Ok(settings) => json_reply(200, serde_json::json!({ "settings": settings })),
        Err(e) => internal_error("failed to update settings", &e),
    }
}

async fn handle_balance(Extension(state): Extension<AppState>, headers: HeaderMap) -> Response {
    let sid = session_id(&headers);
    let settings = match state.sessions.settings(&sid) {
        Ok(s) => s,
        Err(e) => return internal_error("failed to read settings", &e),
    };

    let token = if settings.session_token.is_empty() {
        None
    } else {
        Some(settings.session_token.as_str())
    };

    let report = crate::api::target::check_balance(&settings.api_base, token).await;

    if let Some(err) = report.error {
        // A failed poll reports the last total seen, never an exception.
        let last = match state.sessions.last_balance(&sid) {
            Ok(b) => b,
            Err(e) => return internal_error("failed to read balance", &e),
        };
        return json_reply(
            200,
            serde_json::json!({ "balance": last, "error": err }),
        );
    }

    let previous = match state.sessions.record_balance(&sid, report.balance) {
        Ok(b) => b,
        Err(e) => return internal_error("failed to record balance", &e),
    };

    json_reply(
        200,
        serde_json::json!({
            "balance": report.balance,
            "increased": report.balance > previous,
            "diff": report.balance.saturating_sub(previous),
        }),
    )
}

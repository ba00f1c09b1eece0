async fn handle_export(
    Extension(state): Extension<AppState>,
    Query(params): Query<ExportQuery>,
    headers: HeaderMap,
) -> Response {
    let sid = session_id(&headers);
    let accounts = match state.sessions.accounts(&sid) {
        Ok(a) => a,
        Err(e) => return internal_error("failed to read accounts", &e),
    };

    if accounts.is_empty() {
        return error_reply(400, "No accounts to export");
    }

    match params.format.as_deref().unwrap_or("json") {
        "json" => json_reply(
            200,
            serde_json::json!({
                "accounts": accounts,
                "count": accounts.len(),
            }),
        ),
        "csv" => file_reply(
            "text/csv; charset=utf-8",
            "accounts.csv",
            export::to_csv(&accounts),
        ),
        "txt" => file_reply(
            "text/plain; charset=utf-8",
            "accounts.txt",
            export::to_txt(&accounts),
        ),
        other => error_reply(400, &format!("Unknown export format: {}", other)),
    }
}

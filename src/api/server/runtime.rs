const ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

fn origin_allowed(origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    if ALLOWED_ORIGINS.contains(&origin) {
        return true;
    }
    // Preview deployments get wildcard subdomains.
    origin
        .strip_prefix("https://")
        .is_some_and(|host| host.ends_with(".vercel.app") || host.ends_with(".v0.dev"))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _| origin_allowed(origin)))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(SESSION_HEADER),
        ])
        .allow_credentials(true)
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route(
            "/api/accounts",
            get(handle_list_accounts)
                .post(handle_generate)
                .delete(handle_clear_accounts),
        )
        .route(
            "/api/settings",
            get(handle_get_settings)
                .put(handle_update_settings)
                .post(handle_update_settings),
        )
        // Aliases kept for dashboards built against the older route names.
        .route("/api/generate", post(handle_generate))
        .route("/api/clear", post(handle_clear_accounts))
        .route("/api/balance", get(handle_balance))
        .route("/api/export", get(handle_export))
        .layer(middleware::from_fn(request_log))
        .layer(cors_layer())
        .layer(Extension(state))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("shutdown signal received");
}

pub async fn start(state: AppState, bind_addr: SocketAddr) -> Result<(), String> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;

    info!("listening on http://{}", bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))
}

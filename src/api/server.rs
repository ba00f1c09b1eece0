use axum::{
    body::Body,
    extract::rejection::JsonRejection,
    extract::{ConnectInfo, Extension, Query, Request},
    http::{header, HeaderMap, HeaderName, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

use crate::api::generator::{self, GeneratorConfig};
use crate::data::export;
use crate::data::sessions::{SessionStore, SettingsUpdate};

include!("server/state.rs");
include!("server/rate_limit.rs");
include!("server/query.rs");
include!("server/helpers.rs");
include!("server/middleware.rs");
include!("server/handlers_accounts.rs");
include!("server/handlers_settings.rs");
include!("server/handlers_export.rs");
include!("server/runtime.rs");

#[cfg(test)]
include!("server/tests.rs");

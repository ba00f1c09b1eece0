use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

include!("sessions/model.rs");
include!("sessions/store.rs");

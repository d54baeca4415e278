// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// JSON document served verbatim by `GET /api`.
    pub endpoints_path: PathBuf,
}

// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to get a single student record.

use crate::driver::Driver;
use crate::model::AlunoId;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;
use log::{info, warn};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, RestError> {
    let id = id.parse::<AlunoId>().inspect_err(|_| warn!("Invalid ID format: {}", id))?;
    info!("Received request to get student {}", id);

    let aluno = driver
        .get_aluno(id)
        .await
        .inspect_err(|e| warn!("Failed to get student {}: {}", id, e))?;
    Ok(Json(aluno))
}

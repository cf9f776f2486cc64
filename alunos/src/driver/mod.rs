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

//! Business logic for the service.

use iii_iv_core::db::{Db, DbError};
use iii_iv_core::driver::DriverError;
use std::sync::Arc;

mod aluno;
mod alunos;
#[cfg(test)]
mod testutils;

/// Message returned when a requested student record does not exist.
pub(crate) const ALUNO_NOT_FOUND: &str = "Aluno não encontrado";

/// Translates database errors into business errors, naming the missing entity when the record
/// does not exist.
fn map_db_error(e: DbError) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound(ALUNO_NOT_FOUND.to_owned()),
        e => e.into(),
    }
}

/// Business logic.
///
/// The public operations exposed by the driver consume it.  Each operation issues a single
/// statement against the database, and the driver is cheap to clone for every request.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self { db }
    }
}

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

//! Operations on the collection of student records.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::*;
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Creates a new student record with the contents of `data`.
    pub(crate) async fn create_aluno(self, data: AlunoData) -> DriverResult<Aluno> {
        let mut ex = self.db.ex().await?;
        db::create_aluno(&mut ex, data).await.map_err(map_db_error)
    }

    /// Gets all student records.
    pub(crate) async fn get_alunos(self) -> DriverResult<Vec<Aluno>> {
        let mut ex = self.db.ex().await?;
        db::get_alunos(&mut ex).await.map_err(map_db_error)
    }
}

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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use iii_iv_core::db::Db;
use iii_iv_core::db::sqlite::testutils::setup;
use std::sync::Arc;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let context = Self::setup_without_schema().await;
        db::init_schema(&mut context.db.ex().await.unwrap()).await.unwrap();
        context
    }

    /// Sets up the app against a database that lacks the schema, so that every query fails.
    pub(crate) async fn setup_without_schema() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::from(setup().await);
        let app = app(Driver::new(db.clone()));
        Self { db, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn create_aluno(&self, name: &str, age: i32) -> Aluno {
        let data = AlunoData::new(name.to_owned(), age, 5.0, 6.5, "Prof. Alves".to_owned(), 9);
        db::create_aluno(&mut self.db.ex().await.unwrap(), data).await.unwrap()
    }

    pub(crate) async fn get_aluno(&self, id: AlunoId) -> Option<Aluno> {
        match db::get_aluno(&mut self.db.ex().await.unwrap(), id).await {
            Ok(aluno) => Some(aluno),
            Err(iii_iv_core::db::DbError::NotFound) => None,
            Err(e) => panic!("{:?}", e),
        }
    }

    pub(crate) async fn get_alunos(&self) -> Vec<Aluno> {
        db::get_alunos(&mut self.db.ex().await.unwrap()).await.unwrap()
    }
}

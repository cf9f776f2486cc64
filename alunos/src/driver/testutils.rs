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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use iii_iv_core::db::sqlite::testutils::setup;
use iii_iv_core::db::{Db, Executor};
use std::sync::Arc;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    driver: Driver,
}

impl TestContext {
    /// Initializes a driver backed by an in-memory database with the schema in place.
    pub(crate) async fn setup() -> Self {
        let context = Self::setup_without_schema().await;
        db::init_schema(&mut context.ex().await).await.unwrap();
        context
    }

    /// Initializes a driver backed by an empty in-memory database.
    pub(crate) async fn setup_without_schema() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::from(setup().await);
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Creates a record directly in the database given only its `name` and `age`.
    pub(crate) async fn create_aluno(&self, name: &str, age: i32) -> Aluno {
        let data = AlunoData::new(name.to_owned(), age, 6.5, 7.0, "Prof. Souza".to_owned(), 3);
        db::create_aluno(&mut self.ex().await, data).await.unwrap()
    }
}

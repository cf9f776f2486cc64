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

//! Operations on a single student record.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::*;
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Deletes the student record identified by `id`.
    pub(crate) async fn delete_aluno(self, id: AlunoId) -> DriverResult<()> {
        let mut ex = self.db.ex().await?;
        db::delete_aluno(&mut ex, id).await.map_err(map_db_error)
    }

    /// Gets the student record identified by `id`.
    pub(crate) async fn get_aluno(self, id: AlunoId) -> DriverResult<Aluno> {
        let mut ex = self.db.ex().await?;
        db::get_aluno(&mut ex, id).await.map_err(map_db_error)
    }

    /// Replaces the contents of the student record identified by `id` with `data`.
    pub(crate) async fn update_aluno(self, id: AlunoId, data: AlunoData) -> DriverResult<Aluno> {
        let mut ex = self.db.ex().await?;
        db::update_aluno(&mut ex, id, data).await.map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::ALUNO_NOT_FOUND;
    use crate::driver::testutils::*;
    use iii_iv_core::db::DbError;
    use iii_iv_core::driver::DriverError;

    #[tokio::test]
    async fn test_delete_aluno_ok() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", 20).await;

        context.driver().delete_aluno(*aluno.id()).await.unwrap();

        assert_eq!(
            DbError::NotFound,
            db::get_aluno(&mut context.ex().await, *aluno.id()).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_aluno_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound(ALUNO_NOT_FOUND.to_owned()),
            context.driver().delete_aluno(AlunoId::new(5)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_aluno_ok() {
        let context = TestContext::setup().await;

        context.create_aluno("Ana", 20).await;
        let exp_aluno = context.create_aluno("Bruno", 21).await;

        let aluno = context.driver().get_aluno(*exp_aluno.id()).await.unwrap();
        assert_eq!(exp_aluno, aluno);
    }

    #[tokio::test]
    async fn test_get_aluno_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound(ALUNO_NOT_FOUND.to_owned()),
            context.driver().get_aluno(AlunoId::new(999)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_update_aluno_ok() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", 20).await;
        let data = AlunoData::new("Ana Maria".to_owned(), 21, 9.0, 9.5, "Prof. Costa".to_owned(), 7);

        let updated = context.driver().update_aluno(*aluno.id(), data.clone()).await.unwrap();
        assert_eq!(Aluno::new(*aluno.id(), data), updated);

        assert_eq!(updated, db::get_aluno(&mut context.ex().await, *aluno.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_aluno_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound(ALUNO_NOT_FOUND.to_owned()),
            context.driver().update_aluno(AlunoId::new(3), AlunoData::default()).await.unwrap_err()
        );
    }
}

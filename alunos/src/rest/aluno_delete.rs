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

//! API to delete a student record.

use crate::driver::Driver;
use crate::model::AlunoId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use iii_iv_core::rest::RestError;
use log::{info, warn};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
) -> Result<StatusCode, RestError> {
    let id = id.parse::<AlunoId>().inspect_err(|_| warn!("Invalid ID format: {}", id))?;
    info!("Received request to delete student {}", id);

    driver.delete_aluno(id).await.inspect_err(|e| warn!("Failed to delete student {}: {}", id, e))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::DELETE, format!("/alunos/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", 20).await;
        let other = context.create_aluno("Bruno", 21).await;

        OneShotBuilder::new(context.app(), route(&aluno.id().to_string()))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        assert_eq!(vec![other], context.get_alunos().await);
    }

    #[tokio::test]
    async fn test_then_get_is_not_found() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", 20).await;
        assert_eq!(AlunoId::new(1), *aluno.id());

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        OneShotBuilder::new(context.app(), (http::Method::GET, "/alunos/1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Aluno não encontrado$")
            .await;
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", 20).await;

        OneShotBuilder::new(context.app(), route("2"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Aluno não encontrado$")
            .await;

        assert_eq!(Some(aluno.clone()), context.get_aluno(*aluno.id()).await);
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("abc"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("^ID inválido$")
            .await;
    }

    #[tokio::test]
    async fn test_backend_error() {
        let context = TestContext::setup_without_schema().await;

        OneShotBuilder::new(context.into_app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Erro interno no servidor$")
            .await;
    }

    #[tokio::test]
    async fn test_ignores_body() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", 20).await;

        OneShotBuilder::new(context.app(), route(&aluno.id().to_string()))
            .send_text("{}")
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        assert!(context.get_alunos().await.is_empty());
    }
}

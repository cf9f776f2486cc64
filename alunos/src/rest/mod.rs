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

//! Entry point to the REST server.

use crate::driver::Driver;
use crate::model::AlunoData;
use axum::Router;
use axum::body::Bytes;
use iii_iv_core::rest::{RestError, RestResult};
use log::warn;
use serde_json::{Map, Value};

mod aluno_delete;
mod aluno_get;
mod aluno_put;
mod alunos_get;
mod alunos_post;
#[cfg(test)]
mod testutils;

/// Message returned when a request carries a payload that does not describe a student record.
const INVALID_ALUNO_DATA: &str = "Dados do aluno inválidos";

/// Parses the JSON `body` of a request into the contents of a student record.
///
/// The payload must be a JSON object: any other document, including arrays that would otherwise
/// bind to the fields by position, is rejected.  Any problem with the payload is reported to the
/// client with a generic message and the parser's diagnostic is only logged.
fn parse_aluno_data(body: &Bytes) -> RestResult<AlunoData> {
    let invalid = |e: serde_json::Error| {
        warn!("Failed to decode student data: {}", e);
        RestError::InvalidRequest(INVALID_ALUNO_DATA.to_owned())
    };
    let object = serde_json::from_slice::<Map<String, Value>>(body).map_err(invalid)?;
    serde_json::from_value(Value::Object(object)).map_err(invalid)
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/alunos", get(alunos_get::handler).post(alunos_post::handler))
        .route(
            "/alunos/:id",
            get(aluno_get::handler).put(aluno_put::handler).delete(aluno_delete::handler),
        )
        .with_state(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aluno_data_ok() {
        let body = Bytes::from_static(br#"{"nome": "Ana", "idade": 20, "numero_sala": 4}"#);
        let data = parse_aluno_data(&body).unwrap();
        assert_eq!(AlunoData::new("Ana".to_owned(), 20, 0.0, 0.0, String::new(), 4), data);
    }

    #[test]
    fn test_parse_aluno_data_errors() {
        for raw in [
            "",
            "null",
            "[]",
            r#"["Ana", 20, 8.5, 9.0, "Carlos", 101]"#,
            "not json",
            r#"{"idade": "vinte"}"#,
            r#"{"nome": 5}"#,
        ] {
            assert_eq!(
                RestError::InvalidRequest(INVALID_ALUNO_DATA.to_owned()),
                parse_aluno_data(&Bytes::from(raw)).unwrap_err(),
                "Input was {}",
                raw
            );
        }
    }
}

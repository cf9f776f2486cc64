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

//! Entry point to the student records service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use iii_iv_alunos::{AlunosOptions, serve};
use iii_iv_core::db::postgres::{PostgresDb, PostgresOptions};
use std::env;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Default port to listen on when `PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

/// Loads the `.env` file from the current directory unless running in production.
///
/// This runs before logging is set up so that the file can define `RUST_LOG`.
fn load_dotenv() {
    if env::var("ENV").as_deref() == Ok("PRODUCTION") {
        return;
    }
    match dotenvy::dotenv() {
        Ok(_) => (),
        Err(e) if e.not_found() => (),
        Err(e) => panic!("Failed to load .env file: {}", e),
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();
    env_logger::init();

    let port: u16 = match env::var("PORT") {
        Ok(val) => val.parse().expect("PORT has to be a number"),
        Err(_) => DEFAULT_PORT,
    };
    let addr = (Ipv4Addr::UNSPECIFIED, port);

    let db_opts = PostgresOptions::from_env("WSRS_DATABASE").unwrap();
    let db = Arc::from(PostgresDb::connect(db_opts).unwrap());
    let opts = AlunosOptions::from_env("ALUNOS").unwrap();

    serve(addr, db, opts).await.unwrap()
}

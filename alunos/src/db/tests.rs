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

//! Common tests for any database implementation.

use crate::db::*;
use iii_iv_core::db::Db;

/// Syntactic sugar to build the contents of a record given only its `name` and `age`.
fn simple_data(name: &str, age: i32) -> AlunoData {
    AlunoData::new(name.to_owned(), age, 7.5, 8.25, "Prof. Silva".to_owned(), 101)
}

async fn test_create_and_get<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let created = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    assert_eq!(&simple_data("Ana", 20), created.data());

    let fetched = get_aluno(ex, *created.id()).await.unwrap();
    assert_eq!(created, fetched);
}

async fn test_create_assigns_distinct_ids<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let first = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    let second = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    assert!(first.id() < second.id());
    assert_eq!(first.data(), second.data());
}

async fn test_get_alunos_empty<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    assert!(get_alunos(ex).await.unwrap().is_empty());
}

async fn test_get_alunos_returns_all_sorted<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let first = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    let second = create_aluno(ex, simple_data("Bruno", 21)).await.unwrap();
    let third = create_aluno(ex, simple_data("Carla", 22)).await.unwrap();
    delete_aluno(ex, *second.id()).await.unwrap();

    assert_eq!(vec![first, third], get_alunos(ex).await.unwrap());
}

async fn test_get_aluno_not_found<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    assert_eq!(DbError::NotFound, get_aluno(ex, AlunoId::new(999)).await.unwrap_err());
}

async fn test_update_aluno_replaces_everything<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let created = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    let other = create_aluno(ex, simple_data("Bruno", 21)).await.unwrap();

    let new_data = AlunoData::new("Ana Maria".to_owned(), 0, 10.0, 0.0, String::new(), 202);
    let updated = update_aluno(ex, *created.id(), new_data.clone()).await.unwrap();
    assert_eq!(Aluno::new(*created.id(), new_data), updated);

    assert_eq!(updated, get_aluno(ex, *created.id()).await.unwrap());
    assert_eq!(other, get_aluno(ex, *other.id()).await.unwrap());
}

async fn test_update_aluno_not_found<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    assert_eq!(
        DbError::NotFound,
        update_aluno(ex, AlunoId::new(1), simple_data("Ana", 20)).await.unwrap_err()
    );
    assert!(get_alunos(ex).await.unwrap().is_empty());
}

async fn test_delete_aluno_ok<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let created = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    delete_aluno(ex, *created.id()).await.unwrap();
    assert_eq!(DbError::NotFound, get_aluno(ex, *created.id()).await.unwrap_err());
}

async fn test_delete_aluno_not_found<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let created = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    delete_aluno(ex, *created.id()).await.unwrap();
    assert_eq!(DbError::NotFound, delete_aluno(ex, *created.id()).await.unwrap_err());
}

async fn test_init_schema_is_idempotent<D: Db>(db: D) {
    let ex = &mut db.ex().await.unwrap();
    init_schema(ex).await.unwrap();

    let created = create_aluno(ex, simple_data("Ana", 20)).await.unwrap();
    init_schema(ex).await.unwrap();
    assert_eq!(vec![created], get_alunos(ex).await.unwrap());
}

macro_rules! generate_db_tests [
    ( $setup:expr $(, #[$extra:meta] )? ) => {
        iii_iv_core::db::testutils::generate_tests!(
            $(#[$extra],)?
            $setup,
            $crate::db::tests,
            test_create_and_get,
            test_create_assigns_distinct_ids,
            test_get_alunos_empty,
            test_get_alunos_returns_all_sorted,
            test_get_aluno_not_found,
            test_update_aluno_replaces_everything,
            test_update_aluno_not_found,
            test_delete_aluno_ok,
            test_delete_aluno_not_found,
            test_init_schema_is_idempotent
        );
    }
];

mod postgres {
    use iii_iv_core::db::postgres::testutils;

    generate_db_tests!(
        testutils::setup().await,
        #[ignore = "Requires environment configuration and is expensive"]
    );
}

mod sqlite {
    use iii_iv_core::db::sqlite::testutils;

    generate_db_tests!(testutils::setup().await);
}

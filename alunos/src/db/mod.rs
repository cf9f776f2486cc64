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

//! Database abstraction to manipulate student records.

use crate::model::{Aluno, AlunoData, AlunoId};
use iii_iv_core::db::postgres;
#[cfg(test)]
use iii_iv_core::db::sqlite;
use iii_iv_core::db::{DbError, DbResult, Executor};
use sqlx::Row;
use sqlx::postgres::PgRow;
#[cfg(test)]
use sqlx::sqlite::SqliteRow;

#[cfg(test)]
mod tests;

/// Initializes the database schema.
pub(crate) async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(test)]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

impl TryFrom<PgRow> for Aluno {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("nome").map_err(postgres::map_sqlx_error)?;
        let age: i32 = row.try_get("idade").map_err(postgres::map_sqlx_error)?;
        let first_term_grade: f64 =
            row.try_get("nota_primeiro_semestre").map_err(postgres::map_sqlx_error)?;
        let second_term_grade: f64 =
            row.try_get("nota_segundo_semestre").map_err(postgres::map_sqlx_error)?;
        let teacher_name: String = row.try_get("nome_professor").map_err(postgres::map_sqlx_error)?;
        let room_number: i32 = row.try_get("numero_sala").map_err(postgres::map_sqlx_error)?;

        Ok(Aluno::new(
            AlunoId::new(id),
            AlunoData::new(name, age, first_term_grade, second_term_grade, teacher_name, room_number),
        ))
    }
}

/// Converts an integer column read from SQLite into the narrower type used by the model.
#[cfg(test)]
fn sqlite_i32(row: &SqliteRow, column: &str) -> DbResult<i32> {
    let value: i64 = row.try_get(column).map_err(sqlite::map_sqlx_error)?;
    i32::try_from(value).map_err(|_| {
        DbError::DataIntegrityError(format!("Column {} out of range: {}", column, value))
    })
}

#[cfg(test)]
impl TryFrom<SqliteRow> for Aluno {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id = sqlite_i32(&row, "id")?;
        let name: String = row.try_get("nome").map_err(sqlite::map_sqlx_error)?;
        let age = sqlite_i32(&row, "idade")?;
        let first_term_grade: f64 =
            row.try_get("nota_primeiro_semestre").map_err(sqlite::map_sqlx_error)?;
        let second_term_grade: f64 =
            row.try_get("nota_segundo_semestre").map_err(sqlite::map_sqlx_error)?;
        let teacher_name: String = row.try_get("nome_professor").map_err(sqlite::map_sqlx_error)?;
        let room_number = sqlite_i32(&row, "numero_sala")?;

        Ok(Aluno::new(
            AlunoId::new(id),
            AlunoData::new(name, age, first_term_grade, second_term_grade, teacher_name, room_number),
        ))
    }
}

/// Gets all student records sorted by their identifier.
pub(crate) async fn get_alunos(ex: &mut Executor) -> DbResult<Vec<Aluno>> {
    let query_str = "
        SELECT id, nome, idade, nota_primeiro_semestre, nota_segundo_semestre, nome_professor,
            numero_sala
        FROM alunos
        ORDER BY id";
    match ex {
        Executor::Postgres(ex) => {
            let rows = sqlx::query(query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Aluno::try_from).collect()
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let rows =
                sqlx::query(query_str).fetch_all(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Aluno::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the student record identified by `id`.
pub(crate) async fn get_aluno(ex: &mut Executor, id: AlunoId) -> DbResult<Aluno> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, nome, idade, nota_primeiro_semestre, nota_segundo_semestre,
                    nome_professor, numero_sala
                FROM alunos
                WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Aluno::try_from(row)
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, nome, idade, nota_primeiro_semestre, nota_segundo_semestre,
                    nome_professor, numero_sala
                FROM alunos
                WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Aluno::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new student record with the contents in `data` and returns it along with the
/// identifier that the database assigned to it.
pub(crate) async fn create_aluno(ex: &mut Executor, data: AlunoData) -> DbResult<Aluno> {
    let id: i32 = match ex {
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO alunos (nome, idade, nota_primeiro_semestre, nota_segundo_semestre,
                    nome_professor, numero_sala)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(data.name())
                .bind(data.age())
                .bind(data.first_term_grade())
                .bind(data.second_term_grade())
                .bind(data.teacher_name())
                .bind(data.room_number())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO alunos (nome, idade, nota_primeiro_semestre, nota_segundo_semestre,
                    nome_professor, numero_sala)
                VALUES (?, ?, ?, ?, ?, ?)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(data.name())
                .bind(data.age())
                .bind(data.first_term_grade())
                .bind(data.second_term_grade())
                .bind(data.teacher_name())
                .bind(data.room_number())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            sqlite_i32(&row, "id")?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(Aluno::new(AlunoId::new(id), data))
}

/// Replaces every field of the student record identified by `id` with the contents of `data`.
///
/// Returns `DbError::NotFound` if there is no such record.
pub(crate) async fn update_aluno(ex: &mut Executor, id: AlunoId, data: AlunoData) -> DbResult<Aluno> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let query_str = "
                UPDATE alunos
                SET nome = $1, idade = $2, nota_primeiro_semestre = $3,
                    nota_segundo_semestre = $4, nome_professor = $5, numero_sala = $6
                WHERE id = $7";
            let done = sqlx::query(query_str)
                .bind(data.name())
                .bind(data.age())
                .bind(data.first_term_grade())
                .bind(data.second_term_grade())
                .bind(data.teacher_name())
                .bind(data.room_number())
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE alunos
                SET nome = ?, idade = ?, nota_primeiro_semestre = ?,
                    nota_segundo_semestre = ?, nome_professor = ?, numero_sala = ?
                WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(data.name())
                .bind(data.age())
                .bind(data.first_term_grade())
                .bind(data.second_term_grade())
                .bind(data.teacher_name())
                .bind(data.room_number())
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(Aluno::new(id, data)),
        n => Err(DbError::BackendError(format!("Update affected {} rows instead of 1", n))),
    }
}

/// Deletes the student record identified by `id`.
///
/// Returns `DbError::NotFound` if there is no such record.
pub(crate) async fn delete_aluno(ex: &mut Executor, id: AlunoId) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let done = sqlx::query("DELETE FROM alunos WHERE id = $1")
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let done = sqlx::query("DELETE FROM alunos WHERE id = ?")
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        n => Err(DbError::BackendError(format!("Delete affected {} rows instead of 1", n))),
    }
}

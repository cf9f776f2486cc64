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

//! High-level data types.

use derive_getters::Getters;
use derive_more::Constructor;
use iii_iv_core::model::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a student record.  Identifiers are assigned by the database on creation.
#[derive(Clone, Copy, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd))]
#[serde(transparent)]
pub(crate) struct AlunoId(i32);

impl AlunoId {
    /// Creates an identifier from its raw database representation.
    pub(crate) fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the identifier as an `i32` for use in queries.
    pub(crate) fn as_i32(self) -> i32 {
        self.0
    }
}

impl FromStr for AlunoId {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.parse::<i32>() {
            Ok(id) => Ok(Self(id)),
            Err(_) => Err(ModelError("ID inválido".to_owned())),
        }
    }
}

impl fmt::Display for AlunoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mutable contents of a student record.
///
/// Fields missing from a JSON document take their zero value, so that updates always replace the
/// whole record.
#[derive(Constructor, Debug, Default, Deserialize, Getters, Serialize)]
#[cfg_attr(test, derive(Clone, PartialEq))]
#[serde(default)]
pub(crate) struct AlunoData {
    /// Full name of the student.
    #[serde(rename = "nome")]
    name: String,

    /// Age of the student in years.
    #[serde(rename = "idade")]
    age: i32,

    /// Grade obtained in the first term.
    #[serde(rename = "nota_primeiro_semestre")]
    first_term_grade: f64,

    /// Grade obtained in the second term.
    #[serde(rename = "nota_segundo_semestre")]
    second_term_grade: f64,

    /// Name of the student's teacher.
    #[serde(rename = "nome_professor")]
    teacher_name: String,

    /// Number of the room the student attends.
    #[serde(rename = "numero_sala")]
    room_number: i32,
}

/// A stored student record.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Clone, Debug, Deserialize, Getters, PartialEq))]
pub(crate) struct Aluno {
    /// Identifier assigned by the database.
    id: AlunoId,

    /// Contents of the record.
    #[serde(flatten)]
    data: AlunoData,
}

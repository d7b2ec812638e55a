// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

//! Row-level decoding over tabular query results.
//!
//! A [`TabularResult`] is a query result positioned at a current row; a
//! [`RowCursor`] borrows it and exposes typed accessors for every supported
//! domain type, in two independent access modes:
//!
//! - sequential (`next_*`): consumes columns left to right, advancing an
//!   internal position by exactly one per call;
//! - random (`bool`, `int4`, ... taking a name or index): reads any column
//!   without touching the sequential position.
//!
//! # Nullable
//!
//! SQL NULL is uniformly `None`, never a type default. Every fetch on the
//! [`TabularResult`] contract returns the cell value and its NULL-ness as one
//! atomic `Result<Option<T>>`; there is no "was the last fetch NULL" side
//! channel to inspect after the fact, so no two-step fetch/check sequence
//! exists anywhere.
//!
//! # Types
//!
//! | Rust type   | Domain type |
//! |-------------|-------------|
//! | `bool`      | BOOLEAN     |
//! | `i32`       | INT4        |
//! | `i64`       | INT8        |
//! | `f32`       | FLOAT4      |
//! | `f64`       | FLOAT8      |
//! | `String`    | UTF8        |
//! | `DateTime`  | DATETIME    |
//! | `Blob`      | BLOB        |
//! | `Decimal`   | DECIMAL     |
//! | `Value`     | any         |
//!
//! Column indexes are 0-based at every surface. By-name lookups are
//! case-insensitive.

mod cursor;
mod decode;
mod index;
mod result;

pub use cursor::RowCursor;
pub use decode::Decode;
pub use index::ColumnIndex;
pub use result::TabularResult;

pub use rowcast_type::{Error, Result};

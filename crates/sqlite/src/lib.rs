// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

//! SQLite binding for the tabular result contract, over `rusqlite`.
//!
//! [`SqliteResult`] wraps a row the caller has already stepped to; query
//! execution, statement lifecycle and iteration stay with the caller.

mod result;

pub use result::SqliteResult;

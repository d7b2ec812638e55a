// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

pub mod error;
pub mod value;

pub use error::Error;
pub use value::{Blob, DateTime, Decimal, GetType, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;

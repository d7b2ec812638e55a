// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{Blob, DateTime, Decimal};

/// Every domain type a cell can be decoded to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Undefined,
	Boolean,
	Float4,
	Float8,
	Int4,
	Int8,
	Utf8,
	DateTime,
	Blob,
	Decimal,
}

impl Type {
	pub fn name(&self) -> &'static str {
		match self {
			Type::Undefined => "UNDEFINED",
			Type::Boolean => "BOOLEAN",
			Type::Float4 => "FLOAT4",
			Type::Float8 => "FLOAT8",
			Type::Int4 => "INT4",
			Type::Int8 => "INT8",
			Type::Utf8 => "UTF8",
			Type::DateTime => "DATETIME",
			Type::Blob => "BLOB",
			Type::Decimal => "DECIMAL",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Maps a Rust type to its domain [`Type`].
pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for bool {
	fn get_type() -> Type {
		Type::Boolean
	}
}

impl GetType for f32 {
	fn get_type() -> Type {
		Type::Float4
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Float8
	}
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int4
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int8
	}
}

impl GetType for String {
	fn get_type() -> Type {
		Type::Utf8
	}
}

impl GetType for DateTime {
	fn get_type() -> Type {
		Type::DateTime
	}
}

impl GetType for Blob {
	fn get_type() -> Type {
		Type::Blob
	}
}

impl GetType for Decimal {
	fn get_type() -> Type {
		Type::Decimal
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Type::Boolean.to_string(), "BOOLEAN");
		assert_eq!(Type::Int4.to_string(), "INT4");
		assert_eq!(Type::DateTime.to_string(), "DATETIME");
	}

	#[test]
	fn test_get_type() {
		assert_eq!(bool::get_type(), Type::Boolean);
		assert_eq!(i64::get_type(), Type::Int8);
		assert_eq!(String::get_type(), Type::Utf8);
		assert_eq!(Decimal::get_type(), Type::Decimal);
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod blob;
mod datetime;
mod decimal;
mod r#type;

pub use blob::Blob;
pub use datetime::DateTime;
pub use decimal::Decimal;
pub use r#type::{GetType, Type};

/// A cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A date and time value with nanosecond precision in UTC
	DateTime(DateTime),
	/// A binary large object (BLOB)
	Blob(Blob),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		Value::Float4(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn datetime(v: impl Into<DateTime>) -> Self {
		Value::DateTime(v.into())
	}

	pub fn blob(v: impl Into<Blob>) -> Self {
		Value::Blob(v.into())
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
			Value::DateTime(_) => Type::DateTime,
			Value::Blob(_) => Type::Blob,
			Value::Decimal(_) => Type::Decimal,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
			Value::Blob(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constructors() {
		assert_eq!(Value::bool(true), Value::Boolean(true));
		assert_eq!(Value::int4(5), Value::Int4(5));
		assert_eq!(Value::int8(5i64), Value::Int8(5));
		assert_eq!(Value::utf8("abc"), Value::Utf8("abc".to_string()));
	}

	#[test]
	fn test_get_type() {
		assert_eq!(Value::Undefined.get_type(), Type::Undefined);
		assert_eq!(Value::bool(false).get_type(), Type::Boolean);
		assert_eq!(Value::int8(1i64).get_type(), Type::Int8);
		assert_eq!(Value::blob(vec![1u8]).get_type(), Type::Blob);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Undefined.to_string(), "undefined");
		assert_eq!(Value::bool(true).to_string(), "true");
		assert_eq!(Value::int4(42).to_string(), "42");
		assert_eq!(Value::utf8("hello").to_string(), "hello");
	}
}

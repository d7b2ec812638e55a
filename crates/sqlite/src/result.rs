// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use rowcast_cursor::TabularResult;
use rowcast_type::{Blob, DateTime, Decimal, Error, Result, Type, Value};
use rusqlite::{Row, types::ValueRef};
use tracing::trace;

/// A [`TabularResult`] over the current `rusqlite` row.
///
/// SQLite stores cells by storage class, not declared column type, so the
/// mapping is by storage class: INTEGER feeds the boolean, integer, float and
/// datetime (Unix seconds) accessors, REAL the float accessors, TEXT the
/// string, datetime (ISO 8601) and decimal accessors, BLOB the blob
/// accessor. Anything else is a conversion error carrying the storage class
/// the cell actually had.
pub struct SqliteResult<'a> {
	row: &'a Row<'a>,
	names: Vec<String>,
}

impl<'a> SqliteResult<'a> {
	pub fn new(row: &'a Row<'a>) -> Self {
		let names = row.as_ref().column_names().into_iter().map(str::to_string).collect::<Vec<_>>();
		trace!(columns = names.len(), "wrapping sqlite row");
		Self {
			row,
			names,
		}
	}

	fn cell(&self, index: usize) -> Result<ValueRef<'_>> {
		if index >= self.names.len() {
			return Err(Error::OutOfRange {
				index,
				count: self.names.len(),
			});
		}
		self.row.get_ref(index).map_err(|err| Error::Backend {
			message: err.to_string(),
		})
	}

	fn storage_type(cell: ValueRef<'_>) -> Type {
		match cell {
			ValueRef::Null => Type::Undefined,
			ValueRef::Integer(_) => Type::Int8,
			ValueRef::Real(_) => Type::Float8,
			ValueRef::Text(_) => Type::Utf8,
			ValueRef::Blob(_) => Type::Blob,
		}
	}

	fn mismatch(&self, index: usize, cell: ValueRef<'_>, to: Type) -> Error {
		Error::Conversion {
			column: self.names[index].clone(),
			from: Self::storage_type(cell),
			to,
		}
	}

	fn text(&self, index: usize, bytes: &[u8]) -> Result<String> {
		String::from_utf8(bytes.to_vec()).map_err(|_| Error::Backend {
			message: format!("invalid UTF-8 in text column '{}'", self.names[index]),
		})
	}
}

impl TabularResult for SqliteResult<'_> {
	fn column_count(&self) -> usize {
		self.names.len()
	}

	fn column_name(&self, index: usize) -> Result<&str> {
		self.names.get(index).map(String::as_str).ok_or(Error::OutOfRange {
			index,
			count: self.names.len(),
		})
	}

	fn bool_at(&self, index: usize) -> Result<Option<bool>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Integer(v) => Ok(Some(v != 0)),
			other => Err(self.mismatch(index, other, Type::Boolean)),
		}
	}

	fn int4_at(&self, index: usize) -> Result<Option<i32>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Integer(v) => match i32::try_from(v) {
				Ok(v) => Ok(Some(v)),
				Err(_) => Err(self.mismatch(index, ValueRef::Integer(v), Type::Int4)),
			},
			other => Err(self.mismatch(index, other, Type::Int4)),
		}
	}

	fn int8_at(&self, index: usize) -> Result<Option<i64>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Integer(v) => Ok(Some(v)),
			other => Err(self.mismatch(index, other, Type::Int8)),
		}
	}

	fn float4_at(&self, index: usize) -> Result<Option<f32>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Real(v) => Ok(Some(v as f32)),
			ValueRef::Integer(v) => Ok(Some(v as f32)),
			other => Err(self.mismatch(index, other, Type::Float4)),
		}
	}

	fn float8_at(&self, index: usize) -> Result<Option<f64>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Real(v) => Ok(Some(v)),
			ValueRef::Integer(v) => Ok(Some(v as f64)),
			other => Err(self.mismatch(index, other, Type::Float8)),
		}
	}

	fn utf8_at(&self, index: usize) -> Result<Option<String>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Text(bytes) => Ok(Some(self.text(index, bytes)?)),
			other => Err(self.mismatch(index, other, Type::Utf8)),
		}
	}

	fn datetime_at(&self, index: usize) -> Result<Option<DateTime>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Integer(v) => Ok(Some(DateTime::from_timestamp(v))),
			ValueRef::Text(bytes) => {
				let text = self.text(index, bytes)?;
				match text.parse() {
					Ok(datetime) => Ok(Some(datetime)),
					Err(_) => Err(self.mismatch(index, ValueRef::Text(bytes), Type::DateTime)),
				}
			}
			other => Err(self.mismatch(index, other, Type::DateTime)),
		}
	}

	fn blob_at(&self, index: usize) -> Result<Option<Blob>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Blob(bytes) => Ok(Some(Blob::new(bytes.to_vec()))),
			other => Err(self.mismatch(index, other, Type::Blob)),
		}
	}

	fn decimal_at(&self, index: usize) -> Result<Option<Decimal>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Integer(v) => Ok(Some(Decimal::from(v))),
			ValueRef::Real(v) => match Decimal::try_from(v) {
				Ok(decimal) => Ok(Some(decimal)),
				Err(_) => Err(self.mismatch(index, ValueRef::Real(v), Type::Decimal)),
			},
			ValueRef::Text(bytes) => {
				let text = self.text(index, bytes)?;
				match text.parse() {
					Ok(decimal) => Ok(Some(decimal)),
					Err(_) => Err(self.mismatch(index, ValueRef::Text(bytes), Type::Decimal)),
				}
			}
			other => Err(self.mismatch(index, other, Type::Decimal)),
		}
	}

	fn value_at(&self, index: usize) -> Result<Option<Value>> {
		match self.cell(index)? {
			ValueRef::Null => Ok(None),
			ValueRef::Integer(v) => Ok(Some(Value::int8(v))),
			ValueRef::Real(v) => Ok(Some(Value::float8(v))),
			ValueRef::Text(bytes) => Ok(Some(Value::utf8(self.text(index, bytes)?))),
			ValueRef::Blob(bytes) => Ok(Some(Value::blob(bytes.to_vec()))),
		}
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

//! In-memory [`TabularResult`] fixture.
//!
//! The fixture is the reference implementation of the collaborator contract:
//! cells are [`Value`]s, `Undefined` is NULL, and a typed fetch against a
//! cell of a different variant is a conversion error. Conversion rules
//! between storage representations live in real adapters, not here.

use rowcast_cursor::TabularResult;
use rowcast_type::{Blob, DateTime, Decimal, Error, GetType, Result, Value};

/// An ordered in-memory table positioned at a current row.
///
/// Starts positioned at the first row; [`advance`](ResultFixture::advance)
/// steps to the next one.
pub struct ResultFixture {
	columns: Vec<String>,
	rows: Vec<Vec<Value>>,
	current: usize,
}

impl ResultFixture {
	pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			columns: columns.into_iter().map(Into::into).collect(),
			rows: Vec::new(),
			current: 0,
		}
	}

	pub fn row(mut self, values: Vec<Value>) -> Self {
		assert_eq!(values.len(), self.columns.len(), "row width must match column count");
		self.rows.push(values);
		self
	}

	/// Step to the next row; false once the rows are exhausted.
	pub fn advance(&mut self) -> bool {
		if self.current + 1 >= self.rows.len() {
			return false;
		}
		self.current += 1;
		true
	}

	fn cell(&self, index: usize) -> Result<&Value> {
		let row = self.rows.get(self.current).expect("fixture has no rows");
		row.get(index).ok_or(Error::OutOfRange {
			index,
			count: self.columns.len(),
		})
	}

	fn typed<T: GetType>(&self, index: usize, extract: fn(&Value) -> Option<T>) -> Result<Option<T>> {
		let cell = self.cell(index)?;
		if cell.is_undefined() {
			return Ok(None);
		}
		match extract(cell) {
			Some(value) => Ok(Some(value)),
			None => Err(Error::Conversion {
				column: self.columns[index].clone(),
				from: cell.get_type(),
				to: T::get_type(),
			}),
		}
	}
}

impl TabularResult for ResultFixture {
	fn column_count(&self) -> usize {
		self.columns.len()
	}

	fn column_name(&self, index: usize) -> Result<&str> {
		self.columns.get(index).map(String::as_str).ok_or(Error::OutOfRange {
			index,
			count: self.columns.len(),
		})
	}

	fn bool_at(&self, index: usize) -> Result<Option<bool>> {
		self.typed(index, |cell| match cell {
			Value::Boolean(v) => Some(*v),
			_ => None,
		})
	}

	fn int4_at(&self, index: usize) -> Result<Option<i32>> {
		self.typed(index, |cell| match cell {
			Value::Int4(v) => Some(*v),
			_ => None,
		})
	}

	fn int8_at(&self, index: usize) -> Result<Option<i64>> {
		self.typed(index, |cell| match cell {
			Value::Int8(v) => Some(*v),
			_ => None,
		})
	}

	fn float4_at(&self, index: usize) -> Result<Option<f32>> {
		self.typed(index, |cell| match cell {
			Value::Float4(v) => Some(*v),
			_ => None,
		})
	}

	fn float8_at(&self, index: usize) -> Result<Option<f64>> {
		self.typed(index, |cell| match cell {
			Value::Float8(v) => Some(*v),
			_ => None,
		})
	}

	fn utf8_at(&self, index: usize) -> Result<Option<String>> {
		self.typed(index, |cell| match cell {
			Value::Utf8(v) => Some(v.clone()),
			_ => None,
		})
	}

	fn datetime_at(&self, index: usize) -> Result<Option<DateTime>> {
		self.typed(index, |cell| match cell {
			Value::DateTime(v) => Some(*v),
			_ => None,
		})
	}

	fn blob_at(&self, index: usize) -> Result<Option<Blob>> {
		self.typed(index, |cell| match cell {
			Value::Blob(v) => Some(v.clone()),
			_ => None,
		})
	}

	fn decimal_at(&self, index: usize) -> Result<Option<Decimal>> {
		self.typed(index, |cell| match cell {
			Value::Decimal(v) => Some(v.clone()),
			_ => None,
		})
	}

	fn value_at(&self, index: usize) -> Result<Option<Value>> {
		let cell = self.cell(index)?;
		if cell.is_undefined() {
			return Ok(None);
		}
		Ok(Some(cell.clone()))
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use rowcast_type::{Blob, DateTime, Decimal, Result, Value};

use crate::{index::ColumnIndex, result::TabularResult};

/// A typed cursor over the current row of a [`TabularResult`].
///
/// Holds a borrowed result plus a sequential position starting at 0 ("no
/// column consumed yet"). Sequential accessors consume the next unread
/// column; random accessors read any column by name or 0-based index and
/// never touch the sequential position. Create one per row, or [`reset`] the
/// same cursor when the underlying result advances.
///
/// Not for concurrent use; at most one row-decoding operation may be in
/// flight against a cursor at a time.
///
/// [`reset`]: RowCursor::reset
pub struct RowCursor<'a, R: TabularResult + ?Sized> {
	result: &'a R,
	position: usize,
}

impl<'a, R: TabularResult + ?Sized> RowCursor<'a, R> {
	pub fn new(result: &'a R) -> Self {
		Self {
			result,
			position: 0,
		}
	}

	/// Rewind the sequential position for the next row.
	pub fn reset(&mut self) {
		self.position = 0;
	}

	/// Number of sequential columns consumed so far.
	pub fn position(&self) -> usize {
		self.position
	}

	pub fn column_count(&self) -> usize {
		self.result.column_count()
	}

	/// Every column name, lower-cased, in declared left-to-right order.
	pub fn column_names(&self) -> Result<Vec<String>> {
		(0..self.result.column_count())
			.map(|index| Ok(self.result.column_name(index)?.to_ascii_lowercase()))
			.collect()
	}

	/// Normalized name for error messages; falls back to the index when the
	/// result cannot name the column.
	pub(crate) fn column_label(&self, index: usize) -> String {
		self.result
			.column_name(index)
			.map(|name| name.to_ascii_lowercase())
			.unwrap_or_else(|_| index.to_string())
	}

	fn advance(&mut self) -> usize {
		let index = self.position;
		self.position += 1;
		index
	}
}

// Sequential accessors. Each consumes exactly one column.
impl<R: TabularResult + ?Sized> RowCursor<'_, R> {
	pub fn next_bool(&mut self) -> Result<Option<bool>> {
		let index = self.advance();
		self.result.bool_at(index)
	}

	pub fn next_int4(&mut self) -> Result<Option<i32>> {
		let index = self.advance();
		self.result.int4_at(index)
	}

	pub fn next_int8(&mut self) -> Result<Option<i64>> {
		let index = self.advance();
		self.result.int8_at(index)
	}

	pub fn next_float4(&mut self) -> Result<Option<f32>> {
		let index = self.advance();
		self.result.float4_at(index)
	}

	pub fn next_float8(&mut self) -> Result<Option<f64>> {
		let index = self.advance();
		self.result.float8_at(index)
	}

	pub fn next_utf8(&mut self) -> Result<Option<String>> {
		let index = self.advance();
		self.result.utf8_at(index)
	}

	pub fn next_datetime(&mut self) -> Result<Option<DateTime>> {
		let index = self.advance();
		self.result.datetime_at(index)
	}

	pub fn next_blob(&mut self) -> Result<Option<Blob>> {
		let index = self.advance();
		self.result.blob_at(index)
	}

	pub fn next_decimal(&mut self) -> Result<Option<Decimal>> {
		let index = self.advance();
		self.result.decimal_at(index)
	}

	pub fn next_value(&mut self) -> Result<Option<Value>> {
		let index = self.advance();
		self.result.value_at(index)
	}
}

// Random accessors. Take a name or 0-based index; sequential position is
// neither read nor written.
impl<R: TabularResult + ?Sized> RowCursor<'_, R> {
	pub fn bool(&self, index: impl ColumnIndex) -> Result<Option<bool>> {
		self.result.bool_at(index.resolve(self.result)?)
	}

	pub fn int4(&self, index: impl ColumnIndex) -> Result<Option<i32>> {
		self.result.int4_at(index.resolve(self.result)?)
	}

	pub fn int8(&self, index: impl ColumnIndex) -> Result<Option<i64>> {
		self.result.int8_at(index.resolve(self.result)?)
	}

	pub fn float4(&self, index: impl ColumnIndex) -> Result<Option<f32>> {
		self.result.float4_at(index.resolve(self.result)?)
	}

	pub fn float8(&self, index: impl ColumnIndex) -> Result<Option<f64>> {
		self.result.float8_at(index.resolve(self.result)?)
	}

	pub fn utf8(&self, index: impl ColumnIndex) -> Result<Option<String>> {
		self.result.utf8_at(index.resolve(self.result)?)
	}

	pub fn datetime(&self, index: impl ColumnIndex) -> Result<Option<DateTime>> {
		self.result.datetime_at(index.resolve(self.result)?)
	}

	pub fn blob(&self, index: impl ColumnIndex) -> Result<Option<Blob>> {
		self.result.blob_at(index.resolve(self.result)?)
	}

	pub fn decimal(&self, index: impl ColumnIndex) -> Result<Option<Decimal>> {
		self.result.decimal_at(index.resolve(self.result)?)
	}

	pub fn value(&self, index: impl ColumnIndex) -> Result<Option<Value>> {
		self.result.value_at(index.resolve(self.result)?)
	}
}

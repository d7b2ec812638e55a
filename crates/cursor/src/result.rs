// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use rowcast_type::{Blob, DateTime, Decimal, Result, Value};

/// Contract the cursor requires from a tabular query result positioned at a
/// current row.
///
/// Implementations own column metadata and raw cell access; lifecycle of the
/// underlying query stays with whoever issued it. The cursor only ever
/// borrows a result.
///
/// Every typed fetch returns the cell and its NULL-ness atomically:
/// `Ok(None)` is a SQL NULL, `Ok(Some(v))` a present value coerced to the
/// requested type. An index past the column count is
/// [`Error::OutOfRange`](rowcast_type::Error::OutOfRange); a cell that cannot
/// be represented as the requested type is
/// [`Error::Conversion`](rowcast_type::Error::Conversion). All indexes are
/// 0-based.
pub trait TabularResult {
	fn column_count(&self) -> usize;

	/// Column name in original case, by 0-based index.
	fn column_name(&self, index: usize) -> Result<&str>;

	fn bool_at(&self, index: usize) -> Result<Option<bool>>;

	fn int4_at(&self, index: usize) -> Result<Option<i32>>;

	fn int8_at(&self, index: usize) -> Result<Option<i64>>;

	fn float4_at(&self, index: usize) -> Result<Option<f32>>;

	fn float8_at(&self, index: usize) -> Result<Option<f64>>;

	fn utf8_at(&self, index: usize) -> Result<Option<String>>;

	fn datetime_at(&self, index: usize) -> Result<Option<DateTime>>;

	fn blob_at(&self, index: usize) -> Result<Option<Blob>>;

	fn decimal_at(&self, index: usize) -> Result<Option<Decimal>>;

	/// The cell as a dynamically typed [`Value`], `None` on NULL.
	fn value_at(&self, index: usize) -> Result<Option<Value>>;
}

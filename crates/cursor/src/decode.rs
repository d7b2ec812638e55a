// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use rowcast_type::{Blob, DateTime, Decimal, Error, Result, Value};

use crate::{cursor::RowCursor, result::TabularResult};

/// A domain type that can be pulled sequentially from a [`RowCursor`].
///
/// Decoding is always an explicit call; nothing is injected at call sites.
/// Decoders are stateless, so any number of them may work against the same
/// cursor as long as sequential calls happen in one agreed order. Rust
/// evaluates function arguments and struct-literal fields left to right, so a
/// row can be decoded into a struct with one sequential call per field, in
/// declared column order:
///
/// ```ignore
/// let user = User {
/// 	id: i64::decode_required(&mut cursor)?,
/// 	name: String::decode(&mut cursor)?,
/// 	active: bool::decode_required(&mut cursor)?,
/// };
/// ```
pub trait Decode: Sized {
	/// Decode the next unread column, `None` on NULL.
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>>;

	/// Decode the next unread column, failing with
	/// [`Error::MissingValue`](rowcast_type::Error::MissingValue) on NULL.
	fn decode_required<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Self> {
		let index = cursor.position();
		match Self::decode(cursor)? {
			Some(value) => Ok(value),
			None => Err(Error::MissingValue {
				column: cursor.column_label(index),
			}),
		}
	}
}

impl Decode for bool {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_bool()
	}
}

impl Decode for i32 {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_int4()
	}
}

impl Decode for i64 {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_int8()
	}
}

impl Decode for f32 {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_float4()
	}
}

impl Decode for f64 {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_float8()
	}
}

impl Decode for String {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_utf8()
	}
}

impl Decode for DateTime {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_datetime()
	}
}

impl Decode for Blob {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_blob()
	}
}

impl Decode for Decimal {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_decimal()
	}
}

impl Decode for Value {
	fn decode<R: TabularResult + ?Sized>(cursor: &mut RowCursor<'_, R>) -> Result<Option<Self>> {
		cursor.next_value()
	}
}

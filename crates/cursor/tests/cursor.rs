// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use rowcast_cursor::RowCursor;
use rowcast_testing::ResultFixture;
use rowcast_type::{Error, Type, Value};

fn user_row() -> ResultFixture {
	ResultFixture::new(["id", "Name", "active"]).row(vec![
		Value::int4(5),
		Value::Undefined,
		Value::bool(true),
	])
}

#[test]
fn sequential_reads_in_declared_order() {
	let result = user_row();
	let mut cursor = RowCursor::new(&result);

	assert_eq!(cursor.next_int4().unwrap(), Some(5));
	assert_eq!(cursor.next_utf8().unwrap(), None);
	assert_eq!(cursor.next_bool().unwrap(), Some(true));
	assert_eq!(cursor.position(), 3);
}

#[test]
fn null_is_absent_for_every_requested_type() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	// Column 1 is NULL; the requested type must not matter.
	assert_eq!(cursor.utf8(1).unwrap(), None);
	assert_eq!(cursor.int8(1).unwrap(), None);
	assert_eq!(cursor.bool(1).unwrap(), None);
	assert_eq!(cursor.value(1).unwrap(), None);
}

#[test]
fn random_access_by_name_and_index() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	assert_eq!(cursor.utf8("name").unwrap(), None);
	assert_eq!(cursor.int4(0).unwrap(), Some(5));
	assert_eq!(cursor.bool("active").unwrap(), Some(true));
}

#[test]
fn name_lookup_is_case_insensitive() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	assert_eq!(cursor.bool("ACTIVE").unwrap(), Some(true));
	assert_eq!(cursor.utf8("nAmE").unwrap(), None);
	assert_eq!(cursor.int4("ID").unwrap(), Some(5));
}

#[test]
fn unknown_name_is_column_not_found() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	assert_eq!(
		cursor.int4("missing").unwrap_err(),
		Error::ColumnNotFound {
			name: "missing".to_string()
		}
	);
}

#[test]
fn type_mismatch_is_conversion_error() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	// Column 2 holds a boolean.
	assert_eq!(
		cursor.int4(2).unwrap_err(),
		Error::Conversion {
			column: "active".to_string(),
			from: Type::Boolean,
			to: Type::Int4,
		}
	);
}

#[test]
fn random_access_does_not_move_sequential_position() {
	let result = user_row();
	let mut cursor = RowCursor::new(&result);

	assert_eq!(cursor.next_int4().unwrap(), Some(5));

	// Arbitrary interleaved random reads, idempotent and side-effect free.
	assert_eq!(cursor.int4(0).unwrap(), Some(5));
	assert_eq!(cursor.int4(0).unwrap(), Some(5));
	assert_eq!(cursor.bool("active").unwrap(), Some(true));
	assert_eq!(cursor.position(), 1);

	// The next sequential read still consumes column 1.
	assert_eq!(cursor.next_utf8().unwrap(), None);
	assert_eq!(cursor.next_bool().unwrap(), Some(true));
}

#[test]
fn sequential_past_last_column_is_out_of_range() {
	let result = user_row();
	let mut cursor = RowCursor::new(&result);

	cursor.next_int4().unwrap();
	cursor.next_utf8().unwrap();
	cursor.next_bool().unwrap();

	assert_eq!(
		cursor.next_utf8().unwrap_err(),
		Error::OutOfRange {
			index: 3,
			count: 3
		}
	);
}

#[test]
fn random_access_past_last_column_is_out_of_range() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	assert_eq!(
		cursor.int4(7).unwrap_err(),
		Error::OutOfRange {
			index: 7,
			count: 3
		}
	);
}

#[test]
fn column_names_are_normalized_in_declared_order() {
	let result = user_row();
	let cursor = RowCursor::new(&result);

	let names = cursor.column_names().unwrap();
	assert_eq!(names, vec!["id", "name", "active"]);
	assert_eq!(names.len(), cursor.column_count());
}

#[test]
fn reset_rewinds_for_the_next_row() {
	let mut result = ResultFixture::new(["id"])
		.row(vec![Value::int4(1)])
		.row(vec![Value::int4(2)]);

	let mut cursor = RowCursor::new(&result);
	assert_eq!(cursor.next_int4().unwrap(), Some(1));
	drop(cursor);

	assert!(result.advance());
	let mut cursor = RowCursor::new(&result);
	assert_eq!(cursor.next_int4().unwrap(), Some(2));

	cursor.reset();
	assert_eq!(cursor.position(), 0);
	assert_eq!(cursor.next_int4().unwrap(), Some(2));
}

#[test]
fn dynamic_value_access() {
	let result = user_row();
	let mut cursor = RowCursor::new(&result);

	assert_eq!(cursor.next_value().unwrap(), Some(Value::int4(5)));
	assert_eq!(cursor.next_value().unwrap(), None);
	assert_eq!(cursor.value("active").unwrap(), Some(Value::bool(true)));
}

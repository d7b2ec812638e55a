// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use crate::value::Type;

/// Errors surfaced while decoding a row.
///
/// All variants are fatal to the operation that raised them; nothing here is
/// retried or suppressed further up the stack.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("column index {index} out of range, row has {count} columns")]
	OutOfRange {
		index: usize,
		count: usize,
	},

	#[error("column '{name}' not found")]
	ColumnNotFound {
		name: String,
	},

	#[error("cannot convert {from} column '{column}' to {to}")]
	Conversion {
		column: String,
		from: Type,
		to: Type,
	},

	#[error("unexpected NULL in column '{column}'")]
	MissingValue {
		column: String,
	},

	#[error("backend error: {message}")]
	Backend {
		message: String,
	},
}

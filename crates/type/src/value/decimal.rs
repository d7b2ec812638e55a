// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// An arbitrary-precision decimal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Self(inner)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimal {
		self.0
	}

	pub fn to_f64(&self) -> Option<f64> {
		self.0.to_f64()
	}

	pub fn to_i64(&self) -> Option<i64> {
		self.0.to_i64()
	}
}

/// Error returned when a decimal literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError;

impl Display for ParseDecimalError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("invalid decimal literal")
	}
}

impl std::error::Error for ParseDecimalError {}

impl FromStr for Decimal {
	type Err = ParseDecimalError;

	/// Leading and trailing whitespace is ignored, as are `_` digit
	/// separators.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let raw = s.trim();
		let cleaned = if raw.as_bytes().contains(&b'_') {
			raw.replace('_', "")
		} else {
			raw.to_string()
		};

		if cleaned.is_empty() {
			return Err(ParseDecimalError);
		}

		BigDecimal::from_str(&cleaned).map(Decimal).map_err(|_| ParseDecimalError)
	}
}

impl From<i32> for Decimal {
	fn from(v: i32) -> Self {
		Self(BigDecimal::from(v))
	}
}

impl From<i64> for Decimal {
	fn from(v: i64) -> Self {
		Self(BigDecimal::from(v))
	}
}

impl TryFrom<f64> for Decimal {
	type Error = ParseDecimalError;

	fn try_from(v: f64) -> Result<Self, Self::Error> {
		BigDecimal::try_from(v).map(Decimal).map_err(|_| ParseDecimalError)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

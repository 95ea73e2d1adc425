//! Money calculation utilities using rust_decimal for precision
//!
//! All payroll totals are computed with `Decimal` internally, then
//! converted to `f64` for storage/serialization.

use rust_decimal::prelude::*;

use crate::utils::AppError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum accepted monetary value per field
const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field_name: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::Validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a monetary amount: finite, non-negative, bounded
pub fn validate_amount(value: f64, field_name: &str) -> Result<(), AppError> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::Validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum a sequence of f64 line-item values precisely
pub fn sum_valores<'a, I>(valores: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    to_f64(valores.into_iter().map(|v| to_decimal(*v)).sum())
}

/// salarioNeto = salarioBruto + totalDevengos - totalDeducciones
pub fn salario_neto(salario_bruto: f64, total_devengos: f64, total_deducciones: f64) -> f64 {
    to_f64(to_decimal(salario_bruto) + to_decimal(total_devengos) - to_decimal(total_deducciones))
}

// src/bond.rs
//! Discrete-Compounding Bond Accrual
//!
//! Closed-form accumulation of a bond bought at a known price: the value
//! compounds once per completed payment period at the periodic yield
//! `y / payment_freq`. Fractional periods do not accrue.

use crate::error::{validation::*, SimError, SimResult};

/// Value of a bond `time_elapsed` years after purchase at `price`
///
/// Compounds once per completed payment period:
/// ```text
/// v = price * (1 + y / freq)^floor(time_elapsed * freq)
/// ```
///
/// `payment_freq` is payments per year (2 = semiannual, 4 = quarterly,
/// 0.5 = once every two years).
///
/// # Errors
///
/// `SimError::InvalidParameter` for a non-positive price or payment frequency,
/// negative elapsed time, or a non-finite yield.
pub fn accrued_value(
    price: f64,
    payment_freq: f64,
    time_elapsed: f64,
    annual_yield: f64,
) -> SimResult<f64> {
    validate_positive("price", price)?;
    validate_positive("payment_freq", payment_freq)?;
    validate_non_negative("time_elapsed", time_elapsed)?;
    validate_finite("annual_yield", annual_yield)?;

    let periods = (time_elapsed * payment_freq).floor() as u32;
    let mut value = price;
    for _ in 0..periods {
        value *= 1.0 + annual_yield / payment_freq;
    }
    Ok(value)
}

/// A bond defined by its purchase price and payment schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    /// Price at purchase (t = 0)
    pub price: f64,
    /// Maturity in years
    pub maturity: f64,
    /// Payments per year
    pub payment_freq: f64,
    /// Annual yield
    pub annual_yield: f64,
}

impl Bond {
    /// Construct a bond from its purchase price
    pub fn new(
        price: f64,
        maturity: f64,
        payment_freq: f64,
        annual_yield: f64,
    ) -> SimResult<Self> {
        validate_positive("price", price)?;
        validate_non_negative("maturity", maturity)?;
        validate_positive("payment_freq", payment_freq)?;
        validate_finite("annual_yield", annual_yield)?;
        Ok(Bond {
            price,
            maturity,
            payment_freq,
            annual_yield,
        })
    }

    /// Construct a bond by discounting back from its face value
    ///
    /// Not implemented; the constructor from price is the supported surface.
    pub fn from_face_value(
        _face_value: f64,
        _maturity: f64,
        _payment_freq: f64,
        _annual_yield: f64,
    ) -> SimResult<Self> {
        Err(SimError::Unsupported {
            operation: "from_face_value".to_string(),
            context: "bond construction supports purchase price only".to_string(),
        })
    }

    /// Accrued value `time` years after purchase
    ///
    /// Past maturity the bond stops compounding, so any later time returns
    /// the maturity value.
    pub fn value_at(&self, time: f64) -> SimResult<f64> {
        validate_non_negative("time", time)?;
        let clamped = if time <= self.maturity {
            time
        } else {
            self.maturity
        };
        accrued_value(self.price, self.payment_freq, clamped, self.annual_yield)
    }

    /// Accrued value at maturity
    pub fn value_at_maturity(&self) -> SimResult<f64> {
        accrued_value(
            self.price,
            self.payment_freq,
            self.maturity,
            self.annual_yield,
        )
    }

    /// `(time, value)` pairs at whole-year marks from 0 to `until` inclusive
    ///
    /// Intended for an external presentation layer; see [`crate::output`].
    pub fn value_series(&self, until: f64) -> SimResult<Vec<(f64, f64)>> {
        validate_non_negative("until", until)?;
        let years = until.floor() as u32;
        let mut series = Vec::with_capacity(years as usize + 1);
        for t in 0..=years {
            let time = f64::from(t);
            series.push((time, self.value_at(time)?));
        }
        Ok(series)
    }
}

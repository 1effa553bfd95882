// Copyright (c) 2019-2022  resdhw contributors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Draw schedules and mains temperature normals
============================================

The normalized hourly draw-fraction profile, the peak flow it implies,
and the mains temperature normals wrapper accepting either a 365-entry
daily series or a 12-entry monthly series from the weather provider.

*/

use serde_derive::{Deserialize, Serialize};

use crate::error::{DhwError, Result};
use crate::vecops::{veckmul, vecsum};

/// Hourly hot water draw profile, midnight to midnight.
///
/// Morning and evening peaks from field-metered draw events; the raw
/// weights are normalized before use.
pub const HOURLY_DRAW_PROFILE: [f32; 24] = [
    0.012, 0.006, 0.004, 0.005, 0.010, 0.034, 0.078, 0.087, 0.080, 0.067, 0.056, 0.047, 0.040,
    0.035, 0.033, 0.031, 0.038, 0.051, 0.060, 0.060, 0.055, 0.048, 0.038, 0.026,
];

/// Number of days per month in the normals year (non-leap).
pub const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Hourly draw fractions normalized to sum exactly to one.
pub fn normalized_draw_fractions() -> Vec<f32> {
    let total = vecsum(&HOURLY_DRAW_PROFILE);
    veckmul(&HOURLY_DRAW_PROFILE, 1.0 / total)
}

/// Peak draw rate implied by a daily total and the hourly profile [gal/min].
pub fn peak_flow_gpm(gpd: f32, fractions: &[f32]) -> f32 {
    let peak_frac = fractions.iter().cloned().fold(0.0_f32, f32::max);
    gpd * peak_frac / 60.0
}

/// Mains water temperature normals, one value per day of a non-leap year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainsNormals {
    daily: Vec<f32>,
}

impl MainsNormals {
    /// Wraps a 365-entry daily series; any other length is rejected.
    pub fn from_daily(daily: Vec<f32>) -> Result<Self> {
        if daily.len() != 365 {
            return Err(DhwError::WrongInput(format!(
                "daily mains normals must hold 365 values, got {}",
                daily.len()
            )));
        }
        Ok(MainsNormals { daily })
    }

    /// Expands 12 monthly normals into a daily series, each month flat.
    pub fn from_monthly(monthly: &[f32]) -> Result<Self> {
        if monthly.len() != 12 {
            return Err(DhwError::WrongInput(format!(
                "monthly mains normals must hold 12 values, got {}",
                monthly.len()
            )));
        }
        let mut daily = Vec::with_capacity(365);
        for (temp, ndays) in monthly.iter().zip(DAYS_PER_MONTH.iter()) {
            daily.extend(std::iter::repeat(*temp).take(*ndays as usize));
        }
        Ok(MainsNormals { daily })
    }

    /// Daily series view.
    pub fn daily(&self) -> &[f32] {
        &self.daily
    }
}

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
Error type for DHW and appliance end-use calculations
=====================================================

Calculation functions reject bad inputs at their boundary and never
return partial results; the orchestrator treats any error as fatal for
the whole setup.

*/

use std::fmt;

/// Errors raised by the DHW and appliance end-use model
#[derive(Debug, Clone, PartialEq)]
pub enum DhwError {
    /// Out-of-range or inconsistent numeric input
    WrongInput(String),
    /// Degenerate input that would produce a non-finite result
    DegenerateInput(String),
    /// Unknown fuel type string
    FuelUnknown(String),
    /// Unknown ruleset version string
    VersionUnknown(String),
    /// Unknown hot water distribution topology string
    DistributionUnknown(String),
    /// Unknown control type string
    ControlUnknown(String),
    /// Unknown water heater type string
    HeaterTypeUnknown(String),
    /// Could not parse a number
    ParseNumber(String),
}

impl fmt::Display for DhwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DhwError::*;
        match self {
            WrongInput(detail) => write!(f, "Wrong input: {}", detail),
            DegenerateInput(detail) => write!(f, "Degenerate input: {}", detail),
            FuelUnknown(s) => write!(f, "Unknown fuel type: \"{}\"", s),
            VersionUnknown(s) => write!(f, "Unknown ruleset version: \"{}\"", s),
            DistributionUnknown(s) => write!(f, "Unknown distribution topology: \"{}\"", s),
            ControlUnknown(s) => write!(f, "Unknown control type: \"{}\"", s),
            HeaterTypeUnknown(s) => write!(f, "Unknown water heater type: \"{}\"", s),
            ParseNumber(s) => write!(f, "Could not parse number from \"{}\"", s),
        }
    }
}

impl std::error::Error for DhwError {}

impl From<std::num::ParseFloatError> for DhwError {
    fn from(err: std::num::ParseFloatError) -> Self {
        DhwError::ParseNumber(err.to_string())
    }
}

/// Result alias using [`DhwError`]
pub type Result<T> = std::result::Result<T, DhwError>;

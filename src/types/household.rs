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

//! Household descriptor driving the occupancy-based regressions.

use serde_derive::{Deserialize, Serialize};

use crate::error::{DhwError, Result};

/// Household and dwelling geometry descriptor.
///
/// Bedroom count drives every appliance and hot water regression;
/// floor area, floor count and basement status only enter the
/// reference piping length of the distribution model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Number of bedrooms
    pub nbeds: u32,
    /// Number of bathrooms (half baths count 0.5)
    pub nbaths: f32,
    /// Conditioned floor area [ft2]
    pub cfa: f32,
    /// Number of conditioned floors
    pub ncfl: f32,
    /// Dwelling has an unconditioned basement
    #[serde(default)]
    pub has_uncond_bsmnt: bool,
}

impl Household {
    /// Checks field ranges; a descriptor failing here aborts the setup.
    pub fn validate(&self) -> Result<()> {
        if self.nbaths <= 0.0 {
            return Err(DhwError::WrongInput(format!(
                "number of bathrooms must be positive, got {}",
                self.nbaths
            )));
        }
        if self.cfa <= 0.0 {
            return Err(DhwError::WrongInput(format!(
                "conditioned floor area must be positive, got {}",
                self.cfa
            )));
        }
        if self.ncfl < 1.0 {
            return Err(DhwError::WrongInput(format!(
                "number of conditioned floors must be at least 1, got {}",
                self.ncfl
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> Household {
        Household {
            nbeds: 3,
            nbaths: 2.0,
            cfa: 2400.0,
            ncfl: 2.0,
            has_uncond_bsmnt: false,
        }
    }

    #[test]
    fn valid_household() {
        assert!(household().validate().is_ok());
    }

    #[test]
    fn rejects_bad_geometry() {
        let mut h = household();
        h.cfa = 0.0;
        assert!(h.validate().is_err());
        let mut h = household();
        h.ncfl = 0.0;
        assert!(h.validate().is_err());
        let mut h = household();
        h.nbaths = -1.0;
        assert!(h.validate().is_err());
    }
}

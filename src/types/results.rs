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

//! Result records returned by the calculation modules and handed,
//! read-only, to the engine binding layer.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::error::{DhwError, Result};
use crate::types::basic::RulesetVersion;

/// Annual consumption and conditioned-space heat gain split for one
/// appliance.
///
/// The fraction of energy that is neither sensible nor latent is lost
/// to exhaust or drain and never gained by the conditioned space, so
/// `frac_sensible + frac_latent <= 1` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplianceEnergyUse {
    /// Annual electricity [kWh/yr]
    pub annual_kwh: f32,
    /// Annual fuel use [therm/yr]
    pub annual_therm: f32,
    /// Sensible heat gain fraction
    pub frac_sensible: f32,
    /// Latent heat gain fraction
    pub frac_latent: f32,
    /// Hot water draw attributed to the appliance [gal/day]
    pub gpd: f32,
}

impl ApplianceEnergyUse {
    /// Builds a result, rejecting a heat-gain split exceeding unity.
    pub fn new(
        annual_kwh: f32,
        annual_therm: f32,
        frac_sensible: f32,
        frac_latent: f32,
        gpd: f32,
    ) -> Result<Self> {
        if frac_sensible < 0.0 || frac_latent < 0.0 || frac_sensible + frac_latent > 1.0 {
            return Err(DhwError::WrongInput(format!(
                "heat gain fractions must be non-negative and sum to at most 1, got {} + {}",
                frac_sensible, frac_latent
            )));
        }
        Ok(ApplianceEnergyUse {
            annual_kwh,
            annual_therm,
            frac_sensible,
            frac_latent,
            gpd,
        })
    }
}

impl fmt::Display for ApplianceEnergyUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ kWh: {:.1}, therm: {:.1}, sens: {:.3}, lat: {:.3}, gpd: {:.2} }}",
            self.annual_kwh, self.annual_therm, self.frac_sensible, self.frac_latent, self.gpd
        )
    }
}

/// Drain water heat recovery adjustment factors (all unit-less).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DwhrFactors {
    /// Efficiency adjustment for low-flow fixtures
    pub eff_adj: f32,
    /// Fraction of hot water use impacted by the unit.
    /// Quadratic in bedrooms; not clamped, callers bound the bedroom range.
    pub impacted_fraction: f32,
    /// Piping loss coefficient
    pub piping_loss_coefficient: f32,
    /// Placement factor (equal-flow or unequal-flow)
    pub location_factor: f32,
    /// Connected-facilities factor
    pub fixture_factor: f32,
}

/// Water heater thermal parameters derived from nameplate ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterHeaterParameters {
    /// Tank loss coefficient per surface area [Btu/hr-ft2-F]; 0 for tankless
    pub u: f32,
    /// Tank loss coefficient [Btu/hr-F]; 0 for tankless
    pub ua: f32,
    /// Combustion or conversion efficiency
    pub eta_c: f32,
    /// Input capacity [kBtu/hr]
    pub input_capacity: f32,
}

/// Aggregate setup record produced by the orchestrator.
///
/// Everything the engine binding layer needs to materialize loads,
/// water use connections and schedules for one dwelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DhwSetup {
    /// Ruleset version every formula branch was evaluated under
    pub ruleset: RulesetVersion,
    /// Clothes washer result
    pub clothes_washer: ApplianceEnergyUse,
    /// Clothes dryer result
    pub clothes_dryer: ApplianceEnergyUse,
    /// Dishwasher result
    pub dishwasher: ApplianceEnergyUse,
    /// Cooking range / oven result
    pub range_oven: ApplianceEnergyUse,
    /// Refrigerator result
    pub refrigerator: ApplianceEnergyUse,
    /// Mixed water draw at fixtures [gal/day]
    pub fixtures_gpd: f32,
    /// Distribution waste draw [gal/day]
    pub distribution_waste_gpd: f32,
    /// Total hot water draw, fixtures + waste + appliances [gal/day]
    pub total_hot_water_gpd: f32,
    /// Peak draw rate implied by the hourly profile [gal/min]
    pub peak_flow_gpm: f32,
    /// Recirculation pump consumption [kWh/yr]
    pub recirc_pump_kwh: f32,
    /// Distribution energy consumption adjustment factor
    pub energy_consumption_adjustment: f32,
    /// DWHR adjustment factors when a unit is installed
    pub dwhr_factors: Option<DwhrFactors>,
    /// Water heater inlet temperature, one value per day [F]
    pub inlet_temperatures: Vec<f32>,
    /// Fraction of fixture draw supplied by the heater, one value per day
    pub mixed_water_fractions: Vec<f32>,
    /// Normalized hourly draw fractions, 24 values summing to 1
    pub draw_fractions: Vec<f32>,
    /// Derived water heater parameters
    pub water_heater: WaterHeaterParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_fraction_sum_over_unity() {
        assert!(ApplianceEnergyUse::new(100.0, 0.0, 0.8, 0.3, 0.0).is_err());
        assert!(ApplianceEnergyUse::new(100.0, 0.0, -0.1, 0.3, 0.0).is_err());
        assert!(ApplianceEnergyUse::new(100.0, 0.0, 0.72, 0.08, 0.0).is_ok());
    }
}

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
Hot water distribution model
============================

Gallons per day for fixtures and distribution waste, drain water heat
recovery adjustment, the daily water heater inlet temperature series,
mixed water fractions and recirculation pump energy.

The empirical constants in the waste tables encode regression fits and
are reproduced verbatim; none of them is derivable.

*/

use crate::error::{DhwError, Result};
use crate::types::{
    Distribution, DistributionKind, DistributionType, Dwhr, DwhrFactors, Household,
    RecircControl, RulesetVersion,
};
use crate::vecops::{kround, vecround};

/// Target mixed water temperature at fixtures [F]
pub const MIXED_WATER_TEMP: f32 = 105.0;
// Drain water temperature assumed at the DWHR heat exchanger [F]
const DWHR_DRAIN_TEMP: f32 = 97.0;
// Fraction of distribution waste independent of piping configuration
const OPERATING_FRAC: f32 = 0.25;

/// Fixture flow effectiveness: low-flow fixtures draw 5% less.
pub fn fixture_effectiveness(low_flow: bool) -> f32 {
    if low_flow {
        0.95
    } else {
        1.0
    }
}

/// Mixed water drawn at fixtures (showers, sinks, baths) [gal/day].
///
/// Zero under the base ruleset: there the fixture hot water is carried
/// inside the appliance totals (see
/// [`crate::appliances::dishwasher_energy_and_water`]) and a nonzero
/// return here would double count the same liters.
pub fn fixtures_gpd(ruleset: RulesetVersion, nbeds: u32, low_flow: bool) -> f32 {
    match ruleset {
        RulesetVersion::Base => 0.0,
        RulesetVersion::AddendumA => {
            fixture_effectiveness(low_flow) * (14.6 + 10.0 * nbeds as f32)
        }
    }
}

/// Reference piping length from dwelling geometry [ft].
pub fn ref_pipe_length(household: &Household) -> f32 {
    let bsmnt = if household.has_uncond_bsmnt { 1.0 } else { 0.0 };
    2.0 * (household.cfa / household.ncfl).sqrt() + 10.0 * household.ncfl + 5.0 * bsmnt
}

// System factor by topology and insulation level
fn system_factor(topology: DistributionType, pipe_r: f32) -> f32 {
    match topology {
        DistributionType::Standard => {
            if pipe_r >= 3.0 {
                0.90
            } else {
                1.0
            }
        }
        DistributionType::Recirculation => {
            if pipe_r >= 3.0 {
                1.0
            } else {
                1.11
            }
        }
    }
}

/// Hot water wasted while clearing the distribution system [gal/day].
///
/// Zero under the base ruleset (same allocation switch as
/// [`fixtures_gpd`]). Under Addendum A the waste is split into an
/// operating share and a piping share scaled by the ratio of actual to
/// reference piping, with recirculation systems wasting far less water
/// per foot through the distribution effectiveness constant.
pub fn distribution_waste_gpd(
    ruleset: RulesetVersion,
    nbeds: u32,
    household: &Household,
    dist: &Distribution,
) -> Result<f32> {
    dist.validate()?;
    if ruleset == RulesetVersion::Base {
        return Ok(0.0);
    }

    let ref_w_gpd = 9.8 * (nbeds as f32).powf(0.43);
    let sys_factor = system_factor(dist.topology(), dist.pipe_r);

    let (p_ratio, wd_eff) = match dist.kind {
        DistributionKind::Standard { pipe_length } => (pipe_length / ref_pipe_length(household), 1.0),
        DistributionKind::Recirculation { branch_length, .. } => (branch_length / 10.0, 0.1),
    };

    let o_w_gpd = ref_w_gpd * OPERATING_FRAC;
    let s_w_gpd = ref_w_gpd * (1.0 - OPERATING_FRAC) * p_ratio * sys_factor;
    Ok(fixture_effectiveness(dist.low_flow_fixtures) * (o_w_gpd + s_w_gpd * wd_eff))
}

/// Drain water heat recovery adjustment factors.
///
/// The impacted fraction is quadratic in bedrooms and intentionally not
/// clamped; it leaves [0, 1] for bedroom counts outside roughly
/// [0, 19], which callers reject instead.
pub fn dwhr_adjustment_factors(nbeds: u32, dist: &Distribution, dwhr: &Dwhr) -> Result<DwhrFactors> {
    dwhr.validate()?;
    let nbeds = nbeds as f32;

    let eff_adj = if dist.low_flow_fixtures { 1.082 } else { 1.0 };
    let impacted_fraction = 0.56 + 0.015 * nbeds - 0.0004 * nbeds * nbeds;
    let piping_loss_coefficient = 1.0 - 0.0002 * dist.dwhr_piping_length();
    let location_factor = if dwhr.equal_flow { 1.0 } else { 0.777 };
    let fixture_factor = match dwhr.facilities {
        crate::types::DwhrFacilities::All => 1.0,
        crate::types::DwhrFacilities::One => 0.5,
    };

    Ok(DwhrFactors {
        eff_adj,
        impacted_fraction,
        piping_loss_coefficient,
        location_factor,
        fixture_factor,
    })
}

/// Daily water heater inlet temperature series [F].
///
/// Without DWHR this is the mains series rounded to 3 decimals; with a
/// unit installed each day is raised by the recovered drain heat. The
/// 3-decimal rounding is a preserved contract with downstream schedule
/// generation, not a cosmetic choice.
pub fn daily_inlet_temperatures(
    mains_daily: &[f32],
    dwhr: Option<(&Dwhr, &DwhrFactors)>,
) -> Result<Vec<f32>> {
    if mains_daily.len() != 365 {
        return Err(DhwError::WrongInput(format!(
            "mains temperature series must hold 365 daily values, got {}",
            mains_daily.len()
        )));
    }
    let temps = match dwhr {
        None => vecround(mains_daily, 3),
        Some((unit, f)) => mains_daily
            .iter()
            .map(|t| {
                let adj = f.impacted_fraction
                    * (DWHR_DRAIN_TEMP - *t)
                    * unit.efficiency
                    * f.eff_adj
                    * f.piping_loss_coefficient
                    * f.location_factor
                    * f.fixture_factor;
                kround(*t + adj, 3)
            })
            .collect(),
    };
    Ok(temps)
}

/// Fraction of each day's fixture draw supplied by the water heater.
///
/// `1 - (setpoint - 105) / (setpoint - inlet[day])`, rounded to 4
/// decimals. An inlet temperature at or above the setpoint makes the
/// mix nonphysical and is rejected rather than returning infinity.
pub fn daily_mixed_water_fractions(inlet_temps: &[f32], setpoint: f32) -> Result<Vec<f32>> {
    inlet_temps
        .iter()
        .map(|t| {
            if *t >= setpoint {
                return Err(DhwError::DegenerateInput(format!(
                    "inlet temperature {} F at or above setpoint {} F",
                    t, setpoint
                )));
            }
            Ok(kround(
                1.0 - (setpoint - MIXED_WATER_TEMP) / (setpoint - *t),
                4,
            ))
        })
        .collect()
}

/// Annual recirculation pump consumption [kWh/yr]; zero without a loop.
pub fn recirc_pump_annual_kwh(dist: &Distribution) -> f32 {
    match dist.kind {
        DistributionKind::Standard { .. } => 0.0,
        DistributionKind::Recirculation {
            control,
            pump_power,
            ..
        } => {
            let hours_factor = match control {
                RecircControl::NoControl | RecircControl::Timer => 8.76,
                RecircControl::Temperature => 1.46,
                RecircControl::PresenceSensor => 0.15,
                RecircControl::ManualDemand => 0.10,
            };
            hours_factor * pump_power
        }
    }
}

/// Distribution energy waste factor.
///
/// Nested empirical table keyed by topology, control strategy and the
/// R-3 insulation threshold; values are regression fits reproduced
/// verbatim.
pub fn distribution_energy_waste_factor(dist: &Distribution) -> f32 {
    let insulated = dist.pipe_r >= 3.0;
    match dist.kind {
        DistributionKind::Standard { .. } => {
            if insulated {
                28.8
            } else {
                32.0
            }
        }
        DistributionKind::Recirculation { control, .. } => match control {
            RecircControl::NoControl | RecircControl::Timer => {
                if insulated {
                    250.0
                } else {
                    500.0
                }
            }
            RecircControl::Temperature => {
                if insulated {
                    187.5
                } else {
                    375.0
                }
            }
            RecircControl::PresenceSensor | RecircControl::ManualDemand => {
                if insulated {
                    43.2
                } else {
                    64.8
                }
            }
        },
    }
}

/// Water heater energy consumption adjustment from distribution waste.
///
/// Splits the waste factor into operating and piping-dependent shares,
/// scales the piping share by the actual-to-reference length ratio and
/// normalizes against the reference system.
pub fn energy_consumption_adjustment(household: &Household, dist: &Distribution) -> Result<f32> {
    dist.validate()?;
    household.validate()?;

    let ew_fact = distribution_energy_waste_factor(dist);
    let oew_fact = ew_fact * OPERATING_FRAC;
    let sew_fact = ew_fact - oew_fact;
    let ref_pipe_l = ref_pipe_length(household);

    let pe_ratio = match dist.kind {
        DistributionKind::Standard { pipe_length } => pipe_length / ref_pipe_l,
        DistributionKind::Recirculation { loop_length, .. } => {
            let ref_loop_l = ref_pipe_l - 20.0;
            if ref_loop_l <= 0.0 {
                return Err(DhwError::WrongInput(format!(
                    "reference loop length is not positive for reference piping {} ft",
                    ref_pipe_l
                )));
            }
            loop_length / ref_loop_l
        }
    };

    let e_waste = oew_fact + sew_fact * pe_ratio;
    Ok((e_waste + 128.0) / 160.0)
}

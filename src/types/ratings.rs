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

//! Nameplate rating records for appliances, the hot water distribution
//! system and the water heater, with boundary validation.
//!
//! Validation happens once, before any formula runs; formula code can
//! assume ranges documented on each field.

use serde_derive::{Deserialize, Serialize};

use crate::error::{DhwError, Result};
use crate::types::basic::{
    DistributionType, DryerControl, DwhrFacilities, FuelType, RecircControl, WaterHeaterType,
};

// == Clothes care ==

/// Clothes washer nameplate data (EnergyGuide label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothesWasher {
    /// Label energy rating, annual [kWh/yr]
    pub rated_annual_kwh: f32,
    /// Label electric rate [$/kWh]
    pub label_electric_rate: f32,
    /// Label gas rate [$/therm]
    pub label_gas_rate: f32,
    /// Label annual gas cost [$]
    pub label_annual_gas_cost: f32,
    /// Drum capacity [ft3]
    pub capacity: f32,
    /// Modified energy factor [ft3/kWh/cycle]
    pub mef: f32,
}

impl ClothesWasher {
    /// Range checks over the label data.
    pub fn validate(&self) -> Result<()> {
        if self.mef <= 0.0 || self.mef > 4.0 {
            return Err(DhwError::WrongInput(format!(
                "clothes washer MEF must be in (0, 4], got {}",
                self.mef
            )));
        }
        if self.capacity <= 0.0 {
            return Err(DhwError::WrongInput(format!(
                "clothes washer capacity must be positive, got {}",
                self.capacity
            )));
        }
        if self.rated_annual_kwh <= 0.0 {
            return Err(DhwError::WrongInput(format!(
                "clothes washer rated annual energy must be positive, got {}",
                self.rated_annual_kwh
            )));
        }
        if self.label_electric_rate <= 0.0 || self.label_gas_rate <= 0.0 {
            return Err(DhwError::WrongInput(
                "clothes washer label rates must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ClothesWasher {
    /// Standard reference clothes washer
    fn default() -> Self {
        ClothesWasher {
            rated_annual_kwh: 704.0,
            label_electric_rate: 0.08,
            label_gas_rate: 0.58,
            label_annual_gas_cost: 23.0,
            capacity: 2.874,
            mef: 0.817,
        }
    }
}

/// Clothes dryer nameplate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothesDryer {
    /// Dryer fuel
    pub fuel: FuelType,
    /// Energy factor [lb/kWh]
    pub ef: f32,
    /// Termination control
    pub control: DryerControl,
}

impl ClothesDryer {
    /// Reference energy factor by fuel [lb/kWh].
    pub fn reference_ef(fuel: FuelType) -> f32 {
        if fuel.is_electric() {
            3.01
        } else {
            2.67
        }
    }

    /// Reference dryer for a given fuel (timer control).
    pub fn reference(fuel: FuelType) -> Self {
        ClothesDryer {
            fuel,
            ef: Self::reference_ef(fuel),
            control: DryerControl::Timer,
        }
    }

    /// Range checks over the rating.
    pub fn validate(&self) -> Result<()> {
        if self.ef <= 0.0 || self.ef > 10.0 {
            return Err(DhwError::WrongInput(format!(
                "clothes dryer EF must be in (0, 10], got {}",
                self.ef
            )));
        }
        Ok(())
    }
}

/// Dishwasher nameplate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dishwasher {
    /// Energy factor [cycles/kWh ratio, unit-less]
    pub ef: f32,
    /// Rated place settings
    pub place_settings: f32,
}

impl Dishwasher {
    /// Range checks over the rating.
    pub fn validate(&self) -> Result<()> {
        if self.ef <= 0.0 || self.ef > 1.5 {
            return Err(DhwError::WrongInput(format!(
                "dishwasher EF must be in (0, 1.5], got {}",
                self.ef
            )));
        }
        if self.place_settings <= 0.0 {
            return Err(DhwError::WrongInput(format!(
                "dishwasher place settings must be positive, got {}",
                self.place_settings
            )));
        }
        Ok(())
    }
}

impl Default for Dishwasher {
    /// Standard reference dishwasher
    fn default() -> Self {
        Dishwasher {
            ef: 0.46,
            place_settings: 12.0,
        }
    }
}

// == Cooking and refrigeration ==

/// Cooking range / oven characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingRange {
    /// Range fuel
    pub fuel: FuelType,
    /// Induction cooktop (electric only)
    #[serde(default)]
    pub is_induction: bool,
    /// Convection oven
    #[serde(default)]
    pub is_convection: bool,
}

impl CookingRange {
    /// Consistency check: induction cooktops are electric.
    pub fn validate(&self) -> Result<()> {
        if self.is_induction && !self.fuel.is_electric() {
            return Err(DhwError::WrongInput(
                "induction cooktop requires an electric range".into(),
            ));
        }
        Ok(())
    }
}

/// Refrigerator rating; the rated annual use is the whole model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refrigerator {
    /// Rated annual consumption [kWh/yr]; reference value used when absent
    pub rated_annual_kwh: Option<f32>,
}

impl Refrigerator {
    /// Reference annual consumption by bedroom count [kWh/yr].
    pub fn reference_annual_kwh(nbeds: u32) -> f32 {
        637.0 + 18.0 * nbeds as f32
    }

    /// Range checks over the rating.
    pub fn validate(&self) -> Result<()> {
        if let Some(kwh) = self.rated_annual_kwh {
            if kwh <= 0.0 {
                return Err(DhwError::WrongInput(format!(
                    "refrigerator rated annual energy must be positive, got {}",
                    kwh
                )));
            }
        }
        Ok(())
    }
}

// == Hot water distribution ==

/// Drain water heat recovery unit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dwhr {
    /// Rated heat recovery efficiency (0, 1]
    pub efficiency: f32,
    /// Potable and drain streams flow simultaneously through the unit
    pub equal_flow: bool,
    /// Facilities connected to the unit
    pub facilities: DwhrFacilities,
}

impl Dwhr {
    /// Range checks over the unit parameters.
    pub fn validate(&self) -> Result<()> {
        if self.efficiency <= 0.0 || self.efficiency > 1.0 {
            return Err(DhwError::WrongInput(format!(
                "DWHR efficiency must be in (0, 1], got {}",
                self.efficiency
            )));
        }
        Ok(())
    }
}

/// Distribution topology with its piping dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionKind {
    /// Branch piping, no return loop
    Standard {
        /// Length of piping from heater to farthest fixture [ft]
        pipe_length: f32,
    },
    /// Pumped recirculation loop
    Recirculation {
        /// Recirculation loop length, out and back [ft]
        loop_length: f32,
        /// Branch length from loop to farthest fixture [ft]
        branch_length: f32,
        /// Pump control strategy
        control: RecircControl,
        /// Rated pump power [W]
        pump_power: f32,
    },
}

/// Hot water distribution system description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Topology and piping dimensions
    pub kind: DistributionKind,
    /// Pipe insulation R-value [h-ft2-F/Btu]
    pub pipe_r: f32,
    /// All fixtures are low-flow
    #[serde(default)]
    pub low_flow_fixtures: bool,
    /// Drain water heat recovery unit, when installed
    #[serde(default)]
    pub dwhr: Option<Dwhr>,
}

impl Distribution {
    /// Topology tag for table lookups.
    pub fn topology(&self) -> DistributionType {
        match self.kind {
            DistributionKind::Standard { .. } => DistributionType::Standard,
            DistributionKind::Recirculation { .. } => DistributionType::Recirculation,
        }
    }

    /// Piping length relevant to DWHR loss coefficients: branch for
    /// recirculation systems, heater-to-fixture run otherwise.
    pub fn dwhr_piping_length(&self) -> f32 {
        match self.kind {
            DistributionKind::Standard { pipe_length } => pipe_length,
            DistributionKind::Recirculation { branch_length, .. } => branch_length,
        }
    }

    /// Range checks over piping dimensions and the DWHR unit.
    pub fn validate(&self) -> Result<()> {
        if self.pipe_r < 0.0 {
            return Err(DhwError::WrongInput(format!(
                "pipe insulation R-value must not be negative, got {}",
                self.pipe_r
            )));
        }
        match self.kind {
            DistributionKind::Standard { pipe_length } => {
                if pipe_length <= 0.0 {
                    return Err(DhwError::WrongInput(format!(
                        "standard pipe length must be positive, got {}",
                        pipe_length
                    )));
                }
            }
            DistributionKind::Recirculation {
                loop_length,
                branch_length,
                pump_power,
                ..
            } => {
                if loop_length <= 0.0 || branch_length <= 0.0 {
                    return Err(DhwError::WrongInput(
                        "recirculation loop and branch lengths must be positive".into(),
                    ));
                }
                if pump_power < 0.0 {
                    return Err(DhwError::WrongInput(format!(
                        "recirculation pump power must not be negative, got {}",
                        pump_power
                    )));
                }
            }
        }
        if let Some(dwhr) = &self.dwhr {
            dwhr.validate()?;
        }
        Ok(())
    }
}

// == Water heater ==

/// Water heater nameplate data.
///
/// Exactly one of `energy_factor` / `uniform_energy_factor` must be
/// given; UEF ratings are converted to EF before tank derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterHeater {
    /// Heater fuel
    pub fuel: FuelType,
    /// Equipment type
    pub kind: WaterHeaterType,
    /// Tank volume [gal]; required for storage and heat pump types
    pub volume: Option<f32>,
    /// Rated energy factor
    pub energy_factor: Option<f32>,
    /// Rated uniform energy factor
    pub uniform_energy_factor: Option<f32>,
    /// Recovery efficiency; required for fuel-fired storage tanks
    pub recovery_efficiency: Option<f32>,
    /// Input capacity [kBtu/hr]; sized from bedrooms/bathrooms when absent
    pub input_capacity: Option<f32>,
    /// Hot water setpoint [F]
    #[serde(default = "default_setpoint")]
    pub setpoint: f32,
    /// Tankless cycling derate fraction
    #[serde(default = "default_cycling_derate")]
    pub cycling_derate: f32,
}

fn default_setpoint() -> f32 {
    125.0
}

fn default_cycling_derate() -> f32 {
    0.08
}

impl WaterHeater {
    /// Range and consistency checks over the rating.
    pub fn validate(&self) -> Result<()> {
        match (self.energy_factor, self.uniform_energy_factor) {
            (None, None) => {
                return Err(DhwError::WrongInput(
                    "water heater needs an energy factor or uniform energy factor".into(),
                ));
            }
            (Some(ef), _) if ef <= 0.0 => {
                return Err(DhwError::WrongInput(format!(
                    "water heater EF must be positive, got {}",
                    ef
                )));
            }
            (_, Some(uef)) if uef <= 0.0 => {
                return Err(DhwError::WrongInput(format!(
                    "water heater UEF must be positive, got {}",
                    uef
                )));
            }
            _ => {}
        }
        if self.kind != WaterHeaterType::Tankless {
            match self.volume {
                Some(v) if v > 0.0 => {}
                _ => {
                    return Err(DhwError::WrongInput(
                        "tank water heater needs a positive volume".into(),
                    ));
                }
            }
        }
        if self.kind == WaterHeaterType::Storage && !self.fuel.is_electric() {
            match self.recovery_efficiency {
                Some(re) if re > 0.0 && re <= 1.0 => {}
                _ => {
                    return Err(DhwError::WrongInput(
                        "fuel-fired storage heater needs a recovery efficiency in (0, 1]".into(),
                    ));
                }
            }
        }
        if self.setpoint <= 105.0 {
            return Err(DhwError::WrongInput(format!(
                "hot water setpoint must exceed the 105 F mixed target, got {}",
                self.setpoint
            )));
        }
        if self.cycling_derate < 0.0 || self.cycling_derate >= 1.0 {
            return Err(DhwError::WrongInput(format!(
                "cycling derate must be in [0, 1), got {}",
                self.cycling_derate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_washer_is_valid() {
        assert!(ClothesWasher::default().validate().is_ok());
    }

    #[test]
    fn washer_rejects_zero_mef() {
        let washer = ClothesWasher {
            mef: 0.0,
            ..Default::default()
        };
        assert!(washer.validate().is_err());
    }

    #[test]
    fn dishwasher_rejects_out_of_range_ef() {
        let dw = Dishwasher {
            ef: 1.6,
            ..Default::default()
        };
        assert!(dw.validate().is_err());
        let dw = Dishwasher {
            ef: -0.1,
            ..Default::default()
        };
        assert!(dw.validate().is_err());
    }

    #[test]
    fn induction_requires_electric() {
        let range = CookingRange {
            fuel: FuelType::NaturalGas,
            is_induction: true,
            is_convection: false,
        };
        assert!(range.validate().is_err());
    }

    #[test]
    fn water_heater_needs_some_rating() {
        let wh = WaterHeater {
            fuel: FuelType::Electricity,
            kind: WaterHeaterType::Storage,
            volume: Some(50.0),
            energy_factor: None,
            uniform_energy_factor: None,
            recovery_efficiency: None,
            input_capacity: None,
            setpoint: 125.0,
            cycling_derate: 0.08,
        };
        assert!(wh.validate().is_err());
    }

    #[test]
    fn fuel_storage_needs_recovery_efficiency() {
        let wh = WaterHeater {
            fuel: FuelType::NaturalGas,
            kind: WaterHeaterType::Storage,
            volume: Some(40.0),
            energy_factor: Some(0.59),
            uniform_energy_factor: None,
            recovery_efficiency: None,
            input_capacity: None,
            setpoint: 125.0,
            cycling_derate: 0.08,
        };
        assert!(wh.validate().is_err());
    }
}

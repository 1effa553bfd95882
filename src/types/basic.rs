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

//! Basic domain enums selecting among rating-method formula variants and
//! empirical lookup-table branches.

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::DhwError;

// == Ruleset version ==

/// Rating-methodology variant selecting among alternative regression
/// formulas for the same physical quantity.
///
/// Decided once at configuration load and threaded through every
/// function with a version-dependent branch; formula code never
/// re-parses version strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RulesetVersion {
    /// Base rating ruleset (hot water allocated through appliance totals)
    #[serde(rename = "2014")]
    Base,
    /// Addendum A ruleset (explicit fixture and distribution water model)
    #[serde(rename = "2014A")]
    AddendumA,
}

impl str::FromStr for RulesetVersion {
    type Err = DhwError;

    fn from_str(s: &str) -> Result<RulesetVersion, Self::Err> {
        match s {
            "2014" => Ok(RulesetVersion::Base),
            // Later addenda keep the Addendum A water model
            "2014A" | "2014AE" | "2014AEG" | "2019" | "2019A" => Ok(RulesetVersion::AddendumA),
            _ => Err(DhwError::VersionUnknown(s.into())),
        }
    }
}

impl fmt::Display for RulesetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesetVersion::Base => write!(f, "2014"),
            RulesetVersion::AddendumA => write!(f, "2014A"),
        }
    }
}

// == Fuels ==

/// Fuel used by an appliance or water heater.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    /// Electricity
    Electricity,
    /// Natural gas
    NaturalGas,
    /// Propane (LPG)
    Propane,
    /// Fuel oil
    Oil,
    /// Wood or pellets
    Wood,
}

impl FuelType {
    /// True for electricity, false for any combustion fuel
    pub fn is_electric(self) -> bool {
        self == FuelType::Electricity
    }
}

impl str::FromStr for FuelType {
    type Err = DhwError;

    fn from_str(s: &str) -> Result<FuelType, Self::Err> {
        match s {
            "electricity" | "electric" => Ok(FuelType::Electricity),
            "natural gas" | "natural_gas" | "gas" => Ok(FuelType::NaturalGas),
            "propane" => Ok(FuelType::Propane),
            "fuel oil" | "oil" => Ok(FuelType::Oil),
            "wood" => Ok(FuelType::Wood),
            _ => Err(DhwError::FuelUnknown(s.into())),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Electricity => write!(f, "electricity"),
            FuelType::NaturalGas => write!(f, "natural gas"),
            FuelType::Propane => write!(f, "propane"),
            FuelType::Oil => write!(f, "fuel oil"),
            FuelType::Wood => write!(f, "wood"),
        }
    }
}

// == Hot water distribution ==

/// Hot water distribution topology.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    /// Branch piping with no return loop
    Standard,
    /// Pumped recirculation loop
    Recirculation,
}

impl str::FromStr for DistributionType {
    type Err = DhwError;

    fn from_str(s: &str) -> Result<DistributionType, Self::Err> {
        match s {
            "standard" => Ok(DistributionType::Standard),
            "recirculation" | "recirc" => Ok(DistributionType::Recirculation),
            _ => Err(DhwError::DistributionUnknown(s.into())),
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionType::Standard => write!(f, "standard"),
            DistributionType::Recirculation => write!(f, "recirculation"),
        }
    }
}

/// Recirculation loop control strategy.
///
/// Selects empirical pump-energy and energy-waste table rows; there is
/// no safe default for an unrecognized strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecircControl {
    /// Continuously pumped, no control
    NoControl,
    /// Timer operated pump
    Timer,
    /// Loop temperature aquastat
    Temperature,
    /// Presence sensor demand control
    PresenceSensor,
    /// Manual demand control
    ManualDemand,
}

impl str::FromStr for RecircControl {
    type Err = DhwError;

    fn from_str(s: &str) -> Result<RecircControl, Self::Err> {
        match s {
            "none" | "no control" => Ok(RecircControl::NoControl),
            "timer" => Ok(RecircControl::Timer),
            "temperature" => Ok(RecircControl::Temperature),
            "presence sensor demand control" | "presence_sensor" => {
                Ok(RecircControl::PresenceSensor)
            }
            "manual demand control" | "manual_demand" => Ok(RecircControl::ManualDemand),
            _ => Err(DhwError::ControlUnknown(s.into())),
        }
    }
}

impl fmt::Display for RecircControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecircControl::NoControl => write!(f, "no control"),
            RecircControl::Timer => write!(f, "timer"),
            RecircControl::Temperature => write!(f, "temperature"),
            RecircControl::PresenceSensor => write!(f, "presence sensor demand control"),
            RecircControl::ManualDemand => write!(f, "manual demand control"),
        }
    }
}

/// Which shower facilities the drain water heat recovery unit serves.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum DwhrFacilities {
    /// All showers drain through the unit
    #[strum(serialize = "all")]
    All,
    /// A single shower drains through the unit
    #[strum(serialize = "one")]
    One,
}

// == Appliance controls ==

/// Clothes dryer termination control.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum DryerControl {
    /// Fixed-time drying cycle
    #[strum(serialize = "timer")]
    Timer,
    /// Moisture sensing termination
    #[strum(serialize = "moisture")]
    Moisture,
}

// == Water heaters ==

/// Water heater equipment type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterHeaterType {
    /// Storage tank
    Storage,
    /// Instantaneous (tankless)
    Tankless,
    /// Heat pump water heater
    HeatPump,
}

impl str::FromStr for WaterHeaterType {
    type Err = DhwError;

    fn from_str(s: &str) -> Result<WaterHeaterType, Self::Err> {
        match s {
            "storage" | "tank" => Ok(WaterHeaterType::Storage),
            "tankless" | "instantaneous" => Ok(WaterHeaterType::Tankless),
            "heat pump" | "heat_pump" => Ok(WaterHeaterType::HeatPump),
            _ => Err(DhwError::HeaterTypeUnknown(s.into())),
        }
    }
}

impl fmt::Display for WaterHeaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterHeaterType::Storage => write!(f, "storage"),
            WaterHeaterType::Tankless => write!(f, "tankless"),
            WaterHeaterType::HeatPump => write!(f, "heat pump"),
        }
    }
}

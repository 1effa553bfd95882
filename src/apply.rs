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
Setup orchestration
===================

Sequences the appliance, distribution and water heater models over one
home configuration and packs the results for the engine binding layer.

The ruleset version is decided once here and threaded through every
version-dependent branch; any calculation error aborts the whole setup
so the engine never sees a partially applied model.

*/

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::appliances::{
    clothes_dryer_energy, clothes_washer_energy_and_water, dishwasher_energy_and_water,
    range_oven_energy, refrigerator_energy,
};
use crate::distribution::{
    daily_inlet_temperatures, daily_mixed_water_fractions, distribution_waste_gpd,
    dwhr_adjustment_factors, energy_consumption_adjustment, fixtures_gpd, recirc_pump_annual_kwh,
};
use crate::error::Result;
use crate::schedule::{normalized_draw_fractions, peak_flow_gpm, MainsNormals};
use crate::types::{
    ClothesDryer, ClothesWasher, CookingRange, DhwSetup, Dishwasher, Distribution, FuelType,
    Household, Refrigerator, RulesetVersion, WaterHeater, WaterHeaterParameters, WaterHeaterType,
};
use crate::waterheater::{default_capacity, tank_ua_and_efficiency, uef_to_ef};

/// Home configuration consumed by [`apply`].
///
/// Appliance ratings left unset fall back to the standard reference
/// units; distribution and water heater descriptions are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Ruleset version selecting among formula variants
    pub ruleset: RulesetVersion,
    /// Household descriptor
    pub household: Household,
    /// Clothes washer label data; reference washer when absent
    #[serde(default)]
    pub clothes_washer: Option<ClothesWasher>,
    /// Clothes dryer rating; reference electric dryer when absent
    #[serde(default)]
    pub clothes_dryer: Option<ClothesDryer>,
    /// Dishwasher rating; reference dishwasher when absent
    #[serde(default)]
    pub dishwasher: Option<Dishwasher>,
    /// Cooking range; reference electric range when absent
    #[serde(default)]
    pub cooking_range: Option<CookingRange>,
    /// Refrigerator rating; reference regression when absent
    #[serde(default)]
    pub refrigerator: Refrigerator,
    /// Hot water distribution system
    pub distribution: Distribution,
    /// Water heater nameplate
    pub water_heater: WaterHeater,
}

/// Runs the full DHW and appliance setup for one home.
///
/// * `config` - home characteristics and nameplate ratings
/// * `mains` - mains temperature normals from the weather provider
///
/// # Errors
///
/// Any invalid rating, geometry or degenerate series value aborts the
/// setup; no partial [`DhwSetup`] is ever returned.
pub fn apply(config: &HomeConfig, mains: &MainsNormals) -> Result<DhwSetup> {
    let household = &config.household;
    household.validate()?;
    let ruleset = config.ruleset;
    let nbeds = household.nbeds;

    // Appliances, reference units standing in for unspecified ratings
    let washer = config.clothes_washer.clone().unwrap_or_default();
    let dryer = config
        .clothes_dryer
        .clone()
        .unwrap_or_else(|| ClothesDryer::reference(FuelType::Electricity));
    let dishwasher = config.dishwasher.clone().unwrap_or_default();
    let range = config.cooking_range.clone().unwrap_or(CookingRange {
        fuel: FuelType::Electricity,
        is_induction: false,
        is_convection: false,
    });

    let cw = clothes_washer_energy_and_water(ruleset, nbeds, &washer)?;
    let cd = clothes_dryer_energy(nbeds, &dryer, &washer)?;
    let dw = dishwasher_energy_and_water(ruleset, nbeds, &dishwasher)?;
    let ro = range_oven_energy(nbeds, &range)?;
    let rf = refrigerator_energy(nbeds, &config.refrigerator)?;

    // Distribution water and the DWHR-adjusted inlet series
    let dist = &config.distribution;
    let f_gpd = fixtures_gpd(ruleset, nbeds, dist.low_flow_fixtures);
    let w_gpd = distribution_waste_gpd(ruleset, nbeds, household, dist)?;

    let dwhr_factors = match &dist.dwhr {
        Some(unit) => Some(dwhr_adjustment_factors(nbeds, dist, unit)?),
        None => None,
    };
    let inlet_temperatures = match (&dist.dwhr, &dwhr_factors) {
        (Some(unit), Some(factors)) => {
            daily_inlet_temperatures(mains.daily(), Some((unit, factors)))?
        }
        _ => daily_inlet_temperatures(mains.daily(), None)?,
    };
    let mixed_water_fractions =
        daily_mixed_water_fractions(&inlet_temperatures, config.water_heater.setpoint)?;

    let recirc_pump_kwh = recirc_pump_annual_kwh(dist);
    let ec_adj = energy_consumption_adjustment(household, dist)?;

    // Water heater parameters, sizing and rating conversion as needed
    let heater = &config.water_heater;
    heater.validate()?;
    let capacity = heater
        .input_capacity
        .unwrap_or_else(|| default_capacity(heater.fuel, nbeds, household.nbaths));
    let ef = match heater.energy_factor {
        Some(ef) => ef,
        None => uef_to_ef(
            heater.uniform_energy_factor.unwrap_or(0.0),
            heater.kind,
            heater.fuel,
        )?,
    };
    // Heat pump tank losses are modeled by the engine itself; only the
    // converted rating and capacity are passed through.
    let water_heater = if heater.kind == WaterHeaterType::HeatPump {
        WaterHeaterParameters {
            u: 0.0,
            ua: 0.0,
            eta_c: ef,
            input_capacity: capacity,
        }
    } else {
        tank_ua_and_efficiency(heater, ef, capacity)?
    };

    let total_hot_water_gpd = f_gpd + w_gpd + cw.gpd + dw.gpd;
    let draw_fractions = normalized_draw_fractions();
    let peak_flow = peak_flow_gpm(total_hot_water_gpd, &draw_fractions);

    Ok(DhwSetup {
        ruleset,
        clothes_washer: cw,
        clothes_dryer: cd,
        dishwasher: dw,
        range_oven: ro,
        refrigerator: rf,
        fixtures_gpd: f_gpd,
        distribution_waste_gpd: w_gpd,
        total_hot_water_gpd,
        peak_flow_gpm: peak_flow,
        recirc_pump_kwh,
        energy_consumption_adjustment: ec_adj,
        dwhr_factors,
        inlet_temperatures,
        mixed_water_fractions,
        draw_fractions,
        water_heater,
    })
}

/// Compact plain-text report of a computed setup.
pub fn setup_to_plain(setup: &DhwSetup) -> String {
    let appliances = [
        ("clothes washer", &setup.clothes_washer),
        ("clothes dryer", &setup.clothes_dryer),
        ("dishwasher", &setup.dishwasher),
        ("range/oven", &setup.range_oven),
        ("refrigerator", &setup.refrigerator),
    ]
    .iter()
    .map(|(name, use_)| format!("{}: {}", name, use_))
    .join("\n");

    format!(
        "Ruleset: {}\n{}\nHot water [gal/day]: fixtures = {:.2}, waste = {:.2}, total = {:.2}\n\
         Peak flow [gal/min]: {:.3}\nRecirc pump [kWh/yr]: {:.1}\n\
         Energy consumption adjustment: {:.3}\n\
         Water heater: UA = {:.3} Btu/hr-F, eta_c = {:.3}, capacity = {:.2} kBtu/hr\n\
         Inlet temperature day 1 [F]: {:.3}",
        setup.ruleset,
        appliances,
        setup.fixtures_gpd,
        setup.distribution_waste_gpd,
        setup.total_hot_water_gpd,
        setup.peak_flow_gpm,
        setup.recirc_pump_kwh,
        setup.energy_consumption_adjustment,
        setup.water_heater.ua,
        setup.water_heater.eta_c,
        setup.water_heater.input_capacity,
        setup.inlet_temperatures[0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DistributionKind, WaterHeaterType};

    fn config(ruleset: RulesetVersion) -> HomeConfig {
        HomeConfig {
            ruleset,
            household: Household {
                nbeds: 3,
                nbaths: 2.0,
                cfa: 2400.0,
                ncfl: 2.0,
                has_uncond_bsmnt: false,
            },
            clothes_washer: None,
            clothes_dryer: None,
            dishwasher: None,
            cooking_range: None,
            refrigerator: Refrigerator::default(),
            distribution: Distribution {
                kind: DistributionKind::Standard { pipe_length: 50.0 },
                pipe_r: 0.0,
                low_flow_fixtures: false,
                dwhr: None,
            },
            water_heater: WaterHeater {
                fuel: FuelType::Electricity,
                kind: WaterHeaterType::Storage,
                volume: Some(50.0),
                energy_factor: Some(0.92),
                uniform_energy_factor: None,
                recovery_efficiency: None,
                input_capacity: None,
                setpoint: 125.0,
                cycling_derate: 0.08,
            },
        }
    }

    fn mains() -> MainsNormals {
        MainsNormals::from_monthly(&[
            44.0, 45.0, 48.0, 53.0, 59.0, 65.0, 70.0, 71.0, 67.0, 60.0, 52.0, 46.0,
        ])
        .unwrap()
    }

    #[test]
    fn apply_addendum_a_setup() {
        let setup = apply(&config(RulesetVersion::AddendumA), &mains()).unwrap();
        assert_eq!(setup.inlet_temperatures.len(), 365);
        assert_eq!(setup.mixed_water_fractions.len(), 365);
        assert!(setup.fixtures_gpd > 0.0);
        assert!(setup.distribution_waste_gpd > 0.0);
        assert!(setup.total_hot_water_gpd > setup.fixtures_gpd);
        assert!(setup.peak_flow_gpm > 0.0);
        // Electric storage heater defaults to the 4.5 kW element at 2 baths
        assert!((setup.water_heater.input_capacity - 15.35).abs() < 0.01);
    }

    #[test]
    fn apply_base_ruleset_allocates_water_to_appliances() {
        let setup = apply(&config(RulesetVersion::Base), &mains()).unwrap();
        assert_eq!(setup.fixtures_gpd, 0.0);
        assert_eq!(setup.distribution_waste_gpd, 0.0);
    }

    #[test]
    fn apply_heat_pump_passes_converted_rating_through() {
        let mut cfg = config(RulesetVersion::AddendumA);
        cfg.water_heater.kind = WaterHeaterType::HeatPump;
        cfg.water_heater.energy_factor = None;
        cfg.water_heater.uniform_energy_factor = Some(3.1);
        let setup = apply(&cfg, &mains()).unwrap();
        assert_eq!(setup.water_heater.ua, 0.0);
        assert!((setup.water_heater.eta_c - (1.2101 * 3.1 - 0.6052)).abs() < 1e-3);
    }

    #[test]
    fn apply_rejects_bad_household() {
        let mut cfg = config(RulesetVersion::AddendumA);
        cfg.household.cfa = -10.0;
        assert!(apply(&cfg, &mains()).is_err());
    }

    #[test]
    fn plain_report_mentions_key_quantities() {
        let setup = apply(&config(RulesetVersion::AddendumA), &mains()).unwrap();
        let plain = setup_to_plain(&setup);
        assert!(plain.contains("Ruleset: 2014A"));
        assert!(plain.contains("clothes washer"));
        assert!(plain.contains("Water heater"));
    }
}

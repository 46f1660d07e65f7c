use std::fmt::Write;

use anyhow::Context;
use clap::Parser;
use labs_model::{Apartment, Appliance, EmissionRange};

use crate::common::SEPARATOR;

#[derive(Debug, Parser)]
pub(crate) struct Appliances {
    /// Lower bound of the emission range to search, in MHz
    #[arg(long)]
    pub(crate) min: f64,
    /// Upper bound of the emission range to search, in MHz
    #[arg(long)]
    pub(crate) max: f64,
}

impl Appliances {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        print!("{}", report(household()?, self.min, self.max)?);
        Ok(())
    }
}

pub(crate) fn household() -> anyhow::Result<Vec<Appliance>> {
    let appliances = [
        Appliance::kettle("Tefal", 2000, EmissionRange::new(0.0, 5.0)?),
        Appliance::microwave("Samsung", 1500, EmissionRange::new(2400.0, 2500.0)?),
        Appliance::tv("LG", 180, EmissionRange::new(470.0, 860.0)?),
        Appliance::kettle("Tefal", 2000, EmissionRange::new(0.0, 5.0)?),
        Appliance::microwave("Samsung", 1500, EmissionRange::new(2400.0, 2500.0)?),
        Appliance::tv("LG", 180, EmissionRange::new(470.0, 860.0)?),
        Appliance::fridge("Bosch", 300, EmissionRange::new(0.0, 10.0)?),
        Appliance::laptop("HP", 90, EmissionRange::new(2400.0, 5800.0)?),
    ];
    appliances
        .into_iter()
        .collect::<labs_model::Result<Vec<_>>>()
        .context("Invalid appliance")
}

fn report(appliances: Vec<Appliance>, min: f64, max: f64) -> anyhow::Result<String> {
    let mut apartment = appliances.into_iter().collect::<Apartment>();
    for appliance in apartment.iter_mut() {
        if appliance.name() == "Tefal" || appliance.name() == "Samsung" {
            appliance
                .plug_in()
                .with_context(|| format!("Cannot plug in {}", appliance.name()))?;
            tracing::debug!(name = appliance.name(), "plugged in");
        }
    }

    let mut out = String::new();
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Sorted by power:")?;
    for appliance in apartment.sorted_by_power() {
        writeln!(out, " - {}", appliance)?;
    }
    writeln!(out, "Total consumption: {} W", apartment.total_power())?;
    writeln!(out, "{}", SEPARATOR)?;

    let found = apartment
        .find_by_emission(min, max)
        .context("Invalid emission range")?;
    tracing::info!(min, max, found = found.len(), "searched by emission range");
    writeln!(out, "Appliances in range {}–{} MHz:", min, max)?;
    if found.is_empty() {
        writeln!(out, " - none")?;
    }
    for appliance in found {
        writeln!(out, " - {}", appliance)?;
    }
    writeln!(out, "{}", SEPARATOR)?;
    Ok(out)
}

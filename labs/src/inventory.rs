use std::fmt::Write;

use clap::Parser;
use labs_model::{find_identical, sort_catalog, SportInventory};

use crate::common::SEPARATOR;

#[derive(Debug, Parser)]
pub(crate) struct Inventory {}

impl Inventory {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        print!("{}", report()?);
        Ok(())
    }
}

fn catalog() -> Vec<SportInventory> {
    vec![
        SportInventory::new("М'яч", "Командний", 1200.0, 0.4, "Adidas"),
        SportInventory::new("Гантелі", "Фітнес", 1800.0, 10.0, "Nike"),
        SportInventory::new("Ракетка", "Теніс", 2500.0, 0.3, "Wilson"),
        SportInventory::new("Шолом", "Велоспорт", 2000.0, 0.8, "Giro"),
        SportInventory::new("М'яч", "Командний", 1500.0, 0.4, "Puma"),
    ]
}

fn report() -> anyhow::Result<String> {
    let mut items = catalog();
    sort_catalog(&mut items);
    let target = SportInventory::new("Ракетка", "Теніс", 2500.0, 0.3, "Wilson");

    let mut out = String::new();
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Sorted catalog:")?;
    for item in &items {
        writeln!(out, "{}", item)?;
    }
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Looking for:")?;
    writeln!(out, "{}", target)?;
    match find_identical(&items, &target) {
        Some(item) => {
            writeln!(out, "Found an identical item:")?;
            writeln!(out, "{}", item)?;
        }
        None => {
            tracing::info!(name = target.name(), "no identical item in catalog");
            writeln!(out, "No identical item found.")?;
        }
    }
    writeln!(out, "{}", SEPARATOR)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        insta::assert_snapshot!(report().unwrap(), @r"
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Sorted catalog:
        <name=М'яч, type=Командний, price=1200.00, weight=0.4, brand=Adidas>
        <name=М'яч, type=Командний, price=1500.00, weight=0.4, brand=Puma>
        <name=Гантелі, type=Фітнес, price=1800.00, weight=10.0, brand=Nike>
        <name=Шолом, type=Велоспорт, price=2000.00, weight=0.8, brand=Giro>
        <name=Ракетка, type=Теніс, price=2500.00, weight=0.3, brand=Wilson>
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Looking for:
        <name=Ракетка, type=Теніс, price=2500.00, weight=0.3, brand=Wilson>
        Found an identical item:
        <name=Ракетка, type=Теніс, price=2500.00, weight=0.3, brand=Wilson>
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        ");
    }
}

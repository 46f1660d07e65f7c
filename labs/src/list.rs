use std::fmt::Write;

use anyhow::Context;
use clap::Parser;
use labs_chain::{ChainList, SequenceCore, SequenceExt};
use labs_model::{Appliance, EmissionRange};

use crate::appliances::household;
use crate::common::SEPARATOR;

#[derive(Debug, Parser)]
pub(crate) struct List {}

impl List {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        print!("{}", report()?);
        Ok(())
    }
}

fn write_indexed(out: &mut String, list: &ChainList<Appliance>, offset: usize) -> std::fmt::Result {
    for (i, appliance) in list.iter().enumerate() {
        writeln!(out, " [{}] {}", offset + i, appliance)?;
    }
    Ok(())
}

fn report() -> anyhow::Result<String> {
    let mut list = household()?.into_iter().collect::<ChainList<_>>();
    tracing::debug!(len = list.len(), "built appliance list");

    let mut out = String::new();
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Initial list:")?;
    write_indexed(&mut out, &list, 0)?;

    let one = ChainList::one(Appliance::kettle(
        "Philips",
        2200,
        EmissionRange::new(0.0, 5.0)?,
    )?);
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "List of a single appliance:")?;
    for appliance in &one {
        writeln!(out, " - {}", appliance)?;
    }

    let copy = list.sub_list(1, 4).context("Cannot copy sub-list")?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "List copied from sub-list 1..4:")?;
    write_indexed(&mut out, &copy, 1)?;

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Element at index 2:")?;
    writeln!(out, " * {}", list.get(2)?)?;

    let sony = Appliance::tv("Sony", 200, EmissionRange::new(470.0, 860.0)?)?;
    writeln!(out, "Replacing element at index 1:")?;
    writeln!(out, "   was: {}", list.get(1)?)?;
    writeln!(out, "   now: {}", sony)?;
    list.set(1, sony)?;
    writeln!(out, "List after replacement:")?;
    write_indexed(&mut out, &list, 0)?;

    let fridge = Appliance::fridge("Bosch", 300, EmissionRange::new(0.0, 10.0)?)?;
    writeln!(out, "{}", SEPARATOR)?;
    match list.index_of(&fridge) {
        Some(index) => writeln!(out, "Index of the Bosch fridge: {}", index)?,
        None => writeln!(out, "The Bosch fridge is not in the list")?,
    }

    writeln!(out, "{}", SEPARATOR)?;
    let removed = list.remove(0).context("Cannot remove first element")?;
    tracing::info!(removed = %removed, len = list.len(), "removed first element");
    writeln!(out, "Removed element at index 0:")?;
    writeln!(out, "   {}", removed)?;
    writeln!(out, "List after removal:")?;
    write_indexed(&mut out, &list, 0)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        insta::assert_snapshot!(report().unwrap(), @r#"
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Initial list:
         [0] Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
         [1] Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
         [2] TV "LG" (180 W, 470–860 MHz, unplugged)
         [3] Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
         [4] Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
         [5] TV "LG" (180 W, 470–860 MHz, unplugged)
         [6] Fridge "Bosch" (300 W, 0–10 MHz, unplugged)
         [7] Laptop "HP" (90 W, 2400–5800 MHz, unplugged)
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        List of a single appliance:
         - Kettle "Philips" (2200 W, 0–5 MHz, unplugged)
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        List copied from sub-list 1..4:
         [1] Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
         [2] TV "LG" (180 W, 470–860 MHz, unplugged)
         [3] Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Element at index 2:
         * TV "LG" (180 W, 470–860 MHz, unplugged)
        Replacing element at index 1:
           was: Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
           now: TV "Sony" (200 W, 470–860 MHz, unplugged)
        List after replacement:
         [0] Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
         [1] TV "Sony" (200 W, 470–860 MHz, unplugged)
         [2] TV "LG" (180 W, 470–860 MHz, unplugged)
         [3] Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
         [4] Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
         [5] TV "LG" (180 W, 470–860 MHz, unplugged)
         [6] Fridge "Bosch" (300 W, 0–10 MHz, unplugged)
         [7] Laptop "HP" (90 W, 2400–5800 MHz, unplugged)
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Index of the Bosch fridge: 6
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Removed element at index 0:
           Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
        List after removal:
         [0] TV "Sony" (200 W, 470–860 MHz, unplugged)
         [1] TV "LG" (180 W, 470–860 MHz, unplugged)
         [2] Kettle "Tefal" (2000 W, 0–5 MHz, unplugged)
         [3] Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
         [4] TV "LG" (180 W, 470–860 MHz, unplugged)
         [5] Fridge "Bosch" (300 W, 0–10 MHz, unplugged)
         [6] Laptop "HP" (90 W, 2400–5800 MHz, unplugged)
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        "#);
    }
}

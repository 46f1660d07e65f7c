use labs_model::{Apartment, Appliance, EmissionRange, Error};

fn range(min: f64, max: f64) -> EmissionRange {
    EmissionRange::new(min, max).unwrap()
}

fn apartment() -> Apartment {
    [
        Appliance::kettle("Tefal", 2000, range(0.0, 5.0)),
        Appliance::microwave("Samsung", 1500, range(2400.0, 2500.0)),
        Appliance::tv("LG", 180, range(470.0, 860.0)),
        Appliance::kettle("Tefal", 2000, range(0.0, 5.0)),
        Appliance::microwave("Samsung", 1500, range(2400.0, 2500.0)),
        Appliance::tv("LG", 180, range(470.0, 860.0)),
        Appliance::fridge("Bosch", 300, range(0.0, 10.0)),
        Appliance::laptop("HP", 90, range(2400.0, 5800.0)),
    ]
    .into_iter()
    .collect::<Result<Apartment, Error>>()
    .unwrap()
}

fn render<'a>(appliances: impl IntoIterator<Item = &'a Appliance>) -> String {
    appliances
        .into_iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_sorted_by_power_is_stable() {
    let mut apartment = apartment();
    for appliance in apartment.iter_mut() {
        if appliance.name() == "Tefal" || appliance.name() == "Samsung" {
            appliance.plug_in().unwrap();
        }
    }
    insta::assert_snapshot!(render(apartment.sorted_by_power()), @r#"
    Laptop "HP" (90 W, 2400–5800 MHz, unplugged)
    TV "LG" (180 W, 470–860 MHz, unplugged)
    TV "LG" (180 W, 470–860 MHz, unplugged)
    Fridge "Bosch" (300 W, 0–10 MHz, unplugged)
    Microwave "Samsung" (1500 W, 2400–2500 MHz, plugged in)
    Microwave "Samsung" (1500 W, 2400–2500 MHz, plugged in)
    Kettle "Tefal" (2000 W, 0–5 MHz, plugged in)
    Kettle "Tefal" (2000 W, 0–5 MHz, plugged in)
    "#);
}

#[test]
fn test_total_power_counts_plugged_only() {
    let mut apartment = apartment();
    assert_eq!(apartment.total_power(), 0);
    for appliance in apartment.iter_mut() {
        if appliance.name() == "Tefal" || appliance.name() == "Samsung" {
            appliance.plug_in().unwrap();
        }
    }
    assert_eq!(apartment.total_power(), 7000);
}

#[test]
fn test_find_by_emission() {
    let apartment = apartment();
    let found = apartment.find_by_emission(2400.0, 2500.0).unwrap();
    insta::assert_snapshot!(render(found), @r#"
    Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
    Microwave "Samsung" (1500 W, 2400–2500 MHz, unplugged)
    Laptop "HP" (90 W, 2400–5800 MHz, unplugged)
    "#);
    assert!(apartment.find_by_emission(6000.0, 7000.0).unwrap().is_empty());
}

#[test]
fn test_find_by_emission_rejects_inverted_query() {
    let apartment = apartment();
    assert!(matches!(
        apartment.find_by_emission(10.0, 1.0),
        Err(Error::InvalidQuery(_))
    ));
}

use crate::appliance::Appliance;
use crate::emission::check_query;
use crate::error::Result;

/// The appliances installed in one apartment, in installation order.
#[derive(Debug, Clone, Default)]
pub struct Apartment {
    devices: Vec<Appliance>,
}

impl Apartment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, appliance: Appliance) {
        self.devices.push(appliance);
    }

    pub fn all(&self) -> &[Appliance] {
        &self.devices
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Appliance> {
        self.devices.iter_mut()
    }

    /// The power drawn by all plugged in appliances.
    pub fn total_power(&self) -> u64 {
        self.devices
            .iter()
            .map(|a| u64::from(a.current_power()))
            .sum()
    }

    /// Appliances ordered by rated power, lowest first. Equal power keeps
    /// installation order.
    pub fn sorted_by_power(&self) -> Vec<&Appliance> {
        let mut sorted = self.devices.iter().collect::<Vec<_>>();
        sorted.sort_by_key(|a| a.power_w());
        sorted
    }

    /// Appliances whose emission band overlaps `[min_mhz, max_mhz]`. The
    /// query is checked even when the apartment is empty.
    pub fn find_by_emission(&self, min_mhz: f64, max_mhz: f64) -> Result<Vec<&Appliance>> {
        check_query(min_mhz, max_mhz)?;
        let mut found = Vec::new();
        for appliance in &self.devices {
            if appliance.emission().intersects(min_mhz, max_mhz)? {
                found.push(appliance);
            }
        }
        Ok(found)
    }
}

impl FromIterator<Appliance> for Apartment {
    fn from_iter<I: IntoIterator<Item = Appliance>>(iter: I) -> Self {
        Apartment {
            devices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_apartment_still_checks_query() {
        let apartment = Apartment::new();
        assert!(apartment.find_by_emission(1.0, 2.0).unwrap().is_empty());
        assert!(matches!(
            apartment.find_by_emission(-1.0, 2.0),
            Err(Error::InvalidQuery(_))
        ));
        assert_eq!(apartment.total_power(), 0);
    }
}

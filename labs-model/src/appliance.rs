use std::fmt;
use std::hash::{Hash, Hasher};

use strum_macros::{Display, EnumIter};

use crate::emission::EmissionRange;
use crate::error::{Error, Result};

/// The kind of household appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Kind {
    Kettle,
    Microwave,
    #[strum(serialize = "TV")]
    Tv,
    Fridge,
    Laptop,
}

/// An electrical appliance with a rated power and an emission band.
///
/// Two appliances are equal when their name, power and emission band are
/// equal, whatever their kind: a kettle and a fridge with the same fields
/// compare equal. Whether an appliance is currently plugged in is state, and
/// doesn't take part in equality either.
#[derive(Debug, Clone)]
pub struct Appliance {
    kind: Kind,
    name: String,
    power_w: u32,
    emission: EmissionRange,
    plugged: bool,
}

impl Appliance {
    /// Create a new appliance. It starts out unplugged.
    ///
    /// The name is trimmed and must not be blank; the power must be
    /// positive.
    pub fn new(kind: Kind, name: &str, power_w: u32, emission: EmissionRange) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        if power_w == 0 {
            return Err(Error::InvalidPower);
        }
        Ok(Appliance {
            kind,
            name: name.to_string(),
            power_w,
            emission,
            plugged: false,
        })
    }

    pub fn kettle(name: &str, power_w: u32, emission: EmissionRange) -> Result<Self> {
        Self::new(Kind::Kettle, name, power_w, emission)
    }

    pub fn microwave(name: &str, power_w: u32, emission: EmissionRange) -> Result<Self> {
        Self::new(Kind::Microwave, name, power_w, emission)
    }

    pub fn tv(name: &str, power_w: u32, emission: EmissionRange) -> Result<Self> {
        Self::new(Kind::Tv, name, power_w, emission)
    }

    pub fn fridge(name: &str, power_w: u32, emission: EmissionRange) -> Result<Self> {
        Self::new(Kind::Fridge, name, power_w, emission)
    }

    pub fn laptop(name: &str, power_w: u32, emission: EmissionRange) -> Result<Self> {
        Self::new(Kind::Laptop, name, power_w, emission)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_w(&self) -> u32 {
        self.power_w
    }

    pub fn emission(&self) -> &EmissionRange {
        &self.emission
    }

    pub fn is_plugged(&self) -> bool {
        self.plugged
    }

    pub fn plug_in(&mut self) -> Result<()> {
        if self.plugged {
            return Err(Error::AlreadyPluggedIn(self.name.clone()));
        }
        self.plugged = true;
        Ok(())
    }

    pub fn unplug(&mut self) -> Result<()> {
        if !self.plugged {
            return Err(Error::AlreadyUnplugged(self.name.clone()));
        }
        self.plugged = false;
        Ok(())
    }

    /// The power drawn right now: the rated power when plugged in, else 0.
    pub fn current_power(&self) -> u32 {
        if self.plugged {
            self.power_w
        } else {
            0
        }
    }
}

impl PartialEq for Appliance {
    fn eq(&self, other: &Self) -> bool {
        self.power_w == other.power_w
            && self.name == other.name
            && self.emission == other.emission
    }
}

impl Eq for Appliance {}

// hash the same fields that partial eq compares
impl Hash for Appliance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.power_w.hash(state);
        self.emission.hash(state);
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" ({} W, {}, {})",
            self.kind,
            self.name,
            self.power_w,
            self.emission,
            if self.plugged { "plugged in" } else { "unplugged" }
        )
    }
}

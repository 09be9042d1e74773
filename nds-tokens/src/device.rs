//! Target devices
//!
//! Every token group is generated once per device. Devices differ only in
//! their base unit, which scales the size-derived groups; declaration
//! order here fixes the order of the per-device blocks in the output.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Desktop,
    Tablet,
    Phone,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Phone];

    pub fn name(self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Phone => "phone",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-device base units, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BaseUnits {
    pub desktop: f64,
    pub tablet: f64,
    pub phone: f64,
}

impl BaseUnits {
    pub fn get(self, device: Device) -> f64 {
        match device {
            Device::Desktop => self.desktop,
            Device::Tablet => self.tablet,
            Device::Phone => self.phone,
        }
    }
}

impl Default for BaseUnits {
    fn default() -> Self {
        // Phone gets a larger base unit so touch targets and type scale up.
        BaseUnits {
            desktop: 8.0,
            tablet: 8.0,
            phone: 10.0,
        }
    }
}

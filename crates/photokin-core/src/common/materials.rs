//! Work-function catalog for the photoelectric engine.
//!
//! A fixed table of photocathode materials keyed by element symbol, in the
//! order they are offered to the user.

use super::constants::ev_to_joules;
use serde::Serialize;

pub const MATERIAL_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub symbol: &'static str,
    pub work_function_ev: f64,
}

impl Material {
    pub const fn new(symbol: &'static str, work_function_ev: f64) -> Self {
        Self {
            symbol,
            work_function_ev,
        }
    }

    pub fn work_function_j(&self) -> f64 {
        ev_to_joules(self.work_function_ev)
    }
}

pub const MATERIAL_CATALOG: [Material; MATERIAL_COUNT] = [
    Material::new("Cs", 1.19),
    Material::new("K", 2.29),
    Material::new("Na", 2.18),
    Material::new("Li", 2.39),
    Material::new("Zn", 4.3),
    Material::new("Co", 3.90),
    Material::new("Al", 4.08),
    Material::new("Pb", 4.14),
    Material::new("Fe", 4.50),
    Material::new("Cu", 4.7),
    Material::new("Ag", 4.73),
];

pub fn material_catalog() -> &'static [Material; MATERIAL_COUNT] {
    &MATERIAL_CATALOG
}

pub fn material_for_symbol(symbol: &str) -> Option<Material> {
    let normalized = symbol.trim();
    if normalized.is_empty() {
        return None;
    }

    MATERIAL_CATALOG
        .iter()
        .find(|candidate| candidate.symbol.eq_ignore_ascii_case(normalized))
        .copied()
}

pub fn material_symbols() -> impl Iterator<Item = &'static str> {
    MATERIAL_CATALOG.iter().map(|material| material.symbol)
}

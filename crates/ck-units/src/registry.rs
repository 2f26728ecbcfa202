//! Unit Table Registry.
//!
//! One immutable [`UnitTable`] per [`QuantityKind`]. The standard registry
//! is built on first use and shared read-only for the rest of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use ck_core::{ensure, Error, Factor, Result};

use crate::quantity::QuantityKind;
use crate::tables::{self, UnitDefinition};

/// The units of one quantity kind, indexed by name, symbol and alias.
#[derive(Debug, Clone)]
pub struct UnitTable {
    kind: QuantityKind,
    units: Vec<UnitDefinition>,
    index: HashMap<String, usize>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl UnitTable {
    /// Build a table, checking its invariants: exactly one base unit with
    /// factor 1 (listed first), every factor finite and positive, and no
    /// spelling shared by two different units.
    pub fn new(kind: QuantityKind, units: &[UnitDefinition]) -> Result<Self> {
        ensure!(!units.is_empty(), "{kind} table is empty");
        ensure!(
            units[0].factor == 1.0,
            "{kind} table must start with its base unit (factor 1), found {} = {}",
            units[0].name,
            units[0].factor
        );

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut base_units = 0;
        for (i, def) in units.iter().enumerate() {
            ensure!(
                def.factor.is_finite() && def.factor > 0.0,
                "{kind} unit {} has non-positive factor {}",
                def.name,
                def.factor
            );
            if def.factor == 1.0 {
                base_units += 1;
            }
            let spellings = std::iter::once(def.name)
                .chain(std::iter::once(def.symbol))
                .chain(def.aliases.iter().copied());
            for spelling in spellings {
                let key = normalize(spelling);
                match index.get(&key) {
                    Some(&existing) if existing != i => {
                        return Err(Error::invalid_input(format!(
                            "{kind} spelling '{spelling}' is shared by {} and {}",
                            units[existing].name, def.name
                        )));
                    }
                    _ => {
                        index.insert(key, i);
                    }
                }
            }
        }
        ensure!(base_units == 1, "{kind} table has {base_units} units with factor 1");

        Ok(Self {
            kind,
            units: units.to_vec(),
            index,
        })
    }

    /// The quantity this table measures.
    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    /// The base unit (factor exactly 1).
    pub fn base_unit(&self) -> &UnitDefinition {
        &self.units[0]
    }

    /// All units in declaration order.
    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }

    /// Resolve a unit by canonical name, symbol or alias (case-insensitive).
    pub fn unit(&self, name: &str) -> Result<&UnitDefinition> {
        self.index
            .get(&normalize(name))
            .map(|&i| &self.units[i])
            .ok_or_else(|| Error::unknown_unit(self.kind.name(), name.trim()))
    }

    /// Scale factor of `name` relative to the base unit.
    pub fn factor(&self, name: &str) -> Result<Factor> {
        self.unit(name).map(|def| def.factor)
    }

    /// Return `true` if `name` resolves in this table.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }
}

/// The collection of all unit tables.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    tables: HashMap<QuantityKind, UnitTable>,
}

impl UnitRegistry {
    /// Build a registry from explicit tables.
    pub fn from_tables(tables: impl IntoIterator<Item = UnitTable>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.kind(), t)).collect(),
        }
    }

    /// Build the registry of built-in tables.
    pub fn build_standard() -> Result<Self> {
        let tables = [
            UnitTable::new(QuantityKind::Length, tables::LENGTH)?,
            UnitTable::new(QuantityKind::Weight, tables::WEIGHT)?,
            UnitTable::new(QuantityKind::Area, tables::AREA)?,
            UnitTable::new(QuantityKind::Volume, tables::VOLUME)?,
            UnitTable::new(QuantityKind::Speed, tables::SPEED)?,
            UnitTable::new(QuantityKind::Time, tables::TIME)?,
        ];
        Ok(Self::from_tables(tables))
    }

    /// The shared registry of built-in tables.
    pub fn standard() -> &'static UnitRegistry {
        static STANDARD: OnceLock<UnitRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            // The built-in tables are constants covered by the test suite.
            Self::build_standard().expect("built-in unit tables are valid")
        })
    }

    /// The table for `kind`.
    pub fn table(&self, kind: QuantityKind) -> Result<&UnitTable> {
        self.tables
            .get(&kind)
            .ok_or_else(|| Error::invalid_input(format!("no {kind} table registered")))
    }

    /// Scale factor of `unit` within the `kind` table.
    pub fn lookup(&self, kind: QuantityKind, unit: &str) -> Result<Factor> {
        self.table(kind)?.factor(unit)
    }

    /// Units of `kind` in declaration order (empty if the kind is absent).
    pub fn units(&self, kind: QuantityKind) -> &[UnitDefinition] {
        self.tables.get(&kind).map(UnitTable::units).unwrap_or(&[])
    }

    /// Find the quantity kind a unit spelling belongs to.
    pub fn kind_of(&self, unit: &str) -> Option<QuantityKind> {
        QuantityKind::ALL
            .into_iter()
            .find(|kind| self.tables.get(kind).is_some_and(|t| t.contains(unit)))
    }
}

//! Class identity and column offsets.
//!
//! Every per-class data table stores one column per class, in the client's
//! class order. [`Class`] carries both the canonical name and that column
//! offset, so the name → column join lives in exactly one place.

/// Highest character level of the ruleset. Column-indexed lookups sample
/// offset `MAX_LEVEL - 1`.
pub const MAX_LEVEL: usize = 60;

/// Levels at which the per-class tables are sampled, ascending.
pub const REFERENCE_LEVELS: [u32; 4] = [25, 40, 50, 60];

/// Playable class as laid out in the client data tables.
///
/// Column 5 belongs to a class that does not exist in this ruleset and is
/// never addressed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Class {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    Shaman,
    Mage,
    Warlock,
    Monk,
    Druid,
}

impl Class {
    /// Canonical name, as written in the data table headers.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Zero-based column offset into a row's value sequence (key column excluded).
    pub const fn offset(self) -> usize {
        match self {
            Class::Warrior => 0,
            Class::Paladin => 1,
            Class::Hunter => 2,
            Class::Rogue => 3,
            Class::Priest => 4,
            Class::Shaman => 6,
            Class::Mage => 7,
            Class::Warlock => 8,
            Class::Monk => 9,
            Class::Druid => 10,
        }
    }

    /// Whether the class appears in the generated source.
    ///
    /// The simulator has no Monk class; its column is loaded but never emitted.
    pub const fn is_emitted(self) -> bool {
        !matches!(self, Class::Monk)
    }

    /// Identifier of the class in the simulator's `proto` package.
    pub fn go_ident(self) -> String {
        format!("proto.Class_Class{}", self.name())
    }

    /// Classes written to the generated source, in declaration order.
    pub fn emitted() -> impl Iterator<Item = Class> {
        <Class as strum::IntoEnumIterator>::iter().filter(|class| class.is_emitted())
    }
}

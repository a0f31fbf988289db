//! Character stats and the S.P.E.C.I.A.L. attributes
//!
//! Plain integers on purpose: the HUD shows whatever it is given, so a
//! `hp` above `max_hp` or a negative `rads` just renders as-is.

/// Fixed character record shown in the header and side labels
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    pub name: String,
    pub level: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub ap: i32,
    pub max_ap: i32,
    pub rads: i32,
    pub xp: i32,
    pub next_level: i32,
    pub caps: i32,
    /// Overall condition, 0-100
    pub condition: i32,
    /// Number of active effects
    pub effects: i32,
}

/// One of the seven S.P.E.C.I.A.L. attributes
///
/// The discriminant is the attribute's index in [`SpecialAttributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    Strength,
    Perception,
    Endurance,
    Charisma,
    Intelligence,
    Agility,
    Luck,
}

impl Special {
    pub const ALL: [Special; 7] = [
        Special::Strength,
        Special::Perception,
        Special::Endurance,
        Special::Charisma,
        Special::Intelligence,
        Special::Agility,
        Special::Luck,
    ];

    /// Single-letter key used on the Pip-Boy ("S", "P", ...)
    pub fn letter(self) -> char {
        match self {
            Special::Strength => 'S',
            Special::Perception => 'P',
            Special::Endurance => 'E',
            Special::Charisma => 'C',
            Special::Intelligence => 'I',
            Special::Agility => 'A',
            Special::Luck => 'L',
        }
    }
}

/// Values for all seven attributes (1-10 by convention, never checked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAttributes {
    values: [i32; 7],
}

impl SpecialAttributes {
    /// Values in S, P, E, C, I, A, L order
    pub fn new(values: [i32; 7]) -> Self {
        SpecialAttributes { values }
    }

    pub fn get(&self, attribute: Special) -> i32 {
        self.values[attribute as usize]
    }

    /// Iterates `(letter, value)` pairs in S.P.E.C.I.A.L. order
    pub fn iter(&self) -> impl Iterator<Item = (char, i32)> + '_ {
        Special::ALL.iter().map(move |&attr| (attr.letter(), self.get(attr)))
    }
}

//! Character data shown on the HUD
//!
//! Everything here is a read-only snapshot. The render loop never mutates it;
//! the only data set the binary ships with is [`HudSnapshot::vault_dweller`].
//!
//! # Architecture
//!
//! - `stats`: `CharacterStats` and the S.P.E.C.I.A.L. block
//! - `inventory`: ordered `InventoryEntry` list for the equipment panel
//! - `body`: `BodyPart` and per-limb health percentages

pub mod body;
pub mod inventory;
pub mod stats;

pub use body::{BodyPart, BodyPartHealth};
pub use inventory::InventoryEntry;
pub use stats::{CharacterStats, SpecialAttributes};

/// Everything a frame needs to know about the character
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub stats: CharacterStats,
    pub special: SpecialAttributes,
    pub inventory: Vec<InventoryEntry>,
    pub body_parts: BodyPartHealth,
}

impl HudSnapshot {
    /// The fixed example character displayed by the binary
    pub fn vault_dweller() -> Self {
        HudSnapshot {
            stats: CharacterStats {
                name: "VAULT DWELLER".to_string(),
                level: 1,
                hp: 200,
                max_hp: 200,
                ap: 80,
                max_ap: 80,
                rads: 12,
                xp: 10,
                next_level: 200,
                caps: 542,
                condition: 85,
                effects: 0,
            },
            special: SpecialAttributes::new([7, 6, 5, 4, 8, 6, 5]),
            inventory: vec![
                InventoryEntry::new("Stimpak", 5, 'S'),
                InventoryEntry::new("Doctor's Bag", 3, 'E'),
            ],
            body_parts: BodyPartHealth {
                head: 100,
                torso: 85,
                left_arm: 90,
                right_arm: 100,
                left_leg: 75,
                right_leg: 80,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::stats::Special;

    #[test]
    fn test_vault_dweller_data() {
        let snapshot = HudSnapshot::vault_dweller();
        assert_eq!(snapshot.stats.name, "VAULT DWELLER");
        assert_eq!(snapshot.stats.hp, 200);
        assert_eq!(snapshot.stats.max_hp, 200);
        assert_eq!(snapshot.inventory.len(), 2);
        assert_eq!(snapshot.inventory[0].name, "Stimpak");
        assert_eq!(snapshot.special.get(Special::Intelligence), 8);
        assert!(BodyPart::ALL.iter().all(|&part| snapshot.body_parts.get(part) > 50));
    }
}

//! Per-limb health for the figure diagram

/// The six limbs the figure diagram tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Torso => "torso",
            BodyPart::LeftArm => "left_arm",
            BodyPart::RightArm => "right_arm",
            BodyPart::LeftLeg => "left_leg",
            BodyPart::RightLeg => "right_leg",
        }
    }
}

/// Health percentage (0-100) for each limb. Not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPartHealth {
    pub head: i32,
    pub torso: i32,
    pub left_arm: i32,
    pub right_arm: i32,
    pub left_leg: i32,
    pub right_leg: i32,
}

impl BodyPartHealth {
    pub fn get(&self, part: BodyPart) -> i32 {
        match part {
            BodyPart::Head => self.head,
            BodyPart::Torso => self.torso,
            BodyPart::LeftArm => self.left_arm,
            BodyPart::RightArm => self.right_arm,
            BodyPart::LeftLeg => self.left_leg,
            BodyPart::RightLeg => self.right_leg,
        }
    }
}

#[cfg(test)]
impl BodyPartHealth {
    /// Every limb at the same value
    pub fn uniform(value: i32) -> Self {
        BodyPartHealth {
            head: value,
            torso: value,
            left_arm: value,
            right_arm: value,
            left_leg: value,
            right_leg: value,
        }
    }

    pub fn set(&mut self, part: BodyPart, value: i32) {
        match part {
            BodyPart::Head => self.head = value,
            BodyPart::Torso => self.torso = value,
            BodyPart::LeftArm => self.left_arm = value,
            BodyPart::RightArm => self.right_arm = value,
            BodyPart::LeftLeg => self.left_leg = value,
            BodyPart::RightLeg => self.right_leg = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_each_part() {
        let mut health = BodyPartHealth::uniform(100);
        for (i, part) in BodyPart::ALL.iter().enumerate() {
            health.set(*part, i as i32 * 10);
        }
        assert_eq!(health.head, 0);
        assert_eq!(health.torso, 10);
        assert_eq!(health.right_leg, 50);
        assert_eq!(health.get(BodyPart::LeftArm), 20);
    }

    #[test]
    fn test_part_names() {
        let names: Vec<&str> = BodyPart::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["head", "torso", "left_arm", "right_arm", "left_leg", "right_leg"]);
    }
}

/// A line in the equipment panel
///
/// Entries keep the order they were given in; the panel draws them top to
/// bottom in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: String,
    pub count: u32,
    pub hotkey: char,
}

impl InventoryEntry {
    pub fn new(name: impl Into<String>, count: u32, hotkey: char) -> Self {
        InventoryEntry {
            name: name.into(),
            count,
            hotkey,
        }
    }

    /// Text as shown on screen, e.g. `(5) Stimpak S)`
    pub fn label(&self) -> String {
        format!("({}) {} {})", self.count, self.name, self.hotkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        let entry = InventoryEntry::new("Doctor's Bag", 3, 'E');
        assert_eq!(entry.label(), "(3) Doctor's Bag E)");
    }
}

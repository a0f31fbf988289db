use crate::error::HudError;
use crate::model::InventoryEntry;
use crate::palette::PIP_GREEN_DIM;
use crate::surface::{FontSize, Surface};
use crate::text::draw_text;
use sdl2::rect::Point;

/// Vertical distance between inventory lines
pub const LINE_SPACING: i32 = 60;

/// Top-left of the first inventory line on a surface `width` pixels wide
pub fn list_origin(width: u32) -> Point {
    Point::new(width as i32 - 280, 110)
}

/// Draws one line per entry, in order, starting at [`list_origin`]
pub fn draw_equipment<S: Surface + ?Sized>(
    surface: &mut S,
    inventory: &[InventoryEntry],
) -> Result<(), HudError> {
    let (w, _) = surface.size();
    let origin = list_origin(w);

    for (i, entry) in inventory.iter().enumerate() {
        let pos = origin.offset(0, i as i32 * LINE_SPACING);
        draw_text(surface, &entry.label(), pos, FontSize::Small, PIP_GREEN_DIM, false)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recorder::Recorder;

    fn entries(n: usize) -> Vec<InventoryEntry> {
        (0..n).map(|i| InventoryEntry::new(format!("Item{}", i), i as u32 + 1, 'X')).collect()
    }

    #[test]
    fn test_entries_in_order_with_fixed_spacing() {
        let mut surface = Recorder::new();
        draw_equipment(&mut surface, &entries(4)).unwrap();

        let texts = surface.texts();
        assert_eq!(texts.len(), 4);
        for (i, (text, pos, color)) in texts.iter().enumerate() {
            assert_eq!(*text, format!("({}) Item{} X)", i + 1, i));
            assert_eq!(*pos, Point::new(920, 110 + i as i32 * 60));
            assert_eq!(*color, PIP_GREEN_DIM);
        }
    }

    #[test]
    fn test_vertical_extent() {
        for n in 1..6 {
            let mut surface = Recorder::new();
            draw_equipment(&mut surface, &entries(n)).unwrap();
            let ys: Vec<i32> = surface.texts().iter().map(|(_, p, _)| p.y()).collect();
            assert_eq!(ys.first(), Some(&110));
            assert_eq!(ys.last().unwrap() - ys.first().unwrap(), (n as i32 - 1) * 60);
        }
    }

    #[test]
    fn test_empty_inventory_draws_nothing() {
        let mut surface = Recorder::new();
        draw_equipment(&mut surface, &[]).unwrap();
        assert!(surface.commands().is_empty());
    }
}

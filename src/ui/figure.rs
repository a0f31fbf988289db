//! Vault Boy figure diagram
//!
//! A stick-figure built from primitives, centered horizontally, with one
//! [`HealthBar`] per limb. Every part except the neck is drawn in
//! `health_color` of its limb, so a damaged limb turns yellow along with its
//! bar and connector line.

use super::health_bar::HealthBar;
use crate::error::HudError;
use crate::model::{BodyPart, BodyPartHealth};
use crate::palette::{health_color, PIP_GREEN};
use crate::surface::{FontSize, Surface};
use crate::text::draw_text;
use sdl2::rect::{Point, Rect};
use std::f32::consts::PI;

/// Vertical center of the figure
pub const FIGURE_CENTER_Y: i32 = 350;

const HEAD_RADIUS: i32 = 45;
const HEAD_OFFSET_Y: i32 = 150;
const TORSO_WIDTH: i32 = 80;
const TORSO_HEIGHT: i32 = 100;
const ARM_WIDTH: u32 = 5;
const LEG_WIDTH: u32 = 6;

/// Where a limb's health bar sits and how it points at the limb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbBar {
    pub part: BodyPart,
    /// Top-left corner of the bar
    pub origin: Point,
    /// Line from the bar to the limb, if any
    pub connector: Option<(Point, Point)>,
}

/// Key points of the figure, derived from its center
struct Skeleton {
    center: Point,
    head: Point,
    arm_start_y: i32,
    leg_start_y: i32,
}

impl Skeleton {
    fn new(center: Point) -> Self {
        Skeleton {
            center,
            head: center.offset(0, -HEAD_OFFSET_Y),
            arm_start_y: center.y() - 60,
            leg_start_y: center.y() + 20,
        }
    }
}

/// Bar placement for all six limbs around a figure centered at `center`
pub fn limb_bars(center: Point, bar: &HealthBar) -> [LimbBar; 6] {
    let s = Skeleton::new(center);
    let (cx, cy) = (center.x(), center.y());
    let bar_w = bar.style().width as i32;
    let bar_h = bar.style().height as i32;
    let half_torso = TORSO_WIDTH / 2;

    let head_bar = Point::new(cx - bar_w / 2, s.head.y() - 80);
    let torso_bar = Point::new(cx - bar_w / 2, cy - 30);
    let left_arm_bar = Point::new(cx - half_torso - 150, s.arm_start_y + 20);
    let right_arm_bar = Point::new(cx + half_torso + 70, s.arm_start_y + 20);
    let left_leg_bar = Point::new(cx - 150, s.leg_start_y + 70);
    let right_leg_bar = Point::new(cx + 70, s.leg_start_y + 70);

    [
        LimbBar {
            part: BodyPart::Head,
            origin: head_bar,
            connector: Some((
                Point::new(cx, head_bar.y() + bar_h),
                Point::new(cx, s.head.y() - HEAD_RADIUS),
            )),
        },
        LimbBar {
            part: BodyPart::Torso,
            origin: torso_bar,
            connector: None,
        },
        LimbBar {
            part: BodyPart::LeftArm,
            origin: left_arm_bar,
            connector: Some((
                left_arm_bar.offset(bar_w, bar_h / 2),
                Point::new(cx - half_torso - 40, s.arm_start_y + 20),
            )),
        },
        LimbBar {
            part: BodyPart::RightArm,
            origin: right_arm_bar,
            connector: Some((
                right_arm_bar.offset(0, bar_h / 2),
                Point::new(cx + half_torso + 40, s.arm_start_y + 20),
            )),
        },
        LimbBar {
            part: BodyPart::LeftLeg,
            origin: left_leg_bar,
            connector: Some((
                left_leg_bar.offset(bar_w, bar_h / 2),
                Point::new(cx - 25, s.leg_start_y + 40),
            )),
        },
        LimbBar {
            part: BodyPart::RightLeg,
            origin: right_leg_bar,
            connector: Some((
                right_leg_bar.offset(0, bar_h / 2),
                Point::new(cx + 25, s.leg_start_y + 40),
            )),
        },
    ]
}

/// Draws the figure, its limb bars and the level caption underneath
pub fn draw_figure<S: Surface + ?Sized>(
    surface: &mut S,
    body_parts: &BodyPartHealth,
    level: i32,
) -> Result<(), HudError> {
    let (width, _) = surface.size();
    let center = Point::new(width as i32 / 2, FIGURE_CENTER_Y);
    let s = Skeleton::new(center);

    draw_head(surface, &s, body_parts.head)?;

    // Neck is structural, not a limb
    surface.line(
        s.head.offset(0, HEAD_RADIUS),
        Point::new(center.x(), center.y() - 80),
        3,
        PIP_GREEN,
    )?;

    let torso = Rect::new(
        center.x() - TORSO_WIDTH / 2,
        center.y() - 80,
        TORSO_WIDTH as u32,
        TORSO_HEIGHT as u32,
    );
    surface.stroke_rect(torso, 3, health_color(body_parts.torso))?;

    draw_arm(surface, &s, -1, body_parts.left_arm)?;
    draw_arm(surface, &s, 1, body_parts.right_arm)?;
    draw_leg(surface, &s, -1, body_parts.left_leg)?;
    draw_leg(surface, &s, 1, body_parts.right_leg)?;

    let bar = HealthBar::new();
    for limb in limb_bars(center, &bar) {
        let value = body_parts.get(limb.part);
        bar.render(surface, limb.origin, value)?;
        if let Some((from, to)) = limb.connector {
            surface.line(from, to, 2, health_color(value))?;
        }
    }

    let caption = format!("Level {}", level);
    let (caption_w, _) = surface.text_size(&caption, FontSize::Medium)?;
    let caption_x = (width as i32 - caption_w as i32) / 2;
    draw_text(
        surface,
        &caption,
        Point::new(caption_x, center.y() + 180),
        FontSize::Medium,
        PIP_GREEN,
        false,
    )?;

    Ok(())
}

fn draw_head<S: Surface + ?Sized>(surface: &mut S, s: &Skeleton, value: i32) -> Result<(), HudError> {
    let color = health_color(value);
    surface.circle(s.head, HEAD_RADIUS, 3, color)?;
    surface.circle(s.head.offset(-15, -5), 5, 2, color)?;
    surface.circle(s.head.offset(15, -5), 5, 2, color)?;
    let smile = Rect::new(s.head.x() - 15, s.head.y() + 10, 30, 15);
    surface.arc(smile, PI, 0.0, 2, color)?;
    Ok(())
}

/// `side` is -1 for the figure's left (screen left), 1 for its right
fn draw_arm<S: Surface + ?Sized>(
    surface: &mut S,
    s: &Skeleton,
    side: i32,
    value: i32,
) -> Result<(), HudError> {
    let color = health_color(value);
    let shoulder = Point::new(s.center.x() + side * TORSO_WIDTH / 2, s.arm_start_y);
    let elbow = shoulder.offset(side * 60, 40);
    let hand = shoulder.offset(side * 80, 100);

    surface.line(shoulder, elbow, ARM_WIDTH, color)?;
    surface.line(elbow, hand, ARM_WIDTH, color)?;
    surface.circle(hand, 10, 3, color)?;
    Ok(())
}

fn draw_leg<S: Surface + ?Sized>(
    surface: &mut S,
    s: &Skeleton,
    side: i32,
    value: i32,
) -> Result<(), HudError> {
    let color = health_color(value);
    let hip = Point::new(s.center.x() + side * 20, s.leg_start_y);
    let knee = Point::new(s.center.x() + side * 25, s.leg_start_y + 70);
    let ankle = Point::new(s.center.x() + side * 20, s.leg_start_y + 140);
    let toe = ankle.offset(15, 0);

    surface.line(hip, knee, LEG_WIDTH, color)?;
    surface.line(knee, ankle, LEG_WIDTH, color)?;
    surface.line(ankle, toe, LEG_WIDTH, color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::WARNING;
    use crate::surface::recorder::{DrawCommand, Recorder};

    fn render(body_parts: &BodyPartHealth) -> Recorder {
        let mut surface = Recorder::new();
        draw_figure(&mut surface, body_parts, 1).unwrap();
        surface
    }

    /// Border color of the bar whose track starts at `origin`
    fn bar_color(surface: &Recorder, origin: Point) -> sdl2::pixels::Color {
        surface
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::StrokeRect { rect, width: 2, color }
                    if rect.x() == origin.x() && rect.y() == origin.y() && rect.height() == 12 =>
                {
                    Some(*color)
                }
                _ => None,
            })
            .expect("bar border drawn")
    }

    #[test]
    fn test_limb_bar_layout() {
        let bars = limb_bars(Point::new(600, 350), &HealthBar::new());
        let origins: Vec<(i32, i32)> = bars.iter().map(|b| (b.origin.x(), b.origin.y())).collect();
        assert_eq!(origins, [(560, 120), (560, 320), (410, 310), (710, 310), (450, 440), (670, 440)]);
        assert_eq!(bars[0].connector, Some((Point::new(600, 132), Point::new(600, 155))));
        assert_eq!(bars[1].connector, None);
        assert_eq!(bars[2].connector, Some((Point::new(490, 316), Point::new(520, 310))));
        assert_eq!(bars[5].connector, Some((Point::new(670, 446), Point::new(625, 410))));
    }

    #[test]
    fn test_threshold_boundary_every_part() {
        for part in BodyPart::ALL {
            for (value, expected) in [(49, WARNING), (50, WARNING), (51, PIP_GREEN)] {
                let mut health = BodyPartHealth::uniform(100);
                health.set(part, value);
                let surface = render(&health);

                let bars = limb_bars(Point::new(600, FIGURE_CENTER_Y), &HealthBar::new());
                for limb in bars {
                    let want = if limb.part == part { expected } else { PIP_GREEN };
                    assert_eq!(bar_color(&surface, limb.origin), want, "{:?} at {}", limb.part, value);
                }

                for other in BodyPart::ALL {
                    let want = if other == part { expected } else { PIP_GREEN };
                    let shapes = limb_shapes(&surface, other);
                    assert!(!shapes.is_empty(), "{:?}", other);
                    assert!(
                        shapes.iter().all(|c| c.color() == want),
                        "{:?} shapes with {:?} at {}",
                        other,
                        part,
                        value
                    );
                }
            }
        }
    }

    /// Figure primitives belonging to `part`, told apart by stroke width and
    /// which side of the center line they sit on
    fn limb_shapes(surface: &Recorder, part: BodyPart) -> Vec<&DrawCommand> {
        let left = |x: i32| x < 600;
        surface
            .commands()
            .iter()
            .filter(|cmd| match (part, cmd) {
                (BodyPart::Head, DrawCommand::Circle { radius: 45, .. }) => true,
                (BodyPart::Torso, DrawCommand::StrokeRect { width: 3, .. }) => true,
                (BodyPart::LeftArm, DrawCommand::Line { from, width: 5, .. }) => left(from.x()),
                (BodyPart::RightArm, DrawCommand::Line { from, width: 5, .. }) => !left(from.x()),
                (BodyPart::LeftArm, DrawCommand::Circle { center, radius: 10, .. }) => left(center.x()),
                (BodyPart::RightArm, DrawCommand::Circle { center, radius: 10, .. }) => !left(center.x()),
                (BodyPart::LeftLeg, DrawCommand::Line { from, width: 6, .. }) => left(from.x()),
                (BodyPart::RightLeg, DrawCommand::Line { from, width: 6, .. }) => !left(from.x()),
                _ => false,
            })
            .collect()
    }

    #[test]
    fn test_limb_shape_counts() {
        let surface = render(&BodyPartHealth::uniform(100));
        let count = |part| limb_shapes(&surface, part).len();
        assert_eq!(count(BodyPart::Head), 1);
        assert_eq!(count(BodyPart::Torso), 1);
        // two segments and a hand
        assert_eq!(count(BodyPart::LeftArm), 3);
        assert_eq!(count(BodyPart::RightArm), 3);
        // thigh, shin and foot
        assert_eq!(count(BodyPart::LeftLeg), 3);
        assert_eq!(count(BodyPart::RightLeg), 3);
    }

    #[test]
    fn test_damaged_head_turns_warning() {
        let mut health = BodyPartHealth::uniform(100);
        health.set(BodyPart::Head, 40);
        let surface = render(&health);

        let head = surface
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::Circle { radius: 45, .. }))
            .unwrap();
        assert_eq!(head.color(), WARNING);

        let torso = surface
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::StrokeRect { width: 3, .. }))
            .unwrap();
        assert_eq!(torso.color(), PIP_GREEN);

        // hands and legs stay green
        let hands: Vec<_> = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { radius: 10, .. }))
            .collect();
        assert_eq!(hands.len(), 2);
        assert!(hands.iter().all(|c| c.color() == PIP_GREEN));
        assert!(
            surface
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { width: 6, .. }))
                .all(|c| c.color() == PIP_GREEN)
        );
    }

    #[test]
    fn test_neck_ignores_head_health() {
        let surface = render(&BodyPartHealth::uniform(10));
        let neck = surface
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::Line { width: 3, .. }))
            .unwrap();
        assert_eq!(neck.color(), PIP_GREEN);
    }

    #[test]
    fn test_level_caption_centered() {
        let surface = render(&BodyPartHealth::uniform(100));
        let texts = surface.texts();
        assert_eq!(texts.len(), 1);
        // "Level 1" at medium (scale 3) is 126px wide
        assert_eq!(texts[0].0, "Level 1");
        assert_eq!(texts[0].1, Point::new(537, 530));
    }
}

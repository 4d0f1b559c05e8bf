// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown on the splash screen and inside the upload button.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Radians added per animation tick.
const STEP: f32 = PI / 12.0;

/// Ticks in one full turn.
const STEPS_PER_TURN: u8 = 24;

/// Number of line segments used to approximate the arc.
const ARC_SEGMENTS: u16 = 30;

/// Rotation that persists between frames, counted in whole ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerPhase(u8);

impl SpinnerPhase {
    /// Moves the arc one step forward, wrapping at a full turn.
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % STEPS_PER_TURN;
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0) * STEP
    }
}

/// Half-circle arc over a faint full ring, drawn at a given rotation.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, phase: SpinnerPhase) -> Self {
        Self {
            cache: Cache::default(),
            rotation: phase.radians(),
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn stroke_width(&self) -> f32 {
        (self.size / 16.0).max(2.0)
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let width = self.stroke_width();
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - width;

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default().with_width(width).with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
            );

            // Start at twelve o'clock and sweep half a turn.
            let start = self.rotation - PI / 2.0;
            let point_at = |angle: f32| {
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            };

            let mut arc = canvas::path::Builder::new();
            arc.move_to(point_at(start));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                arc.line_to(point_at(start + PI * t));
            }

            frame.stroke(
                &arc.build(),
                Stroke::default()
                    .with_width(width)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_after_a_full_turn() {
        let mut phase = SpinnerPhase::default();
        for _ in 0..STEPS_PER_TURN {
            phase.advance();
        }
        assert_eq!(phase, SpinnerPhase::default());
        assert_eq!(phase.radians(), 0.0);
    }

    #[test]
    fn phase_stays_exact_over_many_turns() {
        let mut phase = SpinnerPhase::default();
        for _ in 0..(u32::from(STEPS_PER_TURN) * 1000 + 6) {
            phase.advance();
        }
        assert!((phase.radians() - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn stroke_never_thinner_than_two_pixels() {
        let spinner = AnimatedSpinner::new(Color::WHITE, SpinnerPhase::default()).size(16.0);
        assert!((spinner.stroke_width() - 2.0).abs() < f32::EPSILON);
    }
}

//! Canvas program for the equalizer curve
//!
//! Translates iced mouse events into [`CurveEvent`]s (positions local to the
//! canvas, canvas size attached) and draws the current curve. All gesture
//! decisions are made by [`CurveSurface`]; this program never mutates it.

use iced::widget::canvas::{self, Event, Frame, Geometry, LineDash, Path, Program, Stroke};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};

use super::geometry::CurveGeometry;
use super::state::{CurveSurface, CursorAffordance};
use crate::theme::{
    CURVE_BACKGROUND, CURVE_COLOR, CURVE_DISABLED_COLOR, GRID_COLOR, POINT_ACTIVE_COLOR,
    POINT_OUTLINE,
};

/// Pointer events published by the curve canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveEvent {
    /// Left button pressed over the canvas
    Pressed { position: Point, size: Size },
    /// Pointer moved (over the canvas, or anywhere while dragging)
    Moved { position: Point, size: Size },
    /// Left button released while dragging
    Released { position: Point, size: Size },
    /// Pointer left the canvas
    Left,
}

/// Canvas program drawing a [`CurveSurface`]
pub struct CurveCanvas<'a, Message, F>
where
    F: Fn(CurveEvent) -> Message,
{
    pub surface: &'a CurveSurface,
    pub on_event: F,
}

/// Release position used when the cursor is unavailable; hits no band
const OFF_CANVAS: Point = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl<'a, Message, F> Program<Message> for CurveCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(CurveEvent) -> Message,
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let Event::Mouse(mouse_event) = event else {
            return None;
        };
        let size = bounds.size();
        let dragging = self.surface.is_dragging();

        let curve_event = match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if !self.surface.is_enabled() {
                    return None;
                }
                let position = cursor.position_in(bounds)?;
                CurveEvent::Pressed { position, size }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if dragging => {
                // A drag always ends on release, even with the cursor gone
                let position = cursor
                    .position()
                    .map(|position| local(position, bounds))
                    .unwrap_or(OFF_CANVAS);
                CurveEvent::Released { position, size }
            }
            mouse::Event::CursorMoved { .. } => {
                if dragging {
                    // Keep tracking outside the canvas; y is clamped by the surface
                    let position = local(cursor.position()?, bounds);
                    CurveEvent::Moved { position, size }
                } else if let Some(position) = cursor.position_in(bounds) {
                    CurveEvent::Moved { position, size }
                } else if self.surface.hovered_band().is_some() {
                    CurveEvent::Left
                } else {
                    return None;
                }
            }
            mouse::Event::CursorLeft if !dragging => CurveEvent::Left,
            _ => return None,
        };

        Some(canvas::Action::publish((self.on_event)(curve_event)))
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match self.surface.cursor_affordance() {
            CursorAffordance::Grabbing => mouse::Interaction::Grabbing,
            CursorAffordance::Grab => mouse::Interaction::Grab,
            CursorAffordance::Default => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), CURVE_BACKGROUND);

        let geometry = self.surface.geometry_for(bounds.size());
        if !geometry.is_valid() {
            return vec![frame.into_geometry()];
        }

        draw_grid(&mut frame, &geometry, self.surface);
        draw_curve(&mut frame, &geometry, self.surface);

        vec![frame.into_geometry()]
    }
}

/// Dashed lines at min, 0 and max gain plus the curve rect outline
fn draw_grid(frame: &mut Frame, geometry: &CurveGeometry, surface: &CurveSurface) {
    let rect = geometry.curve_rect();
    let range = surface.gain_range();

    let dashed = Stroke {
        line_dash: LineDash {
            segments: &[4.0, 4.0],
            offset: 0,
        },
        ..Stroke::default().with_color(GRID_COLOR).with_width(1.0)
    };

    for value in [range.min(), 0, range.max()] {
        if !range.contains(value) {
            continue;
        }
        let y = geometry.y_for_value(value, range);
        frame.stroke(
            &Path::line(Point::new(rect.x, y), Point::new(rect.x + rect.width, y)),
            dashed.clone(),
        );
    }

    frame.stroke(
        &Path::rectangle(rect.position(), rect.size()),
        Stroke::default().with_color(GRID_COLOR).with_width(1.0),
    );
}

/// Poly-line through the band points, then the points themselves
fn draw_curve(frame: &mut Frame, geometry: &CurveGeometry, surface: &CurveSurface) {
    let values = surface.values();
    if values.is_empty() {
        return;
    }

    let range = surface.gain_range();
    let count = values.len();
    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| geometry.band_position(i, count, value, range))
        .collect();

    let enabled = surface.is_enabled();
    let line_color = if enabled {
        CURVE_COLOR
    } else {
        CURVE_DISABLED_COLOR
    };

    let line = Path::new(|builder| {
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                builder.move_to(*point);
            } else {
                builder.line_to(*point);
            }
        }
    });
    frame.stroke(&line, Stroke::default().with_color(line_color).with_width(2.0));

    let highlighted = if enabled {
        surface.active_band().or(surface.hovered_band())
    } else {
        None
    };
    let point_fill = Color {
        a: 1.0,
        ..line_color
    };

    for (i, point) in points.iter().enumerate() {
        let fill = if highlighted == Some(i) {
            POINT_ACTIVE_COLOR
        } else {
            point_fill
        };
        let marker = Path::circle(*point, surface.point_radius());
        frame.fill(&marker, fill);
        frame.stroke(
            &marker,
            Stroke::default().with_color(POINT_OUTLINE).with_width(1.2),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::DragState;
    use eqsurface_core::config::CurveConfig;
    use eqsurface_core::GainRange;

    const BOUNDS: Rectangle = Rectangle {
        x: 100.0,
        y: 50.0,
        width: 482.0,
        height: 272.0,
    };

    fn surface() -> CurveSurface {
        let mut surface = CurveSurface::new(10, GainRange::default(), &CurveConfig::default());
        surface.resize(BOUNDS.size());
        surface
    }

    fn dragging() -> CurveSurface {
        let mut surface = surface();
        // Band 3 sits at (166, 136) in canvas coordinates
        surface.pointer_pressed(Point::new(166.0, 136.0));
        assert!(surface.is_dragging());
        surface
    }

    fn publish(
        surface: &CurveSurface,
        event: mouse::Event,
        cursor: mouse::Cursor,
    ) -> Option<CurveEvent> {
        let program = CurveCanvas {
            surface,
            on_event: |event: CurveEvent| event,
        };
        program
            .update(&mut (), &Event::Mouse(event), BOUNDS, cursor)
            .and_then(|action| action.into_inner().0)
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    #[test]
    fn test_press_inside_publishes_local_position() {
        let event = publish(
            &surface(),
            mouse::Event::ButtonPressed(mouse::Button::Left),
            at(266.0, 186.0),
        );
        assert_eq!(
            event,
            Some(CurveEvent::Pressed {
                position: Point::new(166.0, 136.0),
                size: BOUNDS.size(),
            })
        );
    }

    #[test]
    fn test_press_outside_or_disabled_is_ignored() {
        let press = mouse::Event::ButtonPressed(mouse::Button::Left);
        assert_eq!(publish(&surface(), press, at(10.0, 10.0)), None);

        let mut disabled = surface();
        disabled.set_enabled(false);
        assert_eq!(publish(&disabled, press, at(266.0, 186.0)), None);
    }

    #[test]
    fn test_release_without_cursor_still_ends_drag() {
        let mut surface = dragging();
        let event = publish(
            &surface,
            mouse::Event::ButtonReleased(mouse::Button::Left),
            mouse::Cursor::Unavailable,
        );
        let Some(CurveEvent::Released { position, .. }) = event else {
            panic!("expected a release, got {:?}", event);
        };

        surface.pointer_released(position);
        assert_eq!(surface.drag_state(), DragState::Idle);
        assert_eq!(surface.pointer_moved(Point::new(166.0, 16.0)), None);
        assert_eq!(surface.value(3), Some(0));
    }

    #[test]
    fn test_release_when_idle_is_ignored() {
        let event = publish(
            &surface(),
            mouse::Event::ButtonReleased(mouse::Button::Left),
            at(266.0, 186.0),
        );
        assert_eq!(event, None);
    }

    #[test]
    fn test_drag_tracks_cursor_outside_bounds() {
        let event = publish(
            &dragging(),
            mouse::Event::CursorMoved {
                position: Point::new(0.0, 0.0),
            },
            at(0.0, 0.0),
        );
        assert_eq!(
            event,
            Some(CurveEvent::Moved {
                position: Point::new(-100.0, -50.0),
                size: BOUNDS.size(),
            })
        );
    }

    #[test]
    fn test_leaving_while_hovering_publishes_left() {
        let mut hovering = surface();
        hovering.pointer_moved(Point::new(166.0, 136.0));
        let moved = mouse::Event::CursorMoved {
            position: Point::new(0.0, 0.0),
        };
        assert_eq!(publish(&hovering, moved, at(0.0, 0.0)), Some(CurveEvent::Left));

        // Nothing to clear when idle
        assert_eq!(publish(&surface(), moved, at(0.0, 0.0)), None);
        // A drag survives the cursor leaving the canvas
        assert_eq!(publish(&dragging(), mouse::Event::CursorLeft, at(0.0, 0.0)), None);
    }
}

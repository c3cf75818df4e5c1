//! View function for the curve canvas

use iced::widget::Canvas;
use iced::{Element, Length};

use super::canvas::{CurveCanvas, CurveEvent};
use super::state::CurveSurface;
use super::CURVE_HEIGHT;

/// Create the interactive curve element
///
/// # Arguments
///
/// * `surface` - Curve state (values, range, drag state)
/// * `on_event` - Called with every pointer event the surface should handle
///
/// # Example
///
/// ```ignore
/// let curve = curve_view(&self.curve, Message::Curve);
/// ```
pub fn curve_view<'a, Message>(
    surface: &'a CurveSurface,
    on_event: impl Fn(CurveEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(CurveCanvas { surface, on_event })
        .width(Length::Fill)
        .height(Length::Fixed(CURVE_HEIGHT))
        .into()
}

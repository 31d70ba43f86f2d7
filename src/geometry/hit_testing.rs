use egui::Pos2;

use crate::element::Element;

/// Default pick distance in grid units.
pub const DEFAULT_HIT_RADIUS: f32 = 0.8;

/// True if `point` lies strictly closer than `radius` to the element's position.
pub fn is_hit(element: &Element, point: Pos2, radius: f32) -> bool {
    element.position().distance(point) < radius
}

/// Find the element under `point`.
///
/// When several elements qualify the earliest placed one wins, even if a later
/// element is drawn on top of it.
pub fn hit_test(elements: &[Element], point: Pos2, radius: f32) -> Option<&Element> {
    elements.iter().find(|element| is_hit(element, point, radius))
}

//! Axis-aligned bounding box overlap.

use super::types::Rect;

/// True when `a` and `b` share a region of positive area.
///
/// Rectangles that only touch along an edge or a corner do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Index of the first rectangle in `others` overlapping `subject`.
pub fn first_overlap<'a, I>(subject: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    others.into_iter().position(|other| overlaps(subject, other))
}

//! Edge lines between parent and child circles.

use svg::node::element as svg_element;

use arbor_core::geometry::Point;

use super::Svg;
use crate::layout::PlaceableNode;

/// Computes the visible segment of the edge between two circle centres.
///
/// The segment starts on the surface of the parent circle and ends on the
/// surface of the child circle, each end pulled further inward by its inset.
/// Returns `None` when the two centres coincide.
///
/// # Examples
///
/// ```
/// # use arbor::export::svg::edge_endpoints;
/// # use arbor_core::geometry::Point;
/// let (start, end) =
///     edge_endpoints(Point::new(0.0, 0.0), Point::new(0.0, 100.0), 20.0, 0.0, 5.0).unwrap();
/// assert!((start.y() - 20.0).abs() < 1e-4);
/// assert!((end.y() - 75.0).abs() < 1e-4);
/// ```
pub fn edge_endpoints(
    parent: Point,
    child: Point,
    radius: f32,
    start_inset: f32,
    end_inset: f32,
) -> Option<(Point, Point)> {
    let direction = child.sub_point(parent).normalize()?;
    let start = parent.add_point(direction.scale(radius + start_inset));
    let end = child.sub_point(direction.scale(radius + end_inset));
    Some((start, end))
}

impl Svg {
    fn marker_id(&self) -> String {
        format!("arrow-{}", self.edge_color.to_id_safe_string())
    }

    /// The arrow head definition, if edges carry arrows.
    ///
    /// The head is `arrow_size` long in user units and its base sits at the
    /// end of the line, so the tip touches the child circle.
    pub(super) fn arrow_marker(&self) -> Option<svg_element::Marker> {
        let size = self.arrow_size?;

        let marker = svg_element::Marker::new()
            .set("id", self.marker_id())
            .set("markerUnits", "userSpaceOnUse")
            .set("refX", 0)
            .set("refY", size / 2.0)
            .set("markerWidth", size)
            .set("markerHeight", size)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", format!("M 0 0 L {size} {} L 0 {size} Z", size / 2.0))
                    .set("fill", &self.edge_color)
                    .set("fill-opacity", self.edge_color.alpha()),
            );
        Some(marker)
    }

    pub(super) fn render_edge(
        &self,
        parent: &PlaceableNode,
        child: &PlaceableNode,
    ) -> Option<svg_element::Line> {
        let end_inset = self.arrow_size.unwrap_or(0.0);
        let (start, end) =
            edge_endpoints(parent.position(), child.position(), self.radius, 0.0, end_inset)?;

        let mut line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y())
            .set("stroke", &self.edge_color)
            .set("stroke-opacity", self.edge_color.alpha())
            .set("stroke-width", self.edge_width);

        if self.arrow_size.is_some() {
            line = line.set("marker-end", format!("url(#{})", self.marker_id()));
        }

        Some(line)
    }
}

//! Boundary to the stroke-outline and path collaborators.
//!
//! Freehand elements carry a renderable outline derived from their samples.
//! Producing that outline is not this crate's job: the application supplies a
//! [`StrokeOutliner`] and a [`PathSerializer`], bundled in an
//! [`OutlinePipeline`], and the core only stores what they return.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// Polygon approximating the visible boundary of a freehand stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutlinePolygon(pub Vec<Point>);

impl OutlinePolygon {
    /// Vertices of the polygon, in order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

/// Path handed to a rendering surface. Opaque to the core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderablePath(BezPath);

impl RenderablePath {
    /// Wrap a path built by a [`PathSerializer`].
    pub fn new(path: BezPath) -> Self {
        Self(path)
    }

    /// Borrow the underlying path for painting.
    pub fn as_bez_path(&self) -> &BezPath {
        &self.0
    }

    /// Whether the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.elements().is_empty()
    }
}

/// Turns an ordered, growing sequence of samples (at least one) into an
/// outline polygon.
pub trait StrokeOutliner {
    fn compute_outline(&self, points: &[Point]) -> OutlinePolygon;
}

/// Converts an outline polygon into a renderable path.
pub trait PathSerializer {
    fn to_renderable_path(&self, outline: &OutlinePolygon) -> RenderablePath;
}

/// Outliner that returns the samples unchanged (a zero-width centerline).
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterlineOutliner;

impl StrokeOutliner for CenterlineOutliner {
    fn compute_outline(&self, points: &[Point]) -> OutlinePolygon {
        OutlinePolygon(points.to_vec())
    }
}

/// Closed path of quadratic segments through the midpoints of consecutive
/// outline vertices, each vertex acting as the control point.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticPathSerializer;

impl PathSerializer for QuadraticPathSerializer {
    fn to_renderable_path(&self, outline: &OutlinePolygon) -> RenderablePath {
        let points = outline.points();
        let mut path = BezPath::new();
        let Some(&first) = points.first() else {
            return RenderablePath(path);
        };

        path.move_to(first);
        for (i, &p0) in points.iter().enumerate() {
            let p1 = points[(i + 1) % points.len()];
            path.quad_to(p0, p0.midpoint(p1));
        }
        path.close_path();

        RenderablePath(path)
    }
}

/// The two collaborators, run back to back for every outline request.
pub struct OutlinePipeline {
    outliner: Box<dyn StrokeOutliner>,
    serializer: Box<dyn PathSerializer>,
}

impl OutlinePipeline {
    /// Bundle an outliner with the serializer that turns its output into a path.
    pub fn new(
        outliner: impl StrokeOutliner + 'static,
        serializer: impl PathSerializer + 'static,
    ) -> Self {
        Self {
            outliner: Box::new(outliner),
            serializer: Box::new(serializer),
        }
    }

    /// Compute the outline of `points` and serialize it.
    pub fn render(&self, points: &[Point]) -> RenderablePath {
        let outline = self.outliner.compute_outline(points);
        self.serializer.to_renderable_path(&outline)
    }
}

impl Default for OutlinePipeline {
    fn default() -> Self {
        Self::new(CenterlineOutliner, QuadraticPathSerializer)
    }
}

impl std::fmt::Debug for OutlinePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlinePipeline").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_centerline_keeps_samples() {
        let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let outline = CenterlineOutliner.compute_outline(&points);
        assert_eq!(outline.points(), points.as_slice());
    }

    #[test]
    fn test_quadratic_path_shape() {
        let outline = OutlinePolygon(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        let path = QuadraticPathSerializer.to_renderable_path(&outline);
        let elements = path.as_bez_path().elements();

        // move + one quad per vertex + close
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            elements[2],
            PathEl::QuadTo(Point::new(10.0, 0.0), Point::new(10.0, 5.0))
        );
        // last vertex wraps around to the first
        assert_eq!(
            elements[3],
            PathEl::QuadTo(Point::new(10.0, 10.0), Point::new(5.0, 5.0))
        );
        assert_eq!(elements[4], PathEl::ClosePath);
    }

    #[test]
    fn test_empty_outline_gives_empty_path() {
        let path = QuadraticPathSerializer.to_renderable_path(&OutlinePolygon::default());
        assert!(path.is_empty());
    }

    #[test]
    fn test_single_point_outline() {
        let pipeline = OutlinePipeline::default();
        let path = pipeline.render(&[Point::new(4.0, 2.0)]);
        assert_eq!(path.as_bez_path().elements().len(), 3);
    }
}

//! Freehand strokes and the point accumulator that grows them.

use super::{Element, ElementBody};
use crate::error::{BoardError, BoardResult};
use crate::outline::{OutlinePipeline, RenderablePath};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Sample points of a freehand stroke and the outline derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Samples in the order they were received.
    pub points: Vec<Point>,
    /// Outline of `points`, as returned by the outline pipeline.
    pub outline: RenderablePath,
}

impl Stroke {
    /// Start a stroke at a single seed point.
    pub fn seeded(seed: Point, pipeline: &OutlinePipeline) -> Self {
        let points = vec![seed];
        let outline = pipeline.render(&points);
        Self { points, outline }
    }

    /// A copy of this stroke with `point` appended and the outline recomputed
    /// over every sample.
    pub fn appended(&self, point: Point, pipeline: &OutlinePipeline) -> Self {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);
        let outline = pipeline.render(&points);
        Self { points, outline }
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the samples.
    pub fn bounds(&self) -> Rect {
        let Some(&first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(first, first), |rect, &p| rect.union_pt(p))
    }
}

/// Append a pointer sample to a freehand element.
///
/// Samples are taken as-is: duplicates and backtracking are kept, in call order.
pub fn append_point(
    element: &Element,
    x: f64,
    y: f64,
    pipeline: &OutlinePipeline,
) -> BoardResult<Element> {
    let ElementBody::Stroke(stroke) = &element.body else {
        return Err(BoardError::UnrecognizedElementKind {
            id: element.id,
            kind: element.kind,
        });
    };

    Ok(Element {
        id: element.id,
        kind: element.kind,
        style: element.style.clone(),
        body: ElementBody::Stroke(stroke.appended(Point::new(x, y), pipeline)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Anchors, StyleAttributes};
    use crate::tools::ToolKind;

    fn freehand(seed: Point, pipeline: &OutlinePipeline) -> Element {
        Element {
            id: 3,
            kind: ToolKind::Freehand,
            style: StyleAttributes::default(),
            body: ElementBody::Stroke(Stroke::seeded(seed, pipeline)),
        }
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let pipeline = OutlinePipeline::default();
        let mut element = freehand(Point::new(0.0, 0.0), &pipeline);
        for (x, y) in [(5.0, 5.0), (5.0, 5.0), (1.0, 2.0)] {
            element = append_point(&element, x, y, &pipeline).unwrap();
        }

        let stroke = element.stroke().unwrap();
        assert_eq!(
            stroke.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(5.0, 5.0),
                Point::new(1.0, 2.0),
            ]
        );
        assert_eq!(element.id, 3);
    }

    #[test]
    fn test_append_leaves_input_untouched() {
        let pipeline = OutlinePipeline::default();
        let element = freehand(Point::new(1.0, 1.0), &pipeline);
        let grown = append_point(&element, 2.0, 2.0, &pipeline).unwrap();

        assert_eq!(element.stroke().unwrap().len(), 1);
        assert_eq!(grown.stroke().unwrap().len(), 2);
        assert_ne!(element.stroke().unwrap().outline, grown.stroke().unwrap().outline);
    }

    #[test]
    fn test_append_to_anchor_body_fails() {
        let pipeline = OutlinePipeline::default();
        let element = Element {
            id: 0,
            kind: ToolKind::Freehand,
            style: StyleAttributes::default(),
            body: ElementBody::Anchors(Anchors::new(0.0, 0.0, 0.0, 0.0)),
        };
        let err = append_point(&element, 1.0, 1.0, &pipeline).unwrap_err();
        assert_eq!(
            err,
            BoardError::UnrecognizedElementKind {
                id: 0,
                kind: ToolKind::Freehand
            }
        );
    }

    #[test]
    fn test_bounds() {
        let pipeline = OutlinePipeline::default();
        let stroke = Stroke::seeded(Point::new(0.0, 0.0), &pipeline)
            .appended(Point::new(100.0, 50.0), &pipeline)
            .appended(Point::new(50.0, 100.0), &pipeline);

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }
}

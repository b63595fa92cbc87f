use tracing::trace;

use crate::inspection::defects::labeler::flood_fill;
use crate::inspection::raster::{BoundingBox, Raster, VisitedGrid, MARKER};

/// Inclusive bounds on bounding-box area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaRange {
    pub min: u64,
    pub max: u64,
}

impl AreaRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, area: u64) -> bool {
        self.min <= area && area <= self.max
    }
}

/// Components found by one classification scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOutcome {
    /// Boxes whose area fell inside the range, in scan order
    pub accepted: Vec<BoundingBox>,
    /// Components discarded for being too small or too large
    pub rejected: usize,
}

/// Annotated output of [`classify`].
#[derive(Debug, Clone)]
pub struct ImperfectionMap {
    pub raster: Raster,
    pub defects: Vec<BoundingBox>,
    pub rejected: usize,
}

impl ImperfectionMap {
    pub fn total_area(&self) -> u64 {
        self.defects.iter().map(BoundingBox::area).sum()
    }
}

/// Paints every pixel of `bbx`, corners inclusive.
pub fn paint_box(output: &mut Raster, bbx: &BoundingBox, color: u32) {
    for y in bbx.min_y..=bbx.max_y {
        for x in bbx.min_x..=bbx.max_x {
            output.set(x, y, color);
        }
    }
}

/// Labels every interior foreground component of `input` and paints the
/// boxes whose area lies in `range` onto a black raster.
pub fn classify(input: &Raster, range: &AreaRange) -> ImperfectionMap {
    let mut visited = VisitedGrid::for_raster(input);
    let mut raster = Raster::new(input.width(), input.height());
    let outcome = classify_into(input, &mut visited, range, &mut raster);

    ImperfectionMap {
        raster,
        defects: outcome.accepted,
        rejected: outcome.rejected,
    }
}

/// Scan behind [`classify`] against caller-owned state. Seeds are taken
/// column by column; pixels already in `visited` never start a component.
pub fn classify_into(
    input: &Raster,
    visited: &mut VisitedGrid,
    range: &AreaRange,
    output: &mut Raster,
) -> ClassifyOutcome {
    let mut outcome = ClassifyOutcome::default();

    for x in 1..input.width().saturating_sub(1) {
        for y in 1..input.height().saturating_sub(1) {
            if visited.is_visited(x, y) || !input.is_foreground(x, y) {
                continue;
            }

            let bbx = flood_fill(input, x, y, visited);
            let area = bbx.area();

            if !range.contains(area) {
                trace!(?bbx, area, "component rejected");
                outcome.rejected += 1;
                continue;
            }

            paint_box(output, &bbx, MARKER);
            outcome.accepted.push(bbx);
        }
    }

    outcome
}

use tracing::trace;

use crate::error::{Result, ShapeError};
use crate::math::{lengths_equal, EXACT};
use crate::topology::{Line, PointId, PointStore};

use super::ShapeKind;

/// Construction arguments shared by every shape.
///
/// Supply either `vertices` or `edges`; the other is derived. Supplying both
/// keeps them as given, supplying neither yields an empty outline.
#[derive(Debug, Clone, Default)]
pub struct ShapeInput {
    pub vertices: Vec<PointId>,
    pub edges: Vec<Line>,
    /// Inner angles in degrees. Ignored by shapes that compute their own.
    pub inner_angles: Vec<f64>,
    /// Regularity hint. Stored only; [`Outline::is_regular`] never reads it.
    pub is_regular: bool,
    /// Tolerance for edge-length equality. [`EXACT`] by default.
    pub tolerance: f64,
}

impl ShapeInput {
    /// Input with neither vertices nor edges.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_vertices(vertices: Vec<PointId>) -> Self {
        Self::default().with_vertices(vertices)
    }

    #[must_use]
    pub fn from_edges(edges: Vec<Line>) -> Self {
        Self::default().with_edges(edges)
    }

    #[must_use]
    pub fn with_vertices(mut self, vertices: Vec<PointId>) -> Self {
        self.vertices = vertices;
        self
    }

    #[must_use]
    pub fn with_edges(mut self, edges: Vec<Line>) -> Self {
        self.edges = edges;
        self
    }

    #[must_use]
    pub fn with_inner_angles(mut self, inner_angles: Vec<f64>) -> Self {
        self.inner_angles = inner_angles;
        self
    }

    #[must_use]
    pub fn with_regular(mut self, is_regular: bool) -> Self {
        self.is_regular = is_regular;
        self
    }

    /// Sets the tolerance used when comparing edge lengths.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// The common data of every shape: vertices, edges, inner angles.
///
/// Vertex `i` is joined to vertex `i + 1 (mod n)` by edge `i`. Derivation
/// between the two representations only happens at construction; the
/// setters store what they are given without re-deriving anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    vertices: Vec<PointId>,
    edges: Vec<Line>,
    inner_angles: Vec<f64>,
    regular_hint: bool,
    tolerance: f64,
}

impl Outline {
    /// Stores the input as given, without deriving edges or vertices.
    #[must_use]
    pub fn new(input: ShapeInput) -> Self {
        Self {
            vertices: input.vertices,
            edges: input.edges,
            inner_angles: input.inner_angles,
            regular_hint: input.is_regular,
            tolerance: input.tolerance.max(EXACT),
        }
    }

    /// Builds a closed outline, deriving whichever of vertices or edges is
    /// missing.
    #[must_use]
    pub fn closed(input: ShapeInput) -> Self {
        let mut outline = Self::new(input);
        if outline.edges.is_empty() && !outline.vertices.is_empty() {
            outline.define_edges();
        } else if outline.vertices.is_empty() && !outline.edges.is_empty() {
            outline.define_vertices();
        }
        outline
    }

    /// Replaces the edges with the cycle through the current vertices.
    ///
    /// Does nothing when there are no vertices.
    pub fn define_edges(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        self.edges = self
            .vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(&start, &end)| Line::new(start, end))
            .collect();
        trace!(edges = self.edges.len(), "derived edges from vertices");
    }

    /// Replaces the vertices with the start of the first edge followed by
    /// the end of every edge but the last.
    ///
    /// Does nothing when there are no edges.
    pub fn define_vertices(&mut self) {
        let Some(first) = self.edges.first() else {
            return;
        };
        let mut vertices = Vec::with_capacity(self.edges.len());
        vertices.push(first.start);
        vertices.extend(self.edges[..self.edges.len() - 1].iter().map(|e| e.end));
        self.vertices = vertices;
        trace!(vertices = self.vertices.len(), "derived vertices from edges");
    }

    #[must_use]
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    pub fn set_vertices(&mut self, vertices: Vec<PointId>) {
        self.vertices = vertices;
    }

    #[must_use]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    pub fn set_edges(&mut self, edges: Vec<Line>) {
        self.edges = edges;
    }

    #[must_use]
    pub fn inner_angles(&self) -> &[f64] {
        &self.inner_angles
    }

    pub fn set_inner_angles(&mut self, inner_angles: Vec<f64>) {
        self.inner_angles = inner_angles;
    }

    /// The regularity flag supplied at construction.
    #[must_use]
    pub fn regular_hint(&self) -> bool {
        self.regular_hint
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Current length of every edge, in edge order.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`.
    pub fn edge_lengths(&self, store: &PointStore) -> Result<Vec<f64>> {
        self.edges.iter().map(|edge| edge.length(store)).collect()
    }

    /// Sum of the edge lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`.
    pub fn perimeter(&self, store: &PointStore) -> Result<f64> {
        Ok(self.edge_lengths(store)?.into_iter().sum())
    }

    /// Whether every edge has the first edge's length and every inner angle
    /// equals the first angle.
    ///
    /// Always `false` when there are no edges or no inner angles, whatever
    /// hint was given at construction.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`.
    pub fn is_regular(&self, store: &PointStore) -> Result<bool> {
        let Some(&first_angle) = self.inner_angles.first() else {
            return Ok(false);
        };
        if self.edges.is_empty() {
            return Ok(false);
        }
        #[allow(clippy::float_cmp)]
        let same_angles = self.inner_angles.iter().all(|&a| a == first_angle);
        Ok(same_angles && self.has_equal_edges(store)?)
    }

    /// Whether all edges share the first edge's length, within the tolerance.
    pub(crate) fn has_equal_edges(&self, store: &PointStore) -> Result<bool> {
        let lengths = self.edge_lengths(store)?;
        let Some(&first) = lengths.first() else {
            return Ok(true);
        };
        Ok(lengths
            .iter()
            .all(|&len| lengths_equal(len, first, self.tolerance)))
    }

    /// Fails unless there are exactly as many vertices and edges as `kind`
    /// requires.
    pub(crate) fn ensure_sides(&self, kind: ShapeKind) -> Result<()> {
        let expected = kind.side_count();
        if self.vertices.len() != expected || self.edges.len() != expected {
            return Err(self.count_mismatch(kind).into());
        }
        Ok(())
    }

    pub(crate) fn count_mismatch(&self, kind: ShapeKind) -> ShapeError {
        ShapeError::CountMismatch {
            kind,
            expected: kind.side_count(),
            vertices: self.vertices.len(),
            edges: self.edges.len(),
        }
    }
}

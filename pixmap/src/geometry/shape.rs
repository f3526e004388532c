///
/// A shape that can be drawn or filled by converting it to a list of points
///
/// The points describe a closed outline: drawing a shape joins the last point back to the first.
///
pub trait Shape {
    /// The vertices of this shape
    fn points(&self) -> Vec<(f32, f32)>;
}

///
/// An arbitrary polygon
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    points: Vec<(f32, f32)>,
}

///
/// A triangle defined by its three corners
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [(f32, f32); 3],
}

///
/// A path built from a series of straight lines
///
/// Paths are drawn as open polylines by `Pixmap::draw_path`, but close up when treated as a `Shape`.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    points: Vec<(f32, f32)>,
}

impl Polygon {
    /// Creates a polygon from a set of vertices
    pub fn new(points: impl IntoIterator<Item=(f32, f32)>) -> Polygon {
        Polygon { points: points.into_iter().collect() }
    }

    /// Adds a vertex to the end of this polygon
    pub fn add_point(&mut self, x: f32, y: f32) {
        self.points.push((x, y));
    }
}

impl Triangle {
    pub fn new(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Triangle {
        Triangle { points: [a, b, c] }
    }
}

impl Path {
    /// Starts a new path at a point
    pub fn new(x: f32, y: f32) -> Path {
        Path { points: vec![(x, y)] }
    }

    /// Adds a line from the last point to a new point
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Path {
        self.points.push((x, y));
        self
    }

    /// The number of points in this path
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Shape for Polygon {
    fn points(&self) -> Vec<(f32, f32)> {
        self.points.clone()
    }
}

impl Shape for Triangle {
    fn points(&self) -> Vec<(f32, f32)> {
        self.points.to_vec()
    }
}

impl Shape for Path {
    fn points(&self) -> Vec<(f32, f32)> {
        self.points.clone()
    }
}

///
/// Converts the points of a shape to integer pixel coordinates, offsetting them by `(x, y)` (fractions are truncated)
///
pub fn shape_pixel_points(shape: &dyn Shape, x: i32, y: i32) -> Vec<(i32, i32)> {
    shape.points()
        .into_iter()
        .map(|(px, py)| ((px + x as f32) as i32, (py + y as f32) as i32))
        .collect()
}

//! Cost oracles.
//!
//! A [`CostOracle`] supplies leg costs between locations. The engine only
//! ever reads from it, possibly from several evaluation workers at once, so
//! implementations must be pure.
//!
//! - [`Euclidean`]: planar coordinates, static cost
//! - [`DistanceMatrix`]: explicit pairwise distances
//! - [`Congestion`]: time-dependent multiplier over any other oracle
//!
//! All oracles index locations `0..size()`. Indices outside that range are a
//! contract violation and panic; tours built by the GA never produce them.

/// Source of travel costs between locations.
///
/// `cost` receives the running clock at departure, letting implementations
/// model time-dependent travel. The default ignores the clock.
pub trait CostOracle: Send + Sync {
    /// Number of locations.
    fn size(&self) -> usize;

    /// Static distance between two locations. Non-negative.
    fn distance(&self, from: usize, to: usize) -> f64;

    /// Cost of travelling `from -> to` when leaving at `departure_time`.
    /// Non-negative.
    fn cost(&self, from: usize, to: usize, departure_time: f64) -> f64 {
        let _ = departure_time;
        self.distance(from, to)
    }
}

impl<O: CostOracle + ?Sized> CostOracle for &O {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        (**self).distance(from, to)
    }

    fn cost(&self, from: usize, to: usize, departure_time: f64) -> f64 {
        (**self).cost(from, to, departure_time)
    }
}

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Euclidean distances over a set of points.
///
/// ```
/// use u_tdtsp::oracle::{CostOracle, Euclidean, Point};
///
/// let oracle = Euclidean::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
/// assert_eq!(oracle.size(), 2);
/// assert!((oracle.cost(0, 1, 123.0) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Euclidean {
    points: Vec<Point>,
}

impl Euclidean {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl CostOracle for Euclidean {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.points[from].distance_to(&self.points[to])
    }
}

/// Square matrix of pairwise distances, stored row-major.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows.
    ///
    /// # Panics
    /// Panics if the rows do not form a square matrix or any entry is
    /// negative or not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "distance matrix must be square");
            assert!(
                row.iter().all(|d| d.is_finite() && *d >= 0.0),
                "distances must be finite and non-negative"
            );
            data.extend(row);
        }
        Self { n, data }
    }

    /// Precomputes all Euclidean distances between `points`.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let data = points
            .iter()
            .flat_map(|a| points.iter().map(move |b| a.distance_to(b)))
            .collect();
        Self { n, data }
    }
}

impl CostOracle for DistanceMatrix {
    fn size(&self) -> usize {
        self.n
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "location index out of range");
        self.data[from * self.n + to]
    }
}

/// Time-dependent congestion over an inner oracle.
///
/// Leg cost is `distance * factor`, where
/// `factor = max(1, 1 + amplitude * sin(departure_time / time_scale))`.
/// The floor keeps congestion from ever making travel cheaper than the
/// static distance.
#[derive(Debug, Clone)]
pub struct Congestion<O> {
    inner: O,
    amplitude: f64,
    time_scale: f64,
}

impl<O: CostOracle> Congestion<O> {
    /// Wraps `inner` with amplitude 0.5 and time scale 10.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            amplitude: 0.5,
            time_scale: 10.0,
        }
    }

    /// Sets the peak relative slowdown.
    ///
    /// # Panics
    /// Panics if `amplitude` is not finite.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        assert!(amplitude.is_finite(), "amplitude must be finite");
        self.amplitude = amplitude;
        self
    }

    /// Sets the divisor applied to the clock before the sine.
    ///
    /// # Panics
    /// Panics if `time_scale` is not a positive finite number.
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        assert!(
            time_scale.is_finite() && time_scale > 0.0,
            "time scale must be positive and finite"
        );
        self.time_scale = time_scale;
        self
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Multiplier applied to a leg leaving at `departure_time`.
    pub fn factor(&self, departure_time: f64) -> f64 {
        (1.0 + self.amplitude * (departure_time / self.time_scale).sin()).max(1.0)
    }
}

impl<O: CostOracle> CostOracle for Congestion<O> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.inner.distance(from, to)
    }

    fn cost(&self, from: usize, to: usize, departure_time: f64) -> f64 {
        self.inner.distance(from, to) * self.factor(departure_time)
    }
}

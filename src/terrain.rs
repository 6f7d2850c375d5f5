use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::levels::TerrainSpec;

/// Ground profile for one level: a polyline with strictly increasing x and
/// one flat segment designated as the landing pad. Immutable for the life of
/// a session.
#[derive(Debug, Clone)]
pub struct Terrain {
    points: Vec<Vec2>,
    pad_segment: usize,
}

impl Terrain {
    pub fn from_spec(spec: &TerrainSpec) -> Self {
        match spec {
            TerrainSpec::Profile {
                points,
                pad_segment,
            } => Self::from_points(
                points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
                *pad_segment,
            ),
            TerrainSpec::Generated {
                seed,
                width,
                segments,
                base_height,
                roughness,
                pad_width,
            } => Self::generate(*seed, *width, *segments, *base_height, *roughness, *pad_width),
        }
    }

    pub fn from_points(points: Vec<Vec2>, pad_segment: usize) -> Self {
        assert!(points.len() >= 2, "terrain needs at least one segment");
        assert!(
            pad_segment + 1 < points.len(),
            "pad segment index out of range"
        );
        assert!(
            points.windows(2).all(|w| w[0].x < w[1].x),
            "terrain x coordinates must be strictly increasing"
        );
        Self {
            points,
            pad_segment,
        }
    }

    /// Builds a reproducible random profile: a walk of vertex heights around
    /// `base_height`, with one segment flattened into a pad of `pad_width`.
    pub fn generate(
        seed: u64,
        width: f32,
        segments: usize,
        base_height: f32,
        roughness: f32,
        pad_width: f32,
    ) -> Self {
        let segments = segments.max(3);
        let mut rng = StdRng::seed_from_u64(seed);

        // Pad somewhere away from the map edges.
        let pad_segment = rng.gen_range(1..segments - 1);
        let plain_width = (width - pad_width) / (segments - 1) as f32;

        let mut points = Vec::with_capacity(segments + 1);
        let mut x = -width / 2.0;
        let mut height = (base_height + rng.gen_range(-roughness..=roughness)).max(0.0);
        points.push(Vec2::new(x, height));

        for segment in 0..segments {
            if segment == pad_segment {
                // Pad is flat: carry the height across.
                x += pad_width;
            } else {
                x += plain_width;
                height = (base_height + rng.gen_range(-roughness..=roughness)).max(0.0);
            }
            points.push(Vec2::new(x, height));
        }

        Self::from_points(points, pad_segment)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Horizontal extent of the profile.
    pub fn span(&self) -> (f32, f32) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }

    pub fn pad_span(&self) -> (f32, f32) {
        (
            self.points[self.pad_segment].x,
            self.points[self.pad_segment + 1].x,
        )
    }

    pub fn pad_height(&self) -> f32 {
        self.points[self.pad_segment].y
    }

    pub fn pad_contains(&self, x: f32) -> bool {
        let (start, end) = self.pad_span();
        x >= start && x <= end
    }

    /// Ground height at `x` by linear interpolation along the profile, or
    /// `None` outside the horizontal extent.
    pub fn height_at(&self, x: f32) -> Option<f32> {
        self.points.windows(2).find_map(|w| {
            let (a, b) = (w[0], w[1]);
            if x >= a.x && x <= b.x {
                let t = (x - a.x) / (b.x - a.x);
                Some(a.y + t * (b.y - a.y))
            } else {
                None
            }
        })
    }
}

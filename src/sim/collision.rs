//! Collision detection between the player and creatures
//!
//! Everything is an axis-aligned box built from a center point and its
//! extents. Two boxes collide only when their intersection has strictly
//! positive area: touching edges do not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::creature::Creature;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of `width` x `height` centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Overlapping region, or `None` when the boxes share no interior
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        Some(Aabb { min, max })
    }

    /// True when the intersection area is strictly positive
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.intersection(other)
            .is_some_and(|overlap| overlap.area() > 0.0)
    }
}

/// First creature whose box overlaps `target`, in collection order
pub fn first_hit<'a, I>(target: &Aabb, creatures: I) -> Option<&'a Creature>
where
    I: IntoIterator<Item = &'a Creature>,
{
    creatures
        .into_iter()
        .find(|creature| creature.bounds().overlaps(target))
}

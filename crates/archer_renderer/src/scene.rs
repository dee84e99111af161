//! Scene: the objects a render sees, keyed by stable ids.

use std::collections::BTreeMap;
use std::fmt;

use crate::geometry::{Geometry, HIT_RANGE};
use crate::material::Material;
use archer_math::Ray;

/// Stable identifier of a scene object.
///
/// Ids come from a per-scene counter and are never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A geometry paired with the material it is shaded with.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub geometry: Geometry,
    pub material: Material,
}

/// Nearest hit found by [`Scene::intersect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub object_id: ObjectId,
    /// Distance along the ray's unit direction
    pub distance: f32,
}

/// A flat collection of objects plus the background seen by escaping rays.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: usize,
    background: Material,
}

impl Scene {
    /// Create an empty scene with the default sky as background.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            next_id: 0,
            background: Material::sky(),
        }
    }

    /// Set the material shaded when a ray escapes the scene.
    pub fn with_background(mut self, background: Material) -> Self {
        self.background = background;
        self
    }

    pub fn background(&self) -> &Material {
        &self.background
    }

    /// Add an object to the scene and return its id.
    pub fn add(&mut self, geometry: impl Into<Geometry>, material: Material) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let object = SceneObject {
            id,
            geometry: geometry.into(),
            material,
        };
        log::debug!("Added object {}: {:?} / {:?}", id, object.geometry, object.material);
        self.objects.insert(id, object);
        id
    }

    /// Remove an object. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id);
        if removed.is_some() {
            log::debug!("Removed object {}", id);
        }
        removed
    }

    /// Get an object by id.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Iterate objects in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest object hit by `ray`.
    ///
    /// Linear scan in ascending id order. When two objects are hit at exactly
    /// the same distance the lower id wins.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.nearest_hit(ray).map(|(object, distance)| Intersection {
            object_id: object.id,
            distance,
        })
    }

    pub(crate) fn nearest_hit(&self, ray: &Ray) -> Option<(&SceneObject, f32)> {
        let mut nearest = None;
        let mut closest_so_far = HIT_RANGE.max;

        for object in self.objects.values() {
            // Strict upper bound: an equal distance never replaces an earlier id
            let range = HIT_RANGE.with_max(closest_so_far);
            if let Some(distance) = object.geometry.intersect_within(ray, range) {
                closest_so_far = distance;
                nearest = Some((object, distance));
            }
        }

        nearest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

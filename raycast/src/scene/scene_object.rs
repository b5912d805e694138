use raycast_core::models::pixel::Pixel;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::surface::Surface;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;

/// Closed set of renderable shapes. The scene stores these by value in one
/// contiguous collection, and every operation dispatches with an exhaustive
/// match, so adding a shape means updating each arm here.
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {

    // smallest non-negative distance along the ray, if the shape is hit
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
        }
    }

    pub fn normal_at(&self, ray: &Ray, distance: f64) -> Vector3 {
        match self {
            SceneObject::Sphere(sphere) => sphere.normal_at(ray, distance),
            SceneObject::Plane(plane) => plane.normal_at(ray, distance),
        }
    }

    pub fn color(&self) -> &Vector3 {
        match self {
            SceneObject::Sphere(sphere) => sphere.color(),
            SceneObject::Plane(plane) => plane.color(),
        }
    }

    pub fn surface(&self) -> &Surface {
        match self {
            SceneObject::Sphere(sphere) => sphere.surface(),
            SceneObject::Plane(plane) => plane.surface(),
        }
    }
}

// scene colors come in with 0-255 channels and are stored in the unit range
pub(crate) fn color_from_pixel(color: &Pixel) -> Vector3 {
    Vector3::new(
        color.red as f64 / 255.0,
        color.green as f64 / 255.0,
        color.blue as f64 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_stored_in_the_unit_range() {
        let sphere = Sphere::new(Vector3::zero(), 1.0, Pixel::from_rgb(255, 0, 51), Surface::default());
        let object = SceneObject::Sphere(sphere);

        assert_eq!(*object.color(), Vector3::new(1.0, 0.0, 0.2));
    }
}

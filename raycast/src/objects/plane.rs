use raycast_core::models::pixel::Pixel;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::surface::Surface;
use crate::scene::scene_object::color_from_pixel;

const DELTA: f64 = 1e-6;

// near-origin exclusion against self-intersection and the effective view distance
const DISTANCE_MIN: f64 = 0.01;
const DISTANCE_MAX: f64 = 1000.0;

pub struct Plane {

    point: Vector3,
    normal: Vector3,
    color: Vector3,
    surface: Surface,
}

impl Plane {

    pub fn new(point: Vector3, normal: Vector3, color: Pixel, surface: Surface) -> Self {
        Self {
            point,
            normal: normal.normalized(),
            color: color_from_pixel(&color),
            surface,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction().dot_product(&self.normal);
        if denom.abs() <= DELTA {
            return None;
        }

        let distance = (&self.point - ray.origin()).dot_product(&self.normal) / denom;
        if distance >= DISTANCE_MIN && distance <= DISTANCE_MAX {
            Some(distance)
        } else {
            None
        }
    }

    // the stored normal, flipped to face the side the ray came from
    pub fn normal_at(&self, ray: &Ray, _distance: f64) -> Vector3 {
        if ray.direction().dot_product(&self.normal) > 0.0 {
            self.normal * -1.0
        } else {
            self.normal
        }
    }

    pub fn color(&self) -> &Vector3 {
        &self.color
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground_plane() -> Plane {
        Plane::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0), Pixel::white(), Surface::default())
    }

    #[test]
    fn misses_a_parallel_ray() {
        let plane = ground_plane();
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn hits_from_above() {
        let plane = ground_plane();
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));

        let distance = plane.intersect(&ray).expect("expected a hit");
        assert!((distance - 5.0).abs() < 1e-9);
        assert_eq!(plane.normal_at(&ray, distance), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn normal_faces_a_ray_from_below() {
        let plane = ground_plane();
        let ray = Ray::new(Vector3::new(0.0, -5.0, 0.0), Vector3::new(0.0, 1.0, 0.0));

        assert_eq!(plane.normal_at(&ray, 5.0), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn misses_below_the_near_exclusion() {
        let plane = ground_plane();
        let ray = Ray::new(Vector3::new(0.0, 0.005, 0.0), Vector3::new(0.0, -1.0, 0.0));

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn misses_beyond_the_far_cutoff() {
        let plane = ground_plane();
        let ray = Ray::new(Vector3::new(0.0, 1500.0, 0.0), Vector3::new(0.0, -1.0, 0.0));

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn normalizes_the_stored_normal_at_construction() {
        let plane = Plane::new(Vector3::zero(), Vector3::new(0.0, 5.0, 0.0), Pixel::white(), Surface::default());
        let ray = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::new(0.0, -1.0, 0.0));

        let distance = plane.intersect(&ray).expect("expected a hit");
        assert!((distance - 3.0).abs() < 1e-9);
    }
}

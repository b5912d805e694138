use raycast_core::models::pixel::Pixel;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::surface::Surface;
use crate::scene::scene_object::color_from_pixel;

pub struct Sphere {

    center: Vector3,
    radius: f64,
    color: Vector3,
    surface: Surface,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64, color: Pixel, surface: Surface) -> Self {
        Self {
            center,
            radius,
            color: color_from_pixel(&color),
            surface,
        }
    }

    // Ray(t) = origin + t * direction, sphere |point - center|^2 = radius^2.
    // Substituting gives a quadratic in t with
    //   a = |direction|^2
    //   b = 2 * dot(direction, origin - center)
    //   c = |origin - center|^2 - radius^2
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let to_origin = ray.origin() - &self.center;
        let a = ray.direction().dot_product(ray.direction());
        let b = 2.0 * to_origin.dot_product(ray.direction());
        let c = to_origin.dot_product(&to_origin) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let (t0, t1) = if discriminant == 0.0 {
            let t = -0.5 * b / a;
            (t, t)
        } else {
            // branch on the sign of b to avoid cancellation between b and sqrt(disc)
            let q = if b > 0.0 {
                -0.5 * (b + discriminant.sqrt())
            } else {
                -0.5 * (b - discriminant.sqrt())
            };

            let (t0, t1) = (q / a, c / q);
            if t0 > t1 {
                (t1, t0)
            } else {
                (t0, t1)
            }
        };

        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }

    pub fn normal_at(&self, ray: &Ray, distance: f64) -> Vector3 {
        (ray.point(distance) - self.center).normalized()
    }

    pub fn color(&self) -> &Vector3 {
        &self.color
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

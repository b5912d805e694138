use crate::geometry::vector2::Vector2;
use crate::geometry::vector3::Vector3;

/// Weights for the two lighting terms plus the shininess of the highlight.
#[derive(Copy, Clone, Debug)]
pub struct Surface {

    albedo: Vector2,
    specular_exponent: f64,
}

impl Surface {

    pub fn new(albedo: Vector2, specular_exponent: f64) -> Self {
        Self {
            albedo,
            specular_exponent,
        }
    }

    pub fn diffuse_weight(&self) -> f64 {
        self.albedo.x
    }

    pub fn specular_weight(&self) -> f64 {
        self.albedo.y
    }

    pub fn specular_exponent(&self) -> f64 {
        self.specular_exponent
    }
}

impl Default for Surface {

    // fully matte
    fn default() -> Self {
        Self::new(Vector2::new(1.0, 0.0), 0.0)
    }
}

pub fn reflect(light_dir: Vector3, normal: Vector3) -> Vector3 {
    normal * 2.0 * normal.dot_product(&light_dir) - light_dir
}

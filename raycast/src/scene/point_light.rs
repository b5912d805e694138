use crate::geometry::vector3::Vector3;

pub struct PointLight {

    position: Vector3,
    intensity: f64,
}

impl PointLight {

    pub fn new(position: Vector3, intensity: f64) -> Self {
        PointLight {
            position,
            intensity,
        }
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

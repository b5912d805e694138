use std::collections::HashMap;

use rand::Rng;

use raycast_core::models::pixel::Pixel;

use crate::geometry::vector2::Vector2;
use crate::geometry::vector3::Vector3;
use crate::materials::surface::Surface;
use crate::objects::sphere::Sphere;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;
use crate::scene::scene_object::SceneObject;
use crate::scenes::provider::SceneProvider;

const DEFAULT_SPHERES: usize = 6;

pub struct RandomSceneProvider {
}

impl RandomSceneProvider {

    pub fn new() -> Self {
        RandomSceneProvider {}
    }
}

impl SceneProvider for RandomSceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Scene {
        let spheres = options.get("spheres")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SPHERES);

        let mut rng = rand::thread_rng();
        let mut scene = Scene::new();

        for _ in 0..spheres {
            let center = Vector3::new(
                rng.gen_range(-0.5..0.5) * 15.0,
                rng.gen_range(-0.5..0.5) * 15.0,
                -(rng.gen_range(0.0..1.0) * 15.0) - 10.0,
            );
            let radius = rng.gen_range(-0.5..0.5) + 1.2;
            let color = Pixel::from_rgb(rng.gen(), rng.gen(), rng.gen());

            scene.add_object(SceneObject::Sphere(Sphere::new(
                center,
                radius,
                color,
                Surface::new(Vector2::new(0.4, 0.6), 50.0),
            )));
        }

        scene.add_light(PointLight::new(Vector3::new(-20.0, 20.0, 20.0), 1.5));
        scene.add_light(PointLight::new(Vector3::new(30.0, 50.0, -25.0), 1.8));
        scene.add_light(PointLight::new(Vector3::new(30.0, 20.0, 30.0), 1.7));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_spheres(value: &str) -> HashMap<String, String> {
        let mut options = HashMap::new();
        options.insert("spheres".to_string(), value.to_string());
        options
    }

    #[test]
    fn respects_the_sphere_count_option() {
        let scene = RandomSceneProvider::new().scene(&options_with_spheres("10"));

        assert_eq!(scene.objects().len(), 10);
        assert!(scene.objects().iter().all(|v| matches!(v, SceneObject::Sphere(_))));
    }

    #[test]
    fn falls_back_to_the_default_count() {
        let provider = RandomSceneProvider::new();

        assert_eq!(provider.scene(&HashMap::new()).objects().len(), DEFAULT_SPHERES);
        assert_eq!(provider.scene(&options_with_spheres("many")).objects().len(), DEFAULT_SPHERES);
    }
}

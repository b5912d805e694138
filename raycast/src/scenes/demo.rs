use std::collections::HashMap;

use raycast_core::models::pixel::Pixel;

use crate::geometry::vector2::Vector2;
use crate::geometry::vector3::Vector3;
use crate::materials::surface::Surface;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;
use crate::scene::scene_object::SceneObject;
use crate::scenes::provider::SceneProvider;

pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        DemoSceneProvider {}
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self, _options: &HashMap<String, String>) -> Scene {
        let mut scene = Scene::new();

        let ivory = Surface::new(Vector2::new(0.6, 0.3), 50.0);
        let pink_rubber = Surface::new(Vector2::new(0.9, 0.1), 10.0);

        let ivory_color = Pixel::from_rgb(102, 102, 77);
        let pink_color = Pixel::from_rgb(77, 51, 71);

        scene.add_object(SceneObject::Sphere(Sphere::new(
            Vector3::new(-3.0, 0.0, -16.0), 2.0, ivory_color, ivory,
        )));
        scene.add_object(SceneObject::Sphere(Sphere::new(
            Vector3::new(-1.0, -1.5, -12.0), 2.0, pink_color, pink_rubber,
        )));
        scene.add_object(SceneObject::Sphere(Sphere::new(
            Vector3::new(1.5, -0.5, -18.0), 3.0, pink_color, pink_rubber,
        )));
        scene.add_object(SceneObject::Sphere(Sphere::new(
            Vector3::new(7.0, 5.0, -18.0), 4.0, ivory_color, ivory,
        )));

        scene.add_object(SceneObject::Plane(Plane::new(
            Vector3::new(0.0, -4.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Pixel::from_rgb(77, 77, 77),
            Surface::default(),
        )));

        scene.add_light(PointLight::new(Vector3::new(-20.0, 20.0, 20.0), 1.5));
        scene.add_light(PointLight::new(Vector3::new(30.0, 50.0, -25.0), 1.8));
        scene.add_light(PointLight::new(Vector3::new(30.0, 20.0, 30.0), 1.7));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scene_is_fully_populated() {
        let scene = DemoSceneProvider::new().scene(&HashMap::new());

        assert_eq!(scene.objects().len(), 5);
        assert_eq!(scene.lights().len(), 3);
    }
}

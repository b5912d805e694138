use super::point_light::PointLight;
use super::scene_object::SceneObject;

pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
}

impl Scene {

    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light)
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }
}

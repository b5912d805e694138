use custom_error::custom_error;

use raycast_core::models::image::Image;

use crate::scene::scene::Scene;

custom_error! {pub RenderError
    InvalidSettings {description: String} = "Invalid render settings: {description}",
}

pub struct RenderSettings {

    width: usize,
    height: usize,
    fov: f64,
}

impl RenderSettings {

    /// `fov` is the vertical field of view in degrees.
    pub fn new(width: usize, height: usize, fov: f64) -> Self {
        Self {
            width,
            height,
            fov,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }
}

pub trait Render {

    fn render(&self, scene: &Scene, settings: &RenderSettings) -> Result<Image, RenderError>;
}

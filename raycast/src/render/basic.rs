use std::f64::consts::PI;

use raycast_core::models::image::Image;
use raycast_core::models::pixel::Pixel;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::surface::reflect;
use crate::scene::scene::Scene;
use crate::scene::scene_object::SceneObject;

use super::render::{Render, RenderError, RenderSettings};

const BACKGROUND: Vector3 = Vector3::new(0.69, 0.13, 0.13);

// offset along the normal keeping shadow rays clear of their own surface
const SHADOW_BIAS: f64 = 0.001;

pub struct BasicRender {
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, settings: &RenderSettings) -> Result<Image, RenderError> {
        validate(settings)?;

        let width = settings.width();
        let height = settings.height();
        let aspect_ratio = width as f64 / height as f64;
        let scale = (settings.fov() / 2.0 * PI / 180.0).tan();

        let mut framebuffer = Vec::with_capacity(width * height);

        for y in 0..height {
            let camera_y = (1.0 - 2.0 * (y as f64 + 0.5) / height as f64) * scale;

            for x in 0..width {
                let camera_x = (2.0 * (x as f64 + 0.5) / width as f64 - 1.0) * aspect_ratio * scale;

                let direction = Vector3::new(camera_x, camera_y, -1.0).normalized();
                let ray = Ray::new(Vector3::zero(), direction);
                framebuffer.push(cast_ray(&ray, scene));
            }
        }

        let mut image = Image::new(width, height);
        for (pos, color) in framebuffer.iter().enumerate() {
            image.pixels[pos] = quantize(&tone_map(color));
        }

        Ok(image)
    }
}

// Nearest hit along the ray, or none. The comparison is strict, so ties
// between equidistant objects go to the one earlier in iteration order.
pub fn trace<'a>(ray: &Ray, objects: &'a [SceneObject]) -> Option<(f64, &'a SceneObject)> {
    let mut nearest = f64::MAX;
    let mut hit_object = None;

    for object in objects {
        if let Some(distance) = object.intersect(ray) {
            if distance < nearest {
                nearest = distance;
                hit_object = Some(object);
            }
        }
    }

    hit_object.map(|object| (nearest, object))
}

pub fn cast_ray(ray: &Ray, scene: &Scene) -> Vector3 {
    let (distance, hit_object) = match trace(ray, scene.objects()) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };

    let hit_point = ray.point(distance);
    let normal = hit_object.normal_at(ray, distance);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;

    for light in scene.lights() {
        let light_dir = (light.position() - &hit_point).normalized();
        let shadow_ray = Ray::new(hit_point + normal * SHADOW_BIAS, light_dir);

        // any hit towards the light occludes it, even one beyond the light
        if trace(&shadow_ray, scene.objects()).is_some() {
            continue;
        }

        diffuse_intensity += light.intensity() * normal.dot_product(&light_dir).max(0.0);
        specular_intensity += light.intensity()
            * reflect(light_dir, normal)
                .dot_product(&(ray.direction() * -1.0))
                .max(0.0)
                .powf(hit_object.surface().specular_exponent());
    }

    let surface = hit_object.surface();
    *hit_object.color() * diffuse_intensity * surface.diffuse_weight()
        + Vector3::one() * specular_intensity * surface.specular_weight()
}

// overflowing colors are rescaled so the largest channel saturates first
fn tone_map(color: &Vector3) -> Vector3 {
    let max = color.max_component();
    let color = if max > 1.0 { color * (1.0 / max) } else { *color };

    Vector3::new(clamp(color.x), clamp(color.y), clamp(color.z))
}

fn clamp(channel: f64) -> f64 {
    channel.max(0.0).min(1.0)
}

fn quantize(color: &Vector3) -> Pixel {
    Pixel::from_rgb(
        (color.x * 255.0).round() as u8,
        (color.y * 255.0).round() as u8,
        (color.z * 255.0).round() as u8,
    )
}

fn validate(settings: &RenderSettings) -> Result<(), RenderError> {
    if settings.width() == 0 || settings.height() == 0 {
        return Err(RenderError::InvalidSettings {
            description: format!("image size must be positive, got {}x{}", settings.width(), settings.height()),
        });
    }

    if settings.fov() <= 0.0 || settings.fov() >= 180.0 {
        return Err(RenderError::InvalidSettings {
            description: format!("field of view must be inside (0, 180) degrees, got {}", settings.fov()),
        });
    }

    Ok(())
}

#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;

use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::process::exit;
use std::time::Instant;

use env_logger::Env;

use raycast_core::models::io::ImageWriterOptions;
use raycast_core::plugins::plugins::ImageFormatSupportPlugin;
use raycast_core::utils::print_intro;
use ppm_support::PPMFormatSupportPlugin;

use render::basic::BasicRender;
use render::render::{Render, RenderSettings};
use scenes::demo::DemoSceneProvider;
use scenes::provider::SceneProvider;
use scenes::random::RandomSceneProvider;

const DEFAULT_LOGGING_LEVEL: &str = "info";
const DEFAULT_OUTPUT: &str = "out.ppm";

const WIDTH: usize = 2048;
const HEIGHT: usize = 1536;
const FOV: f64 = 90.0;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().skip(1).collect();
    let scene_name = args.get(0).map(|v| v.as_str()).unwrap_or("demo");
    let output = args.get(1).map(|v| v.as_str()).unwrap_or(DEFAULT_OUTPUT);
    let options = scene_options(if args.len() > 2 { &args[2..] } else { &[] });

    let provider: Box<dyn SceneProvider> = match scene_name {
        "demo" => Box::new(DemoSceneProvider::new()),
        "random" => Box::new(RandomSceneProvider::new()),
        other => {
            error!("unknown scene: {} (known scenes: demo, random)", other);
            exit(1);
        }
    };

    if let Err(err) = render_scene(provider.as_ref(), &options, output) {
        error!("failed to render scene: {}", err);
        exit(1);
    }

    info!("done");
}

fn render_scene(
    provider: &dyn SceneProvider,
    options: &HashMap<String, String>,
    output: &str,
) -> Result<(), Box<dyn Error>> {
    let scene = provider.scene(options);
    info!("rendering scene with {} objects and {} lights", scene.objects().len(), scene.lights().len());

    let settings = RenderSettings::new(WIDTH, HEIGHT, FOV);
    let render = BasicRender::new();

    let started_at = Instant::now();
    let image = render.render(&scene, &settings)?;
    info!("rendered image in {:.2}s", started_at.elapsed().as_secs_f64());

    let format_support = PPMFormatSupportPlugin::new();
    let image_bytes = format_support.writer().write(&image, &ImageWriterOptions::default())?;
    fs::write(output, &image_bytes)?;
    info!("saved {} image to {}", format_support.format_name(), output);

    Ok(())
}

fn scene_options(args: &[String]) -> HashMap<String, String> {
    let mut options = HashMap::new();

    for arg in args {
        let mut parts = arg.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) => {
                options.insert(key.to_string(), value.to_string());
            },
            _ => warn!("ignoring malformed option: {}", arg),
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_scene_options() {
        let args = vec!["spheres=12".to_string(), "broken".to_string()];
        let options = scene_options(&args);

        assert_eq!(options.get("spheres"), Some(&"12".to_string()));
        assert_eq!(options.len(), 1);
    }
}

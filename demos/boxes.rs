//! Fills a scene with random boxes and prints what a renderer would draw.
//!
//! `cargo run --example boxes -- [seed]`

use funny_rects::prelude::*;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let mut conf = Conf::default();
    if let Some(seed) = std::env::args().nth(1) {
        conf = conf.with_seed(seed.parse()?);
    }
    let mut factory = RandomRectangleFactory::from_conf(&conf)?;

    // Random amount
    let count = rand::thread_rng().gen_range(5..20);
    let mut scene = Scene::new();
    scene.spawn_many(&mut factory, count);
    log::info!(
        "{} boxes on a {}x{} scene",
        scene.len(),
        conf.scene_width,
        conf.scene_height
    );

    for rect in scene.rectangles() {
        let fill = rect.fill.to_vec4();
        println!(
            "rectangle(({}, {}), ({}, {})) fill=({:.2}, {:.2}, {:.2}) stroke={:?}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            fill.x(),
            fill.y(),
            fill.z(),
            rect.stroke,
        );
    }

    let center = conf.scene_width / 2;
    match scene.topmost_at(center, conf.scene_height / 2) {
        Some(index) => log::info!("box {index} is on top at the center of the scene"),
        None => log::info!("nothing covers the center of the scene"),
    }

    Ok(())
}

//! Render the demo still life and save it as a PNG.
//!
//! Run with `RUST_LOG=info cargo run --release --example render_demo`.

use anyhow::Result;
use glint_renderer::{build_demo_scene, render, RenderConfig};

fn main() -> Result<()> {
    env_logger::init();

    let scene = build_demo_scene();
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} with {} photons/light...",
        scene.camera.image_width, scene.camera.image_height, config.photon_budget
    );

    let start = std::time::Instant::now();
    let frame = render(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "demo.png";
    frame.save_png(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

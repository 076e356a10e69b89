/// Example: Print the line segments of a single frame
///
/// Usage: cargo run --example dump_frame -- [angle-in-radians]

use spin3d_core::Scene;
use spin3d_terminal::{AppConfig, AppError};
use std::env;

fn main() -> Result<(), AppError> {
    let angle = match env::args().nth(1) {
        Some(arg) => arg.parse::<f32>().unwrap_or_else(|_| {
            eprintln!("Not an angle: {}, using 0", arg);
            0.0
        }),
        None => 0.0,
    };

    let config = AppConfig::load()?;
    let scene = Scene::from_config(&config.scene)?;
    let wireframe = scene.wireframe(angle);

    println!(
        "angle {:.4}: {} parallels, {} meridians, {} cube faces, {} segments",
        angle,
        wireframe.parallels.len(),
        wireframe.meridians.len(),
        wireframe.cube_faces.len(),
        wireframe.segment_count()
    );
    for segment in wireframe.segments() {
        let (x1, y1, x2, y2) = segment.coords();
        println!("{:.3} {:.3} {:.3} {:.3}", x1, y1, x2, y2);
    }

    Ok(())
}

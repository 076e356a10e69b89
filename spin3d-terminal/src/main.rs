/// spin3d Terminal Demo - Rotating sphere and cube wireframe
///
/// Controls:
///   - Space: Pause / resume
///   - +/-: Double / halve the spin rate
///   - Q/ESC: Quit

use spin3d_core::Scene;
use spin3d_terminal::{AppConfig, AppError, TerminalApp};

fn main() -> Result<(), AppError> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let scene = Scene::from_config(&config.scene)?;
    log::info!(
        "Sphere {}x{}, cube with {} faces, {} segments per frame",
        scene.sphere().stacks(),
        scene.sphere().slices(),
        scene.cube().faces().len(),
        scene.segments_per_frame()
    );

    println!("spin3d Terminal Renderer - press Q to quit");
    std::thread::sleep(std::time::Duration::from_millis(500));

    let mut app = TerminalApp::new(scene, &config)?;
    app.run()?;

    Ok(())
}

/// Terminal frontend for the spinning sphere and cube wireframe
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use spin3d_core::{Animation, GeometryError, Scene};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;

pub mod canvas;
pub mod config;

pub use canvas::Canvas;
pub use config::{AppConfig, ConfigError};

/// Errors surfaced by the terminal application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid scene: {0}")]
    Geometry(#[from] GeometryError),
}

/// Switches the terminal in and out of raw mode
pub trait RawMode {
    fn enable(&mut self) -> io::Result<()>;
    fn disable(&mut self) -> io::Result<()>;
}

/// Raw mode on the controlling terminal
pub struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Run `body` in raw mode on the alternate screen.
///
/// Once raw mode is on, both cleanup steps always run. The first error is
/// returned: the entry or `body` error, then raw mode, then the screen.
pub fn with_terminal<W, R, T, F>(writer: &mut W, raw: &mut R, body: F) -> io::Result<T>
where
    W: Write,
    R: RawMode,
    F: FnOnce() -> io::Result<T>,
{
    raw.enable()?;

    let result =
        execute!(writer, terminal::EnterAlternateScreen, cursor::Hide).and_then(|()| body());

    let raw_restored = raw.disable();
    let screen_restored = execute!(writer, terminal::LeaveAlternateScreen, cursor::Show);
    if let Err(e) = &raw_restored {
        log::warn!("Failed to leave raw mode: {}", e);
    }

    let value = result?;
    raw_restored?;
    screen_restored?;
    Ok(value)
}

/// Slowest and fastest spin rates reachable with `-` and `+`, in rad/s
const MIN_RATE: f32 = 0.05;
const MAX_RATE: f32 = 50.0;

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    scene: Scene,
    animation: Animation,
    canvas: Canvas,
    foreground: Color,
    background: Color,
    target_frame_time: Duration,
    show_overlay: bool,
    running: bool,
    paused: bool,
    last_tick: Instant,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Size the canvas to the current terminal
    pub fn new(scene: Scene, config: &AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(scene, config, width as usize, height as usize))
    }

    pub fn with_size(scene: Scene, config: &AppConfig, width: usize, height: usize) -> Self {
        let canvas = Canvas::new(width, height, *scene.viewport())
            .with_cell_aspect(config.terminal.cell_aspect);
        let target_fps = config.terminal.target_fps.max(1);

        Self {
            scene,
            animation: Animation::new(config.scene.angular_rate),
            canvas,
            foreground: rgb(config.colors.foreground),
            background: rgb(config.colors.background),
            target_frame_time: Duration::from_secs_f32(1.0 / target_fps as f32),
            show_overlay: config.terminal.show_overlay,
            running: true,
            paused: false,
            last_tick: Instant::now(),
            last_fps_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.animation.angle()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn run(&mut self) -> io::Result<()> {
        with_terminal(&mut stdout(), &mut CrosstermRawMode, || self.main_loop())
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.last_tick = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                    log::debug!("Paused: {}", self.paused);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.scale_rate(2.0);
                }
                KeyCode::Char('-') => {
                    self.scale_rate(0.5);
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                log::debug!("Resized to {}x{}", width, height);
                self.canvas.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn scale_rate(&mut self, factor: f32) {
        let rate = (self.animation.rate() * factor).clamp(MIN_RATE, MAX_RATE);
        self.animation.set_rate(rate);
        log::debug!("Angular rate: {:.3} rad/s", rate);
    }

    fn update(&mut self) {
        let now = Instant::now();
        let elapsed = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;

        if !self.paused {
            let angle = self.animation.tick(elapsed);
            log::trace!("angle = {:.4}", angle);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        self.scene.draw(self.animation.angle(), &mut self.canvas);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.draw(&mut stdout, self.foreground, self.background)?;

        if self.show_overlay {
            queue!(
                stdout,
                cursor::MoveTo(0, 0),
                SetForegroundColor(Color::Yellow),
                Print(format!(
                    "spin3d | FPS: {:.1} | {:.2} rad/s{} | Space=Pause +/-=Speed Q=Quit",
                    self.fps,
                    self.animation.rate(),
                    if self.paused { " (paused)" } else { "" }
                )),
                ResetColor
            )?;
        }

        stdout.flush()?;
        Ok(())
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn new_app() -> TerminalApp {
        let config = AppConfig::default();
        let scene = Scene::from_config(&config.scene).unwrap();
        TerminalApp::with_size(scene, &config, 80, 24)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Char('q')));
        assert!(!app.is_running());

        let mut app = new_app();
        app.handle_event(press(KeyCode::Esc));
        assert!(!app.is_running());

        let mut app = new_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(!app.is_running());
    }

    #[test]
    fn test_pause_freezes_angle() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Char(' ')));
        assert!(app.is_paused());

        std::thread::sleep(Duration::from_millis(5));
        app.update();
        assert_eq!(app.angle(), 0.0);

        app.handle_event(press(KeyCode::Char(' ')));
        std::thread::sleep(Duration::from_millis(5));
        app.update();
        assert!(app.angle() > 0.0);
    }

    #[test]
    fn test_rate_keys_clamp() {
        let mut app = new_app();
        let start = app.animation.rate();
        app.handle_event(press(KeyCode::Char('+')));
        assert!((app.animation.rate() - start * 2.0).abs() < 1e-6);

        for _ in 0..40 {
            app.handle_event(press(KeyCode::Char('-')));
        }
        assert_eq!(app.animation.rate(), MIN_RATE);
    }

    #[test]
    fn test_resize_event() {
        let mut app = new_app();
        app.handle_event(Event::Resize(100, 30));
        assert_eq!((app.canvas.width(), app.canvas.height()), (100, 30));
    }

    #[test]
    fn test_scene_fills_canvas() {
        let mut app = new_app();
        app.scene.draw(0.5, &mut app.canvas);
        let lit: usize = app
            .canvas
            .rows()
            .map(|row| row.chars().filter(|c| *c != ' ').count())
            .sum();
        assert!(lit > 0);
    }

    #[derive(Default)]
    struct FakeRawMode {
        enabled: bool,
        disable_calls: usize,
        fail_disable: bool,
    }

    impl RawMode for FakeRawMode {
        fn enable(&mut self) -> io::Result<()> {
            self.enabled = true;
            Ok(())
        }

        fn disable(&mut self) -> io::Result<()> {
            self.enabled = false;
            self.disable_calls += 1;
            if self.fail_disable {
                Err(io::Error::new(io::ErrorKind::Other, "disable failed"))
            } else {
                Ok(())
            }
        }
    }

    /// Accepts nothing, like a closed pipe
    struct ClosedWriter;

    impl Write for ClosedWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_terminal_restored_on_success() {
        let mut out = Vec::new();
        let mut raw = FakeRawMode::default();
        let value = with_terminal(&mut out, &mut raw, || Ok(7)).unwrap();

        assert_eq!(value, 7);
        assert!(!raw.enabled);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[?1049h"));
        assert!(text.ends_with("\x1b[?1049l\x1b[?25h"));
    }

    #[test]
    fn test_raw_mode_restored_when_screen_switch_fails() {
        let mut raw = FakeRawMode::default();
        let mut ran = false;
        let result = with_terminal(&mut ClosedWriter, &mut raw, || {
            ran = true;
            Ok(())
        });

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert!(!ran);
        assert!(!raw.enabled);
        assert_eq!(raw.disable_calls, 1);
    }

    #[test]
    fn test_body_error_wins_over_cleanup_error() {
        let mut out = Vec::new();
        let mut raw = FakeRawMode {
            fail_disable: true,
            ..Default::default()
        };
        let result: io::Result<()> = with_terminal(&mut out, &mut raw, || {
            Err(io::Error::new(io::ErrorKind::InvalidData, "render failed"))
        });

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        assert_eq!(raw.disable_calls, 1);
        // The screen is still restored after raw mode fails to turn off
        assert!(String::from_utf8_lossy(&out).ends_with("\x1b[?1049l\x1b[?25h"));
    }

    #[test]
    fn test_cleanup_error_reported_after_clean_body() {
        let mut out = Vec::new();
        let mut raw = FakeRawMode {
            fail_disable: true,
            ..Default::default()
        };
        let result = with_terminal(&mut out, &mut raw, || Ok(()));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb([1, 2, 3]), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}

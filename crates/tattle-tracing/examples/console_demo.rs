//! Install a `TracingEngine` globally and drive it through the tattle macros.
//!
//! Run with `RUST_LOG=tattle=debug` to see every forwarded call, or build
//! `tattle` with `--no-default-features` to watch them disappear.

use anyhow::Context as _;
use tattle::{Color, Context, Vec3};
use tattle_tracing::{EngineConfig, TracingEngine};

fn main() -> anyhow::Result<()> {
    tattle_tracing::init_subscriber("info");

    let config = EngineConfig::from_json_str(r#"{ "console_capacity": 16, "developer_console_visible": true }"#)
        .context("demo config is invalid")?;
    let engine: &'static TracingEngine = Box::leak(Box::new(TracingEngine::new(config)?));
    tattle::set_engine(engine).context("engine already installed")?;

    let player = Context::new(1, "player");
    let mut hp = 3;

    tattle::log!("demo started");
    for frame in 0..4 {
        hp -= 1;
        tattle::log_format!(context: &player, "frame {frame}: hp = {hp}");
        if hp <= 1 {
            tattle::log_warning!(context: &player, "low health");
        }
        tattle::assert_that!(hp >= 0, "hp went negative");
        tattle::draw_ray!(Vec3::ZERO, Vec3::UP * hp as f32, Color::GREEN, 0.5);
        tattle::draw_line!(Vec3::ZERO, Vec3::RIGHT);

        let expired = engine.end_frame(0.25);
        tracing::debug!(frame, expired, remaining = engine.draw_list().len(), "frame ended");
    }

    let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "save slot 2");
    tattle::log_exception!(missing);
    tattle::break_execution!();

    println!("-- developer console (visible: {}) --", tattle::developer_console_visible());
    for entry in engine.console().entries() {
        println!("[{}] {}", entry.kind, entry.message);
    }
    println!("paused: {}", engine.is_paused());

    Ok(())
}

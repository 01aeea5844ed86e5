use std::{path::PathBuf, thread, time::Instant};

use anyhow::Result;
use canvas_life::{
    Config, Simulation, Viewport,
    input,
    rendering::{self, CanvasSurface},
    ui,
};
use clap::Parser;
use macroquad::prelude::{BLACK, Conf, clear_background, mouse_position, next_frame};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life on a fixed-size canvas.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON file with simulation options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Target loop rate, overrides the config file
    #[arg(long)]
    fps: Option<u32>,

    /// Loop iterations per generation, overrides the config file
    #[arg(long)]
    update_frequency: Option<u32>,

    /// Cell edge length in pixels, overrides the config file
    #[arg(long)]
    cell_size: Option<u32>,

    /// Seed for the randomizer
    #[arg(long)]
    seed: Option<u64>,
}

impl CliArgs {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(update_frequency) = self.update_frequency {
            config.update_frequency = update_frequency;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = CliArgs::parse().into_config()?;
    let palette = config.palette()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Surface size is fixed for the whole run
    let width = ui::surface_area_width() as u32;
    let height = ui::surface_area_height() as u32;
    let mut surface = CanvasSurface::new(width, height, config.cell_size, palette);
    let mut viewport = Viewport::new(width, height);
    let mut simulation = Simulation::new(width, height, &config, Instant::now());

    simulation.randomize_requested(&mut rng, &mut surface);
    simulation.paint_all(&mut surface);
    info!(fps = config.fps, update_frequency = config.update_frequency, "simulation started");

    loop {
        let mouse_pos = mouse_position();
        viewport.fit(ui::surface_area_width(), ui::surface_area_height());
        let buttons = ui::create_buttons();

        // Input handlers finish before the next generation is computed
        let mut commands = input::process_button_clicks(&buttons, mouse_pos);
        commands.extend(input::process_pointer(&viewport, mouse_pos));
        commands.extend(input::process_keyboard_input());
        for command in commands {
            input::apply(command, &mut simulation, &mut surface, &mut rng, Instant::now());
        }

        let now = Instant::now();
        let deadline = now + simulation.tick(now, &mut surface);

        clear_background(BLACK);
        surface.draw(&viewport);
        rendering::draw_controls(&simulation, &buttons, mouse_pos);

        next_frame().await;

        // Best-effort pacing: only sleep what the frame itself did not use
        if let Some(rest) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(rest);
        }
    }
}

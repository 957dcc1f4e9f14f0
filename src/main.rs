use clap::{CommandFactory, Parser, error::ErrorKind};
use macroquad::{
    Window,
    logging::info,
    prelude::{get_frame_time, next_frame, prevent_quit},
};
use conway_ages::{Config, Simulation, input, rendering::{self, RenderContext}};

fn main() {
    let config = Config::parse();
    if let Err(err) = config.validate() {
        Config::command().error(ErrorKind::ValueValidation, err).exit();
    }

    Window::from_config(config.window_conf(), run(config));
}

async fn run(config: Config) {
    // Closing the window goes through the main loop like Escape does
    prevent_quit();

    let size = config.window_size();
    info!(
        "grid {}x{}, window {}x{}px, {} gen/s, 1-in-{} alive",
        config.width,
        config.height,
        size.width_px,
        size.height_px,
        config.rate,
        config.alive_one_in
    );

    let ctx = RenderContext::new(config.cell_size);
    let mut sim = Simulation::new(&config);
    info!("initial population {}", sim.grid().population());

    loop {
        if input::quit_requested() {
            break;
        }
        sim = input::process_keyboard_input(sim);

        // Update simulation
        sim = sim.tick(get_frame_time());

        // Render
        rendering::draw_grid(&ctx, sim.grid());

        next_frame().await;
    }

    info!("quitting at generation {}", sim.generation());
}

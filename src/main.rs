use anyhow::Context;
use clap::Parser;
use flexi_logger::{AdaptiveFormat, FlexiLoggerError, Logger, LoggerHandle, WriteMode};
use macroquad::prelude::*;
use treasure_hunt::{GameState, Options, input, rendering::Renderer};

fn window_conf() -> Conf {
    Conf {
        window_title: "Treasure Hunt".to_owned(),
        window_width: 960,
        window_height: 720,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let options = Options::parse();
    let logger = match start_logger(&options) {
        Ok(logger) => logger,
        Err(e) => {
            // No logger is installed yet, stderr is the only channel
            eprintln!("fatal error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options).await {
        log::error!("fatal error: {e:#}");
        logger.flush();
        std::process::exit(1);
    }
}

fn start_logger(options: &Options) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(options.log_spec())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            _ => AdaptiveFormat::Default,
        })
        .start()
}

async fn run(options: Options) -> anyhow::Result<()> {
    let generator = options.generator();
    log::info!("starting with seed {}", generator.seed());
    let mut board = generator.generate();

    let mut renderer = match &options.atlas {
        Some(path) => Renderer::with_atlas(path)
            .await
            .context("could not prepare the sprite atlas")?,
        None => Renderer::flat(),
    };

    // Window close goes through the same Quit path as Escape
    prevent_quit();

    let mut state = GameState::new();
    let mut final_frame_shown = false;

    loop {
        if state.quit_requested() || final_frame_shown {
            let delay = state.shutdown_delay();
            if !delay.is_zero() {
                log::info!("holding the final frame for {}s", delay.as_secs());
                std::thread::sleep(delay);
            }
            break;
        }

        state = input::poll_intents()
            .into_iter()
            .fold(state, |s, intent| s.apply(intent, &mut board));
        state = state.tick(&board);

        renderer.draw(&state, &board, input::pointer());

        // The winning frame is drawn exactly once before shutdown
        if state.won() {
            final_frame_shown = true;
        }

        next_frame().await;
    }

    log::info!("game over, won: {}", state.won());
    Ok(())
}

use bevy::prelude::*;
use clap::Parser;
use log::info;
use snake_quads::cmdline::Args;
use snake_quads::config::GameConfig;
use snake_quads::controls::ScriptedInput;
use snake_quads::error::Result;
use snake_quads::game::ActiveSession;
use snake_quads::session::Session;
use snake_quads::AppPlugin;

fn main() -> AppExit {
    let args = Args::parse();
    let config = GameConfig::default();
    let result = if args.headless {
        run_headless(&args, &config)
    } else {
        run_windowed(&args, &config)
    };
    match result {
        Ok(exit) => exit,
        Err(err) => {
            eprintln!("[e] {err}");
            AppExit::error()
        }
    }
}

fn run_windowed(args: &Args, config: &GameConfig) -> Result<AppExit> {
    let session = Session::with_spawner(config, args.food_spawner())?;
    let exit = App::new()
        .add_plugins(AppPlugin::new(config))
        .insert_resource(ActiveSession(session))
        .run();
    if let AppExit::Error(code) = exit {
        eprintln!("[e] app exited with error code {code}");
    }
    Ok(exit)
}

fn run_headless(args: &Args, config: &GameConfig) -> Result<AppExit> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut input = ScriptedInput::parse(&args.script)?;
    let frames = args.headless_frames(input.remaining());
    let mut session = Session::with_spawner(config, args.food_spawner())?;
    info!("headless run: {frames} frames, tick rate {}", config.tick_rate);

    let ran = session.run(&mut input, frames);
    info!("ran {ran} frames, {} ticks", session.ticks());
    println!("{}", session.snapshot().to_json()?);
    Ok(AppExit::Success)
}

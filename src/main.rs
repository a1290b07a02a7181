use std::process::ExitCode;

use sparks::{Scene, SceneConfig, SceneError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// `sparks [scene.json]`
fn run() -> Result<(), SceneError> {
    let scene = match std::env::args().nth(1) {
        Some(path) => Scene::from_file(path)?,
        None => Scene::new(SceneConfig::default()),
    };
    scene.run()
}

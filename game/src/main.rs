use std::error::Error;
use std::rc::Rc;

use bato_bato_pik::assets::{AssetDir, GameAssets};
use bato_bato_pik::audio_backend::RodioOutput;
use bato_bato_pik::config::GameConfig;
use bato_bato_pik::context::GameContext;
use bato_bato_pik::hand::RandomPicker;
use engine::app::run_game;
use engine::audio::{AudioOutput, NullOutput};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_env();
    let assets = GameAssets::load(&AssetDir::new(config.asset_root.clone()));

    let output: Rc<dyn AudioOutput> = match RodioOutput::try_default() {
        Ok(output) => Rc::new(output),
        Err(err) => {
            log::warn!("audio disabled: {err}");
            Rc::new(NullOutput)
        }
    };

    let game = GameContext::new(
        assets,
        output,
        Box::new(RandomPicker::from_entropy()),
        config.window_size(),
    );
    run_game(config.app_config(), game)?;
    Ok(())
}

mod assets;
mod config;
mod controls;
mod game;
mod hud;
mod model;
mod prelude;
mod render;

use geng::prelude::*;

#[derive(clap::Parser)]
struct Opts {
    #[clap(long)]
    config: Option<std::path::PathBuf>,
    #[clap(flatten)]
    geng: geng::CliArgs,
}

fn main() {
    logger::init();
    geng::setup_panic_handler();

    let opts: Opts = clap::Parser::parse();

    let mut geng_options = geng::ContextOptions::default();
    geng_options.window.title = "Blade Duel".to_string();
    geng_options.with_cli(&opts.geng);

    Geng::run_with(&geng_options, |geng| async move {
        if let Err(err) = run(&geng, opts.config).await {
            log::error!("{:?}", err);
        }
    });
}

async fn run(geng: &Geng, config_path: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let config_path = config_path.unwrap_or_else(|| run_dir().join("assets").join("config.ron"));
    let config = config::Config::load(&config_path).await?;
    log::info!("Loaded config from {:?}", config_path);

    let assets = assets::Assets::load(geng.asset_manager(), &config).await?;
    let state = game::Game::new(geng, &Rc::new(assets), config)
        .context("failed to set up the match")?;
    geng.run_state(state).await;
    Ok(())
}

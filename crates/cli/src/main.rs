fn main() -> anyhow::Result<()> {
    shapeforge_observability::init();

    let config = shapeforge_cli::DemoConfig::from_env()?;
    tracing::info!(?config, "starting shapeforge demo");

    let stdout = std::io::stdout();
    shapeforge_cli::run(&config, &mut stdout.lock())
}

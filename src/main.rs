use bikeshare_explorer::app;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    app::run()
}

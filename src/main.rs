use anyhow::Result;
use lang_tour::{Cli, Settings, app};

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();
    let settings = Settings::from(cli);

    app::init_logging(&settings)?;

    let stdout = std::io::stdout();
    app::run(&settings, &mut stdout.lock())
}

mod args;
mod format_view;
mod global_settings;
mod types_view;

use crate::args::build_cli;
use crate::format_view::format_view;
use crate::global_settings::GlobalSettings;
use crate::types_view::types_view;
use anyhow::Result;
use futures::executor::block_on;

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let settings = GlobalSettings::new(&args);
    settings.init_logger();

    match args.subcommand() {
        Some(("types", sub)) => {
            let (reply, output) = block_on(types_view(&settings, sub))?;
            println!("{}", output);
            if reply.status >= 400 {
                std::process::exit(1);
            }
        }
        Some(("format", sub)) => {
            println!("{}", format_view(&settings, sub)?);
        }
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some((cmd, _)) => anyhow::bail!("Unknown command {}", cmd),
        None => {}
    }

    Ok(())
}

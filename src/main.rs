use colored::*;

use ssd_status::cli::build_cli;
use ssd_status::commands;
use ssd_status::SsdError;

const INSTALL_HINT: &str = "
*** Please install smartmontools! ***
https://www.smartmontools.org/
";

fn main() {
    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    ssd_status::init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("check", sub_matches)) => commands::check(sub_matches),
        Some(("scan", _)) => commands::scan(),
        Some(("set", sub_matches)) => commands::config::handle_set(sub_matches),
        Some(("get", _)) => commands::config::handle_get(),
        Some(("reset", _)) => commands::config::handle_reset(),
        Some(("version", _)) => commands::version(),
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)
        }
        _ => {
            println!("Welcome to ssd-status!");
            println!("Use 'ssd-status --help' for more information.");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);

        if let Some(SsdError::ToolNotInstalled { .. }) = err.downcast_ref::<SsdError>() {
            eprintln!("{}", INSTALL_HINT.yellow());
            std::process::exit(2);
        }
        std::process::exit(1);
    }
}

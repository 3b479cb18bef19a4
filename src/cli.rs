use crate::ui::report_view::OutputFormat;
use clap::{Arg, ArgAction, Command};

fn threshold_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("limit")
            .short('l')
            .long("limit")
            .value_name("TB")
            .help("Factory write limit in TB [default: 75]")
            .value_parser(clap::value_parser!(u32).range(1..)),
    )
    .arg(
        Arg::new("write-warning")
            .short('w')
            .long("write-warning")
            .value_name("TB")
            .help("Warn when more than this many TB have been written [default: 70]")
            .value_parser(clap::value_parser!(u32)),
    )
    .arg(
        Arg::new("time-warning")
            .short('t')
            .long("time-warning")
            .value_name("YEARS")
            .help("Warn when the drive has been powered on longer than this [default: 5]")
            .value_parser(clap::value_parser!(u32)),
    )
}

fn setting(name: &'static str, about: &'static str, value_help: &'static str) -> Command {
    Command::new(name).about(about).arg(
        Arg::new("value")
            .help(value_help)
            .required(true)
            .index(1),
    )
}

pub fn build_cli() -> Command {
    let check = Command::new("check")
        .about("Show health status and estimated remaining lifetime of an SSD")
        .arg(
            Arg::new("device")
                .help("Device path (defaults to the configured device, or /dev/sda)")
                .index(1),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Check every device reported by 'smartctl --scan'")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["device", "select", "input"]),
        )
        .arg(
            Arg::new("select")
                .short('s')
                .long("select")
                .help("Choose the device interactively")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["device", "input"]),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read saved smartctl output from FILE ('-' for stdin) instead of running smartctl"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(OutputFormat::NAMES)
                .default_value("text"),
        )
        .arg(
            Arg::new("sudo")
                .long("sudo")
                .help("Run smartctl through sudo")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("smartctl")
                .long("smartctl")
                .value_name("PATH")
                .help("smartctl binary to use"),
        );

    Command::new("ssd-status")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simple human readable SSD health status")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(threshold_args(check))
        .subcommand(Command::new("scan").about("List devices reported by smartctl"))
        .subcommand(
            Command::new("set")
                .about("Set persistent preferences (use 'ssd-status set --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    setting("limit", "Set factory capacity limit", "Limit in TB")
                        .mut_arg("value", |arg| {
                            arg.value_parser(clap::value_parser!(u32).range(1..))
                        }),
                )
                .subcommand(
                    setting("write-warning", "Set write warning limit", "Limit in TB")
                        .mut_arg("value", |arg| arg.value_parser(clap::value_parser!(u32))),
                )
                .subcommand(
                    setting("time-warning", "Set online warning limit", "Limit in years")
                        .mut_arg("value", |arg| arg.value_parser(clap::value_parser!(u32))),
                )
                .subcommand(setting("device", "Set default device", "Device path"))
                .subcommand(setting("smartctl", "Set smartctl binary", "Path or command name"))
                .subcommand(
                    setting("sudo", "Run smartctl through sudo", "true or false")
                        .mut_arg("value", |arg| arg.value_parser(clap::value_parser!(bool))),
                ),
        )
        .subcommand(Command::new("get").about("Show persistent preferences"))
        .subcommand(Command::new("reset").about("Reset preferences to defaults"))
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("bash, zsh, fish, powershell or elvish")
                        .required(true)
                        .index(1),
                ),
        )
}

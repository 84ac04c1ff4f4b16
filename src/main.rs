use clap::Parser;

use quizops::cli::{Cli, Command, PatchCommand};
use quizops::error::Error;
use quizops::patch::{self, endpoints, schema, template};
use quizops::send;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Send(args) => {
            send::send_payloads(
                &args.base,
                args.questions.as_deref(),
                args.answers.as_deref(),
                &mut stdout,
            )?;
        }
        Command::Patch(cmd) => {
            let (args, default, patches) = match &cmd {
                PatchCommand::Schema(a) => (a, schema::DEFAULT_TARGET, schema::PATCHES),
                PatchCommand::Endpoints(a) => (a, endpoints::DEFAULT_TARGET, endpoints::PATCHES),
                PatchCommand::Template(a) => (a, template::DEFAULT_TARGET, template::PATCHES),
            };
            let report =
                patch::run_patch_set(&args.target(default), patches, args.options(), &mut stdout)?;

            if report.written {
                println!("Updated {} ({})", report.path.display(), report.after);
            } else if report.applied() > 0 {
                println!("Dry run: {} would become {}", report.path.display(), report.after);
            } else {
                println!("{} unchanged ({})", report.path.display(), report.before);
            }
        }
    }

    Ok(())
}

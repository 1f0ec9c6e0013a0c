use std::process::ExitCode;

use web2txt::cli::{self, Invocation, USAGE};
use web2txt::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Info(info) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Invocation::Usage => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("web2txt: logging disabled: {err}");
    }

    cli.run().await
}

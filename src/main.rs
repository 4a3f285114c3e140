// src/main.rs

use taskorder::errors::TaskorderError;
use taskorder::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        let reported = err
            .downcast_ref::<TaskorderError>()
            .is_some_and(TaskorderError::is_reported);
        if !reported {
            eprintln!("taskorder error: {err:?}");
        }
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)?;
    Ok(())
}

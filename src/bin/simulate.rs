use anyhow::Result;
use log::{debug, warn};
use std::{env::args, io::Write};

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();

    let args = args().collect::<Vec<_>>();

    if args.len() < 2 {
        writeln!(std::io::stderr(), "Error, not enough arguments!")?;
        std::process::exit(1);
    }

    // The simulator's exit status is deliberately not propagated, and a
    // failure to launch it at all is not reported either.
    match sim_launcher::launch(&args[1..]) {
        Ok(status) if !status.success() => debug!("simulator exited with {status}"),
        Ok(_) => {}
        Err(error) => warn!("failed to launch simulator: {error}"),
    }

    Ok(())
}

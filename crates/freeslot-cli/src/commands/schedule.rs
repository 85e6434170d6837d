use clap::Args;
use freeslot_core::request::{encode, scheduled_payloads};
use freeslot_core::{Config, SchedulingAlgorithm};

use super::RequestInput;

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    input: RequestInput,
    /// Algorithm to use, overrides the request and the config
    #[arg(short, long)]
    algorithm: Option<SchedulingAlgorithm>,
    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut request = args.input.read()?;
    if let Some(algorithm) = args.algorithm {
        request.algorithm_type = Some(algorithm.to_string());
    }

    let scheduled = request.schedule(&config)?;
    let pretty = config.output.pretty && !args.compact;
    println!("{}", encode(&scheduled_payloads(&scheduled), pretty)?);
    Ok(())
}

use clap::Args;
use freeslot_core::request::{encode, free_range_payloads};
use freeslot_core::Config;

use super::RequestInput;

#[derive(Args)]
pub struct FreeArgs {
    #[command(flatten)]
    input: RequestInput,
    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

pub fn run(args: FreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let request = args.input.read()?;
    let free = request.free_ranges(&config)?;
    let pretty = config.output.pretty && !args.compact;
    println!("{}", encode(&free_range_payloads(&free), pretty)?);
    Ok(())
}

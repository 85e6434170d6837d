use clap::Args;
use freeslot_core::SchedulingAlgorithm;

#[derive(Args)]
pub struct AlgorithmsArgs {
    /// Print names as a JSON array
    #[arg(long)]
    json: bool,
}

pub fn run(args: AlgorithmsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let all = SchedulingAlgorithm::all();
    if args.json {
        println!("{}", serde_json::to_string(&all)?);
        return Ok(());
    }
    for algorithm in all {
        println!("{:<24} {}", algorithm.as_str(), algorithm.description());
    }
    Ok(())
}

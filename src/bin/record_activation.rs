use skillscribe::activation::record_activation;
use skillscribe::commands::{parse_record_args, RecordCommand, RECORD_ACTIVATION_USAGE};

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_record_args(&args)? {
        RecordCommand::Help => {
            println!("{RECORD_ACTIVATION_USAGE}");
            Ok(())
        }
        RecordCommand::Record { skill, run_id } => {
            let start = std::env::current_dir()
                .map_err(|e| format!("failed to resolve working directory: {e}"))?;
            record_activation(&start, &skill, &run_id).map_err(|e| e.to_string())?;
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

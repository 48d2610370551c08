use skillscribe::artifact::{prepare_artifact, write_resolved};
use skillscribe::commands::{parse_write_args, WriteCommand, WRITE_ARTIFACT_USAGE};
use std::io::Read;

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_write_args(&args)? {
        WriteCommand::Help => {
            println!("{WRITE_ARTIFACT_USAGE}");
            Ok(())
        }
        WriteCommand::Write { path } => {
            let start = std::env::current_dir()
                .map_err(|e| format!("failed to resolve working directory: {e}"))?;
            let resolved = prepare_artifact(&start, &path).map_err(|e| e.to_string())?;
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| format!("failed to read standard input: {e}"))?;
            write_resolved(&resolved, &content).map_err(|e| e.to_string())?;
            println!("{}", resolved.display());
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

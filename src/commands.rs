pub const RECORD_ACTIVATION_USAGE: &str =
    "usage: record-activation --skill <skill> [--run-id <run_id>]";
pub const WRITE_ARTIFACT_USAGE: &str = "usage: write-artifact --path <repo-relative-path>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand {
    Help,
    Record { skill: String, run_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCommand {
    Help,
    Write { path: String },
}

pub fn parse_record_args(args: &[String]) -> Result<RecordCommand, String> {
    let mut skill: Option<String> = None;
    let mut run_id = String::new();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(RecordCommand::Help),
            "--skill" => {
                if i + 1 >= args.len() {
                    return Err(format!(
                        "missing value for --skill\n{RECORD_ACTIVATION_USAGE}"
                    ));
                }
                skill = Some(args[i + 1].clone());
                i += 2;
            }
            "--run-id" => {
                if i + 1 >= args.len() {
                    return Err(format!(
                        "missing value for --run-id\n{RECORD_ACTIVATION_USAGE}"
                    ));
                }
                run_id = args[i + 1].clone();
                i += 2;
            }
            other => return Err(format!("unknown option `{other}`\n{RECORD_ACTIVATION_USAGE}")),
        }
    }

    let skill = skill.ok_or_else(|| RECORD_ACTIVATION_USAGE.to_string())?;
    Ok(RecordCommand::Record { skill, run_id })
}

pub fn parse_write_args(args: &[String]) -> Result<WriteCommand, String> {
    let mut path: Option<String> = None;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(WriteCommand::Help),
            "--path" => {
                if i + 1 >= args.len() {
                    return Err(format!("missing value for --path\n{WRITE_ARTIFACT_USAGE}"));
                }
                path = Some(args[i + 1].clone());
                i += 2;
            }
            other => return Err(format!("unknown option `{other}`\n{WRITE_ARTIFACT_USAGE}")),
        }
    }

    let path = path.ok_or_else(|| WRITE_ARTIFACT_USAGE.to_string())?;
    Ok(WriteCommand::Write { path })
}

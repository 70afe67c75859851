mod argsets;
mod command;

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use ze07::helpers;

const CMD_VALIDATE: &str = "validate";
const CMD_EMIT: &str = "emit";
const CMD_DECODE: &str = "decode";

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => {
            let config_path: PathBuf = args.free_from_str()?;
            init(Some(&config_path));
            command::validate(argsets::ValidateArgs { config_path })
        }
        Some(CMD_EMIT) => {
            let format = args.opt_value_from_str("--format")?.unwrap_or_default();
            let config_path: PathBuf = args.free_from_str()?;
            init(Some(&config_path));
            command::emit(argsets::EmitArgs {
                config_path,
                format,
            })
        }
        Some(CMD_DECODE) => {
            let question_answer = args.contains("--qa");
            let frame_hex = args.free_from_str()?;
            init(None);
            command::decode(argsets::DecodeArgs {
                frame_hex,
                question_answer,
            })
        }
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'emit', 'decode'"
        )),
    }
}

fn init(config_path: Option<&PathBuf>) {
    helpers::load_dotenv(config_path.map(PathBuf::as_path));
    helpers::init_logging();
}

use std::path::PathBuf;
use std::str::FromStr;

pub struct ValidateArgs {
    pub config_path: PathBuf,
}

pub struct EmitArgs {
    pub config_path: PathBuf,
    pub format: OutputFormat,
}

pub struct DecodeArgs {
    pub frame_hex: String,
    pub question_answer: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Cpp,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(Self::Json),
            "cpp" => Ok(Self::Cpp),
            other => Err(format!("unknown output format '{other}', expected 'json' or 'cpp'")),
        }
    }
}

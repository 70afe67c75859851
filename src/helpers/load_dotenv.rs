use std::path::Path;

/// Load `.env` from the working directory, then from next to the config file
/// if one is given. Variables already set are not overridden.
pub fn load_dotenv(config_path: Option<&Path>) {
    if dotenv::dotenv().is_ok() {
        eprintln!("Loaded local .env");
    }
    if let Some(dir) = config_path.and_then(Path::parent) {
        let dotenv_path = dir.join(".env");
        if dotenv_path.is_file() && dotenv::from_path(&dotenv_path).is_ok() {
            eprintln!("Loaded {}", dotenv_path.display());
        }
    }
}

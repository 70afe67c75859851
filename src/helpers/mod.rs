mod init_logging;
mod load_dotenv;

pub use init_logging::init_logging;
pub use load_dotenv::load_dotenv;

mod decode;
mod emit;
mod validate;

pub use decode::decode;
pub use emit::emit;
pub use validate::validate;

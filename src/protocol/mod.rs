//! Wire protocol of the ZE07 CO module.

mod frame;
mod receiver;

use std::time::Instant;

use thiserror::Error;

pub use frame::{
    checksum, setup_commands, Command, Frame, FrameKind, RawFrame, FRAME_LENGTH, HEAD,
};
pub use receiver::{FrameReceiver, FRAME_TIMEOUT};

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("no complete frame in {0} bytes of input")]
    NoFrame(usize),
}

/// Decode a captured byte stream given as hex, ignoring whitespace.
pub fn decode_hex(input: &str, rx_only: bool) -> Result<Vec<Frame>, ProtocolError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(compact)?;
    let frames = FrameReceiver::new(rx_only).feed(&bytes, Instant::now());
    if frames.is_empty() {
        return Err(ProtocolError::NoFrame(bytes.len()));
    }
    Ok(frames)
}

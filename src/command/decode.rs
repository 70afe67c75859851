use anyhow::Result;

use ze07::protocol::{self, Command};

use crate::argsets::DecodeArgs;

pub fn decode(args: DecodeArgs) -> Result<()> {
    let rx_only = !args.question_answer;
    if !rx_only {
        log::info!(
            "Decoding answers; request frame is {}",
            hex::encode(Command::ReadConcentration.encode())
        );
    }

    for frame in protocol::decode_hex(&args.frame_hex, rx_only)? {
        log::debug!("{:?} frame {}", frame.kind(), hex::encode(frame.raw()));
        match frame.concentration_ppm() {
            Some(ppm) => println!("{ppm:.1} ppm"),
            None => println!("no valid data"),
        }
    }
    Ok(())
}

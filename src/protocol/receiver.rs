use std::time::{Duration, Instant};

use super::frame::{checksum, Frame, RawFrame, COMMAND_ANSWER, FRAME_LENGTH, GAS_TYPE_CO, HEAD};

/// A partial frame older than this is dropped.
pub const FRAME_TIMEOUT: Duration = Duration::from_millis(500);

enum ByteCheck {
    Next,
    Complete,
    Invalid,
}

/// Reassembles frames from a UART byte stream, one byte at a time.
#[derive(Debug)]
pub struct FrameReceiver {
    rx_only: bool,
    buffer: RawFrame,
    index: usize,
    last_byte_at: Option<Instant>,
}

impl FrameReceiver {
    /// In rx-only mode the sensor uploads frames tagged with its gas type;
    /// otherwise only answers to read requests are expected.
    pub fn new(rx_only: bool) -> Self {
        FrameReceiver {
            rx_only,
            buffer: [0u8; FRAME_LENGTH],
            index: 0,
            last_byte_at: None,
        }
    }

    pub fn push(&mut self, byte: u8, now: Instant) -> Option<Frame> {
        if let Some(last) = self.last_byte_at {
            if self.index > 0 && now.saturating_duration_since(last) >= FRAME_TIMEOUT {
                log::trace!("Last transmission too long ago. Reset RX index.");
                self.index = 0;
            }
        }
        self.last_byte_at = Some(now);

        self.buffer[self.index] = byte;
        match self.check_byte() {
            ByteCheck::Next => {
                self.index += 1;
                None
            }
            ByteCheck::Complete => {
                self.index = 0;
                log::trace!("Received frame {}", hex::encode(self.buffer));
                Some(Frame::from_verified(self.buffer))
            }
            ByteCheck::Invalid => {
                log::trace!("Byte {} of received data frame is invalid.", self.index);
                let rejected_at = self.index;
                self.index = 0;
                // The rejected byte may be the head of the next frame.
                if rejected_at > 0 {
                    self.buffer[0] = byte;
                    if let ByteCheck::Next = self.check_byte() {
                        self.index = 1;
                    }
                }
                None
            }
        }
    }

    pub fn feed(&mut self, bytes: &[u8], now: Instant) -> Vec<Frame> {
        bytes.iter().filter_map(|b| self.push(*b, now)).collect()
    }

    fn check_byte(&self) -> ByteCheck {
        let byte = self.buffer[self.index];
        match self.index {
            0 if byte == HEAD => ByteCheck::Next,
            1 if byte == self.expected_type() => ByteCheck::Next,
            2..=7 => ByteCheck::Next,
            8 => {
                let expected = checksum(&self.buffer);
                if byte == expected {
                    ByteCheck::Complete
                } else {
                    log::warn!(
                        "ZE07-CO checksum doesn't match: 0x{:02X}!=0x{:02X}",
                        byte,
                        expected
                    );
                    ByteCheck::Invalid
                }
            }
            _ => ByteCheck::Invalid,
        }
    }

    fn expected_type(&self) -> u8 {
        if self.rx_only {
            GAS_TYPE_CO
        } else {
            COMMAND_ANSWER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPLOAD_5PPM: RawFrame = [0xFF, 0x04, 0x00, 0x32, 0x00, 0x00, 0x00, 0x00, 0xCA];
    const ANSWER_50PPM: RawFrame = [0xFF, 0x86, 0x00, 0x00, 0x01, 0xF4, 0x00, 0x00, 0x85];

    #[test]
    fn test_receive_upload_frame() {
        let mut rx = FrameReceiver::new(true);
        let frames = rx.feed(&UPLOAD_5PPM, Instant::now());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].concentration_ppm(), Some(5.0));
    }

    #[test]
    fn test_mode_selects_frame_type() {
        let now = Instant::now();
        assert!(FrameReceiver::new(true).feed(&ANSWER_50PPM, now).is_empty());
        assert!(FrameReceiver::new(false).feed(&UPLOAD_5PPM, now).is_empty());

        let frames = FrameReceiver::new(false).feed(&ANSWER_50PPM, now);
        assert_eq!(frames[0].concentration_ppm(), Some(50.0));
    }

    #[test]
    fn test_skips_noise_before_head() {
        let mut stream = vec![0x00, 0x12, 0x34];
        stream.extend_from_slice(&UPLOAD_5PPM);
        stream.extend_from_slice(&UPLOAD_5PPM);
        let frames = FrameReceiver::new(true).feed(&stream, Instant::now());
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_stray_head_before_frame() {
        let mut stream = vec![HEAD];
        stream.extend_from_slice(&UPLOAD_5PPM);
        let frames = FrameReceiver::new(true).feed(&stream, Instant::now());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].concentration_ppm(), Some(5.0));

        // A checksum byte that fails as 0xFF starts the next frame.
        let mut stream = UPLOAD_5PPM.to_vec();
        stream[8] = HEAD;
        stream.extend_from_slice(&UPLOAD_5PPM[1..]);
        let frames = FrameReceiver::new(true).feed(&stream, Instant::now());
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_bad_checksum_resets() {
        let mut corrupt = UPLOAD_5PPM;
        corrupt[8] = 0x00;
        let mut rx = FrameReceiver::new(true);
        let now = Instant::now();
        assert!(rx.feed(&corrupt, now).is_empty());
        assert_eq!(rx.feed(&UPLOAD_5PPM, now).len(), 1);
    }

    #[test]
    fn test_timeout_drops_partial_frame() {
        let mut rx = FrameReceiver::new(true);
        let start = Instant::now();
        assert!(rx.feed(&UPLOAD_5PPM[..4], start).is_empty());

        let later = start + FRAME_TIMEOUT;
        assert!(rx.feed(&UPLOAD_5PPM[4..], later).is_empty());
        assert_eq!(rx.feed(&UPLOAD_5PPM, later).len(), 1);
    }

    #[test]
    fn test_split_frame_within_timeout() {
        let mut rx = FrameReceiver::new(true);
        let start = Instant::now();
        assert!(rx.feed(&UPLOAD_5PPM[..4], start).is_empty());
        let frames = rx.feed(&UPLOAD_5PPM[4..], start + Duration::from_millis(100));
        assert_eq!(frames.len(), 1);
    }
}

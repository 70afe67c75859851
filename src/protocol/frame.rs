//! ZE07 UART frames.
//!
//! Every frame is 9 bytes: a `0xFF` head, seven payload bytes and a checksum
//! over the payload.

pub const FRAME_LENGTH: usize = 9;
pub const HEAD: u8 = 0xFF;
pub const SEND: u8 = 0x01;
pub const GAS_TYPE_CO: u8 = 0x04;
pub const COMMAND_ANSWER: u8 = 0x86;
pub const COMMAND_SWITCH: u8 = 0x78;
pub const MODE_QUESTION_ANSWER: u8 = 0x41;
pub const MODE_INITIATIVE_UPLOAD: u8 = 0x40;

pub type RawFrame = [u8; FRAME_LENGTH];

/// Two's complement of the sum of bytes 1..=7.
pub fn checksum(frame: &RawFrame) -> u8 {
    frame[1..FRAME_LENGTH - 1]
        .iter()
        .fold(0u8, |sum, b| sum.wrapping_add(*b))
        .wrapping_neg()
}

/// Commands the host can send to the sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch to question/answer mode; the sensor only answers reads.
    QuestionAnswerMode,
    /// Switch to initiative upload mode; the sensor sends a frame every second.
    InitiativeUploadMode,
    /// Ask for the current concentration while in question/answer mode.
    ReadConcentration,
}

impl Command {
    pub fn encode(&self) -> RawFrame {
        let mut frame = [0u8; FRAME_LENGTH];
        frame[0] = HEAD;
        frame[1] = SEND;
        match self {
            Command::ReadConcentration => frame[2] = COMMAND_ANSWER,
            Command::QuestionAnswerMode => {
                frame[2] = COMMAND_SWITCH;
                frame[3] = MODE_QUESTION_ANSWER;
            }
            Command::InitiativeUploadMode => {
                frame[2] = COMMAND_SWITCH;
                frame[3] = MODE_INITIATIVE_UPLOAD;
            }
        }
        frame[FRAME_LENGTH - 1] = checksum(&frame);
        frame
    }
}

/// Commands to send when the driver starts.
///
/// In rx-only mode the sensor is assumed to be uploading already and nothing
/// is sent.
pub fn setup_commands(rx_only: bool) -> Vec<Command> {
    if rx_only {
        Vec::new()
    } else {
        vec![Command::QuestionAnswerMode]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// Answer to a [`Command::ReadConcentration`].
    Answer,
    /// Frame uploaded by the sensor on its own.
    Upload,
}

/// A received frame whose head and checksum have been verified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame(RawFrame);

impl Frame {
    pub(crate) fn from_verified(raw: RawFrame) -> Self {
        Frame(raw)
    }

    pub fn raw(&self) -> &RawFrame {
        &self.0
    }

    pub fn kind(&self) -> FrameKind {
        if self.0[1] == COMMAND_ANSWER {
            FrameKind::Answer
        } else {
            FrameKind::Upload
        }
    }

    /// CO concentration in ppm, or `None` while the sensor has no valid
    /// reading yet.
    pub fn concentration_ppm(&self) -> Option<f32> {
        let (high, low) = match self.kind() {
            FrameKind::Answer => (self.0[4], self.0[5]),
            FrameKind::Upload => (self.0[2], self.0[3]),
        };
        let ppm = f32::from(u16::from_be_bytes([high, low])) / 10.0;
        (ppm > 0.0).then_some(ppm)
    }
}

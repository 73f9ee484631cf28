use naia_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr};

use crate::{
    command::command_state::CommandState,
    function::{function::Function, function_kinds::FunctionKinds},
    messages::error::{CommandDecodeError, CommandEncodeError},
    types::{FunctionNetId, PointerPosition, Sequence},
};

/// A function state change, as sent from Client to Server (and echoed back
/// from Server to Client for prediction)
#[derive(Clone, Debug, PartialEq)]
pub struct InputCommand {
    pub function: Function,
    pub state: CommandState,
    pub sequence: Sequence,
    pub pointer: PointerPosition,
    pub target: Option<u64>,
}

impl InputCommand {
    pub fn new(function: Function, state: CommandState, sequence: Sequence) -> Self {
        Self {
            function,
            state,
            sequence,
            pointer: PointerPosition::default(),
            target: None,
        }
    }

    pub fn with_pointer(mut self, pointer: PointerPosition) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_target(mut self, target: Option<u64>) -> Self {
        self.target = target;
        self
    }

    pub fn to_frame(&self, kinds: &FunctionKinds) -> Result<InputCommandFrame, CommandEncodeError> {
        let Some(net_id) = kinds.net_id_of(&self.function) else {
            return Err(CommandEncodeError::UnknownFunction {
                name: self.function.name().to_string(),
            });
        };

        Ok(InputCommandFrame {
            net_id,
            state: self.state.to_u8(),
            sequence: self.sequence,
            pointer_x: self.pointer.x,
            pointer_y: self.pointer.y,
            target: self.target,
        })
    }

    pub fn from_frame(
        frame: InputCommandFrame,
        kinds: &FunctionKinds,
    ) -> Result<Self, CommandDecodeError> {
        let Some(function) = kinds.function_of(frame.net_id) else {
            return Err(CommandDecodeError::UnknownFunction {
                net_id: frame.net_id,
            });
        };
        let Ok(state) = CommandState::try_from(frame.state) else {
            return Err(CommandDecodeError::InvalidState { value: frame.state });
        };

        Ok(Self {
            function: function.clone(),
            state,
            sequence: frame.sequence,
            pointer: PointerPosition::new(frame.pointer_x, frame.pointer_y),
            target: frame.target,
        })
    }

    pub fn encode(&self, kinds: &FunctionKinds) -> Result<Vec<u8>, CommandEncodeError> {
        let frame = self.to_frame(kinds)?;
        Ok(frame.to_bytes())
    }

    pub fn decode(payload: &[u8], kinds: &FunctionKinds) -> Result<Self, CommandDecodeError> {
        let frame = InputCommandFrame::from_bytes(payload)?;
        Self::from_frame(frame, kinds)
    }
}

/// The unresolved wire layout of an [`InputCommand`]. Ids and states are
/// carried raw so that decoding can report exactly what was wrong.
#[derive(Clone, Debug, PartialEq)]
pub struct InputCommandFrame {
    pub net_id: FunctionNetId,
    pub state: u8,
    pub sequence: Sequence,
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub target: Option<u64>,
}

impl InputCommandFrame {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BitWriter::new();
        self.ser(&mut writer);
        writer.to_bytes().to_vec()
    }

    pub fn from_bytes(payload: &[u8]) -> Result<Self, CommandDecodeError> {
        let mut reader = BitReader::new(payload);
        Self::de(&mut reader).map_err(|_| CommandDecodeError::Malformed {
            length: payload.len(),
        })
    }
}

impl Serde for InputCommandFrame {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.net_id.ser(writer);
        self.state.ser(writer);
        self.sequence.ser(writer);
        self.pointer_x.ser(writer);
        self.pointer_y.ser(writer);
        self.target.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let net_id = FunctionNetId::de(reader)?;
        let state = u8::de(reader)?;
        let sequence = Sequence::de(reader)?;
        let pointer_x = f32::de(reader)?;
        let pointer_y = f32::de(reader)?;
        let target = Option::<u64>::de(reader)?;

        Ok(Self {
            net_id,
            state,
            sequence,
            pointer_x,
            pointer_y,
            target,
        })
    }

    fn bit_length(&self) -> u32 {
        self.net_id.bit_length()
            + self.state.bit_length()
            + self.sequence.bit_length()
            + self.pointer_x.bit_length()
            + self.pointer_y.bit_length()
            + self.target.bit_length()
    }
}

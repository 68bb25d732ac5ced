use log::debug;

use super::code::Code;
use super::opt::{self, OptNumber};
use super::{Pdu, HDR};

/// Errors encounterable while validating a PDU received from the wire.
///
/// Each structural failure gets its own kind; a transport can answer
/// 4.02 Bad Option for the option kinds and drop the rest.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum ValidateError {
  /// Fewer bytes than the 4-byte fixed header
  ShortHeader,

  /// Version field was not 1
  BadVersion(u8),

  /// Token length nibble above 8, or a token running past the end of the
  /// PDU
  BadTokenLength(u8),

  /// Code byte is not a point in the RFC7252 code registry
  BadCode(u8),

  /// An option header used the reserved nibble value 15 outside the
  /// payload marker, or the running option number left the 16-bit range
  BadOptionHeader(u8),

  /// An option's extended header bytes or value run past the end of the
  /// PDU
  TruncatedOption,

  /// A payload marker with no payload bytes after it
  EmptyPayloadMarker,
}

impl Pdu<'_> {
  /// Check that the PDU is a structurally valid CoAP message and cache
  /// the derived state (option count, payload location) that the
  /// accessors rely on.
  ///
  /// Must be called on every PDU wrapped around received bytes before
  /// anything else; a PDU built through the mutators maintains the same
  /// state incrementally and never needs it.
  ///
  /// ```
  /// use toad_pdu::{Pdu, ValidateError};
  ///
  /// // version 0
  /// let mut bytes = [0x00, 0x01, 0x00, 0x00];
  /// let n = bytes.len();
  /// assert_eq!(Pdu::wrap(&mut bytes, n).unwrap().validate(),
  ///            Err(ValidateError::BadVersion(0)));
  /// ```
  pub fn validate(&mut self) -> Result<(), ValidateError> {
    self.num_opts = 0;
    self.max_opt_number = OptNumber(0);
    self.payload_index = None;
    self.payload_len = 0;

    if self.len < HDR {
      debug!("PDU of {} bytes is shorter than the fixed header", self.len);
      return Err(ValidateError::ShortHeader);
    }

    let ver = self.ver();
    if !ver.is_supported() {
      return Err(ValidateError::BadVersion(ver.0));
    }

    let tkl = self.tkl();
    if tkl > 8 || HDR + tkl as usize > self.len {
      return Err(ValidateError::BadTokenLength(tkl));
    }

    let code = self.buf()[1];
    if !Code::is_registered(code) {
      return Err(ValidateError::BadCode(code));
    }

    let end = self.len;
    let buf = &self.buf()[..end];
    let mut pos = HDR + tkl as usize;
    let mut number = 0u32;
    let mut num_opts = 0;
    let mut payload_index = None;
    let mut payload_len = 0;

    while pos < end {
      if buf[pos] == 0xFF {
        if pos + 1 == end {
          debug!("payload marker at offset {} with nothing after it", pos);
          return Err(ValidateError::EmptyPayloadMarker);
        }
        payload_index = Some(pos + 1);
        payload_len = end - pos - 1;
        break;
      }

      let head = buf[pos];
      let raw = opt::decode(buf, pos, end).map_err(|e| {
                                            debug!("option {} at offset {} is malformed: {:?}",
                                                   num_opts, pos, e);
                                            e
                                          })?;

      number += raw.delta;
      if number > u16::MAX as u32 {
        return Err(ValidateError::BadOptionHeader(head));
      }

      pos += raw.total();
      num_opts += 1;
    }

    self.num_opts = num_opts;
    self.max_opt_number = OptNumber(number as u16);
    self.payload_index = payload_index;
    self.payload_len = payload_len;
    Ok(())
  }
}

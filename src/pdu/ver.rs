/// CoAP version field: the two high bits of the first header byte.
///
/// Every PDU this crate builds starts at version 1, and
/// [`validate`](super::Pdu::validate) rejects received messages carrying
/// anything else ([`BadVersion`](super::ValidateError::BadVersion)).
/// [`set_ver`](super::Pdu::set_ver) will still write the other field
/// values (2 and 3) for crafting non-conforming test traffic; values
/// above 3 do not fit the field and fail with `InvalidArgument`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(pub u8);

impl Version {
  /// The version every conforming RFC7252 message carries
  pub const RFC7252: Version = Version(1);

  /// Whether a conforming receiver would accept this version
  pub fn is_supported(&self) -> bool {
    *self == Version::RFC7252
  }
}

impl Default for Version {
  fn default() -> Self {
    Version::RFC7252
  }
}

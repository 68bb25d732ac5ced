/// # Message ID
///
/// 16-bit unsigned integer in network byte order, stored in bytes 2 and 3
/// of the fixed header.  Used to detect message duplication and to match
/// messages of type Acknowledgement/Reset to messages of type
/// Confirmable/Non-confirmable.  The rules for generating a Message ID and
/// matching messages are defined in RFC7252 Section 4.
///
/// See [RFC7252 - Message Details](https://datatracker.ietf.org/doc/html/rfc7252#section-3) for context
#[derive(Copy, Clone, Hash, PartialEq, PartialOrd, Debug, Eq, Ord)]
pub struct Id(pub u16);

impl Id {
  /// Create an Id from a big-endian 2-byte unsigned int
  pub fn from_be_bytes(bs: [u8; 2]) -> Self {
    Self(u16::from_be_bytes(bs))
  }
}

impl From<Id> for [u8; 2] {
  fn from(id: Id) -> [u8; 2] {
    id.0.to_be_bytes()
  }
}

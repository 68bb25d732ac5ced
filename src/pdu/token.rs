use tinyvec::ArrayVec;

/// # Message Token
///
/// 0 to 8 bytes chosen by the client to correlate requests and responses,
/// stored immediately after the fixed header.  Unlike [`super::Id`], the
/// token survives retransmission and is the key a client uses to match a
/// separate (non-piggybacked) response to its request.
///
/// The token is held by value; it is small enough that copying the bytes
/// out of the PDU is cheaper than tracking a borrow across mutations.
///
/// See [RFC7252 Section 5.3.1](https://datatracker.ietf.org/doc/html/rfc7252#section-5.3.1)
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Token(pub ArrayVec<[u8; 8]>);

impl Token {
  /// The token bytes as a slice
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Number of token bytes (0..=8)
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether the message carries no token at all
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

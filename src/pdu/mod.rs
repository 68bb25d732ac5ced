use log::trace;
#[cfg(feature = "alloc")]
use std_alloc::vec::Vec;
use tinyvec::ArrayVec;

/// Message Code
pub mod code;

/// Message ID
pub mod id;

/// Message Options
pub mod opt;

/// Message Token
pub mod token;

/// Message Type
pub mod ty;

/// Structural validation of received PDUs
pub mod validate;

/// Message Version
pub mod ver;

mod insert;
mod uri;

pub use code::*;
pub use id::*;
pub use opt::known::ContentFormat;
pub use opt::*;
pub use token::*;
pub use ty::*;
pub use validate::*;
pub use ver::*;

/// Size of the fixed CoAP header
pub(crate) const HDR: usize = 4;

/// Errors encounterable while building or mutating a PDU in place
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum BuildError {
  /// An argument was out of range: version > 3, token longer than 8 bytes,
  /// option value longer than 65535 bytes, empty payload, or empty URI
  InvalidArgument,

  /// The mutation needs more bytes than the borrowed buffer has capacity
  /// for.  The PDU is unchanged.
  BufferFull,
}

/// Where the PDU bytes live.
///
/// The grow path is only reachable for `Owned`; `Borrowed` mutations that
/// need more room than the caller's buffer has fail with
/// [`BuildError::BufferFull`].
#[derive(Debug)]
enum Storage<'b> {
  #[cfg(feature = "alloc")]
  Owned(Vec<u8>),
  Borrowed(&'b mut [u8]),
}

impl Storage<'_> {
  fn get(&self) -> &[u8] {
    match self {
      #[cfg(feature = "alloc")]
      | Storage::Owned(buf) => buf,
      | Storage::Borrowed(buf) => buf,
    }
  }

  fn get_mut(&mut self) -> &mut [u8] {
    match self {
      #[cfg(feature = "alloc")]
      | Storage::Owned(buf) => buf,
      | Storage::Borrowed(buf) => buf,
    }
  }
}

/// # An in-place CoAP PDU
///
/// One contiguous byte buffer holding a complete CoAP message, with
/// mutators that edit the wire encoding directly instead of going through
/// a parsed intermediate form.
///
/// ```text
///  0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |Ver| T |  TKL  |      Code     |          Message ID           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Token (if any, TKL bytes) ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Options (if any) ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |1 1 1 1 1 1 1 1|    Payload (if any) ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The buffer is either owned (allocated and grown by the PDU; requires
/// the `alloc` feature) or borrowed from the caller, in which case the
/// PDU never grows past the buffer's length.  Both modes share every
/// other behavior.
///
/// ## Building
/// ```
/// use toad_pdu::{Code, Id, Pdu, Type};
///
/// let mut pdu = Pdu::new();
/// pdu.set_ty(Type::Con);
/// pdu.set_code(Code::GET);
/// pdu.set_id(Id(0x1234));
/// pdu.set_uri("temperature").unwrap();
///
/// // ready for sendto()
/// let bytes = pdu.as_bytes();
/// assert_eq!(bytes[1], 0x01);
/// ```
///
/// ## Receiving
/// ```
/// use toad_pdu::{Code, Pdu};
///
/// let mut datagram = [0x40, 0x01, 0x12, 0x34, 0xB1, b'a'];
/// let n = datagram.len(); // from recvfrom()
///
/// let mut pdu = Pdu::wrap(&mut datagram, n).unwrap();
/// pdu.validate().unwrap();
/// assert_eq!(pdu.code(), Code::GET);
/// ```
#[derive(Debug)]
pub struct Pdu<'b> {
  storage: Storage<'b>,

  /// Length of the PDU; bytes past this offset are ignored
  len: usize,

  // derived state, maintained by the mutators and re-established by
  // `validate`
  num_opts: usize,
  max_opt_number: OptNumber,
  payload_index: Option<usize>,
  payload_len: usize,
}

#[cfg(feature = "alloc")]
impl Pdu<'static> {
  /// Create an empty PDU that owns (and grows) its own buffer.
  ///
  /// The new PDU is 4 bytes long: a zeroed header with version 1.
  pub fn new() -> Self {
    let mut pdu = Pdu { storage: Storage::Owned(std_alloc::vec![0; HDR]),
                        len: HDR,
                        num_opts: 0,
                        max_opt_number: OptNumber(0),
                        payload_index: None,
                        payload_len: 0 };
    pdu.set_ver(Version::default()).ok();
    pdu
  }
}

#[cfg(feature = "alloc")]
impl Default for Pdu<'static> {
  fn default() -> Self {
    Pdu::new()
  }
}

impl<'b> Pdu<'b> {
  /// Create an empty PDU inside a caller-supplied buffer.
  ///
  /// The PDU will never grow past `buf.len()`; mutations that need more
  /// room fail with [`BuildError::BufferFull`].  Fails with
  /// [`BuildError::InvalidArgument`] when the buffer cannot even hold the
  /// fixed header.
  pub fn new_in(buf: &'b mut [u8]) -> Result<Pdu<'b>, BuildError> {
    if buf.len() < HDR {
      return Err(BuildError::InvalidArgument);
    }

    buf[..HDR].fill(0);
    let mut pdu = Pdu { storage: Storage::Borrowed(buf),
                        len: HDR,
                        num_opts: 0,
                        max_opt_number: OptNumber(0),
                        payload_index: None,
                        payload_len: 0 };
    pdu.set_ver(Version::default()).ok();
    Ok(pdu)
  }

  /// Wrap bytes received from the wire.
  ///
  /// `len` is the datagram length, which may be smaller than the buffer
  /// (e.g. a full-MTU receive buffer).  Until [`Pdu::validate`] returns
  /// `Ok`, the accessors make no promises about what they return.
  ///
  /// Fails with [`BuildError::InvalidArgument`] when `len` exceeds the
  /// buffer or the buffer cannot hold the fixed header.
  pub fn wrap(buf: &'b mut [u8], len: usize) -> Result<Pdu<'b>, BuildError> {
    if buf.len() < HDR || len > buf.len() {
      return Err(BuildError::InvalidArgument);
    }

    Ok(Pdu { storage: Storage::Borrowed(buf),
             len,
             num_opts: 0,
             max_opt_number: OptNumber(0),
             payload_index: None,
             payload_len: 0 })
  }

  /// Rewind to the empty state (4-byte header, version 1) so the buffer
  /// can be reused for a new message.  Never reallocates.
  pub fn reset(&mut self) {
    self.storage.get_mut().fill(0);
    self.len = HDR;
    self.num_opts = 0;
    self.max_opt_number = OptNumber(0);
    self.payload_index = None;
    self.payload_len = 0;
    self.set_ver(Version::default()).ok();
  }

  /// The PDU bytes, ready for `sendto()`.
  pub fn as_bytes(&self) -> &[u8] {
    &self.storage.get()[..self.len]
  }

  /// The PDU bytes, mutably.
  ///
  /// Escape hatch for callers that edit the encoding by hand (e.g. after
  /// [`Pdu::set_tkl`]); nothing re-checks what was written.
  pub fn as_bytes_mut(&mut self) -> &mut [u8] {
    let len = self.len;
    &mut self.storage.get_mut()[..len]
  }

  /// Length of the PDU in bytes (≥ 4)
  pub fn len(&self) -> usize {
    self.len
  }

  /// A PDU always carries at least its fixed header
  pub fn is_empty(&self) -> bool {
    false
  }

  /// Bytes available to this PDU: the borrowed buffer's length, or the
  /// owned buffer's current allocation (which grows on demand)
  pub fn capacity(&self) -> usize {
    self.storage.get().len()
  }

  /// Surrender the buffer, truncated to the PDU length.
  #[cfg(feature = "alloc")]
  pub fn into_bytes(self) -> Vec<u8> {
    match self.storage {
      | Storage::Owned(mut buf) => {
        buf.truncate(self.len);
        buf
      },
      | Storage::Borrowed(buf) => buf[..self.len].to_vec(),
    }
  }

  /// Make sure `new_len` bytes are addressable, growing an owned buffer
  /// if needed.  Checked before any bytes move, so a failure leaves the
  /// PDU untouched.
  pub(crate) fn ensure(&mut self, new_len: usize) -> Result<(), BuildError> {
    match &mut self.storage {
      #[cfg(feature = "alloc")]
      | Storage::Owned(buf) => {
        if buf.len() < new_len {
          buf.resize(new_len, 0);
        }
        Ok(())
      },
      | Storage::Borrowed(buf) => {
        if new_len > buf.len() {
          Err(BuildError::BufferFull)
        } else {
          Ok(())
        }
      },
    }
  }

  pub(crate) fn buf(&self) -> &[u8] {
    self.storage.get()
  }

  pub(crate) fn buf_mut(&mut self) -> &mut [u8] {
    self.storage.get_mut()
  }

  /// Offset one past the option region: the payload marker when a payload
  /// exists, the end of the PDU otherwise.
  pub(crate) fn opt_end(&self) -> usize {
    match self.payload_index {
      | Some(ix) => ix - 1,
      | None => self.len,
    }
  }

  // ---- fixed header ----

  /// CoAP version (bits 7..6 of the first byte)
  pub fn ver(&self) -> Version {
    Version(self.buf()[0] >> 6)
  }

  /// Set the CoAP version.
  ///
  /// Fails with [`BuildError::InvalidArgument`] for versions above 3.
  pub fn set_ver(&mut self, ver: Version) -> Result<(), BuildError> {
    if ver.0 > 3 {
      return Err(BuildError::InvalidArgument);
    }

    let buf = self.buf_mut();
    buf[0] = (buf[0] & 0x3F) | (ver.0 << 6);
    Ok(())
  }

  /// Message type (bits 5..4 of the first byte)
  pub fn ty(&self) -> Type {
    Type::from_bits(self.buf()[0] >> 4)
  }

  /// Set the message type.
  pub fn set_ty(&mut self, ty: Type) {
    let buf = self.buf_mut();
    buf[0] = (buf[0] & 0xCF) | (u8::from(ty) << 4);
  }

  /// Message code
  pub fn code(&self) -> Code {
    Code::from(self.buf()[1])
  }

  /// Set the message code.
  pub fn set_code(&mut self, code: Code) {
    self.buf_mut()[1] = code.into();
  }

  /// Message ID (bytes 2..3, network byte order)
  pub fn id(&self) -> Id {
    let buf = self.buf();
    Id::from_be_bytes([buf[2], buf[3]])
  }

  /// Set the message ID.
  pub fn set_id(&mut self, id: Id) {
    let bytes: [u8; 2] = id.into();
    self.buf_mut()[2..4].copy_from_slice(&bytes);
  }

  // ---- token ----

  /// Token length (bits 3..0 of the first byte)
  pub fn tkl(&self) -> u8 {
    self.buf()[0] & 0x0F
  }

  /// Set the token length nibble without moving any bytes.
  ///
  /// This leaves the option and payload regions where they are, so it is
  /// only useful when the caller is about to rewrite the token bytes
  /// through [`Pdu::as_bytes_mut`].  [`Pdu::set_token`] is the safe path.
  ///
  /// Fails with [`BuildError::InvalidArgument`] for lengths above 8.
  pub fn set_tkl(&mut self, tkl: u8) -> Result<(), BuildError> {
    if tkl > 8 {
      return Err(BuildError::InvalidArgument);
    }

    let buf = self.buf_mut();
    buf[0] = (buf[0] & 0xF0) | tkl;
    Ok(())
  }

  /// The token bytes, borrowed from the buffer
  pub fn token_bytes(&self) -> &[u8] {
    let start = HDR.min(self.len);
    let end = (HDR + self.tkl() as usize).min(self.len);
    &self.buf()[start..end.max(start)]
  }

  /// The token, copied out of the buffer
  pub fn token(&self) -> Token {
    let bytes = self.token_bytes();
    let bytes = &bytes[..bytes.len().min(8)];

    let mut t = ArrayVec::new();
    t.extend_from_slice(bytes);
    Token(t)
  }

  /// Set the token, moving the option and payload bytes to make room.
  ///
  /// When the new length equals the old the bytes are overwritten in
  /// place; otherwise everything after the token region shifts by the
  /// length difference.  Option encodings are relative to one another,
  /// never to their absolute position, so the shifted bytes stay
  /// structurally identical.
  ///
  /// An empty slice removes the token.  Fails with
  /// [`BuildError::InvalidArgument`] for tokens longer than 8 bytes and
  /// with [`BuildError::BufferFull`] when a borrowed buffer cannot fit
  /// the growth.
  pub fn set_token(&mut self, token: &[u8]) -> Result<(), BuildError> {
    if token.len() > 8 {
      return Err(BuildError::InvalidArgument);
    }

    let old_len = self.tkl() as usize;
    let new_len = token.len();

    if new_len == old_len {
      self.buf_mut()[HDR..HDR + new_len].copy_from_slice(token);
      return Ok(());
    }

    trace!("token {} -> {} bytes, shifting {} trailing bytes",
           old_len,
           new_len,
           self.len - HDR - old_len);

    let tail_start = HDR + old_len;
    let len = self.len;

    if new_len > old_len {
      let grow = new_len - old_len;
      self.ensure(len + grow)?;
      self.buf_mut().copy_within(tail_start..len, HDR + new_len);
      self.len += grow;
      if let Some(ix) = self.payload_index {
        self.payload_index = Some(ix + grow);
      }
    } else {
      let shrink = old_len - new_len;
      self.buf_mut().copy_within(tail_start..len, HDR + new_len);
      self.len -= shrink;
      if let Some(ix) = self.payload_index {
        self.payload_index = Some(ix - shrink);
      }
    }

    let buf = self.buf_mut();
    buf[HDR..HDR + new_len].copy_from_slice(token);
    buf[0] = (buf[0] & 0xF0) | new_len as u8;
    Ok(())
  }

  // ---- options ----

  /// Number of options in the PDU
  pub fn num_opts(&self) -> usize {
    self.num_opts
  }

  /// Iterate the options in wire order (non-decreasing option number).
  ///
  /// The yielded [`Opt`]s borrow the PDU buffer, so they cannot outlive
  /// the next mutation.
  pub fn opts(&self) -> Opts<'_> {
    let start = (HDR + self.tkl() as usize).min(self.len);
    Opts::new(&self.buf()[..self.len], start, self.opt_end())
  }

  // ---- payload ----

  /// The payload bytes, if a payload marker is present
  pub fn payload(&self) -> Option<&[u8]> {
    self.payload_index
        .map(|ix| &self.buf()[ix..ix + self.payload_len])
  }

  /// Length of the payload in bytes (0 when there is none)
  pub fn payload_len(&self) -> usize {
    self.payload_len
  }

  /// Make room for a `len`-byte payload and return the destination slice,
  /// leaving the bytes for the caller to fill.
  ///
  /// On first use this appends the `0xFF` marker.  Re-allocating with a
  /// different length only adjusts the PDU length: the payload is the
  /// final region of the buffer, so nothing shifts and the marker stays
  /// put.
  ///
  /// A zero `len` fails with [`BuildError::InvalidArgument`]; a marker
  /// with no payload bytes after it is not a valid encoding.
  pub fn alloc_payload(&mut self, len: usize) -> Result<&mut [u8], BuildError> {
    if len == 0 {
      return Err(BuildError::InvalidArgument);
    }

    let ix = match self.payload_index {
      | None => {
        self.ensure(self.len + 1 + len)?;
        let marker_at = self.len;
        self.buf_mut()[marker_at] = 0xFF;
        self.payload_index = Some(marker_at + 1);
        self.payload_len = len;
        self.len = marker_at + 1 + len;
        marker_at + 1
      },
      | Some(ix) => {
        if len != self.payload_len {
          self.ensure(ix + len)?;
          self.payload_len = len;
          self.len = ix + len;
        }
        ix
      },
    };

    Ok(&mut self.buf_mut()[ix..ix + len])
  }

  /// Set the payload to the given bytes, appending the `0xFF` marker when
  /// the PDU does not have one yet.
  ///
  /// An empty payload fails with [`BuildError::InvalidArgument`].
  pub fn set_payload(&mut self, payload: &[u8]) -> Result<(), BuildError> {
    let dst = self.alloc_payload(payload.len())?;
    dst.copy_from_slice(payload);
    Ok(())
  }

  /// Shorthand for setting the Content-Format option.
  ///
  /// The value uses the shortest encoding that fits: no bytes for 0, one
  /// byte up to 255, two big-endian bytes otherwise.
  pub fn set_content_format(&mut self, format: ContentFormat) -> Result<(), BuildError> {
    let n = u16::from(&format);
    match n {
      | 0 => self.add_opt(known::no_repeat::CONTENT_FORMAT, &[]),
      | n if n <= 0xFF => self.add_opt(known::no_repeat::CONTENT_FORMAT, &[n as u8]),
      | n => self.add_opt(known::no_repeat::CONTENT_FORMAT, &n.to_be_bytes()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_con_changed() {
    let mut pdu = Pdu::new();
    pdu.set_ver(Version(1)).unwrap();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::CHANGED);

    assert_eq!(pdu.as_bytes(), &[0x40, 0x44, 0x00, 0x00]);
  }

  #[test]
  fn header_field_roundtrip() {
    let mut pdu = Pdu::new();
    pdu.set_ver(Version(2)).unwrap();
    pdu.set_ty(Type::Ack);
    pdu.set_code(Code::NOT_FOUND);
    pdu.set_id(Id(0xBEEF));

    assert_eq!(pdu.ver(), Version(2));
    assert_eq!(pdu.ty(), Type::Ack);
    assert_eq!(pdu.code(), Code::NOT_FOUND);
    assert_eq!(pdu.id(), Id(0xBEEF));
    assert_eq!(pdu.tkl(), 0);

    assert_eq!(pdu.set_ver(Version(4)), Err(BuildError::InvalidArgument));
    assert_eq!(pdu.set_tkl(9), Err(BuildError::InvalidArgument));
  }

  #[test]
  fn token_set_and_grow() {
    let mut pdu = Pdu::new();
    pdu.set_ver(Version(2)).unwrap();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::CHANGED);
    pdu.set_token(&[0x03, 0x02, 0x01, 0x00]).unwrap();

    assert_eq!(pdu.as_bytes(),
               &[0x84, 0x44, 0x00, 0x00, 0x03, 0x02, 0x01, 0x00]);

    pdu.set_token(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(pdu.as_bytes(),
               &[0x88, 0x44, 0x00, 0x00, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(pdu.token().as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(pdu.set_token(&[0u8; 9]), Err(BuildError::InvalidArgument));
  }

  #[test]
  fn token_resize_preserves_tail() {
    let mut pdu = Pdu::new();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::GET);
    pdu.add_opt(OptNumber(11), b"abc").unwrap();
    pdu.set_payload(&[9, 9]).unwrap();

    let tail = |pdu: &Pdu| {
      let at = HDR + pdu.tkl() as usize;
      pdu.as_bytes()[at..].to_vec()
    };

    let before = tail(&pdu);

    pdu.set_token(&[1, 2, 3]).unwrap();
    assert_eq!(tail(&pdu), before);
    assert_eq!(pdu.payload(), Some(&[9, 9][..]));

    pdu.set_token(&[7]).unwrap();
    assert_eq!(tail(&pdu), before);
    assert_eq!(pdu.token_bytes(), &[7]);

    // removing the token entirely
    pdu.set_token(&[]).unwrap();
    assert_eq!(tail(&pdu), before);
    assert_eq!(pdu.tkl(), 0);
  }

  #[test]
  fn borrowed_token_buffer_full() {
    let mut buf = [0u8; 8];
    let mut pdu = Pdu::new_in(&mut buf).unwrap();
    pdu.set_token(&[1, 2, 3, 4]).unwrap();

    // one more byte than the buffer has room for
    assert_eq!(pdu.set_token(&[1, 2, 3, 4, 5]),
               Err(BuildError::BufferFull));
    // the failed call changed nothing
    assert_eq!(pdu.token_bytes(), &[1, 2, 3, 4]);
  }

  #[test]
  fn payload_attach_and_reattach() {
    let mut pdu = Pdu::new();
    pdu.set_ver(Version(1)).unwrap();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::GET);
    pdu.set_id(Id(0x1234));
    pdu.set_uri("test").unwrap();
    pdu.set_payload(&[0x01, 0x02, 0x03]).unwrap();

    assert_eq!(pdu.as_bytes(),
               &[0x40, 0x01, 0x12, 0x34, 0xB4, b't', b'e', b's', b't', 0xFF, 0x01, 0x02, 0x03]);

    pdu.set_payload(&[0x04, 0x03, 0x02, 0x01]).unwrap();
    assert_eq!(pdu.as_bytes(),
               &[0x40, 0x01, 0x12, 0x34, 0xB4, b't', b'e', b's', b't', 0xFF, 0x04, 0x03, 0x02,
                 0x01]);

    // shrinking reuses the same marker
    pdu.set_payload(&[0xAA]).unwrap();
    assert_eq!(pdu.payload(), Some(&[0xAA][..]));
    assert_eq!(pdu.set_payload(&[]), Err(BuildError::InvalidArgument));
  }

  #[test]
  fn alloc_payload_exposes_destination() {
    let mut pdu = Pdu::new();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::CONTENT);

    pdu.alloc_payload(4).unwrap().copy_from_slice(b"abcd");
    assert_eq!(pdu.payload(), Some(b"abcd".as_slice()));

    // same length: same region, no structural change
    let len = pdu.len();
    pdu.alloc_payload(4).unwrap()[0] = b'z';
    assert_eq!(pdu.len(), len);
    assert_eq!(pdu.payload(), Some(b"zbcd".as_slice()));
  }

  #[test]
  fn reset_returns_to_empty() {
    let mut pdu = Pdu::new();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::POST);
    pdu.set_token(&[1, 2]).unwrap();
    pdu.set_uri("a/b").unwrap();
    pdu.set_payload(&[1]).unwrap();

    pdu.reset();

    assert_eq!(pdu.as_bytes(), &[0x40, 0x00, 0x00, 0x00]);
    assert_eq!(pdu.num_opts(), 0);
    assert_eq!(pdu.payload(), None);
    assert_eq!(pdu.ver(), Version(1));
  }

  #[test]
  fn content_format_minimal_encoding() {
    let mut pdu = Pdu::new();
    pdu.set_content_format(ContentFormat::Text).unwrap();
    assert_eq!(pdu.opts().next().unwrap().value, &[] as &[u8]);

    pdu.reset();
    pdu.set_content_format(ContentFormat::Json).unwrap();
    assert_eq!(pdu.opts().next().unwrap().value, &[50]);

    pdu.reset();
    pdu.set_content_format(ContentFormat::Other(11542)).unwrap();
    assert_eq!(pdu.opts().next().unwrap().value,
               11542u16.to_be_bytes().as_slice());
  }

  #[test]
  fn wrap_rejects_nonsense_lengths() {
    let mut small = [0u8; 2];
    assert!(Pdu::wrap(&mut small, 2).is_err());

    let mut buf = [0u8; 16];
    assert!(Pdu::wrap(&mut buf, 17).is_err());
    assert!(Pdu::wrap(&mut buf, 2).is_ok()); // short PDU caught by validate
  }
}

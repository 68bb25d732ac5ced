/// # Message Code
///
/// The message code occupies the second byte of the fixed header and is
/// notated `class.detail`, e.g. `2.05` for Content or `4.04` for Not Found.
///
/// See [RFC7252 Section 12.1](https://datatracker.ietf.org/doc/html/rfc7252#section-12.1)
/// for the code registry.
///
/// ```
/// use toad_pdu::Code;
///
/// assert_eq!(u8::from(Code::CONTENT), 0x45);
/// assert_eq!(Code::new(2, 5), Code::CONTENT);
/// ```
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Code {
  /// The "class" of message codes identify it as a request or response, and provides the class of response status:
  ///
  /// |class|meaning|
  /// |---|---|
  /// |`0`|Message is a request (or empty)|
  /// |`2`|Message is a success response|
  /// |`4`|Message is a client error response|
  /// |`5`|Message is a server error response|
  pub class: u8,

  /// 5-bit integer (range `[0, 32)`) that provides granular information about the response status.
  ///
  /// Always `0` for empty messages and identifies the method for requests.
  pub detail: u8,
}

/// Whether a [`Code`] identifies an empty message, a request, or a response.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CodeKind {
  /// 0.00; an empty message carrying only a header
  Empty,
  /// 0.01 - 0.31; a request method
  Request,
  /// 2.00 - 5.31; a response status
  Response,
}

impl Code {
  /// Create a new Code
  ///
  /// ```
  /// use toad_pdu::Code;
  ///
  /// let content = Code::new(2, 05);
  /// ```
  pub const fn new(class: u8, detail: u8) -> Self {
    Self { class, detail }
  }

  /// 0.00; an empty (ping / reset) message
  pub const EMPTY: Code = Code::new(0, 0);
  /// 0.01
  pub const GET: Code = Code::new(0, 1);
  /// 0.02
  pub const POST: Code = Code::new(0, 2);
  /// 0.03
  pub const PUT: Code = Code::new(0, 3);
  /// 0.04
  pub const DELETE: Code = Code::new(0, 4);

  /// 2.01
  pub const CREATED: Code = Code::new(2, 1);
  /// 2.02
  pub const DELETED: Code = Code::new(2, 2);
  /// 2.03
  pub const VALID: Code = Code::new(2, 3);
  /// 2.04
  pub const CHANGED: Code = Code::new(2, 4);
  /// 2.05
  pub const CONTENT: Code = Code::new(2, 5);

  /// 4.00
  pub const BAD_REQUEST: Code = Code::new(4, 0);
  /// 4.01
  pub const UNAUTHORIZED: Code = Code::new(4, 1);
  /// 4.02
  pub const BAD_OPTION: Code = Code::new(4, 2);
  /// 4.03
  pub const FORBIDDEN: Code = Code::new(4, 3);
  /// 4.04
  pub const NOT_FOUND: Code = Code::new(4, 4);
  /// 4.05
  pub const METHOD_NOT_ALLOWED: Code = Code::new(4, 5);
  /// 4.06
  pub const NOT_ACCEPTABLE: Code = Code::new(4, 6);
  /// 4.12
  pub const PRECONDITION_FAILED: Code = Code::new(4, 12);
  /// 4.13
  pub const REQUEST_ENTITY_TOO_LARGE: Code = Code::new(4, 13);
  /// 4.15
  pub const UNSUPPORTED_CONTENT_FORMAT: Code = Code::new(4, 15);

  /// 5.00
  pub const INTERNAL_SERVER_ERROR: Code = Code::new(5, 0);
  /// 5.01
  pub const NOT_IMPLEMENTED: Code = Code::new(5, 1);
  /// 5.02
  pub const BAD_GATEWAY: Code = Code::new(5, 2);
  /// 5.03
  pub const SERVICE_UNAVAILABLE: Code = Code::new(5, 3);
  /// 5.04
  pub const GATEWAY_TIMEOUT: Code = Code::new(5, 4);
  /// 5.05
  pub const PROXYING_NOT_SUPPORTED: Code = Code::new(5, 5);

  /// Whether this code identifies an empty message, a request, or a response.
  ///
  /// ```
  /// use toad_pdu::{Code, CodeKind};
  ///
  /// assert_eq!(Code::GET.kind(), CodeKind::Request);
  /// assert_eq!(Code::NOT_FOUND.kind(), CodeKind::Response);
  /// ```
  pub fn kind(&self) -> CodeKind {
    match (self.class, self.detail) {
      | (0, 0) => CodeKind::Empty,
      | (0, _) => CodeKind::Request,
      | _ => CodeKind::Response,
    }
  }

  /// Whether the byte is a point in the RFC7252 code registry.
  ///
  /// Unassigned points inside the request and response ranges are rejected,
  /// so this is an exhaustive table rather than a range check.
  pub fn is_registered(b: u8) -> bool {
    matches!(b,
             0x00
             | 0x01..=0x04
             | 0x41..=0x45
             | 0x80..=0x86
             | 0x8C
             | 0x8D
             | 0x8F
             | 0xA0..=0xA5)
  }

  /// Map an HTTP status integer to the corresponding CoAP code.
  ///
  /// The integers 1 through 4 select the request methods GET, POST, PUT
  /// and DELETE; response statuses map per RFC7252 Section 5.9.  Statuses
  /// with no CoAP equivalent yield `None`.
  ///
  /// ```
  /// use toad_pdu::Code;
  ///
  /// assert_eq!(Code::from_http_status(404), Some(Code::NOT_FOUND));
  /// assert_eq!(Code::from_http_status(418), None);
  /// ```
  pub fn from_http_status(status: u16) -> Option<Code> {
    let code = match status {
      | 1 => Code::GET,
      | 2 => Code::POST,
      | 3 => Code::PUT,
      | 4 => Code::DELETE,
      | 201 => Code::CREATED,
      | 202 => Code::DELETED,
      | 203 => Code::VALID,
      | 204 => Code::CHANGED,
      | 205 => Code::CONTENT,
      | 400 => Code::BAD_REQUEST,
      | 401 => Code::UNAUTHORIZED,
      | 402 => Code::BAD_OPTION,
      | 403 => Code::FORBIDDEN,
      | 404 => Code::NOT_FOUND,
      | 405 => Code::METHOD_NOT_ALLOWED,
      | 406 => Code::NOT_ACCEPTABLE,
      | 412 => Code::PRECONDITION_FAILED,
      | 413 => Code::REQUEST_ENTITY_TOO_LARGE,
      | 415 => Code::UNSUPPORTED_CONTENT_FORMAT,
      | 500 => Code::INTERNAL_SERVER_ERROR,
      | 501 => Code::NOT_IMPLEMENTED,
      | 502 => Code::BAD_GATEWAY,
      | 503 => Code::SERVICE_UNAVAILABLE,
      | 504 => Code::GATEWAY_TIMEOUT,
      | 505 => Code::PROXYING_NOT_SUPPORTED,
      | _ => return None,
    };
    Some(code)
  }

  /// Get the human string representation of a message code
  ///
  /// # Returns
  /// A `char` array
  ///
  /// This is to avoid unnecessary heap allocation,
  /// you can create a `String` with `FromIterator::<String>::from_iter`.
  ///
  /// ```
  /// use toad_pdu::Code;
  ///
  /// let code = Code { class: 2, detail: 5 };
  /// let string = String::from_iter(code.to_human());
  /// assert_eq!(string, "2.05".to_string());
  /// ```
  pub fn to_human(&self) -> [char; 4] {
    let to_char = |d: u8| char::from_digit(d.into(), 10).unwrap_or('?');
    [to_char(self.class & 0b111),
     '.',
     to_char(self.detail / 10),
     to_char(self.detail % 10)]
  }
}

impl From<u8> for Code {
  fn from(b: u8) -> Self {
    let class = b >> 5;
    let detail = b & 0b11111;

    Code { class, detail }
  }
}

impl From<Code> for u8 {
  fn from(code: Code) -> u8 {
    let class = code.class << 5;
    let detail = code.detail;

    class | detail
  }
}

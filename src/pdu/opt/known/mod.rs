/// Content-Format values
pub mod content_format;
pub use content_format::*;

macro_rules! opt {
  (#[doc = $doc:expr] $name:ident = $n:literal) => {
    #[doc = $doc]
    #[allow(clippy::zero_prefixed_literal)]
    pub const $name: $crate::pdu::opt::OptNumber = $crate::pdu::opt::OptNumber($n);
  };
}

/// Options that may appear at most once in a message
pub mod no_repeat {
  opt!(#[doc = "Uri-Host <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.1>"]
       HOST = 3);
  opt!(#[doc = "If-None-Match <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.8.2>"]
       IF_NONE_MATCH = 5);
  opt!(#[doc = "Observe <https://www.rfc-editor.org/rfc/rfc7641#section-2>"]
       OBSERVE = 6);
  opt!(#[doc = "Uri-Port; see [`HOST`]"]
       PORT = 7);
  opt!(#[doc = "Content-Format <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.3>"]
       CONTENT_FORMAT = 12);
  opt!(#[doc = "Max-Age <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.5>"]
       MAX_AGE = 14);
  opt!(#[doc = "Accept <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.4>"]
       ACCEPT = 17);
  opt!(#[doc = "Block2 <https://datatracker.ietf.org/doc/html/rfc7959#section-2.1>"]
       BLOCK2 = 23);
  opt!(#[doc = "Block1 <https://datatracker.ietf.org/doc/html/rfc7959#section-2.1>"]
       BLOCK1 = 27);
  opt!(#[doc = "Size2 <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.9>"]
       SIZE2 = 28);
  opt!(#[doc = "Proxy-Uri <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.2>"]
       PROXY_URI = 35);
  opt!(#[doc = "Proxy-Scheme; see [`PROXY_URI`]"]
       PROXY_SCHEME = 39);
  opt!(#[doc = "Size1 <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.9>"]
       SIZE1 = 60);
}

/// Options that may repeat within a message
pub mod repeat {
  opt!(#[doc = "If-Match <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.8.1>"]
       IF_MATCH = 1);
  opt!(#[doc = "ETag <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.6>"]
       ETAG = 4);
  opt!(#[doc = "Location-Path <https://datatracker.ietf.org/doc/html/rfc7252#section-5.10.7>"]
       LOCATION_PATH = 8);
  opt!(#[doc = "Uri-Path; see [`super::no_repeat::HOST`]"]
       PATH = 11);
  opt!(#[doc = "Uri-Query; see [`super::no_repeat::HOST`]"]
       QUERY = 15);
  opt!(#[doc = "Location-Query; see [`LOCATION_PATH`]"]
       LOCATION_QUERY = 20);
}

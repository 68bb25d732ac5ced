//! In-place codec for CoAP (RFC 7252) messages.
//!
//! Where [`toad-msg`](https://docs.rs/toad-msg) parses a datagram into an
//! owned `Message` structure, `toad-pdu` builds, mutates and parses the
//! message *inside one contiguous byte buffer*: the bytes a [`Pdu`] holds
//! are at all times exactly what goes on the wire.
//!
//! The interesting part is the option list.  CoAP options are stored as a
//! delta-encoded, variable-width, order-sensitive run of records, so
//! inserting an option anywhere but at the tail means shifting the later
//! bytes and rewriting the next option's delta header, whose own width may
//! change.  [`Pdu::add_opt`] does all of that in place, which keeps the
//! whole send path at a single buffer and, in borrowed mode, at zero
//! allocations.
//!
//! ## Allocation
//! A [`Pdu`] either owns a growable buffer (requires the `alloc` feature)
//! or borrows a caller-supplied one that never grows:
//!
//! ```
//! use toad_pdu::{Code, Id, Pdu, Type};
//!
//! // owned; grows as the message does
//! let mut req = Pdu::new();
//! req.set_ty(Type::Con);
//! req.set_code(Code::GET);
//! req.set_id(Id(0x1234));
//! req.set_uri("sensors/temp?unit=c").unwrap();
//!
//! // borrowed; a fixed stack buffer, e.g. on an embedded target
//! let mut buf = [0u8; 64];
//! let mut resp = Pdu::new_in(&mut buf).unwrap();
//! resp.set_ty(Type::Ack);
//! resp.set_code(Code::CONTENT);
//! resp.set_payload(b"22.5").unwrap();
//! ```
//!
//! ## Receiving
//! The receive path wraps the datagram bytes and validates them once;
//! after that the accessors and [`Pdu::opts`] borrow straight from the
//! buffer:
//!
//! ```
//! use toad_pdu::{known, Pdu};
//!
//! let mut datagram = [0x40, 0x01, 0x00, 0x01, 0xB4, b't', b'e', b'm', b'p'];
//! let n = datagram.len();
//!
//! let mut pdu = Pdu::wrap(&mut datagram, n).unwrap();
//! pdu.validate().unwrap();
//!
//! let path = pdu.opts()
//!               .filter(|o| o.number == known::repeat::PATH)
//!               .map(|o| o.value)
//!               .next();
//! assert_eq!(path, Some(b"temp".as_slice()));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code, missing_copy_implementations))]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc as std_alloc;

/// PDU structs
pub mod pdu;

#[doc(inline)]
pub use pdu::*;

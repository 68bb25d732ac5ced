use log::trace;

use super::opt::{self, OptNumber};
use super::{BuildError, Pdu, HDR};

/// The option that will follow a newly inserted one.
struct Succ {
  number: u16,
  /// extended-delta width of its current encoding
  ext_old: usize,
}

impl Pdu<'_> {
  /// Insert an option, keeping the option list sorted by number and every
  /// delta at its minimum width.
  ///
  /// Options may be added in any order; inserting anywhere but at the tail
  /// shifts the later bytes and rewrites the following option's delta
  /// header in place.  Adding in ascending number order skips the scan and
  /// the shift, so it is the cheap path.
  ///
  /// Options with equal numbers are kept in insertion order: a new option
  /// lands after the last existing option with the same number.  Uri-Path
  /// segments added in order therefore appear in order on the wire.
  ///
  /// Fails with [`BuildError::InvalidArgument`] for values longer than
  /// 65535 bytes and with [`BuildError::BufferFull`] when a borrowed
  /// buffer cannot fit the option.
  ///
  /// ```
  /// use toad_pdu::{known, Pdu};
  ///
  /// let mut pdu = Pdu::new();
  /// pdu.add_opt(known::repeat::PATH, b"temperature").unwrap();
  /// pdu.add_opt(known::no_repeat::ACCEPT, &[0]).unwrap();
  /// assert_eq!(pdu.num_opts(), 2);
  /// ```
  pub fn add_opt(&mut self, number: OptNumber, value: &[u8]) -> Result<(), BuildError> {
    if value.len() > u16::MAX as usize {
      return Err(BuildError::InvalidArgument);
    }

    let (insert_at, prev, succ) = self.insert_position(number);
    let delta = number.0 - prev.0;
    let opt_len = 1 + opt::ext_width(delta) + opt::ext_width(value.len() as u16) + value.len();

    trace!("option {} ({} bytes) at offset {}, delta {} from {}",
           number.0,
           opt_len,
           insert_at,
           delta,
           prev.0);

    match succ {
      | None => {
        // no option follows.  Make room at the end of the option region
        // and encode; a payload marker after it only moves, its bytes are
        // position-independent
        self.ensure(self.len() + opt_len)?;
        let len = self.len();
        let buf = self.buf_mut();
        buf.copy_within(insert_at..len, insert_at + opt_len);
        opt::encode(buf, insert_at, delta, value);

        self.bump(opt_len);
        self.max_opt_number = number;
      },
      | Some(succ) => {
        // the next option's delta shrinks now that this option sits
        // between it and its old predecessor; its width can only shrink
        // or stay, never grow
        let succ_delta_new = succ.number - number.0;
        let shrink = succ.ext_old - opt::ext_width(succ_delta_new);
        let shift = opt_len - shrink;

        self.ensure(self.len() + shift)?;
        let len = self.len();
        let buf = self.buf_mut();
        buf.copy_within(insert_at..len, insert_at + shift);

        // the tail shift landed the successor's length-extension and value
        // bytes exactly where its narrower encoding needs them; only the
        // header byte moves further, then gets its delta rewritten
        let succ_at = insert_at + opt_len;
        buf[succ_at] = buf[insert_at + shift];
        opt::set_delta(buf, succ_at, succ_delta_new);

        opt::encode(buf, insert_at, delta, value);
        self.bump(shift);
      },
    }

    self.num_opts += 1;
    Ok(())
  }

  /// Grow the PDU by `n` bytes, dragging the payload offset along.
  fn bump(&mut self, n: usize) {
    self.len += n;
    if let Some(ix) = self.payload_index {
      self.payload_index = Some(ix + n);
    }
  }

  /// Find where an option with this number belongs: the byte offset to
  /// encode at, the option number just before it (0 when first), and the
  /// option that will follow it (`None` when appending).
  ///
  /// The scan stops at the first option with a strictly greater number,
  /// which is what keeps equal-numbered options in insertion order.
  fn insert_position(&self, number: OptNumber) -> (usize, OptNumber, Option<Succ>) {
    let opt_end = self.opt_end();

    // appending in ascending order is the common case and needs no scan
    if self.num_opts == 0 || number >= self.max_opt_number {
      return (opt_end, self.max_opt_number, None);
    }

    let buf = self.buf();
    let mut pos = HDR + self.tkl() as usize;
    let mut prev = OptNumber(0);
    let mut current = 0u32;

    while pos < opt_end {
      let raw = match opt::decode(buf, pos, opt_end) {
        | Ok(raw) => raw,
        // the option region of a built PDU is always well-formed
        | Err(_) => break,
      };

      current += raw.delta;
      if current > number.0 as u32 {
        return (pos,
                prev,
                Some(Succ { number: current as u16,
                            ext_old: opt::ext_width(raw.delta as u16) }));
      }

      prev = OptNumber(current as u16);
      pos += raw.total();
    }

    (pos, prev, None)
  }
}

#[cfg(test)]
mod tests {
  use super::super::*;

  fn con_changed() -> Pdu<'static> {
    let mut pdu = Pdu::new();
    pdu.set_ver(Version(1)).unwrap();
    pdu.set_ty(Type::Con);
    pdu.set_code(Code::CHANGED);
    pdu
  }

  #[test]
  fn append_in_order() {
    let mut pdu = con_changed();
    pdu.add_opt(OptNumber(11), &[0x55, 0x55, 0x55]).unwrap();
    pdu.add_opt(OptNumber(11), &[0xFF, 0xFF, 0xFF]).unwrap();

    assert_eq!(pdu.as_bytes(),
               &[0x40, 0x44, 0x00, 0x00, 0xB3, 0x55, 0x55, 0x55, 0x03, 0xFF, 0xFF, 0xFF]);
    assert_eq!(pdu.num_opts(), 2);
  }

  #[test]
  fn insert_at_front_rewrites_successor_delta() {
    let mut pdu = con_changed();
    pdu.add_opt(OptNumber(11), &[0x55, 0x55, 0x55]).unwrap();
    pdu.add_opt(OptNumber(11), &[0xFF, 0xFF, 0xFF]).unwrap();
    pdu.add_opt(OptNumber(7), &[0xF7, 0xF7, 0xF7]).unwrap();

    assert_eq!(pdu.as_bytes(),
               &[0x40, 0x44, 0x00, 0x00, 0x73, 0xF7, 0xF7, 0xF7, 0x43, 0x55, 0x55, 0x55, 0x03,
                 0xFF, 0xFF, 0xFF]);
  }

  #[test]
  fn insert_across_width_boundary() {
    let mut pdu = con_changed();
    pdu.add_opt(OptNumber(11), &[0x55, 0x55, 0x55]).unwrap();
    pdu.add_opt(OptNumber(11), &[0xFF, 0xFF, 0xFF]).unwrap();
    pdu.add_opt(OptNumber(7), &[0xF7, 0xF7, 0xF7]).unwrap();

    // appended with an extended delta (189 from 11)
    pdu.add_opt(OptNumber(200), &[0x01, 0x02, 0x03]).unwrap();
    // inserted before it, shrinking its delta to a bare nibble (10)
    pdu.add_opt(OptNumber(190), &[0x03, 0x02, 0x01]).unwrap();
    // and appended after everything again
    pdu.add_opt(OptNumber(300), &[0x01, 0x02, 0x03]).unwrap();

    assert_eq!(pdu.as_bytes(),
               &[0x40, 0x44, 0x00, 0x00, 0x73, 0xF7, 0xF7, 0xF7, 0x43, 0x55, 0x55, 0x55, 0x03,
                 0xFF, 0xFF, 0xFF, 0xD3, 0xA6, 0x03, 0x02, 0x01, 0xA3, 0x01, 0x02, 0x03, 0xD3,
                 0x57, 0x01, 0x02, 0x03]);
    assert_eq!(pdu.num_opts(), 6);
  }

  #[test]
  fn equal_numbers_keep_insertion_order() {
    let mut pdu = con_changed();
    pdu.add_opt(OptNumber(15), b"first").unwrap();
    pdu.add_opt(OptNumber(4), b"etag").unwrap();
    pdu.add_opt(OptNumber(15), b"second").unwrap();
    pdu.add_opt(OptNumber(15), b"third").unwrap();

    let values = pdu.opts()
                    .filter(|o| o.number == OptNumber(15))
                    .map(|o| o.value.to_vec())
                    .collect::<Vec<_>>();
    assert_eq!(values, vec![b"first".to_vec(), b"second".to_vec(), b"third".to_vec()]);
  }

  #[test]
  fn inserts_land_before_the_payload() {
    let mut pdu = con_changed();
    pdu.add_opt(OptNumber(11), b"a").unwrap();
    pdu.set_payload(&[0xDE, 0xAD]).unwrap();

    // both a tail append and a front insert must stay inside the option
    // region
    pdu.add_opt(OptNumber(60), &[1]).unwrap();
    pdu.add_opt(OptNumber(1), &[2]).unwrap();

    assert_eq!(pdu.payload(), Some(&[0xDE, 0xAD][..]));
    let numbers = pdu.opts().map(|o| o.number.0).collect::<Vec<_>>();
    assert_eq!(numbers, vec![1, 11, 60]);

    let bytes = pdu.as_bytes();
    let marker = bytes.iter().position(|b| *b == 0xFF).unwrap();
    assert_eq!(&bytes[marker..], &[0xFF, 0xDE, 0xAD]);
  }

  #[test]
  fn delta_width_boundaries_encode_minimally() {
    for number in [12u16, 13, 268, 269, 0, u16::MAX] {
      let mut pdu = con_changed();
      pdu.add_opt(OptNumber(number), b"x").unwrap();

      let opt = pdu.opts().next().unwrap();
      assert_eq!(opt.number, OptNumber(number));
      assert_eq!(opt.delta, OptDelta(number));
      // header byte + minimal extension + value
      assert_eq!(opt.bytes.len(),
                 1 + match number {
                   | n if n >= 269 => 2,
                   | n if n >= 13 => 1,
                   | _ => 0,
                 } + 1);
    }
  }

  #[test]
  fn value_width_boundaries_encode_minimally() {
    for vlen in [0usize, 12, 13, 268, 269] {
      let mut pdu = con_changed();
      pdu.add_opt(OptNumber(1), &vec![0xAB; vlen]).unwrap();

      let opt = pdu.opts().next().unwrap();
      assert_eq!(opt.value.len(), vlen);
      assert_eq!(opt.bytes.len(),
                 1 + match vlen {
                   | n if n >= 269 => 2,
                   | n if n >= 13 => 1,
                   | _ => 0,
                 } + vlen);
    }
  }

  #[test]
  fn borrowed_full_by_one_byte() {
    // header (4) + option header (1) + 3 value bytes fills 8 exactly
    let mut buf = [0u8; 8];
    let mut pdu = Pdu::new_in(&mut buf).unwrap();
    pdu.add_opt(OptNumber(1), &[1, 2, 3]).unwrap();

    // a 1-byte option would need a 9th byte
    assert_eq!(pdu.add_opt(OptNumber(2), &[]), Err(BuildError::BufferFull));
    // nothing changed
    assert_eq!(pdu.num_opts(), 1);
    assert_eq!(pdu.len(), 8);
  }

  #[test]
  fn huge_value_rejected() {
    let mut pdu = con_changed();
    let v = vec![0u8; u16::MAX as usize + 1];
    assert_eq!(pdu.add_opt(OptNumber(1), &v),
               Err(BuildError::InvalidArgument));
  }
}

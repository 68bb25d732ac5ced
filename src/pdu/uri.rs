use super::opt::known::repeat::{PATH, QUERY};
use super::{BuildError, Pdu};

impl Pdu<'_> {
  /// Parse a resource URI into Uri-Path and Uri-Query options.
  ///
  /// Accepts `[/]seg(/seg)*(?k=v(&k=v)*)?`, with no scheme, authority or
  /// port.  `/a/b/c?x=1&y=2` becomes three Uri-Path options `a` `b` `c`
  /// and two Uri-Query options `x=1` `y=2`.  A one-character URI
  /// (including a bare `/`) is stored as a single Uri-Path option of that
  /// byte.
  ///
  /// Splitting is best-effort: empty segments are skipped and nothing
  /// checks URL syntax; deciding what a path means is the server layer's
  /// job.  Only an empty string fails, with
  /// [`BuildError::InvalidArgument`].
  pub fn set_uri(&mut self, uri: &str) -> Result<(), BuildError> {
    if uri.is_empty() {
      return Err(BuildError::InvalidArgument);
    }

    if uri.len() == 1 {
      return self.add_opt(PATH, uri.as_bytes());
    }

    let (path, query) = match uri.split_once('?') {
      | Some((path, query)) => (path, Some(query)),
      | None => (uri, None),
    };

    for seg in path.split('/').filter(|seg| !seg.is_empty()) {
      self.add_opt(PATH, seg.as_bytes())?;
    }

    if let Some(query) = query {
      for kv in query.split('&').filter(|kv| !kv.is_empty()) {
        self.add_opt(QUERY, kv.as_bytes())?;
      }
    }

    Ok(())
  }

  /// Shorthand for appending one Uri-Query option.
  pub fn add_uri_query(&mut self, query: &str) -> Result<(), BuildError> {
    self.add_opt(QUERY, query.as_bytes())
  }

  /// Reassemble the resource URI from the Uri-Path and Uri-Query options
  /// into `dst`, returning how many bytes were written.
  ///
  /// Paths come out as `/seg/seg`, queries as `?k=v&k=v`.  A PDU with
  /// neither writes nothing and returns 0.  Fails with
  /// [`BuildError::BufferFull`] when `dst` cannot hold the result.
  ///
  /// ```
  /// use toad_pdu::Pdu;
  ///
  /// let mut pdu = Pdu::new();
  /// pdu.set_uri("/sensors/temp?unit=c").unwrap();
  ///
  /// let mut dst = [0u8; 64];
  /// let n = pdu.uri(&mut dst).unwrap();
  /// assert_eq!(&dst[..n], b"/sensors/temp?unit=c");
  /// ```
  pub fn uri(&self, dst: &mut [u8]) -> Result<usize, BuildError> {
    let mut at = 0;
    let mut seen_query = false;

    for opt in self.opts() {
      let sep = match opt.number {
        | PATH => b'/',
        | QUERY if seen_query => b'&',
        | QUERY => {
          seen_query = true;
          b'?'
        },
        | _ => continue,
      };

      // a lone "/" is how a one-character set_uri("/") is stored; it *is*
      // the whole path
      if sep == b'/' && opt.value == b"/" {
        if dst.is_empty() {
          return Err(BuildError::BufferFull);
        }
        dst[0] = b'/';
        return Ok(1);
      }

      let need = 1 + opt.value.len();
      if at + need > dst.len() {
        return Err(BuildError::BufferFull);
      }

      dst[at] = sep;
      dst[at + 1..at + need].copy_from_slice(opt.value);
      at += need;
    }

    Ok(at)
  }
}

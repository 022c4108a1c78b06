//! Filter strategy deciding which completed objects are kept.

use crate::kind::KindMask;
use crate::object::DerObject;

/// Per-object decision returned by a [`PemFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    /// Drop this object and keep parsing.
    Reject,
    /// Keep this object and keep parsing.
    Accept,
    /// Keep this object and stop parsing, returning everything kept so far.
    AcceptAndStop,
}

/// Decides whether a completed object is kept, dropped, or ends the parse.
///
/// Invoked once per completed envelope, before the object becomes visible in
/// the collection. The object reference is only valid for the duration of
/// the call; on an accepting verdict ownership moves into the collection.
pub trait PemFilter {
    /// Judges one completed object.
    fn filter(&mut self, object: &DerObject) -> FilterVerdict;
}

impl<F> PemFilter for F
where
    F: FnMut(&DerObject) -> FilterVerdict,
{
    fn filter(&mut self, object: &DerObject) -> FilterVerdict {
        self(object)
    }
}

/// Built-in filter accepting objects whose kind is in a [`KindMask`].
#[derive(Debug, Clone, Copy)]
pub struct KindMaskFilter {
    mask: KindMask,
}

impl KindMaskFilter {
    /// Accepts exactly the kinds present in `mask`.
    pub fn new(mask: impl Into<KindMask>) -> Self {
        Self { mask: mask.into() }
    }
}

impl PemFilter for KindMaskFilter {
    fn filter(&mut self, object: &DerObject) -> FilterVerdict {
        if self.mask.contains(object.kind()) {
            FilterVerdict::Accept
        } else {
            FilterVerdict::Reject
        }
    }
}

/// Filter that accepts every object.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PemFilter for AcceptAll {
    fn filter(&mut self, _object: &DerObject) -> FilterVerdict {
        FilterVerdict::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ObjectKind;

    fn certificate() -> DerObject {
        let mut obj = DerObject::empty(ObjectKind::Certificate);
        obj.append(&[1, 2, 3]).unwrap();
        obj
    }

    #[test]
    fn test_kind_mask_filter() {
        let mut filter = KindMaskFilter::new(ObjectKind::Certificate | ObjectKind::PrivateKey);
        assert_eq!(filter.filter(&certificate()), FilterVerdict::Accept);

        let mut reject_certs = KindMaskFilter::new(ObjectKind::RsaPrivateKey);
        assert_eq!(reject_certs.filter(&certificate()), FilterVerdict::Reject);
    }

    #[test]
    fn test_closure_filter() {
        let mut seen = 0usize;
        let mut filter = |obj: &DerObject| {
            seen += 1;
            if obj.len() > 2 {
                FilterVerdict::Accept
            } else {
                FilterVerdict::Reject
            }
        };
        assert_eq!(filter.filter(&certificate()), FilterVerdict::Accept);
        drop(filter);
        assert_eq!(seen, 1);
    }
}

//! A single decoded binary object.

use crate::errors::PemError;
use crate::kind::ObjectKind;

/// Growth step for an object's payload buffer, in bytes.
pub(crate) const DER_INCREMENT: usize = 1024;

/// One DER-encoded object extracted from a PEM source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerObject {
    kind: ObjectKind,
    der: Vec<u8>,
}

impl DerObject {
    /// Creates an empty object of the given kind; no storage is allocated
    /// until the first body line is appended.
    pub(crate) fn empty(kind: ObjectKind) -> Self {
        Self {
            kind,
            der: Vec::new(),
        }
    }

    /// The declared kind from the begin marker.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The decoded DER bytes.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Decoded length in bytes.
    pub fn len(&self) -> usize {
        self.der.len()
    }

    /// Whether no body bytes have been decoded.
    pub fn is_empty(&self) -> bool {
        self.der.is_empty()
    }

    /// Consumes the object, returning the decoded bytes.
    pub fn into_der(self) -> Vec<u8> {
        self.der
    }

    /// Appends a decoded chunk, growing the buffer in fixed increments.
    pub(crate) fn append(&mut self, chunk: &[u8]) -> Result<(), PemError> {
        while self.der.len() + chunk.len() > self.der.capacity() {
            let grown = self.der.capacity() + DER_INCREMENT;
            self.der.try_reserve_exact(grown - self.der.len())?;
        }
        self.der.extend_from_slice(chunk);
        Ok(())
    }
}

impl AsRef<[u8]> for DerObject {
    fn as_ref(&self) -> &[u8] {
        &self.der
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_accumulates_in_order() {
        let mut obj = DerObject::empty(ObjectKind::Certificate);
        obj.append(&[1, 2, 3]).unwrap();
        obj.append(&[4, 5]).unwrap();
        assert_eq!(obj.der(), &[1, 2, 3, 4, 5]);
        assert_eq!(obj.len(), 5);
    }

    #[test]
    fn test_append_grows_past_one_increment() {
        let mut obj = DerObject::empty(ObjectKind::PrivateKey);
        let chunk = [0xabu8; 48];
        // Enough 48-byte chunks to cross the first growth step twice over.
        for _ in 0..48 {
            obj.append(&chunk).unwrap();
        }
        assert_eq!(obj.len(), 48 * 48);
        assert!(obj.der().iter().all(|&b| b == 0xab));
        assert!(obj.der.capacity() >= obj.len());
    }

    #[test]
    fn test_empty_object() {
        let obj = DerObject::empty(ObjectKind::RsaPrivateKey);
        assert!(obj.is_empty());
        assert_eq!(obj.kind(), ObjectKind::RsaPrivateKey);
    }
}

use digest::Digest;

// DER-encoded AlgorithmIdentifier prefixes from RFC 8017 §9.2, note 1
const ASN1_SHA1: &[u8] = &[
    0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14,
];
const ASN1_SHA256: &[u8] = &[
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];
const ASN1_SHA512: &[u8] = &[
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
    0x05, 0x00, 0x04, 0x40,
];

/// A hash algorithm a signer may have used, and the message fed to it.
#[derive(Clone)]
pub enum Digestable {
    Sha1(sha1::Sha1),
    Sha256(sha2::Sha256),
    Sha512(sha2::Sha512),
}

impl Digestable {
    pub fn sha1() -> Digestable {
        Digestable::Sha1(sha1::Sha1::new())
    }

    pub fn sha256() -> Digestable {
        Digestable::Sha256(sha2::Sha256::new())
    }

    pub fn sha512() -> Digestable {
        Digestable::Sha512(sha2::Sha512::new())
    }

    pub fn process(&mut self, data: &[u8]) {
        use self::Digestable::*;
        match self {
            Sha1(x) => x.update(data),
            Sha256(x) => x.update(data),
            Sha512(x) => x.update(data),
        }
    }

    pub fn hash(self) -> Vec<u8> {
        use self::Digestable::*;
        match self {
            Sha1(x) => x.finalize().to_vec(),
            Sha256(x) => x.finalize().to_vec(),
            Sha512(x) => x.finalize().to_vec(),
        }
    }

    /// The DER DigestInfo for the processed message: encoded algorithm
    /// identifier, then the hash. This is the `msg_digest_info` argument
    /// the verification functions expect.
    pub fn digest_info(self) -> Vec<u8> {
        let prefix = match &self {
            Digestable::Sha1(_) => ASN1_SHA1,
            Digestable::Sha256(_) => ASN1_SHA256,
            Digestable::Sha512(_) => ASN1_SHA512,
        };
        let hash = self.hash();
        let mut info = Vec::with_capacity(prefix.len() + hash.len());
        info.extend_from_slice(prefix);
        info.extend_from_slice(&hash);
        info
    }
}

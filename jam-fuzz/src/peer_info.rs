//! `PeerInfo`: the fuzzer handshake payload (§4.5, scenario S4).

use jam_codec::{blob, fixed};

use crate::error::Result;

/// `u8 fuzzVersion ++ u32 fuzzFeatures(LE) ++ 3xu8 jamVersion ++`
/// `3xu8 appVersion ++ var{appName}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerInfo {
    pub fuzz_version: u8,
    pub fuzz_features: u32,
    pub jam_version: [u8; 3],
    pub app_version: [u8; 3],
    pub app_name: String,
}

impl PeerInfo {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = fixed::encode1(self.fuzz_version as u64).expect("u8 fits in 1 byte");
        out.extend(fixed::encode4(self.fuzz_features as u64).expect("u32 fits in 4 bytes"));
        out.extend(self.jam_version);
        out.extend(self.app_version);
        out.extend(blob::encode(self.app_name.as_bytes()));
        out
    }

    pub fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (fuzz_version, buf) = fixed::decode1(buf)?;
        let (fuzz_features, buf) = fixed::decode4(buf)?;
        let (jam_version, buf) = fixed::decode_bytes::<3>(buf)?;
        let (app_version, buf) = fixed::decode_bytes::<3>(buf)?;
        let (app_name, buf) = blob::decode(buf)?;
        let app_name = String::from_utf8(app_name)
            .map_err(|_| crate::error::Error::ShapeMismatch("app name is not valid utf-8"))?;
        Ok((
            PeerInfo {
                fuzz_version: fuzz_version as u8,
                fuzz_features: fuzz_features as u32,
                jam_version,
                app_version,
                app_name,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario S4: `{fuzz_version:1, fuzz_features:2, jam_version:0.7.0,
    /// app_version:0.1.25, app_name:"fuzzer"}` encodes to
    /// `01 02000000 000700 000119 06 66 75 7A 7A 65 72`.
    #[test]
    fn golden_vector_s4() {
        let value = PeerInfo {
            fuzz_version: 1,
            fuzz_features: 2,
            jam_version: [0, 7, 0],
            app_version: [0, 1, 25],
            app_name: "fuzzer".to_string(),
        };
        let encoded = value.encode();
        let expected = hex::decode("01020000000007000001190666757A7A6572").unwrap();
        assert_eq!(encoded, expected);

        let (decoded, rest) = PeerInfo::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn rejects_invalid_utf8_app_name() {
        let mut buf = fixed::encode1(0).unwrap();
        buf.extend(fixed::encode4(0).unwrap());
        buf.extend([0u8; 3]);
        buf.extend([0u8; 3]);
        buf.extend(blob::encode(&[0xFF, 0xFE]));
        assert!(PeerInfo::decode(&buf).is_err());
    }
}

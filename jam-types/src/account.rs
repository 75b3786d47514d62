//! Service account codecs (§4.2 "Service account").
//!
//! Two incompatible wire forms exist; callers pick the one they need.
//! [`ServiceAccount`] is the state-trie form (chapter 255, optional
//! version byte). [`HostFunctionAccount`] is the 96-byte form host
//! functions exchange and never carries the version byte.

use jam_codec::{fixed, Codec};
use jam_crypto::Hash32;

use crate::config::{AccountDiscriminatorByte, Config};
use crate::error::Result;

/// State-trie service account (88 bytes, or 89 with the JAM >= 0.7.1
/// leading zero-discriminator byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceAccount {
    pub code_hash: Hash32,
    pub balance: u64,
    pub min_acc_gas: u64,
    pub min_memo_gas: u64,
    pub octets: u64,
    pub gratis: u64,
    pub items: u32,
    pub created: u32,
    pub last_acc: u32,
    pub parent: u32,
}

impl ServiceAccount {
    pub fn encode(&self, config: &Config) -> Vec<u8> {
        let mut out = Vec::with_capacity(89);
        if config.account_discriminator_byte == AccountDiscriminatorByte::Present {
            out.push(0x00);
        }
        out.extend(self.code_hash.encode());
        for field in [
            self.balance,
            self.min_acc_gas,
            self.min_memo_gas,
            self.octets,
            self.gratis,
        ] {
            out.extend(fixed::encode8(field).expect("u64 always fits in 8 bytes"));
        }
        for field in [self.items, self.created, self.last_acc, self.parent] {
            out.extend(fixed::encode4(field as u64).expect("u32 fits in 4 bytes"));
        }
        out
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let buf = if config.account_discriminator_byte == AccountDiscriminatorByte::Present {
            jam_codec::error::require(buf, 1)?;
            &buf[1..]
        } else {
            buf
        };

        let (code_hash, buf) = Hash32::decode(buf)?;
        let (balance, buf) = fixed::decode8(buf)?;
        let (min_acc_gas, buf) = fixed::decode8(buf)?;
        let (min_memo_gas, buf) = fixed::decode8(buf)?;
        let (octets, buf) = fixed::decode8(buf)?;
        let (gratis, buf) = fixed::decode8(buf)?;
        let (items, buf) = fixed::decode4(buf)?;
        let (created, buf) = fixed::decode4(buf)?;
        let (last_acc, buf) = fixed::decode4(buf)?;
        let (parent, buf) = fixed::decode4(buf)?;

        Ok((
            ServiceAccount {
                code_hash,
                balance,
                min_acc_gas,
                min_memo_gas,
                octets,
                gratis,
                items: items as u32,
                created: created as u32,
                last_acc: last_acc as u32,
                parent: parent as u32,
            },
            buf,
        ))
    }
}

/// Host-function exchange form (96 bytes, never version-prefixed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostFunctionAccount {
    pub code_hash: Hash32,
    pub balance: u64,
    pub min_balance: u64,
    pub min_acc_gas: u64,
    pub min_memo_gas: u64,
    pub octets: u64,
    pub items: u32,
    pub gratis: u64,
    pub created: u32,
    pub last_acc: u32,
    pub parent: u32,
}

impl Codec for HostFunctionAccount {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(96);
        out.extend(self.code_hash.encode());
        for field in [
            self.balance,
            self.min_balance,
            self.min_acc_gas,
            self.min_memo_gas,
            self.octets,
        ] {
            out.extend(fixed::encode8(field).expect("u64 always fits in 8 bytes"));
        }
        out.extend(fixed::encode4(self.items as u64).expect("u32 fits in 4 bytes"));
        out.extend(fixed::encode8(self.gratis).expect("u64 always fits in 8 bytes"));
        for field in [self.created, self.last_acc, self.parent] {
            out.extend(fixed::encode4(field as u64).expect("u32 fits in 4 bytes"));
        }
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (code_hash, buf) = Hash32::decode(buf)?;
        let (balance, buf) = fixed::decode8(buf)?;
        let (min_balance, buf) = fixed::decode8(buf)?;
        let (min_acc_gas, buf) = fixed::decode8(buf)?;
        let (min_memo_gas, buf) = fixed::decode8(buf)?;
        let (octets, buf) = fixed::decode8(buf)?;
        let (items, buf) = fixed::decode4(buf)?;
        let (gratis, buf) = fixed::decode8(buf)?;
        let (created, buf) = fixed::decode4(buf)?;
        let (last_acc, buf) = fixed::decode4(buf)?;
        let (parent, buf) = fixed::decode4(buf)?;
        Ok((
            HostFunctionAccount {
                code_hash,
                balance,
                min_balance,
                min_acc_gas,
                min_memo_gas,
                octets,
                items: items as u32,
                gratis,
                created: created as u32,
                last_acc: last_acc as u32,
                parent: parent as u32,
            },
            buf,
        ))
    }
}

//! Derivation path notation.
//!
//! A path is an ordered list of `(index, hardened)` children. Hardened
//! children are written with a trailing `'` (or `h`) and occupy the upper
//! half of the u32 index space on the wire, so a hardened index can never
//! collide with the non-hardened index of the same numeric value.

use std::fmt;
use std::str::FromStr;

use crate::error::VaultError;

/// Wire-encoding flag for hardened children.
pub const HARDENED_FLAG: u32 = 0x8000_0000;

/// One child step in a derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathChild {
    pub index: u32,
    pub hardened: bool,
}

impl PathChild {
    pub const fn hardened(index: u32) -> Self {
        Self { index, hardened: true }
    }

    pub const fn normal(index: u32) -> Self {
        Self { index, hardened: false }
    }

    /// The u32 actually fed into the HMAC: hardened children get the high
    /// bit set.
    pub fn wire_index(self) -> u32 {
        if self.hardened {
            self.index | HARDENED_FLAG
        } else {
            self.index
        }
    }
}

impl fmt::Display for PathChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// An ordered sequence of path children, e.g. `m/44'/60'/0'/0/0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivationPath {
    children: Vec<PathChild>,
}

impl DerivationPath {
    pub fn new(children: Vec<PathChild>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[PathChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for child in &self.children {
            write!(f, "/{child}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        if parts.next() != Some("m") {
            return Err(VaultError::InvalidPath(format!(
                "path must start with m/, got {s:?}"
            )));
        }

        let mut children = Vec::new();
        for part in parts {
            let (digits, hardened) = match part.strip_suffix('\'').or_else(|| part.strip_suffix('h')) {
                Some(digits) => (digits, true),
                None => (part, false),
            };

            let index: u32 = digits.parse().map_err(|_| {
                VaultError::InvalidPath(format!("invalid path component {part:?}"))
            })?;
            if index >= HARDENED_FLAG {
                return Err(VaultError::InvalidPath(format!(
                    "index {index} exceeds the hardened boundary"
                )));
            }
            children.push(PathChild { index, hardened });
        }

        Ok(Self { children })
    }
}

/// The fixed EVM leaf path, `m/44'/60'/0'/0/0`. Must match exactly for
/// interoperability with existing wallets.
pub fn evm_path() -> DerivationPath {
    DerivationPath::new(vec![
        PathChild::hardened(44),
        PathChild::hardened(60),
        PathChild::hardened(0),
        PathChild::normal(0),
        PathChild::normal(0),
    ])
}

/// The fixed Solana leaf path, `m/44'/501'/0'/0'` (hardened at every level).
pub fn solana_path() -> DerivationPath {
    DerivationPath::new(vec![
        PathChild::hardened(44),
        PathChild::hardened(501),
        PathChild::hardened(0),
        PathChild::hardened(0),
    ])
}

//! Chain selection.
//!
//! A backup is tied to the blockchain whose wallet keys sealed it. The
//! selected chain feeds domain separation into key derivation, so a blob
//! sealed for one chain never opens under another even with the right
//! private key.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Chains with a supported decryption capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    /// EOS wallet keys
    Eos,
    /// Ethereum wallet keys
    Ethereum,
    /// Algorand wallet keys
    Algorand,
}

impl Chain {
    /// Domain-separation label mixed into blob key derivation.
    pub fn label(self) -> &'static [u8] {
        match self {
            Self::Eos => b"husk-eos-v1",
            Self::Ethereum => b"husk-ethereum-v1",
            Self::Algorand => b"husk-algorand-v1",
        }
    }

    /// Lowercase chain name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eos => "eos",
            Self::Ethereum => "ethereum",
            Self::Algorand => "algorand",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a chain name with no decryption capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid chain argument: {name}")]
pub struct UnknownChain {
    /// The unrecognized chain name as given
    pub name: String,
}

impl FromStr for Chain {
    type Err = UnknownChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eos" => Ok(Self::Eos),
            "ethereum" => Ok(Self::Ethereum),
            "algorand" => Ok(Self::Algorand),
            other => Err(UnknownChain { name: other.to_string() }),
        }
    }
}

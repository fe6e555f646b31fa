// src/lib.rs - Main library file for cuckoo-verify
// Tree location: ./src/lib.rs

//! Cuckoo Cycle proof-of-work solution verifier.
//!
//! Decides whether a claimed list of edge indices forms a simple cycle of
//! the required length inside a pseudorandom bipartite graph derived from a
//! header. The header is hashed with BLAKE2b-256 into 256 bits of key
//! material; each edge index maps through keyed SipHash-2-4 to one node on
//! each side of the graph; the verifier reconstructs all endpoints, checks
//! strict ascending order and bounds, and walks the implied cycle.
//!
//! Solving (cycle search) is out of scope: this crate only validates proofs
//! produced elsewhere, and reports every rejection as one verdict from a
//! closed set that callers can rely on byte-for-byte.
//!
//! ```
//! use cuckoo_verify::{Config, Verdict};
//!
//! // Default Grin-style parameters: edge_bits 30, 42-cycles.
//! let verifier = Config::default().verifier::<u32>().unwrap();
//!
//! // An all-zero proof is not strictly ascending.
//! let proof = vec![0u32; 42];
//! let verdict = verifier.verify_header(b"some block header", &proof);
//! assert_eq!(verdict, Verdict::TooSmall);
//! assert!(!verdict.is_valid());
//! ```

#![warn(missing_docs)]

/// Configuration module for verifier settings
pub mod config;
/// Cuckoo Cycle graph parameters, hashing, and verification
pub mod cuckoo;

// Re-export main types for convenience
pub use config::Config;
pub use cuckoo::keys::{KeyMode, SipKeys};
pub use cuckoo::siphash::SipHasher;
pub use cuckoo::verify::{Verdict, Verifier};
pub use cuckoo::{
    CuckooParams, EdgeType, ParamsError, DEFAULT_EDGE_BITS, DEFAULT_PROOF_SIZE, MIN_PROOF_SIZE,
};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Library name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

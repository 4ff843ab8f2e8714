//! Snippet source pipeline.
//!
//! Every submission passes through `validate` then `normalize` before it is
//! stored, and every render goes through `build_manifest`. All three are
//! synchronous, pure functions over text.
//!
//! # Structure
//!
//! - `patterns` - Compiled pattern tables shared by the stages
//! - `validator` - Structural acceptance check and sensitive-API scan
//! - `normalizer` - Truncation repair and default-export completion
//! - `manifest` - Sandbox runtime manifest assembly

mod manifest;
mod normalizer;
mod patterns;
mod validator;

pub use manifest::{
    BOOTSTRAP_FILE, DisplayFlags, ENTRY_FILE, Layout, ManifestOptions, SandboxManifest,
    VirtualFile, build_manifest, build_public_manifest,
};
pub use normalizer::{
    EntrySource, EntrySymbol, FALLBACK_ENTRY_SYMBOL, NormalizedSource, infer_entry_symbol,
    normalize, normalize_detailed,
};
pub use validator::{
    MAX_BRACE_IMBALANCE, RejectReason, SensitivePattern, ValidationReport, Verdict, validate,
};

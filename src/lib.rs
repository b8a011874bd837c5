//! DirectStorage [`HRESULT`]s missing from the generated bindings.
//!
//! DirectStorage reports failures as `E_DSTORAGE_*` codes under [`FACILITY_GAME`].
//! Their names and values are published in `dstorageerr.h`, but not in the metadata most
//! bindings are generated from, leaving callers to compare against bare integers.
//!
//! ```
//! use dstorage_errors::*;
//!
//! assert_eq!(E_DSTORAGE_END_OF_FILE, -1994129401);
//! assert_eq!(lookup("E_DSTORAGE_END_OF_FILE"), Some(E_DSTORAGE_END_OF_FILE));
//! assert_eq!(reverse_lookup(E_DSTORAGE_END_OF_FILE), Some("E_DSTORAGE_END_OF_FILE"));
//! assert_eq!(classify(E_DSTORAGE_END_OF_FILE), Severity::Failure);
//!
//! let hr = E_DSTORAGE_ACCESS_VIOLATION; // e.g. from DSTORAGE_ERROR_RECORD::FirstFailure.HResult
//! let err = Error::check_hr("IDStorageQueue::Submit", hr, "").unwrap_err();
//! assert_eq!(err.to_string(), "IDStorageQueue::Submit failed with HRESULT == 0x89240009 E_DSTORAGE_ACCESS_VIOLATION: The destination buffer for the DirectStorage request is not accessible.");
//! ```

#![deny(unreachable_patterns)]

#[path = "dstorage/_dstorage.rs"] pub mod dstorage;
mod error;                          pub use error::*;
pub mod hresult;
#[path = "windows/_windows.rs"  ] pub mod windows;

#[doc(no_inline)] pub use dstorage::*;
#[doc(no_inline)] pub use hresult::*;

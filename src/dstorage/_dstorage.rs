//! DirectStorage's facility code and `E_DSTORAGE_*` error codes.
//!
//! These live in `dstorageerr.h` and are [documented](https://docs.microsoft.com/en-us/windows/win32/dstorage/dstorage-constants),
//! but are missing from the metadata DirectStorage bindings are usually generated from.
//!
//! ### See Also
//! * [DirectStorage](https://github.com/microsoft/DirectStorage)

mod errors;                     pub use errors::*;
mod table;                      pub use table::*;

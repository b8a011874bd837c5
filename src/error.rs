use crate::dstorage::{self, Category, Constant, FACILITY_GAME};
use crate::hresult::*;

use std::fmt::{self, Display, Formatter};



/// A failed [`HRESULT`], as returned by some DirectStorage method.
///
/// [`Display`] includes the `E_DSTORAGE_*` name and description of the code, when it's one this crate knows about.
///
/// ### See Also
/// * [DirectStorage constants](https://docs.microsoft.com/en-us/windows/win32/dstorage/dstorage-constants)
/// * [hresult.info](https://www.hresult.info/)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub(crate) method:  &'static str,
    pub(crate) hr:      HRESULT,
    pub(crate) note:    &'static str,
}

impl Error {
    pub fn method(&self) -> &'static str { self.method }
    pub fn as_u32(&self) -> u32 { self.hr as _ }
    pub fn as_hresult(&self) -> HRESULT { self.hr }
    pub fn as_decomposed_hresult(&self) -> DecomposedHResult { DecomposedHResult::from(self.hr) }

    /// The `E_DSTORAGE_*` constant matching this error, if any.
    pub fn constant(&self) -> Option<&'static Constant> {
        dstorage::by_value(self.hr).filter(|c| c.category() == Category::HResult)
    }

    /// `true` if this error was reported under `FACILITY_GAME`, even if it's not a code this crate knows about.
    pub fn is_dstorage(&self) -> bool { HRESULT_FACILITY(self.hr) == FACILITY_GAME }
}

impl Error {
    /// `Ok(())` if `hr` [`SUCCEEDED`], otherwise an [`Error`] blaming `method`.
    ///
    /// ```
    /// # use dstorage_errors::*;
    /// assert!(Error::check_hr("IDStorageQueue::Submit", S_OK, "").is_ok());
    /// let err = Error::check_hr("IDStorageQueue::Submit", E_DSTORAGE_QUEUE_CLOSED, "").unwrap_err();
    /// assert_eq!(err.as_hresult(), E_DSTORAGE_QUEUE_CLOSED);
    /// ```
    pub fn check_hr(method: &'static str, hr: HRESULT, note: &'static str) -> Result<(), Self> {
        if SUCCEEDED(hr) {
            Ok(())
        } else {
            Err(Self::new(method, hr, note))
        }
    }

    pub fn new(method: &'static str, hr: HRESULT, note: &'static str) -> Self {
        Self { method, hr, note }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} failed with HRESULT == 0x{:08x}", self.method, self.hr)?;
        if let Some(c) = self.constant()    { write!(fmt, " {}: {}", c.name(), c.message())?; }
        if !self.note.is_empty()            { write!(fmt, " ({})", self.note)?; }
        Ok(())
    }
}

impl std::error::Error for Error {}



#[test] fn check_hr() {
    assert_eq!(Error::check_hr("DStorageGetFactory", S_OK,    ""), Ok(()));
    assert_eq!(Error::check_hr("DStorageGetFactory", S_FALSE, ""), Ok(()));

    let err = Error::check_hr("DStorageGetFactory", dstorage::E_DSTORAGE_SYSTEM_NOT_SUPPORTED, "").unwrap_err();
    assert_eq!(err.method(), "DStorageGetFactory");
    assert_eq!(err.as_hresult(), -1994129379);
    assert_eq!(err.as_u32(), 0x8924_001D);
    assert!(err.is_dstorage());
    assert_eq!(err.constant().map(|c| c.name()), Some("E_DSTORAGE_SYSTEM_NOT_SUPPORTED"));

    let d = err.as_decomposed_hresult();
    assert_eq!(d.severity, Severity::Failure);
    assert_eq!(d.facility as HRESULT, FACILITY_GAME);
    assert_eq!(d.code, 0x1D);
}

#[test] fn display() {
    let err = Error::new("IDStorageFactory::OpenFile", dstorage::E_DSTORAGE_UNSUPPORTED_VOLUME, "");
    assert_eq!(err.to_string(), "IDStorageFactory::OpenFile failed with HRESULT == 0x89240005 E_DSTORAGE_UNSUPPORTED_VOLUME: The specified XVD is not on a supported volume.");

    let err = Error::new("IDStorageFactory::OpenFile", MAKE_HRESULT(1, 7, 2), "data.bin");
    assert_eq!(err.to_string(), "IDStorageFactory::OpenFile failed with HRESULT == 0x80070002 (data.bin)");
    assert!(err.constant().is_none());
    assert!(!err.is_dstorage());

    // Unassigned code under FACILITY_GAME
    let err = Error::new("IDStorageQueue::Submit", MAKE_HRESULT(1, FACILITY_GAME, 0x06), "");
    assert_eq!(err.to_string(), "IDStorageQueue::Submit failed with HRESULT == 0x89240006");
    assert!(err.is_dstorage());
}

#[test] fn facility_is_not_an_error_constant() {
    // A successful HRESULT that happens to equal FACILITY_GAME shouldn't be reported as it
    assert!(Error::new("x", FACILITY_GAME, "").constant().is_none());
}

#[test] fn propagates() {
    fn submit(hr: HRESULT) -> Result<u32, Box<dyn std::error::Error>> {
        Error::check_hr("IDStorageQueue::Submit", hr, "")?;
        Ok(42)
    }
    assert_eq!(submit(S_OK).unwrap(), 42);
    assert!(submit(dstorage::E_DSTORAGE_IO_TIMEOUT).unwrap_err().to_string().contains("E_DSTORAGE_IO_TIMEOUT"));
}

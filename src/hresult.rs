//! [`HRESULT`] and the handful of `winerror.h` macros needed to build and pick apart one.
//!
//! These are reimplemented as `const fn`s instead of borrowed from `winapi`, so the
//! DirectStorage constants can be defined in terms of them and remain usable on every platform.
//!
//! ### See Also
//! * [Structure of COM Error Codes](https://docs.microsoft.com/en-us/windows/win32/com/structure-of-com-error-codes)
//! * [hresult.info](https://www.hresult.info/)

#![allow(non_snake_case)]



/// A 32-bit COM/Win32 status code.  Negative values are failures.
///
/// Identical to [`winapi::shared::winerror::HRESULT`](https://docs.rs/winapi/0.3/x86_64-pc-windows-msvc/winapi/shared/winerror/type.HRESULT.html).
pub type HRESULT = i32;

pub const S_OK      : HRESULT = 0;
pub const S_FALSE   : HRESULT = 1;

/// <code>[MAKE_HRESULT](https://docs.microsoft.com/en-us/windows/win32/api/winerror/nf-winerror-make_hresult)(sev, fac, code)</code>
pub const fn MAKE_HRESULT(sev: HRESULT, fac: HRESULT, code: HRESULT) -> HRESULT {
    (((sev as u32) << 31) | ((fac as u32) << 16) | (code as u32)) as HRESULT
}

/// <code>[SUCCEEDED](https://docs.microsoft.com/en-us/windows/win32/api/winerror/nf-winerror-succeeded)(hr)</code>
pub const fn SUCCEEDED(hr: HRESULT) -> bool { hr >= 0 }

/// <code>[FAILED](https://docs.microsoft.com/en-us/windows/win32/api/winerror/nf-winerror-failed)(hr)</code>
pub const fn FAILED(hr: HRESULT) -> bool { hr < 0 }

/// <code>[HRESULT_FACILITY](https://docs.microsoft.com/en-us/windows/win32/api/winerror/nf-winerror-hresult_facility)(hr)</code>
pub const fn HRESULT_FACILITY(hr: HRESULT) -> HRESULT { (hr >> 16) & 0x1fff }

/// <code>[HRESULT_CODE](https://docs.microsoft.com/en-us/windows/win32/api/winerror/nf-winerror-hresult_code)(hr)</code>
pub const fn HRESULT_CODE(hr: HRESULT) -> HRESULT { hr & 0xFFFF }

/// Classify `hr` by its sign bit.
pub const fn classify(hr: HRESULT) -> Severity {
    if SUCCEEDED(hr) { Severity::Success } else { Severity::Failure }
}



/// The sign bit of an [`HRESULT`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Success = 0,
    Failure = 1,
}

/// An [`HRESULT`], split into its bitfields.
///
/// ```text
///  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
///  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
/// +-+-+-+-------------------------+-------------------------------+
/// |S|R|C|        Facility         |              Code             |
/// +-+-+-+-------------------------+-------------------------------+
/// ```
///
/// The facility is 13 bits wide, matching `HRESULT_FACILITY`.
/// Several facilities (including `FACILITY_GAME`) don't fit in the 11 bits the docs describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecomposedHResult {
    pub severity:   Severity,
    pub reserved:   bool,
    pub customer:   bool,
    pub facility:   u16,
    pub code:       u16,
}

impl From<HRESULT> for DecomposedHResult {
    fn from(hresult: HRESULT) -> Self { Self {
        severity:   classify(hresult),
        reserved:   hresult & (1 << 30) != 0,
        customer:   hresult & (1 << 29) != 0,
        facility:   HRESULT_FACILITY(hresult) as u16,
        code:       HRESULT_CODE(hresult) as u16,
    }}
}

impl From<DecomposedHResult> for HRESULT {
    fn from(d: DecomposedHResult) -> Self {
        let flags = ((d.reserved as u32) << 30) | ((d.customer as u32) << 29);
        MAKE_HRESULT(d.severity as _, d.facility as _, d.code as _) | flags as HRESULT
    }
}



#[test] fn make_hresult() {
    assert_eq!(MAKE_HRESULT(0, 0, 0), S_OK);
    assert_eq!(MAKE_HRESULT(1, 7, 5) as u32, 0x8007_0005); // E_ACCESSDENIED
    assert_eq!(MAKE_HRESULT(1, 0x876, 2150) as u32, 0x8876_0866); // D3DERR_NOTFOUND
}

#[test] fn succeeded_failed() {
    for &hr in &[S_OK, S_FALSE, 0x7FFF_FFFF] {
        assert!(SUCCEEDED(hr));
        assert!(!FAILED(hr));
        assert_eq!(classify(hr), Severity::Success);
    }
    for &hr in &[-1, HRESULT::min_value(), MAKE_HRESULT(1, 7, 5)] {
        assert!(FAILED(hr));
        assert!(!SUCCEEDED(hr));
        assert_eq!(classify(hr), Severity::Failure);
    }
}

#[test] fn decompose() {
    let d = DecomposedHResult::from(MAKE_HRESULT(1, 0x924, 0x33));
    assert_eq!(d, DecomposedHResult { severity: Severity::Failure, reserved: false, customer: false, facility: 0x924, code: 0x33 });

    let d = DecomposedHResult::from(0x6000_0001u32 as HRESULT);
    assert_eq!(d.severity, Severity::Success);
    assert!(d.reserved);
    assert!(d.customer);
    assert_eq!(d.facility, 0);
    assert_eq!(d.code, 1);
    assert_eq!(HRESULT::from(d), 0x6000_0001);
}

//! Microsoft Windows related crates and interop

#![cfg(windows)]

pub use ::winapi;

use winapi::shared::winerror;



/// [`crate::HRESULT`] must stay the exact same type as `winapi`'s, so FFI results compare against the `E_DSTORAGE_*` table directly.
const _HRESULT_IS_WINAPI_HRESULT : fn(winerror::HRESULT) -> crate::HRESULT = |hr| hr;



#[test] fn winapi_agrees() {
    for c in crate::dstorage::constants() {
        let hr : winerror::HRESULT = c.value();
        assert_eq!(winerror::SUCCEEDED(hr), crate::SUCCEEDED(hr), "{:?}", c);
        assert_eq!(winerror::FAILED(hr),    crate::FAILED(hr),    "{:?}", c);
    }
    assert_eq!(winerror::E_ACCESSDENIED, crate::MAKE_HRESULT(1, 7, 5));
}

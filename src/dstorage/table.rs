use crate::hresult::HRESULT;
use super::errors::CONSTANTS;

use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};



/// What kind of value a [`Constant`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A facility code, used to build other [`HRESULT`]s (e.g. `FACILITY_GAME`.)
    Facility,
    /// A failure [`HRESULT`] (e.g. `E_DSTORAGE_END_OF_FILE`.)
    HResult,
}

/// A named DirectStorage constant, such as `E_DSTORAGE_ACCESS_VIOLATION`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    pub(super) name:        &'static str,
    pub(super) value:       HRESULT,
    pub(super) category:    Category,
    pub(super) message:     &'static str,
}

impl Constant {
    pub fn name(&self)      -> &'static str { self.name }
    pub fn value(&self)     -> HRESULT { self.value }
    pub fn category(&self)  -> Category { self.category }

    /// A short, human readable description of the condition.
    pub fn message(&self)   -> &'static str { self.message }
}

impl Debug for Constant {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} (0x{:08x})", self.name, self.value)
    }
}

impl Display for Constant {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name)
    }
}



lazy_static::lazy_static! {
    static ref BY_NAME  : HashMap<&'static str, &'static Constant> = CONSTANTS.iter().map(|c| (c.name,  c)).collect();
    static ref BY_VALUE : HashMap<HRESULT,      &'static Constant> = CONSTANTS.iter().map(|c| (c.value, c)).collect();
}

/// Every DirectStorage constant this crate knows about, `FACILITY_GAME` first.
pub fn constants() -> &'static [Constant] { CONSTANTS }

/// Get the value of a constant by name, e.g. `lookup("E_DSTORAGE_END_OF_FILE") == Some(E_DSTORAGE_END_OF_FILE)`.
///
/// Prefer referencing the constants directly where possible, which turns typos into compile errors.
pub fn lookup(name: &str) -> Option<HRESULT> { by_name(name).map(|c| c.value) }

/// Get the name of a constant by value, e.g. `reverse_lookup(E_DSTORAGE_END_OF_FILE) == Some("E_DSTORAGE_END_OF_FILE")`.
pub fn reverse_lookup(value: HRESULT) -> Option<&'static str> { by_value(value).map(|c| c.name) }

pub fn by_name(name: &str) -> Option<&'static Constant> { BY_NAME.get(name).copied() }

pub fn by_value(value: HRESULT) -> Option<&'static Constant> { BY_VALUE.get(&value).copied() }



#[cfg(test)] use super::*;

#[test] fn table_shape() {
    let all = constants();
    assert_eq!(all.len(), 47);
    assert_eq!(all[0].name(), "FACILITY_GAME");
    assert_eq!(all[0].category(), Category::Facility);
    assert!(all[1..].iter().all(|c| c.category() == Category::HResult));
    assert!(all.iter().all(|c| !c.message().is_empty()));
    assert!(all[0].value() > 0);
}

#[test] fn unique() {
    let all = constants();
    for (i, a) in all.iter().enumerate() {
        for b in all[i+1..].iter() {
            assert_ne!(a.name(),  b.name());
            assert_ne!(a.value(), b.value(), "{} and {} share a value", a, b);
        }
    }
    assert_eq!(BY_NAME.len(),  all.len());
    assert_eq!(BY_VALUE.len(), all.len());
}

#[test] fn lookups() {
    assert_eq!(lookup("FACILITY_GAME"),                 Some(FACILITY_GAME));
    assert_eq!(lookup("E_DSTORAGE_ACCESS_VIOLATION"),   Some(E_DSTORAGE_ACCESS_VIOLATION));
    assert_eq!(lookup("E_DSTORAGE_ZLIB_PARITY_FAIL"),   Some(-1994129357));
    assert_eq!(lookup("E_DSTORAGE_DOES_NOT_EXIST"),     None);
    assert_eq!(lookup("e_dstorage_access_violation"),   None);
    assert_eq!(lookup(""),                              None);

    assert_eq!(reverse_lookup(E_DSTORAGE_END_OF_FILE),  Some("E_DSTORAGE_END_OF_FILE"));
    assert_eq!(reverse_lookup(2340),                    Some("FACILITY_GAME"));
    assert_eq!(reverse_lookup(0),                       None);
    assert_eq!(reverse_lookup(-1994129402),             None); // code 0x06 is unassigned

    let c = by_value(E_DSTORAGE_QUEUE_CLOSED).unwrap();
    assert_eq!(c.name(), "E_DSTORAGE_QUEUE_CLOSED");
    assert_eq!(format!("{}", c), "E_DSTORAGE_QUEUE_CLOSED");
    assert_eq!(format!("{:?}", c), "E_DSTORAGE_QUEUE_CLOSED (0x89240010)");
    assert_eq!(by_name("E_DSTORAGE_QUEUE_CLOSED"), Some(c));
}

#[test] fn round_trip() {
    for c in constants() {
        let value = lookup(c.name()).unwrap();
        assert_eq!(reverse_lookup(value), Some(c.name()));
    }
}

#[test] fn concurrent_reads() {
    let threads = (0..8).map(|_| std::thread::spawn(|| {
        constants().iter().all(|c| lookup(c.name()) == Some(c.value()))
    })).collect::<Vec<_>>();
    for t in threads { assert!(t.join().unwrap()); }
}

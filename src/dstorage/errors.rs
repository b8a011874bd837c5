#![allow(non_snake_case)]

use crate::hresult::*;
use super::{Category, Constant};



/// The facility all `E_DSTORAGE_*` codes are reported under.
pub const FACILITY_GAME : HRESULT = 2340;

const fn MAKE_DSTORAGEHRESULT(code: HRESULT) -> HRESULT { MAKE_HRESULT(1, FACILITY_GAME, code) }

macro_rules! dstorage_errors {
    ( $( $name:ident = $code:literal => $message:literal, )* ) => {
        $(
            #[doc = $message]
            pub const $name : HRESULT = MAKE_DSTORAGEHRESULT($code);
        )*

        pub(super) static CONSTANTS : &[Constant] = &[
            Constant { name: "FACILITY_GAME", value: FACILITY_GAME, category: Category::Facility, message: "Facility code for DirectStorage (and other game) errors." },
            $( Constant { name: stringify!($name), value: $name, category: Category::HResult, message: $message }, )*
        ];
    };
}

dstorage_errors! {
    E_DSTORAGE_ALREADY_RUNNING                          = 0x01 => "DirectStorage is already running exclusively.",
    E_DSTORAGE_NOT_RUNNING                              = 0x02 => "DirectStorage is not running.",
    E_DSTORAGE_INVALID_QUEUE_CAPACITY                   = 0x03 => "Invalid queue capacity parameter.",
    E_DSTORAGE_XVD_DEVICE_NOT_SUPPORTED                 = 0x04 => "The specified XVD is not on a supported NVMe device or SATA device.",
    E_DSTORAGE_UNSUPPORTED_VOLUME                       = 0x05 => "The specified XVD is not on a supported volume.",
    E_DSTORAGE_END_OF_FILE                              = 0x07 => "The specified offset and length exceeds the size of the file.",
    E_DSTORAGE_REQUEST_TOO_LARGE                        = 0x08 => "The IO request is too large.",
    E_DSTORAGE_ACCESS_VIOLATION                         = 0x09 => "The destination buffer for the DirectStorage request is not accessible.",
    E_DSTORAGE_UNSUPPORTED_FILE                         = 0x0A => "The file is not supported by DirectStorage, e.g. it is sparse or compressed by NTFS.",
    E_DSTORAGE_FILE_NOT_OPEN                            = 0x0B => "The file is not open.",
    E_DSTORAGE_RESERVED_FIELDS                          = 0x0C => "A reserved field is not set to 0.",
    E_DSTORAGE_INVALID_BCPACK_MODE                      = 0x0D => "The request has an invalid BCPack decompression mode.",
    E_DSTORAGE_INVALID_SWIZZLE_MODE                     = 0x0E => "The request has an invalid swizzle mode.",
    E_DSTORAGE_INVALID_DESTINATION_SIZE                 = 0x0F => "The request's destination size is invalid for its length and compression format.",
    E_DSTORAGE_QUEUE_CLOSED                             = 0x10 => "The request failed because the DirectStorage queue has been closed.",
    E_DSTORAGE_INVALID_CLUSTER_SIZE                     = 0x11 => "The volume is not formatted with 4KB clusters.",
    E_DSTORAGE_TOO_MANY_QUEUES                          = 0x12 => "The number of queues has reached the maximum limit.",
    E_DSTORAGE_INVALID_QUEUE_PRIORITY                   = 0x13 => "Invalid priority is specified for the queue.",
    E_DSTORAGE_TOO_MANY_FILES                           = 0x14 => "The number of files has reached the maximum limit.",
    E_DSTORAGE_INDEX_BOUND                              = 0x15 => "The index parameter is out of bounds.",
    E_DSTORAGE_IO_TIMEOUT                               = 0x16 => "The IO operation timed out.",
    E_DSTORAGE_INVALID_FILE_HANDLE                      = 0x17 => "The specified file has not been opened.",
    E_DSTORAGE_DEPRECATED_PREVIEW_GDK                   = 0x18 => "This GDK preview is deprecated.  Update to a supported GDK version.",
    E_DSTORAGE_XVD_NOT_REGISTERED                       = 0x19 => "The specified XVD is not registered or unmounted.",
    E_DSTORAGE_INVALID_FILE_OFFSET                      = 0x1A => "The request has an invalid file offset for the specified compression mode.",
    E_DSTORAGE_INVALID_SOURCE_TYPE                      = 0x1B => "A request's source type doesn't match the source type of the queue it was enqueued on.",
    E_DSTORAGE_INVALID_INTERMEDIATE_SIZE                = 0x1C => "The request has an invalid intermediate size.",
    E_DSTORAGE_SYSTEM_NOT_SUPPORTED                     = 0x1D => "The system is not supported by DirectStorage.",
    E_DSTORAGE_STAGING_BUFFER_LOCKED                    = 0x1F => "The staging buffer size can't be changed while requests are in flight.",
    E_DSTORAGE_INVALID_STAGING_BUFFER_SIZE              = 0x20 => "The staging buffer size is invalid.",
    E_DSTORAGE_STAGING_BUFFER_TOO_SMALL                 = 0x21 => "The staging buffer isn't large enough to hold the request.",
    E_DSTORAGE_INVALID_FENCE                            = 0x22 => "The fence is invalid.",
    E_DSTORAGE_INVALID_STATUS_ARRAY                     = 0x23 => "The status array is invalid.",
    E_DSTORAGE_INVALID_MEMORY_QUEUE_PRIORITY            = 0x24 => "Invalid priority is specified for a memory source queue.",
    E_DSTORAGE_DECOMPRESSION_ERROR                      = 0x30 => "Generic error during decompression.",
    E_DSTORAGE_ZLIB_BAD_HEADER                          = 0x31 => "The zlib stream header is invalid.",
    E_DSTORAGE_ZLIB_BAD_DATA                            = 0x32 => "The zlib stream data is invalid.",
    E_DSTORAGE_ZLIB_PARITY_FAIL                         = 0x33 => "The zlib stream failed its parity check.",
    E_DSTORAGE_BCPACK_BAD_HEADER                        = 0x34 => "The BCPack stream header is invalid.",
    E_DSTORAGE_BCPACK_BAD_DATA                          = 0x35 => "The BCPack stream data is invalid.",
    E_DSTORAGE_DECRYPTION_ERROR                         = 0x36 => "Generic error during decryption.",
    E_DSTORAGE_PASSTHROUGH_ERROR                        = 0x37 => "Generic error during passthrough.",
    E_DSTORAGE_FILE_TOO_FRAGMENTED                      = 0x38 => "The file is too fragmented to be accessed by DirectStorage.",
    E_DSTORAGE_COMPRESSED_DATA_TOO_LARGE                = 0x39 => "The compressed data is too large for DirectStorage to decompress.",
    E_DSTORAGE_INVALID_DESTINATION_TYPE                 = 0x40 => "The request's destination type is invalid.",
    E_DSTORAGE_FILEBUFFERING_REQUIRES_DISABLED_BYPASSIO = 0x41 => "File buffering can't be enabled while BypassIO is enabled.",
}



#[test] fn facility_game() {
    assert_eq!(FACILITY_GAME, 2340);
    assert_eq!(FACILITY_GAME, 0x924);
}

#[test] fn spot_checks() {
    assert_eq!(E_DSTORAGE_ACCESS_VIOLATION, -1994129399);
    assert_eq!(E_DSTORAGE_END_OF_FILE,      -1994129401);
    assert_eq!(E_DSTORAGE_ZLIB_PARITY_FAIL, -1994129357);
    assert_eq!(E_DSTORAGE_ACCESS_VIOLATION as u32, 0x8924_0009);
}

#[test] fn published_values() {
    // As published in dstorageerr.h
    let expected : &[(HRESULT, HRESULT)] = &[
        (E_DSTORAGE_ACCESS_VIOLATION,                           -1994129399),
        (E_DSTORAGE_ALREADY_RUNNING,                            -1994129407),
        (E_DSTORAGE_BCPACK_BAD_DATA,                            -1994129355),
        (E_DSTORAGE_BCPACK_BAD_HEADER,                          -1994129356),
        (E_DSTORAGE_COMPRESSED_DATA_TOO_LARGE,                  -1994129351),
        (E_DSTORAGE_DECOMPRESSION_ERROR,                        -1994129360),
        (E_DSTORAGE_DECRYPTION_ERROR,                           -1994129354),
        (E_DSTORAGE_DEPRECATED_PREVIEW_GDK,                     -1994129384),
        (E_DSTORAGE_END_OF_FILE,                                -1994129401),
        (E_DSTORAGE_FILE_NOT_OPEN,                              -1994129397),
        (E_DSTORAGE_FILE_TOO_FRAGMENTED,                        -1994129352),
        (E_DSTORAGE_FILEBUFFERING_REQUIRES_DISABLED_BYPASSIO,   -1994129343),
        (E_DSTORAGE_INDEX_BOUND,                                -1994129387),
        (E_DSTORAGE_INVALID_BCPACK_MODE,                        -1994129395),
        (E_DSTORAGE_INVALID_CLUSTER_SIZE,                       -1994129391),
        (E_DSTORAGE_INVALID_DESTINATION_SIZE,                   -1994129393),
        (E_DSTORAGE_INVALID_DESTINATION_TYPE,                   -1994129344),
        (E_DSTORAGE_INVALID_FENCE,                              -1994129374),
        (E_DSTORAGE_INVALID_FILE_HANDLE,                        -1994129385),
        (E_DSTORAGE_INVALID_FILE_OFFSET,                        -1994129382),
        (E_DSTORAGE_INVALID_INTERMEDIATE_SIZE,                  -1994129380),
        (E_DSTORAGE_INVALID_MEMORY_QUEUE_PRIORITY,              -1994129372),
        (E_DSTORAGE_INVALID_QUEUE_CAPACITY,                     -1994129405),
        (E_DSTORAGE_INVALID_QUEUE_PRIORITY,                     -1994129389),
        (E_DSTORAGE_INVALID_SOURCE_TYPE,                        -1994129381),
        (E_DSTORAGE_INVALID_STAGING_BUFFER_SIZE,                -1994129376),
        (E_DSTORAGE_INVALID_STATUS_ARRAY,                       -1994129373),
        (E_DSTORAGE_INVALID_SWIZZLE_MODE,                       -1994129394),
        (E_DSTORAGE_IO_TIMEOUT,                                 -1994129386),
        (E_DSTORAGE_NOT_RUNNING,                                -1994129406),
        (E_DSTORAGE_PASSTHROUGH_ERROR,                          -1994129353),
        (E_DSTORAGE_QUEUE_CLOSED,                               -1994129392),
        (E_DSTORAGE_REQUEST_TOO_LARGE,                          -1994129400),
        (E_DSTORAGE_RESERVED_FIELDS,                            -1994129396),
        (E_DSTORAGE_STAGING_BUFFER_LOCKED,                      -1994129377),
        (E_DSTORAGE_STAGING_BUFFER_TOO_SMALL,                   -1994129375),
        (E_DSTORAGE_SYSTEM_NOT_SUPPORTED,                       -1994129379),
        (E_DSTORAGE_TOO_MANY_FILES,                             -1994129388),
        (E_DSTORAGE_TOO_MANY_QUEUES,                            -1994129390),
        (E_DSTORAGE_UNSUPPORTED_FILE,                           -1994129398),
        (E_DSTORAGE_UNSUPPORTED_VOLUME,                         -1994129403),
        (E_DSTORAGE_XVD_DEVICE_NOT_SUPPORTED,                   -1994129404),
        (E_DSTORAGE_XVD_NOT_REGISTERED,                         -1994129383),
        (E_DSTORAGE_ZLIB_BAD_DATA,                              -1994129358),
        (E_DSTORAGE_ZLIB_BAD_HEADER,                            -1994129359),
        (E_DSTORAGE_ZLIB_PARITY_FAIL,                           -1994129357),
    ];
    for &(actual, published) in expected { assert_eq!(actual, published, "0x{:08x} != 0x{:08x}", actual, published); }
    assert_eq!(expected.len() + 1, CONSTANTS.len());
}

#[test] fn all_failures_under_facility_game() {
    for c in CONSTANTS.iter().filter(|c| c.category == Category::HResult) {
        assert!(c.value < 0, "{} should be a failure", c.name);
        assert!(FAILED(c.value));
        assert_eq!(HRESULT_FACILITY(c.value), FACILITY_GAME, "{}", c.name);
    }
}

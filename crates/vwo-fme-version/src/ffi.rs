//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "C symbols mirroring the framework umbrella header."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
//! Unmangled symbols for native hosts. Names and layouts match
//! `include/vwo_fme.h`:
//!
//! ```c
//! extern const double VWO_FMEVersionNumber;
//! extern const unsigned char VWO_FMEVersionString[];
//! ```
#![allow(non_upper_case_globals)]

use std::ffi::{c_char, CStr};

use crate::generated::{VERSION_CSTR, VERSION_CSTR_LEN, VERSION_NUMBER};

/// Project version number for VWO_FME.
#[no_mangle]
pub static VWO_FMEVersionNumber: f64 = VERSION_NUMBER;

/// Project version string for VWO_FME, NUL-terminated.
#[no_mangle]
pub static VWO_FMEVersionString: [u8; VERSION_CSTR_LEN] = VERSION_CSTR;

/// The exported string as a [`CStr`]; checked when the crate compiles.
pub const VERSION_C_STR: &CStr = match CStr::from_bytes_with_nul(&VERSION_CSTR) {
    Ok(s) => s,
    Err(_) => panic!("version string must not contain interior NUL bytes"),
};

/// Returns [`VWO_FMEVersionNumber`].
#[no_mangle]
pub extern "C" fn vwo_fme_version_number() -> f64 {
    VWO_FMEVersionNumber
}

/// Returns a pointer to [`VWO_FMEVersionString`]. The pointee is static and
/// must not be freed.
#[no_mangle]
pub extern "C" fn vwo_fme_version_string() -> *const c_char {
    VWO_FMEVersionString.as_ptr().cast()
}

/// The umbrella header shipped with the native artifacts.
pub const UMBRELLA_HEADER: &str = include_str!("../include/vwo_fme.h");

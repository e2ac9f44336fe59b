//! GST state code table.
//!
//! Two-digit codes for the Indian states and union territories as used in
//! the first two characters of a GSTIN. Sorted by code for binary search.

use std::fmt;

use serde::Serialize;

/// A GST state code together with its state or union territory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateCode {
    /// Zero-padded 2-digit code (e.g. "07").
    pub code: &'static str,
    /// State or union territory name.
    pub name: &'static str,
}

impl StateCode {
    /// Look up a zero-padded code in the table.
    pub fn lookup(code: &str) -> Option<Self> {
        STATE_CODES
            .binary_search_by(|s| s.code.cmp(code))
            .ok()
            .map(|i| STATE_CODES[i])
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

/// Name of the state for a zero-padded 2-digit code.
pub fn lookup_state(code: &str) -> Option<&'static str> {
    StateCode::lookup(code).map(|s| s.name)
}

/// All known state codes, sorted by code.
pub fn state_codes() -> &'static [StateCode] {
    STATE_CODES
}

/// Render a state code and left-pad it with `'0'` to two characters.
///
/// Longer input is returned unchanged, so `"007"` stays `"007"` and fails the
/// subsequent lookup instead of silently matching `"07"`.
pub fn normalize_state_code(code: impl fmt::Display) -> String {
    format!("{code:0>2}")
}

const fn state(code: &'static str, name: &'static str) -> StateCode {
    StateCode { code, name }
}

static STATE_CODES: &[StateCode] = &[
    state("01", "Jammu and Kashmir"),
    state("02", "Himachal Pradesh"),
    state("03", "Punjab"),
    state("04", "Chandigarh"),
    state("05", "Uttarakhand"),
    state("06", "Haryana"),
    state("07", "Delhi"),
    state("08", "Rajasthan"),
    state("09", "Uttar Pradesh"),
    state("10", "Bihar"),
    state("11", "Sikkim"),
    state("12", "Arunachal Pradesh"),
    state("13", "Nagaland"),
    state("14", "Manipur"),
    state("15", "Mizoram"),
    state("16", "Tripura"),
    state("17", "Meghalaya"),
    state("18", "Assam"),
    state("19", "West Bengal"),
    state("20", "Jharkhand"),
    state("21", "Odisha"),
    state("22", "Chhattisgarh"),
    state("23", "Madhya Pradesh"),
    state("24", "Gujarat"),
    state("25", "Daman and Diu"),
    state("26", "Dadra and Nagar Haveli"),
    state("27", "Maharashtra"),
    state("29", "Karnataka"),
    state("30", "Goa"),
    state("31", "Lakshadweep"),
    state("32", "Kerala"),
    state("33", "Tamil Nadu"),
    state("34", "Puducherry"),
    state("35", "Andaman and Nicobar Islands"),
    state("36", "Telangana"),
    state("37", "Andhra Pradesh"),
];

//! Display labels for tournament fields.
//!
//! Every function here is total: sentinel values degrade to placeholders.

use crate::locale::Locale;
use crate::tournament::SENTINEL;

/// Unit token stripped from raw chip counts such as "30000 Chips".
const CHIPS_UNIT: &str = "Chips";

pub fn format_time(time: &str) -> String {
    if time == SENTINEL {
        return SENTINEL.to_string();
    }
    time.to_string()
}

pub fn format_entry_fee(fee: &str, locale: Locale) -> String {
    if fee == SENTINEL {
        return locale.strings().free_of_charge.to_string();
    }
    fee.to_string()
}

pub fn format_chips(chips: &str, locale: Locale) -> String {
    if chips == SENTINEL {
        return SENTINEL.to_string();
    }
    let amount = chips.replacen(CHIPS_UNIT, "", 1);
    format!("{} {}", amount.trim(), locale.strings().chips_suffix)
}

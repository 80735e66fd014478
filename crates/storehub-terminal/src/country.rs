//! # Per-Country Payment Configuration
//!
//! Which payment-method-type set a terminal in a given store country may
//! accept. Canada adds interac-present on top of the card-present default.

use crate::types::PaymentMethodType;

/// Payment method types allowed for terminals in the given country.
///
/// ## Example
/// ```rust
/// use storehub_terminal::country::payment_method_types_for;
/// use storehub_terminal::types::PaymentMethodType;
///
/// assert_eq!(
///     payment_method_types_for("CA"),
///     [PaymentMethodType::CardPresent, PaymentMethodType::InteracPresent]
/// );
/// assert_eq!(
///     payment_method_types_for("US"),
///     [PaymentMethodType::CardPresent]
/// );
/// ```
pub fn payment_method_types_for(country_code: &str) -> &'static [PaymentMethodType] {
    match country_code.to_ascii_uppercase().as_str() {
        "CA" => &[
            PaymentMethodType::CardPresent,
            PaymentMethodType::InteracPresent,
        ],
        _ => &[PaymentMethodType::CardPresent],
    }
}

//! Savings metrics between the cheapest and most expensive listing.

use crate::parser::schema::{Listing, Savings};

/// Calculate the savings of buying `cheapest` instead of `most_expensive`
///
/// **Public** - used by `compare`, available for custom pairs
///
/// The percentage is relative to the most expensive price and is 0 when
/// that price is 0.
pub fn calculate_savings(cheapest: &Listing, most_expensive: &Listing) -> Savings {
    let cheapest_price = cheapest.price();
    let most_expensive_price = most_expensive.price();
    let amount = most_expensive_price - cheapest_price;

    let percentage = if most_expensive_price > 0.0 {
        (amount / most_expensive_price) * 100.0
    } else {
        0.0
    };

    Savings {
        amount,
        percentage,
        cheapest_price,
        most_expensive_price,
    }
}

impl Savings {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Cheapest: {:.2} | Most expensive: {:.2} | Savings: {:.2} ({:.1}%)",
            self.cheapest_price, self.most_expensive_price, self.amount, self.percentage
        )
    }
}

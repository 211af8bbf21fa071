//! Ticket purchasing as a functional workflow.
//!
//! A purchase request is checked, aggregated per ticket type, validated
//! against the [`PurchasePolicy`](purchase_tickets::public_types::PurchasePolicy),
//! priced, and only then handed to the payment and seat reservation
//! collaborators injected into
//! [`purchase_tickets`](purchase_tickets::implementation::purchase_tickets).

pub mod common {
    pub mod simple_types;
}

pub mod config;

pub mod purchase_tickets {
    pub mod api;
    pub mod implementation;
    pub mod internal_types;
    pub mod public_types;

    #[cfg(test)]
    mod tests;
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::simple_types::*;

/// Default cap on tickets (of any type) bought in one transaction.
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// The fixed set of ticket categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub const fn unit_price(self) -> Price {
        match self {
            TicketType::Adult => Price::new(20),
            TicketType::Child => Price::new(10),
            TicketType::Infant => Price::new(0),
        }
    }

    /// Infants sit on an adult's lap.
    pub const fn occupies_seat(self) -> bool {
        match self {
            TicketType::Adult | TicketType::Child => true,
            TicketType::Infant => false,
        }
    }
}

/// One line of a purchase: a ticket type and how many of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// Input to the workflow, exactly as the caller supplied it.
///
/// Either field may be missing; the workflow turns that into the matching
/// [`InvalidPurchase`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedPurchase {
    pub account_id: Option<i64>,
    pub requests: Option<Vec<TicketTypeRequest>>,
}

impl UnvalidatedPurchase {
    pub fn new(account_id: i64, requests: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            requests: Some(requests.into_iter().collect()),
        }
    }
}

/// Business rules a purchase is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
        }
    }
}

/// Reasons a purchase is refused before anything is charged or reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// Account id missing or not positive.
    #[error("Invalid account or funds. Cannot purchase tickets using this account.")]
    InvalidAccount,

    /// No tickets requested, no adult tickets, or more infants than adults.
    #[error("There must be at least one adult ticket per transaction, and one adult ticket per infant ticket")]
    TooFewAdults,

    #[error("Cannot purchase more than {limit} tickets in one transaction")]
    TooManyTickets { requested: u64, limit: u32 },
}

// ---------------------------
// Events
// ---------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentRequested {
    pub account_id: AccountId,
    pub amount: BillingAmount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeatsRequested {
    pub account_id: AccountId,
    pub seats: SeatCount,
}

/// Collaborator calls a priced purchase turns into, in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PurchaseTicketsEvent {
    PaymentRequested(PaymentRequested),
    SeatsRequested(SeatsRequested),
}

impl From<PaymentRequested> for PurchaseTicketsEvent {
    fn from(v: PaymentRequested) -> Self {
        Self::PaymentRequested(v)
    }
}

impl From<SeatsRequested> for PurchaseTicketsEvent {
    fn from(v: SeatsRequested) -> Self {
        Self::SeatsRequested(v)
    }
}

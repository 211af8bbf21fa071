use crate::common::simple_types::*;
use crate::purchase_tickets::public_types::{TicketType, TicketTypeRequest};

/// Requested tickets summed per type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseAggregate {
    adults: u64,
    children: u64,
    infants: u64,
}

impl PurchaseAggregate {
    pub fn count(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub fn total_tickets(&self) -> u64 {
        TicketType::ALL
            .into_iter()
            .fold(0, |total, ticket_type| total.saturating_add(self.count(ticket_type)))
    }

    pub fn seats(&self) -> u64 {
        TicketType::ALL
            .into_iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .fold(0, |total, ticket_type| total.saturating_add(self.count(ticket_type)))
    }

    pub(crate) fn with_request(self, request: &TicketTypeRequest) -> Self {
        let extra = u64::from(request.no_of_tickets());
        match request.ticket_type() {
            TicketType::Adult => Self {
                adults: self.adults.saturating_add(extra),
                ..self
            },
            TicketType::Child => Self {
                children: self.children.saturating_add(extra),
                ..self
            },
            TicketType::Infant => Self {
                infants: self.infants.saturating_add(extra),
                ..self
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedPurchase {
    pub account_id: AccountId,
    pub tickets: PurchaseAggregate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricedTicketLine {
    pub ticket_type: TicketType,
    pub count: u64,
    pub line_price: Price,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedPurchase {
    pub account_id: AccountId,
    pub amount_to_bill: BillingAmount,
    pub seats: SeatCount,
    pub lines: Vec<PricedTicketLine>,
}

use anyhow::{Context, Result};

pub mod dto {
    use serde::{Deserialize, Serialize};

    use crate::purchase_tickets::public_types::{
        TicketType, TicketTypeRequest, UnvalidatedPurchase,
    };

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TicketLineDto {
        #[serde(rename = "type")]
        pub ticket_type: TicketType,
        pub count: u32,
    }

    /// Wire shape of a purchase request. Both fields may be absent or null.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PurchaseRequestDto {
        #[serde(default)]
        pub account_id: Option<i64>,
        #[serde(default)]
        pub tickets: Option<Vec<TicketLineDto>>,
    }

    impl From<TicketLineDto> for TicketTypeRequest {
        fn from(line: TicketLineDto) -> Self {
            TicketTypeRequest::new(line.ticket_type, line.count)
        }
    }

    impl From<PurchaseRequestDto> for UnvalidatedPurchase {
        fn from(dto: PurchaseRequestDto) -> Self {
            UnvalidatedPurchase {
                account_id: dto.account_id,
                requests: dto
                    .tickets
                    .map(|lines| lines.into_iter().map(TicketTypeRequest::from).collect()),
            }
        }
    }
}
use dto::*;

use crate::purchase_tickets::implementation::{self, MakePayment, ReserveSeats};
use crate::purchase_tickets::public_types::PurchasePolicy;

pub fn parse_purchase_request(json: &str) -> Result<PurchaseRequestDto> {
    serde_json::from_str(json).context("Malformed purchase request")
}

/// Runs one purchase request against the given collaborators.
pub fn purchase_tickets(
    request: PurchaseRequestDto,
    make_payment: impl MakePayment,
    reserve_seats: impl ReserveSeats,
    policy: PurchasePolicy,
) -> Result<()> {
    let workflow = implementation::purchase_tickets(make_payment, reserve_seats, policy);
    workflow(request.into())
}

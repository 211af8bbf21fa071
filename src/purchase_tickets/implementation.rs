use anyhow::Result;
use tracing::{debug, info, warn};

use crate::common::simple_types::*;
use crate::purchase_tickets::internal_types::*;
use crate::purchase_tickets::public_types::*;

// ======================================================
// Section 1 : Define each step in the workflow using types
// ======================================================

/// Charges `amount` to the account.
pub trait MakePayment: Fn(AccountId, BillingAmount) -> Result<()> {}
impl<T> MakePayment for T where T: Fn(AccountId, BillingAmount) -> Result<()> {}

/// Reserves `seats` seats for the account.
pub trait ReserveSeats: Fn(AccountId, SeatCount) -> Result<()> {}
impl<T> ReserveSeats for T where T: Fn(AccountId, SeatCount) -> Result<()> {}

pub trait PurchaseTickets: Fn(UnvalidatedPurchase) -> Result<()> {}
impl<T> PurchaseTickets for T where T: Fn(UnvalidatedPurchase) -> Result<()> {}

// ======================================================
// Section 2 : Implementation
// ======================================================

// ---------------------------
// CheckAccount step
// ---------------------------

pub fn check_account(account_id: Option<i64>) -> Result<AccountId, InvalidPurchase> {
    account_id
        .and_then(AccountId::new)
        .ok_or(InvalidPurchase::InvalidAccount)
}

// ---------------------------
// Aggregate step
// ---------------------------

/// Sums requested tickets per type. Repeated lines of one type add up.
pub fn aggregate_requests<'a>(
    requests: impl IntoIterator<Item = &'a TicketTypeRequest>,
) -> PurchaseAggregate {
    requests
        .into_iter()
        .fold(PurchaseAggregate::default(), PurchaseAggregate::with_request)
}

// ---------------------------
// ValidatePurchase step
// ---------------------------

fn check_ticket_mix(
    tickets: &PurchaseAggregate,
    policy: &PurchasePolicy,
) -> Result<(), InvalidPurchase> {
    let adults = tickets.count(TicketType::Adult);
    if adults == 0 || adults < tickets.count(TicketType::Infant) {
        return Err(InvalidPurchase::TooFewAdults);
    }

    let requested = tickets.total_tickets();
    if requested > u64::from(policy.max_tickets_per_purchase) {
        return Err(InvalidPurchase::TooManyTickets {
            requested,
            limit: policy.max_tickets_per_purchase,
        });
    }
    Ok(())
}

/// Runs every admissibility rule. Nothing has been charged or reserved when
/// this returns an error.
pub fn validate_purchase(
    unvalidated_purchase: UnvalidatedPurchase,
    policy: &PurchasePolicy,
) -> Result<ValidatedPurchase, InvalidPurchase> {
    let account_id = check_account(unvalidated_purchase.account_id)?;

    // an empty order has no adults either
    let requests = match unvalidated_purchase.requests {
        Some(requests) if !requests.is_empty() => requests,
        _ => return Err(InvalidPurchase::TooFewAdults),
    };

    let tickets = aggregate_requests(&requests);
    debug!(
        account_id = %account_id,
        adults = tickets.count(TicketType::Adult),
        children = tickets.count(TicketType::Child),
        infants = tickets.count(TicketType::Infant),
        "Aggregated ticket requests"
    );

    check_ticket_mix(&tickets, policy)?;

    Ok(ValidatedPurchase {
        account_id,
        tickets,
    })
}

// ---------------------------
// PricePurchase step
// ---------------------------

fn to_priced_ticket_line(ticket_type: TicketType, count: u64) -> PricedTicketLine {
    PricedTicketLine {
        ticket_type,
        count,
        line_price: ticket_type.unit_price().times(count),
    }
}

pub fn price_purchase(validated_purchase: ValidatedPurchase) -> PricedPurchase {
    let tickets = validated_purchase.tickets;
    let lines: Vec<PricedTicketLine> = TicketType::ALL
        .into_iter()
        .map(|ticket_type| to_priced_ticket_line(ticket_type, tickets.count(ticket_type)))
        .collect();

    let amount_to_bill = BillingAmount::sum_prices(lines.iter().map(|line| line.line_price));

    PricedPurchase {
        account_id: validated_purchase.account_id,
        amount_to_bill,
        seats: SeatCount::new(tickets.seats()),
        lines,
    }
}

// ---------------------------
// Create events
// ---------------------------

fn create_payment_event(priced_purchase: &PricedPurchase) -> PurchaseTicketsEvent {
    PaymentRequested {
        account_id: priced_purchase.account_id,
        amount: priced_purchase.amount_to_bill,
    }
    .into()
}

fn create_seats_event(priced_purchase: &PricedPurchase) -> PurchaseTicketsEvent {
    SeatsRequested {
        account_id: priced_purchase.account_id,
        seats: priced_purchase.seats,
    }
    .into()
}

/// Payment always comes before the seat reservation.
pub fn create_events(priced_purchase: &PricedPurchase) -> Vec<PurchaseTicketsEvent> {
    vec![
        create_payment_event(priced_purchase),
        create_seats_event(priced_purchase),
    ]
}

// ---------------------------
// Dispatch step
// ---------------------------

fn dispatch_events(
    make_payment: &impl MakePayment,
    reserve_seats: &impl ReserveSeats,
    events: Vec<PurchaseTicketsEvent>,
) -> Result<()> {
    for event in events {
        match event {
            PurchaseTicketsEvent::PaymentRequested(payment) => {
                make_payment(payment.account_id, payment.amount)?;
                info!(
                    account_id = %payment.account_id,
                    amount = payment.amount.value().value(),
                    "Payment taken"
                );
            }
            PurchaseTicketsEvent::SeatsRequested(reservation) => {
                reserve_seats(reservation.account_id, reservation.seats)?;
                info!(
                    account_id = %reservation.account_id,
                    seats = reservation.seats.value(),
                    "Seats reserved"
                );
            }
        }
    }
    Ok(())
}

// ---------------------------
// overall workflow
// ---------------------------

/// Builds the purchase workflow from its collaborators.
///
/// Validation failures come back as an [`InvalidPurchase`] inside the
/// `anyhow::Error`; collaborator errors are returned untouched.
pub fn purchase_tickets(
    make_payment: impl MakePayment,
    reserve_seats: impl ReserveSeats,
    policy: PurchasePolicy,
) -> impl PurchaseTickets {
    move |unvalidated_purchase: UnvalidatedPurchase| -> Result<()> {
        let validated_purchase =
            validate_purchase(unvalidated_purchase, &policy).map_err(|reason| {
                warn!(%reason, "Ticket purchase rejected");
                reason
            })?;

        let priced_purchase = price_purchase(validated_purchase);
        let events = create_events(&priced_purchase);

        dispatch_events(&make_payment, &reserve_seats, events)
    }
}

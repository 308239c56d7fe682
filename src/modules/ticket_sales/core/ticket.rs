// Ticket issuance.
//
// Purpose
// - Derive ticket identity and the qr payload from cart lines at purchase
//   time, and describe the shapes the gateway and the local ledger carry.
//
// Responsibilities
// - One create request per cart line, with a client-generated uuid-v7 id
//   that doubles as the server-side idempotency key.
// - Qr payload carries event id, ticket type id and issue time in that
//   order (downstream validation parses them), plus a random suffix for
//   uniqueness within the same millisecond.

use crate::modules::ticket_sales::core::cart::CartLineItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Six months, approximated as 183 days of epoch milliseconds.
pub const TICKET_VALIDITY_MS: i64 = 183 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCreateRequest {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub ticket_type_id: String,
    pub quantity: u32,
    pub price_cents: i64,
    pub qr_code: String,
    pub valid_until: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasedTicket {
    pub id: String,
    pub event_id: String,
    pub ticket_type_id: String,
    pub quantity: u32,
    pub purchase_date: i64,
    pub qr_code: String,
}

impl TicketCreateRequest {
    pub fn to_purchased(&self, purchase_date: i64) -> PurchasedTicket {
        PurchasedTicket {
            id: self.id.clone(),
            event_id: self.event_id.clone(),
            ticket_type_id: self.ticket_type_id.clone(),
            quantity: self.quantity,
            purchase_date,
            qr_code: self.qr_code.clone(),
        }
    }
}

pub fn qr_payload(event_id: &str, ticket_type_id: &str, issued_at: i64, suffix: &str) -> String {
    format!("TKT-{event_id}-{ticket_type_id}-{issued_at}-{suffix}")
}

/// Synthesizes one create request per cart line. Ids are uuid v7, so ids
/// issued by concurrent purchases of the same user cannot collide.
pub fn issue_requests(
    lines: &[CartLineItem],
    user_id: &str,
    issued_at: i64,
) -> Vec<TicketCreateRequest> {
    lines
        .iter()
        .map(|line| {
            let id = Uuid::now_v7();
            let hex = id.simple().to_string();
            // The leading hex chars of a v7 uuid are its timestamp; the
            // random bits live at the tail. The suffix must come from the
            // tail or same-millisecond purchases collide.
            let suffix = &hex[hex.len() - 8..];
            TicketCreateRequest {
                id: id.to_string(),
                event_id: line.event_id.clone(),
                user_id: user_id.to_string(),
                ticket_type_id: line.ticket_type_id.clone(),
                quantity: line.quantity,
                price_cents: line.unit_price_cents,
                qr_code: qr_payload(&line.event_id, &line.ticket_type_id, issued_at, suffix),
                valid_until: issued_at + TICKET_VALIDITY_MS,
            }
        })
        .collect()
}

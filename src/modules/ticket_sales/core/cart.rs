// Pure cart state machine.
//
// Purpose
// - Hold the pending purchase line items and their transition rules, with no
//   input or output.
//
// Responsibilities
// - Keep at most one line per (event_id, ticket_type_id); adding an existing
//   pair merges by summing quantities.
// - Removal of an absent line is a no-op, never an error.
// - Derive totals linearly over the lines.
//
// Boundaries
// - Persistence belongs to the cart store in use_cases/manage_cart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub event_id: String,
    pub ticket_type_id: String,
    pub quantity: u32,
    /// Price per ticket in integer cents, captured when the line was added.
    pub unit_price_cents: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.add_item(line);
        }
        cart
    }

    /// Merges into an existing line for the same (event, ticket type) pair,
    /// otherwise appends. A zero quantity is a no-op.
    pub fn add_item(&mut self, item: CartLineItem) {
        if item.quantity == 0 {
            return;
        }
        match self.position(&item.event_id, &item.ticket_type_id) {
            Some(index) => self.lines[index].quantity += item.quantity,
            None => self.lines.push(item),
        }
    }

    pub fn remove_item(&mut self, event_id: &str, ticket_type_id: &str) {
        self.lines
            .retain(|line| !(line.event_id == event_id && line.ticket_type_id == ticket_type_id));
    }

    /// A new quantity of zero removes the line.
    pub fn update_quantity(&mut self, event_id: &str, ticket_type_id: &str, new_quantity: u32) {
        if new_quantity == 0 {
            self.remove_item(event_id, ticket_type_id);
            return;
        }
        if let Some(index) = self.position(event_id, ticket_type_id) {
            self.lines[index].quantity = new_quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_price_cents(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.unit_price_cents * i64::from(line.quantity))
            .sum()
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    fn position(&self, event_id: &str, ticket_type_id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.event_id == event_id && line.ticket_type_id == ticket_type_id)
    }
}

//! The vending machine.
//!
//! Coins go through the classifier and credit the balance; button presses drive
//! a two-key selection (row letter, then column digit). Everything observable
//! is written to three channels: the display, the coin return slot and the
//! product slot.

use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::Amount;
use crate::catalog::{self, Catalog, Code};
use crate::classifier::classify;
use crate::model::{Event, Measure};

mod state;
pub use state::{Channel, Selection, Vend};

mod error;
pub use error::{MachineError, SelectionError};

const INSERT_COIN: &str = "INSERT COIN";

/// A coin-operated vending machine.
///
/// Owns the balance, the catalog and the selection state. Not internally
/// synchronized; callers serialize access per machine.
pub struct VendingMachine {
    catalog: Catalog,
    balance: Amount,
    selection: Selection,
    display: Channel,
    return_slot: Channel,
    product_slot: Channel,
}

/// Public API
impl VendingMachine {
    /// A machine stocked with the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut display = Channel::default();
        display.push(INSERT_COIN);
        Self {
            catalog,
            balance: Amount::ZERO,
            selection: Selection::Idle,
            display,
            return_slot: Channel::default(),
            product_slot: Channel::default(),
        }
    }

    /// Run the machine over a stream of events.
    pub async fn run(&mut self, mut stream: impl Stream<Item = Event> + Unpin) {
        while let Some(event) = stream.next().await {
            // a bad argument fails the event, not the machine
            let _ = self.apply(event);
        }
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: Event) -> Result<(), MachineError> {
        match event {
            Event::Coin(coin) => self.insert_coin(&coin),
            Event::Button(key) => {
                self.press_button(key);
                Ok(())
            }
        }
    }

    /// Drop a coin into the slot.
    ///
    /// Accepted coins credit the balance. Rejected coins leave the balance as is
    /// and come back through the return slot. Either way the display shows the
    /// current balance.
    pub fn insert_coin<C: Measure + ?Sized>(&mut self, coin: &C) -> Result<(), MachineError> {
        let (radius, mass) = (coin.radius_mm(), coin.mass_g());
        if !coin.is_readable() {
            warn!(radius, mass, "not a coin, ignoring");
            return Err(MachineError::InvalidArgument { radius, mass });
        }

        let classification = classify(coin);
        if let Some(denomination) = classification.denomination {
            self.balance += classification.amount;
            info!(
                %denomination,
                amount = %classification.amount,
                balance = %self.balance,
                "coin accepted"
            );
        } else {
            info!(radius, mass, "coin rejected");
            self.return_slot.push(format!(
                "invalid coin (radius: {radius}mm, mass: {mass}g) returned"
            ));
        }

        self.display
            .push(format!("current amount is {}", self.balance));
        Ok(())
    }

    /// Press a key on the selection pad.
    pub fn press_button(&mut self, key: char) {
        let selection = self.selection;
        match selection {
            _ if catalog::is_row(key) => {
                if let Selection::RowPending(previous) = selection {
                    debug!(%previous, row = %key, "pending row replaced");
                }
                self.selection = Selection::RowPending(key);
                debug!(row = %key, "row selected");
            }
            Selection::RowPending(row) if catalog::is_column(key) => {
                self.selection = Selection::Idle;
                let code = Code::from_keys(row, key);
                let result = self.select(code);
                Self::log_selection(code, &result);
            }
            Selection::Idle if catalog::is_column(key) => {
                debug!(column = %key, "column pressed with no row pending");
            }
            _ => {
                debug!(%key, "unrecognized key ignored");
            }
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// The row waiting for a column, if any.
    pub fn pending_row(&self) -> Option<char> {
        match self.selection {
            Selection::Idle => None,
            Selection::RowPending(row) => Some(row),
        }
    }

    pub fn display(&self) -> &Channel {
        &self.display
    }

    pub fn return_slot(&self) -> &Channel {
        &self.return_slot
    }

    pub fn product_slot(&self) -> &Channel {
        &self.product_slot
    }
}

/// Private API
impl VendingMachine {
    /// Complete a selection:
    /// - Look up the product at `code`
    /// - Ensure the balance covers its price
    /// - Debit the price and drop the product in the slot
    fn select(&mut self, code: Code) -> Result<Vend, SelectionError> {
        let product = self
            .catalog
            .get(&code)
            .ok_or(SelectionError::UnknownCode(code))?;

        let remaining =
            self.balance
                .checked_sub(product.price)
                .ok_or(SelectionError::InsufficientFunds {
                    code,
                    balance: self.balance,
                    price: product.price,
                })?;

        let vend = Vend {
            count: 1,
            name: product.name.clone(),
        };
        self.balance = remaining;
        self.product_slot.push(vend.to_string());
        Ok(vend)
    }

    fn log_selection(code: Code, result: &Result<Vend, SelectionError>) {
        match result {
            Ok(vend) => info!(%code, product = %vend.name, "vended"),
            Err(e) => info!(%code, reason = %e, "selection skipped"),
        }
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

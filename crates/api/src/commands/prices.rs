//! Administration commands for the price table

use praxis_domain::{PriceTable, RoomPrice};
use tracing::info;

use crate::context::AppContext;

/// Replace the price table wholesale
///
/// The administration screen always submits the full list; callers are
/// responsible for keeping an entry for every room type in use.
pub fn update_prices(ctx: &mut AppContext, entries: Vec<RoomPrice>) {
    info!(entries = entries.len(), "price table replaced");
    ctx.store.set_prices(PriceTable::new(entries));
}

/// The current price table
pub fn prices(ctx: &AppContext) -> &PriceTable {
    ctx.store.prices()
}

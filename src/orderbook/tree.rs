//! Side-scoped order tree: one side's resting orders in price-time priority.

use std::collections::{BTreeMap, HashMap};
use tracing::trace;

use super::error::OrderBookError;
use super::order::{Order, Side};

/// One side's resting orders.
///
/// Orders are held in a price-ordered map of FIFO levels plus an id index,
/// so priority scans, threshold matching, and id lookups are all cheap.
/// Within a price level, ids appear in arrival order.
///
/// The tree is not internally synchronized. [`LimitOrderBook`] serializes
/// all access behind its per-book lock.
///
/// [`LimitOrderBook`]: crate::orderbook::book::LimitOrderBook
#[derive(Debug)]
pub struct OrderTree {
    /// The side every order in this tree must carry.
    side: Side,

    /// Price level -> resting order ids at that price, in arrival order.
    /// A level is removed as soon as it holds no ids.
    levels: BTreeMap<u128, Vec<String>>,

    /// Order id -> resting order.
    orders: HashMap<String, Order>,
}

impl OrderTree {
    /// Create an empty tree for one side.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            orders: HashMap::new(),
        }
    }

    /// The side this tree holds.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Insert a new resting order keyed by its id.
    ///
    /// # Errors
    /// - [`OrderBookError::SideMismatch`] if the order's side differs from
    ///   the tree's.
    /// - [`OrderBookError::InvalidQuantity`] if the quantity is zero.
    /// - [`OrderBookError::DuplicateOrderId`] if the id is already resting.
    ///   A duplicate never overwrites the existing order.
    pub fn add_order(&mut self, order: Order) -> Result<(), OrderBookError> {
        if order.side != self.side {
            return Err(OrderBookError::SideMismatch {
                expected: self.side,
                actual: order.side,
            });
        }
        if order.quantity == 0 {
            return Err(OrderBookError::InvalidQuantity {
                id: order.id.clone(),
                quantity: order.quantity,
            });
        }
        if self.orders.contains_key(&order.id) {
            return Err(OrderBookError::DuplicateOrderId(order.id.clone()));
        }

        trace!("adding {} order {} at {}", self.side, order.id, order.price);
        self.levels
            .entry(order.price)
            .or_default()
            .push(order.id.clone());
        self.orders.insert(order.id.clone(), order);
        Ok(())
    }

    /// Whether an order with this id is resting in the tree.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.orders.contains_key(id)
    }

    /// Delete and return the order for `id`, or `None` if it is absent.
    pub fn remove_order(&mut self, id: &str) -> Option<Order> {
        let order = self.orders.remove(id)?;
        self.unlink_from_level(order.price, id);
        trace!("removed {} order {}", self.side, id);
        Some(order)
    }

    /// Substitute the order at `id` with `new_order`, returning the order
    /// that was displaced.
    ///
    /// A price change re-queues the order at the back of its new price
    /// level (time priority reset); a same-price amendment keeps the
    /// original queue slot.
    ///
    /// # Errors
    /// - [`OrderBookError::OrderNotFound`] if `id` is not resting.
    /// - [`OrderBookError::SideMismatch`] if the replacement carries the
    ///   other side.
    /// - [`OrderBookError::InvalidQuantity`] if the new quantity is zero.
    pub fn replace_order(
        &mut self,
        id: &str,
        new_order: Order,
    ) -> Result<Order, OrderBookError> {
        if new_order.side != self.side {
            return Err(OrderBookError::SideMismatch {
                expected: self.side,
                actual: new_order.side,
            });
        }
        if new_order.quantity == 0 {
            return Err(OrderBookError::InvalidQuantity {
                id: id.to_string(),
                quantity: new_order.quantity,
            });
        }
        if !self.orders.contains_key(id) {
            return Err(OrderBookError::OrderNotFound(id.to_string()));
        }

        let new_price = new_order.price;
        let new_quantity = new_order.quantity;
        let Some(old_order) = self.orders.insert(id.to_string(), new_order) else {
            return Err(OrderBookError::OrderNotFound(id.to_string()));
        };

        if old_order.price != new_price {
            self.unlink_from_level(old_order.price, id);
            self.levels
                .entry(new_price)
                .or_default()
                .push(id.to_string());
        }
        trace!(
            "replaced {} order {}: {}@{} -> {}@{}",
            self.side, id, old_order.quantity, old_order.price, new_quantity, new_price
        );
        Ok(old_order)
    }

    /// Extract every resting order triggered by a market move to
    /// `threshold`, removing them from the tree.
    ///
    /// A buy order matches when its limit is at or above the threshold (the
    /// tick's low traded down to or through the bid); a sell order matches
    /// when its limit is at or below the threshold (the tick's high). All
    /// eligible orders share the single boundary test, so the pass is one
    /// range scan over the price-ordered levels, not a volume-consuming
    /// walk.
    pub fn match_orders(&mut self, threshold: u128) -> HashMap<String, Order> {
        let crossed: Vec<u128> = match self.side {
            Side::Buy => self.levels.range(threshold..).map(|(p, _)| *p).collect(),
            Side::Sell => self.levels.range(..=threshold).map(|(p, _)| *p).collect(),
        };

        let mut matched = HashMap::new();
        for price in crossed {
            let ids = self.levels.remove(&price).unwrap_or_default();
            for id in ids {
                if let Some(order) = self.orders.remove(&id) {
                    matched.insert(id, order);
                }
            }
        }
        if !matched.is_empty() {
            trace!(
                "matched {} {} orders at threshold {}",
                matched.len(),
                self.side,
                threshold
            );
        }
        matched
    }

    /// A snapshot of all currently resting orders, keyed by id.
    #[must_use]
    pub fn orders(&self) -> HashMap<String, Order> {
        self.orders.clone()
    }

    /// The best price on this side: highest limit for buys, lowest for
    /// sells. `None` when the tree is empty.
    #[must_use]
    pub fn best_price(&self) -> Option<u128> {
        match self.side {
            Side::Buy => self.levels.last_key_value().map(|(price, _)| *price),
            Side::Sell => self.levels.first_key_value().map(|(price, _)| *price),
        }
    }

    /// Number of resting orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the tree holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Drop `id` from its price level, removing the level when it empties.
    fn unlink_from_level(&mut self, price: u128, id: &str) {
        if let Some(ids) = self.levels.get_mut(&price) {
            ids.retain(|resting| resting != id);
            if ids.is_empty() {
                self.levels.remove(&price);
            }
        }
    }
}

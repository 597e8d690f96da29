//! # Cart State
//!
//! Tauri-managed wrapper around the pure [`Cart`] aggregate.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! All cart semantics (key merging, quantity rules, totals) live in
//! `artspace_core::cart`; this type only adds the lock.

use std::sync::{Arc, Mutex};

use artspace_core::Cart;

/// Tauri-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are typically quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total_items());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_line(line))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artspace_core::cart::{CartLine, LineKey};
    use artspace_core::{Money, ProductVariant};

    #[test]
    fn test_state_shares_one_cart() {
        let state = CartState::new();

        state.with_cart_mut(|cart| {
            cart.add_line(CartLine::new(
                LineKey::new("1", ProductVariant::Print),
                "Cidade Neon",
                "A Fase",
                "https://example.com/1.jpg",
                Money::from_cents(1800),
                2,
            ))
        })
        .unwrap();

        let total = state.with_cart(|cart| cart.total_items());
        assert_eq!(total, 2);
    }
}

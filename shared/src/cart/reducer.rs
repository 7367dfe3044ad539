//! Pure cart transitions
//!
//! Every mutation is `reduce(lines, action) -> lines`. Lines keep insertion
//! order, hold at most one entry per item id and never carry a quantity
//! below 1.

use super::CartLine;
use crate::models::FoodItem;

/// A user action on the cart
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of the item (new line or quantity + 1)
    Add(FoodItem),
    /// Shift a line's quantity; a result of 0 or less drops the line
    ChangeQuantity { item_id: i64, delta: i64 },
    /// Drop a line
    Remove { item_id: i64 },
    /// Empty the cart
    Clear,
}

/// Apply one action to a line list
pub fn reduce(mut lines: Vec<CartLine>, action: CartAction) -> Vec<CartLine> {
    match action {
        CartAction::Add(item) => {
            match lines.iter_mut().find(|l| l.item.id == item.id) {
                Some(line) => line.quantity = line.quantity.saturating_add(1),
                None => lines.push(CartLine { item, quantity: 1 }),
            }
            lines
        }
        CartAction::ChangeQuantity { item_id, delta } => {
            let Some(pos) = lines.iter().position(|l| l.item.id == item_id) else {
                return lines;
            };
            let quantity = lines[pos].quantity.saturating_add(delta);
            if quantity <= 0 {
                lines.remove(pos);
            } else {
                lines[pos].quantity = quantity;
            }
            lines
        }
        CartAction::Remove { item_id } => {
            lines.retain(|l| l.item.id != item_id);
            lines
        }
        CartAction::Clear => Vec::new(),
    }
}

/// Bring an arbitrary line list back to a valid cart
///
/// Duplicate item ids are merged into the first occurrence (quantities
/// summed), then lines with a quantity below 1 are dropped.
pub fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut out: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match out.iter_mut().find(|l| l.item.id == line.item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => out.push(line),
        }
    }
    out.retain(|l| l.quantity >= 1);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::tests::food;

    #[test]
    fn add_appends_then_increments() {
        let lines = reduce(Vec::new(), CartAction::Add(food(1, 8000, None)));
        let lines = reduce(lines, CartAction::Add(food(2, 5000, None)));
        let lines = reduce(lines, CartAction::Add(food(1, 8000, None)));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item.id, 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].item.id, 2);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn change_quantity_to_zero_removes_line() {
        let lines = reduce(Vec::new(), CartAction::Add(food(1, 8000, None)));
        let lines = reduce(
            lines,
            CartAction::ChangeQuantity {
                item_id: 1,
                delta: -1,
            },
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn large_negative_delta_removes_rather_than_clamps() {
        let lines = reduce(Vec::new(), CartAction::Add(food(1, 8000, None)));
        let lines = reduce(
            lines,
            CartAction::ChangeQuantity {
                item_id: 1,
                delta: 5,
            },
        );
        assert_eq!(lines[0].quantity, 6);
        let lines = reduce(
            lines,
            CartAction::ChangeQuantity {
                item_id: 1,
                delta: i64::MIN,
            },
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn change_quantity_on_absent_id_is_noop() {
        let before = reduce(Vec::new(), CartAction::Add(food(1, 8000, None)));
        let after = reduce(
            before.clone(),
            CartAction::ChangeQuantity {
                item_id: 99,
                delta: -1,
            },
        );
        assert_eq!(before, after);
    }

    #[test]
    fn remove_and_clear() {
        let lines = reduce(Vec::new(), CartAction::Add(food(1, 8000, None)));
        let lines = reduce(lines, CartAction::Add(food(2, 5000, None)));
        let lines = reduce(lines, CartAction::Remove { item_id: 1 });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 2);

        let lines = reduce(lines, CartAction::Remove { item_id: 1 });
        assert_eq!(lines.len(), 1);

        assert!(reduce(lines, CartAction::Clear).is_empty());
    }

    #[test]
    fn normalize_merges_and_drops() {
        let lines = vec![
            CartLine {
                item: food(1, 8000, None),
                quantity: 2,
            },
            CartLine {
                item: food(2, 5000, None),
                quantity: 0,
            },
            CartLine {
                item: food(1, 8000, None),
                quantity: 3,
            },
            CartLine {
                item: food(3, 6000, None),
                quantity: -4,
            },
        ];
        let lines = normalize(lines);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 1);
        assert_eq!(lines[0].quantity, 5);
    }
}

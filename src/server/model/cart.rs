//! Cart domain model.

use crate::{
    model::cart::{CartDto, CartItemDto},
    server::model::product::Product,
};

/// One cart line joined with the product it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub image_url: Option<String>,
    pub quantity: i32,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price × quantity over all lines, in kopecks.
    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn into_dto(self) -> CartDto {
        let subtotal = self.subtotal();
        let item_count = self.item_count();

        let items = self
            .lines
            .into_iter()
            .map(|line| {
                let line_total = line.line_total();
                CartItemDto {
                    product_id: line.product.id,
                    name: line.product.name,
                    slug: line.product.slug,
                    price: line.product.price,
                    image_url: line.image_url,
                    stock: line.product.stock,
                    quantity: line.quantity,
                    line_total,
                }
            })
            .collect();

        CartDto {
            items,
            subtotal,
            item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn line(price: i64, quantity: i32) -> CartLine {
        let now = Utc::now();
        CartLine {
            product: Product {
                id: 1,
                name: "Чайник".to_string(),
                slug: "chaynik".to_string(),
                sku: "KT-1".to_string(),
                description: String::new(),
                price,
                compare_at_price: None,
                stock: 10,
                category_id: None,
                is_active: true,
                is_featured: false,
                created_at: now,
                updated_at: now,
            },
            image_url: None,
            quantity,
        }
    }

    #[test]
    fn sums_line_totals() {
        let cart = Cart {
            lines: vec![line(150_00, 2), line(99_90, 1)],
        };

        assert_eq!(cart.subtotal(), 399_90);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn empty_cart_has_zero_subtotal() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.into_dto().subtotal, 0);
    }
}

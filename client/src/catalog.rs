//! Static product grid.
//!
//! The storefront has no product service; the grid is this fixed list. Ids are
//! the `data-product-id` values the cart merges on.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use basket::ProductCard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    /// Price text exactly as printed on the card.
    pub price: &'static str,
    pub image: &'static str,
}

impl Product {
    /// The descriptor the add-to-cart writer reads from this card.
    pub fn card(&self) -> ProductCard {
        ProductCard {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            price: self.price.to_owned(),
            image: self.image.to_owned(),
        }
    }
}

pub const PRODUCTS: &[Product] = &[
    Product { id: "1", title: "Худи оверсайз с капюшоном", price: "2 490 ₽", image: "/images/products/hoodie.jpg" },
    Product { id: "2", title: "Футболка базовая хлопок", price: "990 ₽", image: "/images/products/tshirt.jpg" },
    Product { id: "3", title: "Шорты спортивные", price: "1 290 ₽", image: "/images/products/shorts.jpg" },
    Product { id: "4", title: "Джинсы прямого кроя", price: "3 490 ₽", image: "/images/products/jeans.jpg" },
    Product { id: "5", title: "Кроссовки беговые", price: "5 990 ₽", image: "/images/products/sneakers.jpg" },
    Product { id: "6", title: "Куртка демисезонная", price: "7 490 ₽", image: "/images/products/jacket.jpg" },
    Product { id: "7", title: "Рубашка льняная", price: "2 190 ₽", image: "/images/products/shirt.jpg" },
    Product { id: "8", title: "Штаны карго", price: "2 990 ₽", image: "/images/products/cargo.jpg" },
    Product { id: "9", title: "Шапка вязаная", price: "790 ₽", image: "/images/products/beanie.jpg" },
    Product { id: "10", title: "Свитшот с принтом", price: "1 990 ₽", image: "/images/products/sweatshirt.jpg" },
];

//! Conversions between storage records and API models.
//!
//! Field correspondence:
//!
//! | storage          | domain       |
//! |------------------|--------------|
//! | `id_producto`    | `product_id` |
//! | `nombre`         | `name`       |
//! | `id_categoria`   | `category_id`|
//! | `precio_venta`   | `price`      |
//! | `cantidad_stock` | `stock`      |
//! | `estado`         | `active`     |
//! | `categoria`      | `category`   |
//! | `descripcion`    | `category`   |
//!
//! `codigo_barras` has no domain counterpart: it is dropped when reading and
//! left empty when writing.

use crate::entity::{Producto, categoria};
use crate::models::{Category, Product};

pub struct CategoryMapper;

impl CategoryMapper {
    pub fn to_category(categoria: &categoria::Model) -> Category {
        Category {
            category_id: categoria.id_categoria,
            category: categoria.descripcion.clone(),
            active: categoria.estado,
        }
    }

    pub fn to_categoria(category: Category) -> categoria::Model {
        categoria::Model {
            id_categoria: category.category_id,
            descripcion: category.category,
            estado: category.active,
        }
    }
}

pub struct ProductMapper;

impl ProductMapper {
    pub fn to_product(producto: Producto) -> Product {
        Product {
            product_id: producto.id_producto,
            name: producto.nombre,
            category_id: producto.id_categoria,
            price: producto.precio_venta,
            stock: producto.cantidad_stock,
            active: producto.estado,
            category: producto.categoria.as_ref().map(CategoryMapper::to_category),
        }
    }

    /// Order is preserved
    pub fn to_products(productos: Vec<Producto>) -> Vec<Product> {
        productos.into_iter().map(Self::to_product).collect()
    }

    pub fn to_producto(product: Product) -> Producto {
        Producto {
            id_producto: product.product_id,
            nombre: product.name,
            id_categoria: product.category_id,
            codigo_barras: None,
            precio_venta: product.price,
            cantidad_stock: product.stock,
            estado: product.active,
            categoria: product.category.map(CategoryMapper::to_categoria),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn categoria() -> categoria::Model {
        categoria::Model {
            id_categoria: 1,
            descripcion: "Beverages".to_string(),
            estado: true,
        }
    }

    fn producto() -> Producto {
        Producto {
            id_producto: Some(7),
            nombre: "Soda".to_string(),
            id_categoria: 1,
            codigo_barras: Some("7702004003508".to_string()),
            precio_venta: Decimal::new(150, 2),
            cantidad_stock: 2,
            estado: true,
            categoria: Some(categoria()),
        }
    }

    #[test]
    fn test_to_product_renames_fields() {
        let product = ProductMapper::to_product(producto());

        assert_eq!(product.product_id, Some(7));
        assert_eq!(product.name, "Soda");
        assert_eq!(product.category_id, 1);
        assert_eq!(product.price, Decimal::new(150, 2));
        assert_eq!(product.stock, 2);
        assert!(product.active);
        assert_eq!(
            product.category,
            Some(Category {
                category_id: 1,
                category: "Beverages".to_string(),
                active: true,
            })
        );
    }

    #[test]
    fn test_round_trip_drops_barcode_only() {
        let original = producto();
        let back = ProductMapper::to_producto(ProductMapper::to_product(original.clone()));

        assert_eq!(back.codigo_barras, None);
        assert_eq!(
            back,
            Producto {
                codigo_barras: None,
                ..original
            }
        );
    }

    #[test]
    fn test_to_products_preserves_order_and_empty() {
        assert!(ProductMapper::to_products(vec![]).is_empty());

        let mut second = producto();
        second.id_producto = Some(3);
        second.nombre = "Agua".to_string();

        let products = ProductMapper::to_products(vec![producto(), second]);
        let ids: Vec<_> = products.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, [Some(7), Some(3)]);
    }

    #[test]
    fn test_category_round_trip() {
        let category = CategoryMapper::to_category(&categoria());
        assert_eq!(CategoryMapper::to_categoria(category), categoria());
    }

    #[test]
    fn test_missing_category_stays_missing() {
        let product = ProductMapper::to_product(Producto {
            categoria: None,
            ..producto()
        });
        assert_eq!(product.category, None);
    }
}

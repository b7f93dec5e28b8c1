//! Storage records, shaped like the `productos` and `categorias` tables.

pub mod categoria;
pub mod producto;

use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};

/// A `productos` record as the crud layer loads and saves it.
///
/// Unlike [`producto::Model`] the key is optional: `None` means the row has
/// not been stored yet. `categoria` is the joined owner row, absent when the
/// join found nothing; it is read-only and never written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Producto {
    pub id_producto: Option<i32>,
    pub nombre: String,
    pub id_categoria: i32,
    pub codigo_barras: Option<String>,
    pub precio_venta: Decimal,
    pub cantidad_stock: i32,
    pub estado: bool,
    pub categoria: Option<categoria::Model>,
}

impl Producto {
    /// Active model for insert (`keep_key = false`, the database assigns
    /// the key) or update-by-key (`keep_key = true`).
    pub(crate) fn into_active_model(self, keep_key: bool) -> producto::ActiveModel {
        producto::ActiveModel {
            id_producto: match (keep_key, self.id_producto) {
                (true, Some(id)) => Set(id),
                _ => NotSet,
            },
            nombre: Set(self.nombre),
            id_categoria: Set(self.id_categoria),
            codigo_barras: Set(self.codigo_barras),
            precio_venta: Set(self.precio_venta),
            cantidad_stock: Set(self.cantidad_stock),
            estado: Set(self.estado),
        }
    }
}

impl From<(producto::Model, Option<categoria::Model>)> for Producto {
    fn from((row, categoria): (producto::Model, Option<categoria::Model>)) -> Self {
        Self {
            id_producto: Some(row.id_producto),
            nombre: row.nombre,
            id_categoria: row.id_categoria,
            codigo_barras: row.codigo_barras,
            precio_venta: row.precio_venta,
            cantidad_stock: row.cantidad_stock,
            estado: row.estado,
            categoria,
        }
    }
}

//! OpenAPI documentation for the market API

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the `jwt` bearer scheme the product operations refer to.
/// Tokens are documented here but not checked by the server.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Market API",
        version = "0.1.0",
        description = "Supermarket inventory: products and their categories"
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_paths_are_nested_under_products() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/products",
            "/products/{productId}",
            "/products/category/{categoryId}",
            "/products/scarce/{quantity}",
        ] {
            assert!(paths.contains(&expected), "missing {} in {:?}", expected, paths);
        }
    }

    #[test]
    fn test_jwt_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("jwt"));
        assert!(components.schemas.contains_key("Product"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}

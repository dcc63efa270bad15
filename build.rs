use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/nursery_products.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let products = catalog.get("products").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'products' field\n\
             The catalog must have a top-level 'products' array.\n"
        );
    });

    let products = products.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'products' must be an array\n\
             Got: {products}\n"
        );
    });

    validate_products(products);

    println!(
        "cargo:warning=Validated catalog: {} products",
        products.len()
    );
}

fn validate_products(products: &[serde_json::Value]) {
    let mut seen_ids = HashSet::new();

    for (i, product) in products.iter().enumerate() {
        let id = product
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Product at index {i} missing string 'id' field\n")
            });

        assert!(
            seen_ids.insert(id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate product id '{id}' (index {i})\n"
        );

        assert!(
            product.get("name").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Product '{id}' (index {i}) missing string 'name' field\n"
        );

        validate_product_price(product, id);
        validate_product_stock(product, id);
    }
}

fn validate_product_price(product: &serde_json::Value, id: &str) {
    if let Some(price) = product.get("price") {
        let value = price.as_f64().unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Product '{id}' price must be a number\n")
        });
        assert!(
            value >= 0.0,
            "\n\nCATALOG BUILD ERROR: Product '{id}' has negative price {value}\n\
             Prices must be >= 0.\n"
        );
    }
}

fn validate_product_stock(product: &serde_json::Value, id: &str) {
    if let Some(stock) = product.get("stock") {
        assert!(
            stock.as_u64().is_some_and(|s| s <= u64::from(u32::MAX)),
            "\n\nCATALOG BUILD ERROR: Product '{id}' stock must be a non-negative integer\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/nursery_products.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

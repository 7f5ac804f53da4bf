//! Plain-text rendering for the CLI's default (non-JSON) output.

use vendorfront_catalog::ProductSummary;
use vendorfront_vendor::{ProfileField, VendorProfile};

const PROFILE_FIELDS: [(&str, ProfileField); 4] = [
    ("Name", ProfileField::Name),
    ("Phone", ProfileField::Phone),
    ("Website", ProfileField::Website),
    ("Description", ProfileField::Description),
];

/// Profile summary: one `Label: value` line per filled field, address last.
pub fn profile_text(profile: &VendorProfile) -> String {
    let mut lines = vec![format!("Vendor {}", profile.id)];
    for (label, field) in PROFILE_FIELDS {
        let value = profile.get(field).trim();
        if !value.is_empty() {
            lines.push(format!("  {label}: {value}"));
        }
    }
    let address = profile.address.one_line();
    if !address.is_empty() {
        lines.push(format!("  Address: {address}"));
    }
    lines.join("\n")
}

/// One header line per product, then one indented line per variant.
pub fn product_list_text(products: &[ProductSummary]) -> String {
    if products.is_empty() {
        return "No products yet.".to_string();
    }

    let mut lines = Vec::new();
    for product in products {
        lines.push(format!(
            "{} [{}] {} | stock {} | cover {}",
            product.name,
            product.id,
            product.display_base_price(),
            product.total_stock(),
            product.cover_image().unwrap_or("-"),
        ));
        for variant in &product.variants {
            lines.push(format!(
                "  {} | {} | stock {}",
                variant.label(),
                variant.display_price(),
                variant.stock,
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_text_skips_blank_fields_and_inlines_the_address() {
        let profile: VendorProfile = serde_json::from_value(json!({
            "_id": "691dfd",
            "name": "Urban Threads",
            "phone": "555-0100",
            "address": { "street": "1 Main St", "city": "Springfield", "country": "US" }
        }))
        .unwrap();

        assert_eq!(
            profile_text(&profile),
            "Vendor 691dfd\n  Name: Urban Threads\n  Phone: 555-0100\n  Address: 1 Main St, Springfield, US"
        );
    }

    #[test]
    fn product_list_text_summarizes_products_and_variants() {
        let products: Vec<ProductSummary> = serde_json::from_value(json!([
            {
                "_id": "p1",
                "name": "Denim Jacket",
                "basePrice": 99.9,
                "images": ["/uploads/front.png", "/uploads/back.png"],
                "variants": [
                    { "options": { "Size": "M", "Color": "Blue" }, "stock": 3, "price": 99.9 },
                    { "options": { "Color": "Blue", "Size": "L" }, "stock": 4, "price": 109.5 }
                ]
            },
            { "_id": "p2", "name": "Cap", "basePrice": 12 }
        ]))
        .unwrap();

        assert_eq!(
            product_list_text(&products),
            [
                "Denim Jacket [p1] $99.90 | stock 7 | cover /uploads/front.png",
                "  Color: Blue Size: M | $99.90 | stock 3",
                "  Color: Blue Size: L | $109.50 | stock 4",
                "Cap [p2] $12.00 | stock 0 | cover -",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_product_list_says_so() {
        assert_eq!(product_list_text(&[]), "No products yet.");
    }
}

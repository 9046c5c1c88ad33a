//! Starter inventory for new stores.
//!
//! Used when a store is initialized and as the fallback when the persisted
//! inventory blob is corrupt, so an empty inventory is never presented as
//! if it were intentional.

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::item::InventoryItem;

struct SeedRow {
    name: &'static str,
    barcode: Option<&'static str>,
    description: &'static str,
    category: &'static str,
    location: &'static str,
    quantity: u32,
    min_stock: u32,
    unit: &'static str,
    price: f64,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        name: "Milwaukee M18 FUEL Impact Driver",
        barcode: Some("045242048572"),
        description: "1/4\" Hex Impact Driver, Brushless",
        category: "Power Tools",
        location: "Van 1",
        quantity: 4,
        min_stock: 2,
        unit: "pcs",
        price: 149.00,
    },
    SeedRow {
        name: "Milwaukee M18 FUEL Hammer Drill",
        barcode: Some("045242531050"),
        description: "1/2\" Hammer Drill/Driver",
        category: "Power Tools",
        location: "Van 1",
        quantity: 3,
        min_stock: 2,
        unit: "pcs",
        price: 169.00,
    },
    SeedRow {
        name: "Milwaukee SAWZALL Reciprocating Saw",
        barcode: None,
        description: "M18 FUEL Sawzall with One-Key",
        category: "Power Tools",
        location: "Warehouse",
        quantity: 2,
        min_stock: 1,
        unit: "pcs",
        price: 199.00,
    },
    SeedRow {
        name: "Milwaukee 25ft Tape Measure",
        barcode: Some("045242519102"),
        description: "Magnetic Tape Measure",
        category: "Hand Tools",
        location: "Job Site",
        quantity: 8,
        min_stock: 5,
        unit: "pcs",
        price: 24.99,
    },
    SeedRow {
        name: "Milwaukee PACKOUT Tool Box",
        barcode: None,
        description: "Large Rolling Tool Box",
        category: "Materials",
        location: "Van 2",
        quantity: 2,
        min_stock: 1,
        unit: "units",
        price: 139.00,
    },
    SeedRow {
        name: "3/4\" Plywood Sheets",
        barcode: None,
        description: "4x8 ACX grade plywood",
        category: "Materials",
        location: "Job Site",
        quantity: 12,
        min_stock: 20,
        unit: "sheets",
        price: 45.00,
    },
    SeedRow {
        name: "2x4x8 Studs",
        barcode: None,
        description: "Kiln Dried Whitewood Stud",
        category: "Materials",
        location: "Job Site",
        quantity: 150,
        min_stock: 50,
        unit: "pcs",
        price: 4.50,
    },
    SeedRow {
        name: "Wire Nuts (Red)",
        barcode: None,
        description: "Box of 500 wing twist wire connectors",
        category: "Electrical",
        location: "Warehouse",
        quantity: 450,
        min_stock: 100,
        unit: "pcs",
        price: 0.15,
    },
    SeedRow {
        name: "12/2 Romex Wire",
        barcode: Some("098213523111"),
        description: "250ft Coil Yellow NM-B",
        category: "Electrical",
        location: "Van 2",
        quantity: 6,
        min_stock: 3,
        unit: "rolls",
        price: 128.00,
    },
    SeedRow {
        name: "Single Gang Outlet Box",
        barcode: None,
        description: "Plastic New Work Box",
        category: "Electrical",
        location: "Warehouse",
        quantity: 45,
        min_stock: 20,
        unit: "pcs",
        price: 1.25,
    },
    SeedRow {
        name: "1/2\" PEX Pipe (Red)",
        barcode: None,
        description: "300ft Coil for Hot Water",
        category: "Plumbing",
        location: "Warehouse",
        quantity: 2,
        min_stock: 1,
        unit: "rolls",
        price: 85.00,
    },
    SeedRow {
        name: "1/2\" PEX Pipe (Blue)",
        barcode: None,
        description: "300ft Coil for Cold Water",
        category: "Plumbing",
        location: "Warehouse",
        quantity: 3,
        min_stock: 1,
        unit: "rolls",
        price: 85.00,
    },
    SeedRow {
        name: "Copper Elbows 1/2\"",
        barcode: None,
        description: "Bag of 50 90-degree elbows",
        category: "Plumbing",
        location: "Van 1",
        quantity: 2,
        min_stock: 1,
        unit: "bags",
        price: 22.50,
    },
    SeedRow {
        name: "Safety Glasses",
        barcode: None,
        description: "Milwaukee Anti-Fog Safety Glasses",
        category: "Safety",
        location: "Van 2",
        quantity: 12,
        min_stock: 5,
        unit: "pairs",
        price: 12.00,
    },
    SeedRow {
        name: "Cut Resistant Gloves (L)",
        barcode: None,
        description: "Level 3 Cut Resistant Dipped Gloves",
        category: "Safety",
        location: "Job Site",
        quantity: 20,
        min_stock: 10,
        unit: "pairs",
        price: 8.50,
    },
    SeedRow {
        name: "N95 Respirator Masks",
        barcode: None,
        description: "Box of 20 masks",
        category: "Safety",
        location: "Warehouse",
        quantity: 5,
        min_stock: 2,
        unit: "boxes",
        price: 25.00,
    },
    SeedRow {
        name: "Estwing Framing Hammer",
        barcode: None,
        description: "22oz Steel Framing Hammer",
        category: "Hand Tools",
        location: "Van 1",
        quantity: 4,
        min_stock: 2,
        unit: "pcs",
        price: 42.00,
    },
    SeedRow {
        name: "Speed Square",
        barcode: None,
        description: "Swanson 7-inch Aluminum Square",
        category: "Hand Tools",
        location: "Job Site",
        quantity: 6,
        min_stock: 3,
        unit: "pcs",
        price: 12.00,
    },
    SeedRow {
        name: "Drywall Screws 1-5/8\"",
        barcode: None,
        description: "5lb Box Coarse Thread",
        category: "Materials",
        location: "Job Site",
        quantity: 10,
        min_stock: 5,
        unit: "boxes",
        price: 35.00,
    },
    SeedRow {
        name: "Construction Adhesive",
        barcode: None,
        description: "Heavy Duty 10oz Tube",
        category: "Materials",
        location: "Van 2",
        quantity: 24,
        min_stock: 12,
        unit: "tubes",
        price: 6.50,
    },
];

/// Build the starter inventory with fresh ids and current timestamps.
pub fn seed_items() -> Vec<InventoryItem> {
    let now = Utc::now();
    SEED_ROWS
        .iter()
        .map(|row| {
            let mut quantities = BTreeMap::new();
            quantities.insert(row.location.to_string(), row.quantity);
            InventoryItem {
                id: Uuid::new_v4().to_string(),
                name: row.name.to_string(),
                barcode: row.barcode.map(|s| s.to_string()),
                description: row.description.to_string(),
                category: row.category.to_string(),
                quantities,
                min_stock: row.min_stock,
                unit: row.unit.to_string(),
                price: row.price,
                last_updated: now,
            }
        })
        .collect()
}

//! Test payloads: one fixed record and a generator of plausible fakes.
//!
//! The generator never touches global state; callers pass the random source,
//! so a seeded `StdRng` reproduces the same payload sequence.

use bol_draft::ShipmentRecord;
use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bhatt", "Castillo", "Dawson", "Evans", "Fischer", "Gupta", "Hansen", "Iyer",
    "Jensen", "Kowalski", "Lindqvist", "Morales", "Nakamura", "Okafor", "Patel", "Quinn",
    "Rossi", "Schmidt", "Tanaka", "Underwood", "Varga", "Walsh", "Yilmaz", "Zhang",
];

const COMPANY_SUFFIXES: &[&str] = &["Ltd", "LLC", "Inc", "Group", "and Sons", "PLC", "Traders"];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Boulevard", "Way", "Court"];

const CITIES: &[&str] = &[
    "Mumbai", "Chennai", "Kolkata", "Rotterdam", "Hamburg", "Antwerp", "Singapore", "Shanghai",
    "Busan", "Dubai", "Durban", "Santos", "Valencia", "Piraeus", "Felixstowe", "Newark",
    "Savannah", "Houston", "Long Beach", "Vancouver", "Yokohama", "Colombo", "Jebel Ali",
];

const REGIONS: &[&str] = &["MH", "TN", "WB", "NY", "NJ", "TX", "CA", "GA", "ZH", "HH"];

const WORDS: &[&str] = &[
    "cartons", "textiles", "machinery", "spare", "parts", "frozen", "goods", "pallets", "cotton",
    "yarn", "garments", "ceramic", "tiles", "steel", "coils", "spices", "tea", "leather",
    "footwear", "furniture", "assorted", "packed", "bundles", "drums", "resin", "rice", "bags",
];

/// Which kind of payload an iteration sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Random,
    Static,
}

impl PayloadKind {
    /// Even iterations send a random payload, odd ones the static record
    pub fn for_iteration(iteration: u32) -> Self {
        if iteration % 2 == 0 {
            PayloadKind::Random
        } else {
            PayloadKind::Static
        }
    }

    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> ShipmentRecord {
        match self {
            PayloadKind::Random => random_record(rng),
            PayloadKind::Static => static_record(),
        }
    }
}

/// Fixed, realistic record
pub fn static_record() -> ShipmentRecord {
    ShipmentRecord {
        shipper: "ABC Exporters\n123 Street, City".to_string(),
        consignee: "XYZ Imports\n456 Avenue, City".to_string(),
        notify_party: "Notify Party Ltd.".to_string(),
        draft_bill_of_lading: "BOL-123456".to_string(),
        place_of_receipt: "Mumbai".to_string(),
        place_of_delivery: "New York".to_string(),
        vessel_and_voyage: "Evergreen 1020".to_string(),
        port_of_loading: "Nhava Sheva".to_string(),
        port_of_discharge: "Newark".to_string(),
        marks_numbers: "Mark-001".to_string(),
        packages_description: "50 cartons of textiles".to_string(),
        gross_weight: "2500 KG".to_string(),
        measurement: "75 CBM".to_string(),
        cseal_no: "CSEAL-78901".to_string(),
        sline_seal_no: "SSEAL-45678".to_string(),
        invoice_no: "INV-98765".to_string(),
        dtd: "2025-08-01".to_string(),
        dt: "2025-08-02".to_string(),
        shipping_bill_no: "SB-654321".to_string(),
        net_weight: "2400 KG".to_string(),
        no_of_originals: "3".to_string(),
    }
}

/// Record filled with fake but plausible values
pub fn random_record<R: Rng + ?Sized>(rng: &mut R) -> ShipmentRecord {
    ShipmentRecord {
        shipper: format!("{}\n{}", company(rng), address(rng)),
        consignee: format!("{}\n{}", company(rng), address(rng)),
        notify_party: company(rng),
        draft_bill_of_lading: format!("BOL-{}", digits(rng, 6)),
        place_of_receipt: city(rng).to_string(),
        place_of_delivery: city(rng).to_string(),
        vessel_and_voyage: format!(
            "Vessel-{} Voyage-{}",
            word(rng),
            rng.gen_range(1000..=9999)
        ),
        port_of_loading: city(rng).to_string(),
        port_of_discharge: city(rng).to_string(),
        marks_numbers: format!("Mark-{}", digits(rng, 4)),
        packages_description: text(rng, 50),
        gross_weight: format!("{} KG", rng.gen_range(1000..=5000)),
        measurement: format!("{} CBM", rng.gen_range(10..=100)),
        cseal_no: format!("CSEAL-{}", digits(rng, 5)),
        sline_seal_no: format!("SSEAL-{}", digits(rng, 5)),
        invoice_no: format!("INV-{}", digits(rng, 5)),
        dtd: date(rng),
        dt: date(rng),
        shipping_bill_no: format!("SB-{}", digits(rng, 6)),
        net_weight: format!("{} KG", rng.gen_range(800..=4500)),
        no_of_originals: rng.gen_range(1..=5).to_string(),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}, {}, {} {:05}",
        rng.gen_range(1..=9999),
        pick(rng, LAST_NAMES),
        pick(rng, STREET_SUFFIXES),
        pick(rng, CITIES),
        pick(rng, REGIONS),
        rng.gen_range(0..100_000)
    )
}

fn city<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, CITIES)
}

fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, WORDS)
}

/// Zero-padded random number with exactly `width` digits
fn digits<R: Rng + ?Sized>(rng: &mut R, width: u32) -> String {
    let upper = 10u64.pow(width);
    format!("{:0width$}", rng.gen_range(0..upper), width = width as usize)
}

/// Capitalised sentence of at most `max_chars` characters
fn text<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    let mut sentence = String::new();
    loop {
        let next = word(rng);
        let extra = if sentence.is_empty() { 0 } else { 1 };
        // reserve one char for the trailing period
        if sentence.len() + extra + next.len() + 1 > max_chars {
            break;
        }
        if extra == 1 {
            sentence.push(' ');
        }
        sentence.push_str(next);
        if rng.gen_ratio(1, 6) {
            break;
        }
    }

    let mut chars = sentence.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    out.push('.');
    out
}

/// ISO date between 2000-01-01 and the end of 2029
fn date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN);
    let offset = Days::new(rng.gen_range(0..365 * 30));
    start
        .checked_add_days(offset)
        .unwrap_or(start)
        .format("%Y-%m-%d")
        .to_string()
}
